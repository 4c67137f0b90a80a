//! End-to-end scenarios through the HiGHS solver.

#![cfg(feature = "highs")]

use anyhow::Result;
use ferryman::app::{solve_crossing, solve_knapsack};
use ferryman::error::{DecodeError, Error};
use ferryman::model::{KnapsackSpec, PlanSpec};
use ferryman::solver::HiGHSSolver;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn wolf_goat_cabbage_crosses_seven_times() -> Result<()> {
    let spec = PlanSpec::wolf_goat_cabbage(20);
    let report = solve_crossing(&spec, &HiGHSSolver::new())?;

    assert_eq!(report.trajectory.crossings, 7);
    assert_eq!(report.trajectory.steps.len(), 8);

    let first = &report.trajectory.steps[0];
    assert_eq!(first.near.len(), 3);
    assert!(first.far.is_empty());

    let last = report.trajectory.steps.last().expect("non-empty");
    assert!(last.near.is_empty());
    assert_eq!(last.far.len(), 3);

    Ok(())
}

#[test]
fn wolf_goat_cabbage_plan_respects_invariants() -> Result<()> {
    let spec = PlanSpec::wolf_goat_cabbage(20);
    let report = solve_crossing(&spec, &HiGHSSolver::new())?;
    let steps = &report.trajectory.steps;

    for pair in steps.windows(2) {
        let (here, next) = (&pair[0], &pair[1]);
        let moved = here
            .near
            .iter()
            .filter(|e| next.far.contains(e))
            .count()
            + here.far.iter().filter(|e| next.near.contains(e)).count();
        assert!(moved <= 1, "more than one mover after step {}", here.step);
    }

    // wolf=0, goat=1, cabbage=2; the goat is never left unsupervised with
    // either neighbor
    for step in steps {
        let far: Vec<usize> = step.far.iter().map(|e| e.index()).collect();
        let near: Vec<usize> = step.near.iter().map(|e| e.index()).collect();
        if step.step % 2 == 0 {
            if far.len() < 3 {
                assert!(
                    !(far.contains(&0) && far.contains(&1)),
                    "wolf and goat alone on the far bank at step {}",
                    step.step
                );
                assert!(
                    !(far.contains(&1) && far.contains(&2)),
                    "goat and cabbage alone on the far bank at step {}",
                    step.step
                );
            }
        } else {
            assert!(
                !(near.contains(&0) && near.contains(&1)),
                "wolf and goat alone on the near bank at step {}",
                step.step
            );
            assert!(
                !(near.contains(&1) && near.contains(&2)),
                "goat and cabbage alone on the near bank at step {}",
                step.step
            );
        }
    }

    Ok(())
}

#[test]
fn short_horizon_reports_goal_not_reached() {
    let spec = PlanSpec::wolf_goat_cabbage(4);
    let err = solve_crossing(&spec, &HiGHSSolver::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode(DecodeError::GoalNotReached { horizon: 4 })
    ));
}

#[test]
fn knapsack_matches_exhaustive_oracle() -> Result<()> {
    let spec = KnapsackSpec::sample();
    let report = solve_knapsack(&spec, &HiGHSSolver::new())?;

    // brute-force oracle over all 2^5 subsets
    let n = spec.items();
    let mut best = Decimal::ZERO;
    for mask in 0u32..(1 << n) {
        let mut value = Decimal::ZERO;
        let mut weight = Decimal::ZERO;
        for item in 0..n {
            if mask & (1 << item) != 0 {
                value += spec.values()[item];
                weight += spec.weights()[item];
            }
        }
        if weight <= spec.capacity() && value > best {
            best = value;
        }
    }

    assert_eq!(report.selection.total_value, best);
    assert_eq!(best, dec!(15));
    assert!(report.selection.total_weight <= spec.capacity());
    Ok(())
}

#[test]
fn knapsack_respects_tight_capacity() -> Result<()> {
    // only the lightest item fits
    let spec = KnapsackSpec::new(
        vec![dec!(5), dec!(3)],
        vec![dec!(10), dec!(2)],
        dec!(2),
    )?;
    let report = solve_knapsack(&spec, &HiGHSSolver::new())?;
    assert_eq!(report.selection.items, vec![1]);
    assert_eq!(report.selection.total_value, dec!(3));
    Ok(())
}

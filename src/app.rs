//! Build → solve → verify → decode pipeline.
//!
//! One function per puzzle kind. Each run is a pure function of its inputs:
//! build the model, hand it to the solver in a single blocking call, check
//! the returned assignment against the movement invariants, then decode.
//! Failures are terminal — the caller adjusts parameters and reruns.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::decode::{decode, verify_capacity, verify_safety};
use crate::domain::{Assignment, Side, Trajectory};
use crate::error::{Result, SolveError};
use crate::model::{KnapsackSpec, PlanSpec, Selection};
use crate::solver::{LpSolution, SolutionStatus, Solver};

/// Outcome of a solved crossing instance.
#[derive(Debug, Clone, Serialize)]
pub struct CrossingReport {
    pub trajectory: Trajectory,
    pub objective: Decimal,
    pub solver: &'static str,
}

/// Outcome of a solved knapsack instance.
#[derive(Debug, Clone, Serialize)]
pub struct KnapsackReport {
    pub selection: Selection,
    pub objective: Decimal,
    pub solver: &'static str,
}

/// Run the full pipeline for a crossing puzzle.
pub fn solve_crossing(spec: &PlanSpec, solver: &dyn Solver) -> Result<CrossingReport> {
    let model = spec.build()?;
    info!(
        solver = solver.name(),
        vars = model.shape().var_count(),
        "solving crossing model"
    );
    let solution = ensure_optimal(solver.solve(model.ilp())?)?;
    let assignment = Assignment::from_values(model.shape(), &solution.values)?;
    verify_capacity(&assignment, spec.ferry_capacity())?;
    verify_safety(&assignment, spec.roster(), spec.forbidden())?;
    let trajectory = decode(&assignment, |sides| {
        sides.iter().all(|side| *side == Side::Far)
    })?;
    info!(
        crossings = trajectory.crossings,
        objective = %solution.objective,
        "crossing solved"
    );
    Ok(CrossingReport {
        trajectory,
        objective: solution.objective,
        solver: solver.name(),
    })
}

/// Run the full pipeline for a knapsack puzzle.
pub fn solve_knapsack(spec: &KnapsackSpec, solver: &dyn Solver) -> Result<KnapsackReport> {
    let ilp = spec.build();
    info!(
        solver = solver.name(),
        items = spec.items(),
        "solving knapsack model"
    );
    let solution = ensure_optimal(solver.solve(&ilp)?)?;
    let selection = spec.selection(&solution)?;
    info!(
        chosen = selection.items.len(),
        value = %selection.total_value,
        "knapsack solved"
    );
    Ok(KnapsackReport {
        selection,
        objective: solution.objective,
        solver: solver.name(),
    })
}

fn ensure_optimal(solution: LpSolution) -> Result<LpSolution> {
    match solution.status {
        SolutionStatus::Optimal => Ok(solution),
        SolutionStatus::Infeasible => Err(SolveError::Infeasible.into()),
        SolutionStatus::Unbounded => Err(SolveError::Unbounded.into()),
        SolutionStatus::NotSolved => Err(SolveError::NotSolved.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Member, Roster};
    use crate::error::Error;
    use crate::solver::IlpProblem;

    /// Replays a canned solution regardless of the model.
    struct ScriptedSolver(LpSolution);

    impl Solver for ScriptedSolver {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn solve(&self, _problem: &IlpProblem) -> Result<LpSolution> {
            Ok(self.0.clone())
        }
    }

    fn scripted(status: SolutionStatus, values: Vec<Decimal>) -> ScriptedSolver {
        ScriptedSolver(LpSolution {
            values,
            objective: Decimal::ZERO,
            status,
        })
    }

    fn lone_traveler(horizon: usize) -> PlanSpec {
        let roster = Roster::new(vec![Member::new("traveler", 't')]).expect("valid roster");
        PlanSpec::new(roster, horizon)
    }

    #[test]
    fn test_solve_crossing_decodes_scripted_solution() {
        let spec = lone_traveler(2);
        let solver = scripted(
            SolutionStatus::Optimal,
            vec![Decimal::ONE, Decimal::ZERO],
        );
        let report = solve_crossing(&spec, &solver).expect("pipeline succeeds");
        assert_eq!(report.trajectory.crossings, 1);
        assert_eq!(report.solver, "scripted");
    }

    #[test]
    fn test_solve_crossing_surfaces_infeasibility() {
        let spec = lone_traveler(2);
        let solver = scripted(SolutionStatus::Infeasible, vec![Decimal::ZERO; 2]);
        let err = solve_crossing(&spec, &solver).unwrap_err();
        assert!(matches!(err, Error::Solve(SolveError::Infeasible)));
    }

    #[test]
    fn test_solve_crossing_surfaces_unbounded_and_not_solved() {
        let spec = lone_traveler(2);
        let err = solve_crossing(&spec, &scripted(SolutionStatus::Unbounded, vec![]))
            .unwrap_err();
        assert!(matches!(err, Error::Solve(SolveError::Unbounded)));
        let err = solve_crossing(&spec, &scripted(SolutionStatus::NotSolved, vec![]))
            .unwrap_err();
        assert!(matches!(err, Error::Solve(SolveError::NotSolved)));
    }

    #[test]
    fn test_solve_crossing_rejects_sparse_assignment() {
        let spec = lone_traveler(4);
        let solver = scripted(SolutionStatus::Optimal, vec![Decimal::ONE; 3]);
        let err = solve_crossing(&spec, &solver).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_solve_knapsack_reports_selection() {
        let spec = KnapsackSpec::sample();
        let solver = scripted(
            SolutionStatus::Optimal,
            vec![
                Decimal::ZERO,
                Decimal::ONE,
                Decimal::ONE,
                Decimal::ONE,
                Decimal::ONE,
            ],
        );
        let report = solve_knapsack(&spec, &solver).expect("pipeline succeeds");
        assert_eq!(report.selection.items, vec![1, 2, 3, 4]);
    }
}

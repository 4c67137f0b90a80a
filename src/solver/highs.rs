//! HiGHS-backed solver.
//!
//! Adapter between the crate's binary programs and the open-source HiGHS
//! backend, reached through `good_lp`. The only module that touches
//! `good_lp`: problems cross this boundary as decimal coefficient rows and
//! come back as a status plus one value per variable.

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{ConstraintSense, IlpProblem, LpSolution, ObjectiveDirection, SolutionStatus, Solver};
use crate::error::Result;

/// Solves the crate's binary programs with HiGHS.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &IlpProblem) -> Result<LpSolution> {
        let mut vars = variables!();
        let grid: Vec<Variable> = (0..problem.num_vars())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective = weighted_sum(&grid, &problem.objective);
        let mut model = match problem.direction {
            ObjectiveDirection::Minimize => vars.minimise(&objective).using(highs),
            ObjectiveDirection::Maximize => vars.maximise(&objective).using(highs),
        };

        for row in &problem.constraints {
            let lhs = weighted_sum(&grid, &row.coefficients);
            let rhs = to_f64(row.rhs);
            model = match row.sense {
                ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
                ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
                ConstraintSense::Equal => model.with(constraint!(lhs == rhs)),
            };
        }

        match model.solve() {
            Ok(solved) => {
                let values: Vec<Decimal> = grid
                    .iter()
                    .map(|v| Decimal::try_from(solved.value(*v)).unwrap_or(Decimal::ZERO))
                    .collect();
                // Recompute the objective in exact arithmetic; the backend's
                // own total has been through f64.
                let objective = values
                    .iter()
                    .zip(&problem.objective)
                    .map(|(value, coeff)| *value * *coeff)
                    .sum();
                Ok(LpSolution {
                    values,
                    objective,
                    status: SolutionStatus::Optimal,
                })
            }
            Err(error) => Ok(LpSolution {
                values: vec![Decimal::ZERO; problem.num_vars()],
                objective: Decimal::ZERO,
                status: failure_status(&error),
            }),
        }
    }
}

/// Coefficient-weighted sum over the variable grid, skipping the zero
/// entries that dominate the builders' dense rows.
fn weighted_sum(grid: &[Variable], coefficients: &[Decimal]) -> Expression {
    grid.iter()
        .zip(coefficients)
        .filter(|(_, coeff)| !coeff.is_zero())
        .map(|(v, coeff)| to_f64(*coeff) * *v)
        .sum()
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn failure_status(error: &ResolutionError) -> SolutionStatus {
    match error {
        ResolutionError::Infeasible => SolutionStatus::Infeasible,
        ResolutionError::Unbounded => SolutionStatus::Unbounded,
        _ => SolutionStatus::NotSolved,
    }
}

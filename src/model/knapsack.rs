//! 0/1 knapsack as a degenerate, single-step selection instance.
//!
//! Same constraint-model machinery as the crossing builder, with no temporal
//! dimension: one binary variable per item, a value-maximizing objective and
//! a single weight-capacity constraint.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::domain::assignment::INTEGRALITY_TOLERANCE;
use crate::error::{DecodeError, ModelError};
use crate::solver::{Constraint, IlpProblem, LpSolution, ObjectiveDirection};

/// Parameters of one knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackSpec {
    values: Vec<Decimal>,
    weights: Vec<Decimal>,
    capacity: Decimal,
}

impl KnapsackSpec {
    /// Validate and build a knapsack spec.
    pub fn new(
        values: Vec<Decimal>,
        weights: Vec<Decimal>,
        capacity: Decimal,
    ) -> Result<Self, ModelError> {
        if values.is_empty() {
            return Err(ModelError::EmptyKnapsack);
        }
        if values.len() != weights.len() {
            return Err(ModelError::ItemLengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| w.is_sign_negative())
        {
            return Err(ModelError::NegativeWeight {
                index,
                weight: *weight,
            });
        }
        if capacity.is_sign_negative() {
            return Err(ModelError::NegativeCapacity { capacity });
        }
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Five-item sample instance, the CLI default.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            values: vec![dec!(4), dec!(2), dec!(1), dec!(10), dec!(2)],
            weights: vec![dec!(12), dec!(2), dec!(1), dec!(4), dec!(1)],
            capacity: dec!(15),
        }
    }

    #[must_use]
    pub fn items(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    #[must_use]
    pub fn weights(&self) -> &[Decimal] {
        &self.weights
    }

    #[must_use]
    pub fn capacity(&self) -> Decimal {
        self.capacity
    }

    /// Assemble the selection program: maximize value within the weight cap.
    #[must_use]
    pub fn build(&self) -> IlpProblem {
        let n = self.values.len();
        let mut ilp = IlpProblem::new(ObjectiveDirection::Maximize, n);
        ilp.objective.clone_from(&self.values);
        ilp.constraints
            .push(Constraint::leq(self.weights.clone(), self.capacity).named("weight_capacity"));
        debug!(items = n, "knapsack model assembled");
        ilp
    }

    /// Decode the chosen items out of a solved assignment.
    pub fn selection(&self, solution: &LpSolution) -> Result<Selection, DecodeError> {
        if solution.values.len() != self.values.len() {
            return Err(DecodeError::MalformedAssignment {
                reason: format!(
                    "expected {} values, solver returned {}",
                    self.values.len(),
                    solution.values.len()
                ),
            });
        }
        let mut items = Vec::new();
        let mut total_value = Decimal::ZERO;
        let mut total_weight = Decimal::ZERO;
        for (index, value) in solution.values.iter().enumerate() {
            if (*value - Decimal::ONE).abs() <= INTEGRALITY_TOLERANCE {
                items.push(index);
                total_value += self.values[index];
                total_weight += self.weights[index];
            } else if value.abs() > INTEGRALITY_TOLERANCE {
                return Err(DecodeError::MalformedAssignment {
                    reason: format!("value {value} for item {index} is not binary"),
                });
            }
        }
        Ok(Selection {
            items,
            total_value,
            total_weight,
        })
    }
}

/// Chosen items plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Indices of the packed items.
    pub items: Vec<usize>,
    pub total_value: Decimal,
    pub total_weight: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolutionStatus;

    fn solution(values: Vec<Decimal>) -> LpSolution {
        LpSolution {
            values,
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        }
    }

    #[test]
    fn test_empty_knapsack_rejected() {
        let err = KnapsackSpec::new(vec![], vec![], dec!(10)).unwrap_err();
        assert_eq!(err, ModelError::EmptyKnapsack);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = KnapsackSpec::new(vec![dec!(1)], vec![dec!(1), dec!(2)], dec!(10)).unwrap_err();
        assert_eq!(
            err,
            ModelError::ItemLengthMismatch {
                values: 1,
                weights: 2
            }
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err =
            KnapsackSpec::new(vec![dec!(1), dec!(1)], vec![dec!(1), dec!(-2)], dec!(10))
                .unwrap_err();
        assert_eq!(
            err,
            ModelError::NegativeWeight {
                index: 1,
                weight: dec!(-2)
            }
        );
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = KnapsackSpec::new(vec![dec!(1)], vec![dec!(1)], dec!(-1)).unwrap_err();
        assert_eq!(err, ModelError::NegativeCapacity { capacity: dec!(-1) });
    }

    #[test]
    fn test_build_maximizes_value_within_capacity() {
        let spec = KnapsackSpec::sample();
        let ilp = spec.build();
        assert_eq!(ilp.direction, ObjectiveDirection::Maximize);
        assert_eq!(ilp.objective, spec.values());
        assert_eq!(ilp.constraints.len(), 1);
        assert_eq!(ilp.constraints[0].rhs, dec!(15));
        assert_eq!(ilp.num_vars(), 5);
    }

    #[test]
    fn test_selection_totals() {
        let spec = KnapsackSpec::sample();
        let selection = spec
            .selection(&solution(vec![
                dec!(0),
                dec!(1),
                dec!(1),
                dec!(1),
                dec!(1),
            ]))
            .expect("binary solution");
        assert_eq!(selection.items, vec![1, 2, 3, 4]);
        assert_eq!(selection.total_value, dec!(15));
        assert_eq!(selection.total_weight, dec!(8));
    }

    #[test]
    fn test_selection_rejects_short_solution() {
        let spec = KnapsackSpec::sample();
        let err = spec.selection(&solution(vec![dec!(1)])).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedAssignment { .. }));
    }

    #[test]
    fn test_selection_rejects_fractional_solution() {
        let spec = KnapsackSpec::sample();
        let err = spec
            .selection(&solution(vec![
                dec!(0.5),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
            ]))
            .unwrap_err();
        let DecodeError::MalformedAssignment { reason } = err else {
            panic!("expected malformed assignment");
        };
        assert!(reason.contains("item 0"));
    }
}

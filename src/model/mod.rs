//! Constraint model builder for crossing puzzles.
//!
//! Turns a [`PlanSpec`] into a ready-to-solve binary program: one variable
//! per `(step, entity)`, a positional-weight objective, and the start,
//! transition, capacity and safety constraints. Pure data transformation —
//! solving and decoding live elsewhere.
//!
//! # Encoding
//!
//! A set bit means "still on the near bank". The ferry alternates banks by
//! step parity, so even steps may only move entities near → far and odd
//! steps far → near, at most `ferry_capacity` of them per step. Safety
//! constraints keep forbidden pairs from sharing the unsupervised bank: the
//! far bank on even steps (tolerated only when the whole roster is there,
//! which is the absorbing goal state), the near bank on odd steps.

pub mod knapsack;

pub use knapsack::{KnapsackSpec, Selection};

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Entity, GridShape, Member, Roster, Side};
use crate::error::ModelError;
use crate::solver::{Constraint, IlpProblem, ObjectiveDirection};

/// Parameters of one crossing instance.
#[derive(Debug, Clone)]
pub struct PlanSpec {
    roster: Roster,
    horizon: usize,
    initial: Vec<Side>,
    forbidden: Vec<(Entity, Entity)>,
    ferry_capacity: usize,
}

impl PlanSpec {
    /// New spec with every entity starting on the near bank and a
    /// single-seat ferry.
    #[must_use]
    pub fn new(roster: Roster, horizon: usize) -> Self {
        let initial = vec![Side::Near; roster.len()];
        Self {
            roster,
            horizon,
            initial,
            forbidden: Vec::new(),
            ferry_capacity: 1,
        }
    }

    /// The classic puzzle: wolf/goat and goat/cabbage must never be left
    /// alone together.
    #[must_use]
    pub fn wolf_goat_cabbage(horizon: usize) -> Self {
        let mut spec = Self::new(Roster::wolf_goat_cabbage(), horizon);
        spec.forbidden = vec![
            (Entity::new(0), Entity::new(1)),
            (Entity::new(1), Entity::new(2)),
        ];
        spec
    }

    /// Replace the starting sides.
    #[must_use]
    pub fn with_initial(mut self, initial: Vec<Side>) -> Self {
        self.initial = initial;
        self
    }

    /// Replace the forbidden pairs.
    #[must_use]
    pub fn with_forbidden(mut self, forbidden: Vec<(Entity, Entity)>) -> Self {
        self.forbidden = forbidden;
        self
    }

    /// Replace the horizon.
    #[must_use]
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Replace the ferry capacity.
    #[must_use]
    pub fn with_ferry_capacity(mut self, capacity: usize) -> Self {
        self.ferry_capacity = capacity;
        self
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    #[must_use]
    pub fn initial(&self) -> &[Side] {
        &self.initial
    }

    #[must_use]
    pub fn forbidden(&self) -> &[(Entity, Entity)] {
        &self.forbidden
    }

    #[must_use]
    pub fn ferry_capacity(&self) -> usize {
        self.ferry_capacity
    }

    /// Validate the parameters and assemble the full binary program.
    pub fn build(&self) -> Result<PlanModel, ModelError> {
        self.validate()?;

        let count = self.roster.len();
        let shape = GridShape::new(self.horizon, count)?;
        let weights = positional_weights(count, self.horizon)?;
        let var = |step: usize, entity: Entity| step * count + entity.index();

        let mut ilp = IlpProblem::new(ObjectiveDirection::Minimize, shape.var_count());

        for step in 0..self.horizon {
            for entity in self.roster.entities() {
                ilp.objective[var(step, entity)] = weights[step];
            }
        }

        // Starting sides, fixed at step 0.
        for entity in self.roster.entities() {
            let mut coefficients = vec![Decimal::ZERO; shape.var_count()];
            coefficients[var(0, entity)] = Decimal::ONE;
            let rhs = Decimal::from(self.initial[entity.index()].bit());
            ilp.constraints.push(
                Constraint::eq(coefficients, rhs).named(format!("start_{}", self.name(entity))),
            );
        }

        for step in 0..self.horizon - 1 {
            let outbound = step % 2 == 0;

            // The ferry only travels one way per step.
            for entity in self.roster.entities() {
                let mut coefficients = vec![Decimal::ZERO; shape.var_count()];
                coefficients[var(step + 1, entity)] = Decimal::ONE;
                coefficients[var(step, entity)] = -Decimal::ONE;
                let constraint = if outbound {
                    Constraint::leq(coefficients, Decimal::ZERO)
                } else {
                    Constraint::geq(coefficients, Decimal::ZERO)
                };
                ilp.constraints.push(
                    constraint.named(format!("direction_t{step}_{}", self.name(entity))),
                );
            }

            // At most `ferry_capacity` entities change side per step. The
            // directional constraints fix the sign of every delta, so the
            // signed sum counts movers.
            let sign = if outbound { -Decimal::ONE } else { Decimal::ONE };
            let mut coefficients = vec![Decimal::ZERO; shape.var_count()];
            for entity in self.roster.entities() {
                coefficients[var(step + 1, entity)] = sign;
                coefficients[var(step, entity)] = -sign;
            }
            ilp.constraints.push(
                Constraint::leq(coefficients, Decimal::from(self.ferry_capacity as u64))
                    .named(format!("capacity_t{step}")),
            );

            // Forbidden pairs stay supervised.
            for &(a, b) in &self.forbidden {
                let mut coefficients = vec![Decimal::ZERO; shape.var_count()];
                let constraint = if outbound {
                    // Far bank unsupervised: a and b may share it only when
                    // every entity is there.
                    let spare = Decimal::from(count as u64 - 2);
                    for entity in self.roster.entities() {
                        if entity != a && entity != b {
                            coefficients[var(step, entity)] = Decimal::ONE;
                        }
                    }
                    coefficients[var(step, a)] = -spare;
                    coefficients[var(step, b)] = -spare;
                    Constraint::leq(coefficients, Decimal::ZERO)
                } else {
                    // Near bank unsupervised: at most one of the pair on it.
                    coefficients[var(step, a)] = Decimal::ONE;
                    coefficients[var(step, b)] = Decimal::ONE;
                    Constraint::leq(coefficients, Decimal::ONE)
                };
                ilp.constraints.push(constraint.named(format!(
                    "safety_t{step}_{}_{}",
                    self.name(a),
                    self.name(b)
                )));
            }
        }

        debug!(
            vars = shape.var_count(),
            constraints = ilp.constraints.len(),
            "crossing model assembled"
        );

        Ok(PlanModel { shape, ilp })
    }

    fn name(&self, entity: Entity) -> &str {
        self.roster.get(entity).map_or("", Member::name)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.horizon == 0 {
            return Err(ModelError::ZeroHorizon);
        }
        if self.ferry_capacity == 0 {
            return Err(ModelError::ZeroCapacity);
        }
        if self.initial.len() != self.roster.len() {
            return Err(ModelError::InitialSideMismatch {
                expected: self.roster.len(),
                got: self.initial.len(),
            });
        }
        for &(a, b) in &self.forbidden {
            for entity in [a, b] {
                if entity.index() >= self.roster.len() {
                    return Err(ModelError::PairOutOfRange {
                        index: entity.index(),
                        len: self.roster.len(),
                    });
                }
            }
            if a == b {
                return Err(ModelError::PairRepeatsEntity {
                    name: self.name(a).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Built crossing model, ready to hand to a solver.
#[derive(Debug, Clone)]
pub struct PlanModel {
    shape: GridShape,
    ilp: IlpProblem,
}

impl PlanModel {
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn ilp(&self) -> &IlpProblem {
        &self.ilp
    }
}

/// Positional objective weights: `(P+1)^t` for step `t`.
///
/// Minimizing under these weights empties later steps first, so the optimum
/// is also the shortest trajectory. The defining property is that each
/// step's weight exceeds the largest weighted sum achievable at all earlier
/// steps combined; it holds by construction and is asserted below, while
/// checked multiplication guards the decimal range.
pub fn positional_weights(entity_count: usize, horizon: usize) -> Result<Vec<Decimal>, ModelError> {
    let base = Decimal::from(entity_count as u64 + 1);
    let population = Decimal::from(entity_count as u64);
    let mut weights = Vec::with_capacity(horizon);
    let mut weight = Decimal::ONE;
    let mut earlier_sum = Decimal::ZERO;
    for step in 0..horizon {
        if step > 0 {
            weight = weight
                .checked_mul(base)
                .ok_or(ModelError::WeightOverflow { step })?;
        }
        debug_assert!(
            weight > population * earlier_sum,
            "weight at step {step} must dominate all earlier steps"
        );
        weights.push(weight);
        earlier_sum += weight;
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wolf_goat_cabbage_model_dimensions() {
        let model = PlanSpec::wolf_goat_cabbage(20).build().expect("valid spec");
        assert_eq!(model.shape().var_count(), 60);
        // 3 start constraints, then per transition: 3 directional,
        // 1 capacity, 2 safety
        assert_eq!(model.ilp().constraints.len(), 3 + 19 * 6);
        assert_eq!(model.ilp().num_vars(), 60);
    }

    #[test]
    fn test_objective_uses_positional_weights() {
        let model = PlanSpec::wolf_goat_cabbage(4).build().expect("valid spec");
        let objective = &model.ilp().objective;
        assert_eq!(objective[0], Decimal::ONE);
        assert_eq!(objective[3], dec!(4));
        assert_eq!(objective[6], dec!(16));
        assert_eq!(objective[9], dec!(64));
    }

    #[test]
    fn test_start_constraints_pin_initial_sides() {
        let spec = PlanSpec::wolf_goat_cabbage(4)
            .with_initial(vec![Side::Near, Side::Far, Side::Near]);
        let model = spec.build().expect("valid spec");
        let starts: Vec<Decimal> = model
            .ilp()
            .constraints
            .iter()
            .take(3)
            .map(|c| c.rhs)
            .collect();
        assert_eq!(starts, vec![Decimal::ONE, Decimal::ZERO, Decimal::ONE]);
    }

    #[test]
    fn test_constraint_names_carry_entities_and_steps() {
        let model = PlanSpec::wolf_goat_cabbage(4).build().expect("valid spec");
        let names: Vec<&str> = model
            .ilp()
            .constraints
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        assert!(names.contains(&"start_wolf"));
        assert!(names.contains(&"direction_t0_goat"));
        assert!(names.contains(&"capacity_t2"));
        assert!(names.contains(&"safety_t1_goat_cabbage"));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = PlanSpec::wolf_goat_cabbage(0).build().unwrap_err();
        assert_eq!(err, ModelError::ZeroHorizon);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = PlanSpec::wolf_goat_cabbage(4)
            .with_ferry_capacity(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::ZeroCapacity);
    }

    #[test]
    fn test_initial_side_mismatch_rejected() {
        let err = PlanSpec::wolf_goat_cabbage(4)
            .with_initial(vec![Side::Near])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::InitialSideMismatch {
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn test_self_pair_rejected() {
        let err = PlanSpec::wolf_goat_cabbage(4)
            .with_forbidden(vec![(Entity::new(1), Entity::new(1))])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::PairRepeatsEntity {
                name: "goat".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_roster_pair_rejected() {
        let err = PlanSpec::wolf_goat_cabbage(4)
            .with_forbidden(vec![(Entity::new(0), Entity::new(7))])
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::PairOutOfRange { index: 7, len: 3 });
    }

    #[test]
    fn test_weights_grow_by_powers() {
        let weights = positional_weights(3, 5).expect("small horizon");
        assert_eq!(
            weights,
            vec![dec!(1), dec!(4), dec!(16), dec!(64), dec!(256)]
        );
    }

    #[test]
    fn test_weight_dominance_over_long_horizon() {
        let weights = positional_weights(3, 40).expect("within decimal range");
        let population = dec!(3);
        let mut earlier_sum = Decimal::ZERO;
        for weight in &weights {
            assert!(*weight > population * earlier_sum);
            earlier_sum += *weight;
        }
    }

    #[test]
    fn test_weight_overflow_detected() {
        let err = positional_weights(3, 64).unwrap_err();
        assert!(matches!(err, ModelError::WeightOverflow { .. }));
    }
}

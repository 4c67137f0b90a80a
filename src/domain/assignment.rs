//! The bounds-validated `(step, entity)` index space and solved assignments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Entity, Side};
use crate::error::{DecodeError, ModelError};

/// Tolerance for accepting a MIP value as integral.
pub(crate) const INTEGRALITY_TOLERANCE: Decimal = dec!(0.000001);

/// Dimensions of the planning grid: one binary variable per `(step, entity)`.
///
/// Variables are numbered row-major, every entity of step 0 first. Bounds are
/// validated once here so lookups never fabricate indices outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    steps: usize,
    entities: usize,
}

impl GridShape {
    pub fn new(steps: usize, entities: usize) -> Result<Self, ModelError> {
        if steps == 0 {
            return Err(ModelError::ZeroHorizon);
        }
        if entities == 0 {
            return Err(ModelError::EmptyRoster);
        }
        Ok(Self { steps, entities })
    }

    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub const fn entities(&self) -> usize {
        self.entities
    }

    #[must_use]
    pub const fn var_count(&self) -> usize {
        self.steps * self.entities
    }

    /// Flat variable index for a `(step, entity)` pair.
    #[must_use]
    pub fn index(&self, step: usize, entity: Entity) -> Option<usize> {
        if step < self.steps && entity.index() < self.entities {
            Some(step * self.entities + entity.index())
        } else {
            None
        }
    }
}

/// A solved grid: one side per `(step, entity)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    shape: GridShape,
    sides: Vec<Side>,
}

impl Assignment {
    /// Validate raw solver values into a side grid.
    ///
    /// Rejects value vectors that do not cover the declared variable set and
    /// values that are not 0 or 1 within the integrality tolerance.
    pub fn from_values(shape: GridShape, values: &[Decimal]) -> Result<Self, DecodeError> {
        if values.len() != shape.var_count() {
            return Err(DecodeError::MalformedAssignment {
                reason: format!(
                    "expected {} values, solver returned {}",
                    shape.var_count(),
                    values.len()
                ),
            });
        }
        let mut sides = Vec::with_capacity(values.len());
        for (flat, value) in values.iter().enumerate() {
            let bit = if value.abs() <= INTEGRALITY_TOLERANCE {
                false
            } else if (*value - Decimal::ONE).abs() <= INTEGRALITY_TOLERANCE {
                true
            } else {
                let step = flat / shape.entities();
                let entity = flat % shape.entities();
                return Err(DecodeError::MalformedAssignment {
                    reason: format!(
                        "value {value} at step {step} for entity {entity} is not binary"
                    ),
                });
            };
            sides.push(Side::from_bit(bit));
        }
        Ok(Self { shape, sides })
    }

    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Side of one entity at one step.
    #[must_use]
    pub fn side(&self, step: usize, entity: Entity) -> Option<Side> {
        self.shape.index(step, entity).map(|i| self.sides[i])
    }

    /// All sides at one step, in entity order.
    #[must_use]
    pub fn step_sides(&self, step: usize) -> Option<&[Side]> {
        if step < self.shape.steps() {
            let start = step * self.shape.entities();
            Some(&self.sides[start..start + self.shape.entities()])
        } else {
            None
        }
    }
}

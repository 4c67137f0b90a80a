//! Trajectory decoding and assignment sanity checks.
//!
//! The decoder reads a solved [`Assignment`] and reconstructs the shortest
//! goal-reaching prefix. The verifiers re-check the capacity and safety
//! rules against the raw assignment, catching modeling bugs before a broken
//! plan is presented as a solution.

use tracing::debug;

use crate::domain::{Assignment, Entity, Roster, Side, StepRecord, Trajectory};
use crate::error::DecodeError;

/// Reconstruct the shortest goal-reaching prefix of a solved assignment.
///
/// Records run from step 0 through the first step where `goal` holds over
/// the sides of that step.
pub fn decode(
    assignment: &Assignment,
    goal: impl Fn(&[Side]) -> bool,
) -> Result<Trajectory, DecodeError> {
    let shape = assignment.shape();

    let mut reached = None;
    for step in 0..shape.steps() {
        let sides = assignment.step_sides(step).ok_or_else(|| missing(step))?;
        if goal(sides) {
            reached = Some(step);
            break;
        }
    }
    let Some(crossings) = reached else {
        return Err(DecodeError::GoalNotReached {
            horizon: shape.steps(),
        });
    };

    let mut steps = Vec::with_capacity(crossings + 1);
    for step in 0..=crossings {
        let sides = assignment.step_sides(step).ok_or_else(|| missing(step))?;
        let mut near = Vec::new();
        let mut far = Vec::new();
        for (index, side) in sides.iter().enumerate() {
            match side {
                Side::Near => near.push(Entity::new(index)),
                Side::Far => far.push(Entity::new(index)),
            }
        }
        steps.push(StepRecord {
            step,
            near,
            far,
            ferry: Side::ferry_at(step),
        });
    }

    debug!(crossings, "trajectory decoded");
    Ok(Trajectory { steps, crossings })
}

/// Check the ferry rule: at most `capacity` entities change side between
/// consecutive steps.
pub fn verify_capacity(assignment: &Assignment, capacity: usize) -> Result<(), DecodeError> {
    let shape = assignment.shape();
    for step in 0..shape.steps().saturating_sub(1) {
        let here = assignment.step_sides(step).ok_or_else(|| missing(step))?;
        let next = assignment
            .step_sides(step + 1)
            .ok_or_else(|| missing(step + 1))?;
        let moved = here.iter().zip(next).filter(|(a, b)| a != b).count();
        if moved > capacity {
            return Err(DecodeError::CapacityExceeded {
                step,
                moved,
                capacity,
            });
        }
    }
    Ok(())
}

/// Check that no forbidden pair is ever alone on the unsupervised bank.
///
/// Even steps leave the far bank unsupervised; a shared far residence is
/// tolerated only when the whole roster is there. Odd steps leave the near
/// bank unsupervised, with no exception.
pub fn verify_safety(
    assignment: &Assignment,
    roster: &Roster,
    forbidden: &[(Entity, Entity)],
) -> Result<(), DecodeError> {
    let shape = assignment.shape();
    for step in 0..shape.steps() {
        let sides = assignment.step_sides(step).ok_or_else(|| missing(step))?;
        let all_far = sides.iter().all(|side| *side == Side::Far);
        for &(a, b) in forbidden {
            let side_a = entity_side(sides, a)?;
            let side_b = entity_side(sides, b)?;
            let violated = if step % 2 == 0 {
                side_a == Side::Far && side_b == Side::Far && !all_far
            } else {
                side_a == Side::Near && side_b == Side::Near
            };
            if violated {
                return Err(DecodeError::SafetyViolation {
                    step,
                    first: entity_name(roster, a),
                    second: entity_name(roster, b),
                });
            }
        }
    }
    Ok(())
}

fn entity_side(sides: &[Side], entity: Entity) -> Result<Side, DecodeError> {
    sides
        .get(entity.index())
        .copied()
        .ok_or_else(|| DecodeError::MalformedAssignment {
            reason: format!("entity {} outside the assignment", entity.index()),
        })
}

fn entity_name(roster: &Roster, entity: Entity) -> String {
    roster
        .get(entity)
        .map_or_else(|| entity.index().to_string(), |m| m.name().to_string())
}

fn missing(step: usize) -> DecodeError {
    DecodeError::MalformedAssignment {
        reason: format!("no values for step {step}"),
    }
}

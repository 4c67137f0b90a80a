//! Decoded crossing trajectories and their rendered step table.

use serde::Serialize;

use crate::domain::{Entity, Roster, Side};

/// Placement of every entity at one step, split by bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    /// Entities on the near bank, in roster order.
    pub near: Vec<Entity>,
    /// Entities on the far bank, in roster order.
    pub far: Vec<Entity>,
    pub ferry: Side,
}

/// The shortest prefix of the solved horizon that reaches the goal.
///
/// Read-only once produced; `crossings` is the step at which the goal first
/// holds, which equals the number of ferry crossings taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    pub steps: Vec<StepRecord>,
    pub crossings: usize,
}

impl Trajectory {
    /// Render the step table, one line per step: near-bank codes, the ferry
    /// marker, far-bank codes.
    #[must_use]
    pub fn render(&self, roster: &Roster) -> String {
        let width = roster.len();
        let mut out = String::new();
        for record in &self.steps {
            let near = roster.codes(&record.near);
            let far = roster.codes(&record.far);
            let ferry = match record.ferry {
                Side::Near => "b      ",
                Side::Far => "      b",
            };
            out.push_str(&format!(
                "Step {:02}:   {:>width$}  |{}|  {}\n",
                record.step,
                near,
                ferry,
                far,
                width = width
            ));
        }
        out
    }
}

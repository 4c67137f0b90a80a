//! Puzzle-agnostic domain types.
//!
//! Everything here is plain data: entities and their display roster, the two
//! banks, the bounds-validated `(step, entity)` grid, and decoded
//! trajectories. No solving and no I/O.

pub mod assignment;
pub mod roster;
pub mod side;
pub mod trajectory;

pub use assignment::{Assignment, GridShape};
pub use roster::{Entity, Member, Roster};
pub use side::Side;
pub use trajectory::{StepRecord, Trajectory};

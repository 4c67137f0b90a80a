//! Ferryman - crossing puzzles as integer linear programs.
//!
//! This crate formulates binary-state temporal planning puzzles (the classic
//! wolf/goat/cabbage river crossing, and 0/1 knapsack as a degenerate
//! instance) as integer programs, hands them to an off-the-shelf MILP
//! solver, and decodes the raw variable assignment back into a
//! human-readable trajectory.
//!
//! # Architecture
//!
//! - **[`model`]** - Constraint model builders
//!   - `PlanSpec` - temporal crossing instances: one binary variable per
//!     `(step, entity)`, positional-weight objective, parity-based
//!     transition, capacity and safety constraints
//!   - `KnapsackSpec` - single-step selection instances
//!
//! - **[`solver`]** - Binary integer program types and the solver boundary
//!   - `HiGHSSolver` - Open-source HiGHS via good_lp (`highs` feature)
//!
//! - **[`decode`]** - Trajectory decoding plus capacity/safety verification
//!   of solved assignments
//!
//! # Modules
//!
//! - [`app`] - Build → solve → verify → decode pipeline per puzzle kind
//! - [`config`] - TOML puzzle definitions and logging settings
//! - [`domain`] - Entities, banks, the `(step, entity)` grid, trajectories
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `highs` (default) - Enable the HiGHS solver backend; without it the
//!   modeling and decoding layers still build
//!
//! # Example
//!
//! ```
//! use ferryman::model::PlanSpec;
//!
//! let model = PlanSpec::wolf_goat_cabbage(20).build().expect("valid spec");
//! assert_eq!(model.shape().var_count(), 60);
//! ```

pub mod app;
pub mod config;
pub mod decode;
pub mod domain;
pub mod error;
pub mod model;
pub mod solver;

#[cfg(feature = "highs")]
pub mod cli;

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected problem parameters, caught before anything reaches the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("roster must contain at least one entity")]
    EmptyRoster,

    #[error("horizon must be at least 1")]
    ZeroHorizon,

    #[error("ferry capacity must be at least 1")]
    ZeroCapacity,

    #[error("initial sides cover {got} entities, roster has {expected}")]
    InitialSideMismatch { expected: usize, got: usize },

    #[error("duplicate entity name '{name}'")]
    DuplicateName { name: String },

    #[error("duplicate entity code '{code}'")]
    DuplicateCode { code: char },

    #[error("unknown entity '{name}'")]
    UnknownEntity { name: String },

    #[error("forbidden pair references entity {index}, roster has {len}")]
    PairOutOfRange { index: usize, len: usize },

    #[error("forbidden pair repeats entity '{name}'")]
    PairRepeatsEntity { name: String },

    #[error("positional weight overflows the decimal range at step {step}")]
    WeightOverflow { step: usize },

    #[error("knapsack needs at least one item")]
    EmptyKnapsack,

    #[error("knapsack has {values} values but {weights} weights")]
    ItemLengthMismatch { values: usize, weights: usize },

    #[error("knapsack weight for item {index} is negative ({weight})")]
    NegativeWeight { index: usize, weight: Decimal },

    #[error("knapsack capacity is negative ({capacity})")]
    NegativeCapacity { capacity: Decimal },
}

/// Solver verdicts that terminate the pipeline, surfaced verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("model is infeasible")]
    Infeasible,

    #[error("model is unbounded")]
    Unbounded,

    #[error("solver finished without a solution")]
    NotSolved,
}

/// Failures while interpreting a solved assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("goal state never reached within horizon {horizon}")]
    GoalNotReached { horizon: usize },

    #[error("malformed assignment: {reason}")]
    MalformedAssignment { reason: String },

    #[error("{moved} entities changed side at step {step}, ferry capacity is {capacity}")]
    CapacityExceeded {
        step: usize,
        moved: usize,
        capacity: usize,
    },

    #[error("'{first}' and '{second}' are left alone together at step {step}")]
    SafetyViolation {
        step: usize,
        first: String,
        second: String,
    },
}

/// Puzzle-file errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read puzzle file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse puzzle file: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

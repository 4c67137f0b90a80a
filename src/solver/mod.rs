//! Solver boundary for the binary programs this crate builds.
//!
//! The model layer emits [`IlpProblem`] values; a [`Solver`] implementation
//! hands them to a concrete MILP backend and returns an [`LpSolution`]. The
//! boundary is backend-agnostic: an objective with an explicit direction and
//! named linear constraints, every variable constrained to 0/1.

#[cfg(feature = "highs")]
pub mod highs;

#[cfg(feature = "highs")]
pub use highs::HiGHSSolver;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An integer programming solver for 0/1 models.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, etc.).
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Infeasibility and unboundedness are reported through
///   [`SolutionStatus`], not as errors
pub trait Solver: Send + Sync {
    /// Solver name for logging/config.
    fn name(&self) -> &'static str;

    /// Solve in a single blocking call. Every variable is binary.
    fn solve(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveDirection {
    Minimize,
    Maximize,
}

/// A binary integer program: every variable is constrained to {0, 1}.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Whether the objective is minimized or maximized.
    pub direction: ObjectiveDirection,
    /// Objective coefficients, one per variable.
    pub objective: Vec<Decimal>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
}

impl IlpProblem {
    /// Create a new problem with a zero objective over `num_vars` binary
    /// variables.
    #[must_use]
    pub fn new(direction: ObjectiveDirection, num_vars: usize) -> Self {
        Self {
            direction,
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

impl fmt::Display for IlpProblem {
    /// Text dump of the model, as printed by `--show-model`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.direction {
            ObjectiveDirection::Minimize => "minimize",
            ObjectiveDirection::Maximize => "maximize",
        };
        write!(f, "{verb}:")?;
        write_expression(f, &self.objective)?;
        writeln!(f)?;
        writeln!(f, "subject to:")?;
        for (n, constraint) in self.constraints.iter().enumerate() {
            match &constraint.name {
                Some(name) => write!(f, "  {name}:")?,
                None => write!(f, "  c{n}:")?,
            }
            write_expression(f, &constraint.coefficients)?;
            writeln!(f, " {} {}", constraint.sense, constraint.rhs)?;
        }
        write!(f, "{} binary variables", self.num_vars())
    }
}

/// Write a linear expression, skipping zero coefficients.
fn write_expression(f: &mut fmt::Formatter<'_>, coefficients: &[Decimal]) -> fmt::Result {
    let mut first = true;
    for (index, coeff) in coefficients.iter().enumerate() {
        if coeff.is_zero() {
            continue;
        }
        if first {
            first = false;
            if coeff.is_sign_negative() {
                write!(f, " -")?;
            }
        } else if coeff.is_sign_negative() {
            write!(f, " -")?;
        } else {
            write!(f, " +")?;
        }
        let magnitude = coeff.abs();
        if magnitude == Decimal::ONE {
            write!(f, " x{index}")?;
        } else {
            write!(f, " {magnitude} x{index}")?;
        }
    }
    if first {
        write!(f, " 0")?;
    }
    Ok(())
}

/// A single constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Optional tag surfaced in the model dump and diagnostics.
    pub name: Option<String>,
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub const fn geq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: None,
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: None,
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: None,
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Attach a diagnostic tag.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterEqual => write!(f, ">="),
            Self::LessEqual => write!(f, "<="),
            Self::Equal => write!(f, "="),
        }
    }
}

/// Solution to a solved binary program.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Variable values; all zero unless the status is optimal.
    pub values: Vec<Decimal>,
    /// Objective value.
    pub objective: Decimal,
    /// Solver status.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Check if solution is optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Solver solution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolutionStatus {
    /// Found optimal solution.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// The backend gave up without a verdict.
    NotSolved,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::Infeasible => write!(f, "Infeasible"),
            Self::Unbounded => write!(f, "Unbounded"),
            Self::NotSolved => write!(f, "NotSolved"),
        }
    }
}

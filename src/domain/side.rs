//! Which bank of the boundary an entity occupies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two banks.
///
/// Entities start on the near bank. A set bit in the model means "still on
/// the near bank"; the conventional goal is everyone on the far bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Near,
    Far,
}

impl Side {
    /// Interpret a solved binary value.
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Near
        } else {
            Self::Far
        }
    }

    /// The model bit for this side.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Near => 1,
            Self::Far => 0,
        }
    }

    /// Where the ferry sits at a given step: on the near bank before even
    /// crossings, on the far bank before odd ones. Fixed by convention,
    /// independent of the assignment.
    #[must_use]
    pub const fn ferry_at(step: usize) -> Self {
        if step % 2 == 0 {
            Self::Near
        } else {
            Self::Far
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Near => write!(f, "near"),
            Self::Far => write!(f, "far"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_round_trip() {
        assert_eq!(Side::from_bit(true), Side::Near);
        assert_eq!(Side::from_bit(false), Side::Far);
        assert_eq!(Side::Near.bit(), 1);
        assert_eq!(Side::Far.bit(), 0);
    }

    #[test]
    fn test_ferry_alternates_by_parity() {
        assert_eq!(Side::ferry_at(0), Side::Near);
        assert_eq!(Side::ferry_at(1), Side::Far);
        assert_eq!(Side::ferry_at(6), Side::Near);
        assert_eq!(Side::ferry_at(7), Side::Far);
    }
}

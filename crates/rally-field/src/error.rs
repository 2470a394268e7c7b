//! Error types for distance windows.

use std::fmt;

/// Errors arising from distance window construction.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowError {
    /// A bound is below zero.
    NegativeBound {
        /// Which bound (`"min"` or `"max"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A bound is NaN.
    NotANumber {
        /// Which bound (`"min"` or `"max"`).
        name: &'static str,
    },
    /// The lower bound exceeds the upper bound.
    Inverted {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBound { name, value } => {
                write!(f, "{name} distance must be non-negative, got {value}")
            }
            Self::NotANumber { name } => write!(f, "{name} distance is NaN"),
            Self::Inverted { min, max } => {
                write!(f, "minimum distance {min} is greater than maximum distance {max}")
            }
        }
    }
}

impl std::error::Error for WindowError {}

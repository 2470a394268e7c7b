//! Error types for parsing the position vocabulary.

use std::error::Error;
use std::fmt;

/// Errors arising when converting external labels or numbers into the
/// typed position vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelError {
    /// The string is not one of the five horizontal labels.
    UnknownHorizontal {
        /// The rejected label.
        label: String,
    },
    /// The string is not one of the five depth labels.
    UnknownDepth {
        /// The rejected label.
        label: String,
    },
    /// The space number is not 1 or 2.
    InvalidSide {
        /// The rejected number.
        value: u8,
    },
    /// A flat cell index is outside `0..CELLS_PER_SIDE`.
    CellIndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHorizontal { label } => {
                write!(f, "unknown horizontal position '{label}'")
            }
            Self::UnknownDepth { label } => write!(f, "unknown depth position '{label}'"),
            Self::InvalidSide { value } => write!(f, "invalid space {value}, must be 1 or 2"),
            Self::CellIndexOutOfRange { index } => {
                write!(f, "cell index {index} out of range [0, 25)")
            }
        }
    }
}

impl Error for LabelError {}

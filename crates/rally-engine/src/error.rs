//! Generation and edit error types.

use std::error::Error;
use std::fmt;

use rally_core::ShotId;
use rally_field::DistanceWindow;

use crate::config::ConfigError;
use crate::edit::Neighbour;

/// Errors from [`SequenceGenerator`](crate::SequenceGenerator).
///
/// Bad input and an unsatisfiable window are distinct outcomes: the first
/// is a caller defect, the second means the window should be relaxed.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The request failed validation; no generation work was done.
    InvalidInput(ConfigError),
    /// Every attempt hit a step with no candidate inside the window.
    Unsatisfiable {
        /// Attempts made before giving up.
        attempts: u32,
        /// The window that could not be satisfied.
        window: DistanceWindow,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::Unsatisfiable { attempts, window } => write!(
                f,
                "cannot satisfy distance constraints with window {window} after {attempts} attempts; try relaxing the window"
            ),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Unsatisfiable { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidInput(e)
    }
}

/// Errors from edits to a [`Sequence`](crate::Sequence).
#[derive(Clone, Debug, PartialEq)]
pub enum EditError {
    /// The index is past the end of the sequence.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Sequence length at the time of the edit.
        len: usize,
    },
    /// No shot with this id exists in the sequence.
    UnknownShot(ShotId),
    /// The candidate is outside the window relative to a neighbour.
    OutsideWindow {
        /// Which neighbour failed the check.
        neighbour: Neighbour,
        /// Measured distance to that neighbour.
        distance: f64,
        /// The active window.
        window: DistanceWindow,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of {len} shots")
            }
            Self::UnknownShot(id) => write!(f, "no shot with id {id}"),
            Self::OutsideWindow {
                neighbour,
                distance,
                window,
            } => write!(
                f,
                "distance {distance:.3} to {neighbour} shot is outside window {window}"
            ),
        }
    }
}

impl Error for EditError {}

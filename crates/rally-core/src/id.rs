//! Strongly-typed shot identifiers.

use std::fmt;

/// Stable identity of a shot within one sequence.
///
/// Allocated by the owning sequence from a monotonic counter. An id is
/// never reused within the sequence that issued it, so deleting a shot
/// does not shift the identity of the others the way array indices do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShotId(pub u64);

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShotId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

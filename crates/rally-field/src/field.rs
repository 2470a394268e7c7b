//! The core `Field` trait.

use crate::candidates::{self, Candidates};
use crate::point::FieldPoint;
use crate::window::DistanceWindow;
use rally_core::{Position, Side};

/// Geometry shared by both playing spaces.
///
/// A `Field` places every categorical [`Position`] of both spaces into
/// one continuous coordinate system so that travel between any two
/// shots, same space or across the boundary, is a single Euclidean
/// distance. [`MirroredCourt`](crate::MirroredCourt) is the canonical
/// backend; the generator and edit validator only see this trait.
///
/// # Thread Safety
///
/// `Sync` is required because one field instance is shared by every
/// sequence a caller generates, possibly from several threads.
pub trait Field: Send + Sync + 'static {
    /// Map a position to its point in the combined field.
    ///
    /// Must be total over all 50 cells and injective.
    fn coordinates(&self, position: &Position) -> FieldPoint;

    /// Largest distance between any two cells of the field.
    fn max_distance(&self) -> f64;

    /// Euclidean distance between two positions.
    fn distance(&self, a: &Position, b: &Position) -> f64 {
        self.coordinates(a).distance_to(self.coordinates(b))
    }

    /// `true` iff `window.min <= distance(a, b) <= window.max`.
    fn is_within_window(&self, a: &Position, b: &Position, window: &DistanceWindow) -> bool {
        window.contains(self.distance(a, b))
    }

    /// Every cell of `target` whose distance from `previous` lies in
    /// `window`, in canonical cell order.
    ///
    /// Default implementation scans all 25 cells. An empty result is a
    /// normal outcome, not an error.
    fn valid_candidates(
        &self,
        previous: &Position,
        target: Side,
        window: &DistanceWindow,
    ) -> Candidates {
        candidates::valid_candidates(self, previous, target, window)
    }
}

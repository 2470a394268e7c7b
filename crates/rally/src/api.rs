//! One-call entry points for callers that do not manage an RNG or a field.
//!
//! Every function here measures on [`MirroredCourt`] and draws from
//! [`rand::thread_rng`]. Use [`SequenceGenerator`] directly for seeded or
//! repeatable output.

use rally_core::{Position, Side};
use rally_engine::{validate_insertion, ConfigError, GenerateError, Sequence, SequenceGenerator};
use rally_field::{court, DistanceWindow, FieldPoint, MirroredCourt};

/// `count` shots alternating from space 1, each drawn independently.
pub fn generate_sequence(count: usize) -> Result<Sequence, GenerateError> {
    SequenceGenerator::new().generate(count, &DistanceWindow::UNBOUNDED, &mut rand::thread_rng())
}

/// `count` shots alternating from space 1 where every consecutive pair is
/// between `min` and `max` apart.
///
/// An absent `min` means 0 and an absent `max` means unbounded. Returns
/// [`GenerateError::Unsatisfiable`] when every retry dead-ends.
pub fn generate_sequence_with_distance(
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Sequence, GenerateError> {
    let window = DistanceWindow::from_bounds(min, max).map_err(ConfigError::from)?;
    SequenceGenerator::new().generate(count, &window, &mut rand::thread_rng())
}

/// A uniformly random cell of `side`.
pub fn generate_random_shot(side: Side) -> Position {
    SequenceGenerator::new().random_position(side, &mut rand::thread_rng())
}

/// Every cell of `target` between `min` and `max` from `previous`, in
/// label order.
///
/// The bounds are used as given; an inverted pair simply yields nothing.
pub fn valid_shots_within_distance(
    previous: &Position,
    target: Side,
    min: f64,
    max: f64,
) -> Vec<Position> {
    let window = DistanceWindow { min, max };
    rally_field::valid_candidates(&MirroredCourt, previous, target, &window).into_vec()
}

/// Whether `candidate` may sit next to `neighbour` under `[min, max]`.
pub fn validate_shot_with_distance(
    candidate: &Position,
    neighbour: &Position,
    min: f64,
    max: f64,
) -> bool {
    let window = DistanceWindow { min, max };
    validate_insertion(&MirroredCourt, candidate, Some(neighbour), None, &window)
}

/// Field coordinates of `position`.
pub fn coordinates_of(position: &Position) -> FieldPoint {
    court::coordinates_of(position)
}

/// Straight-line distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    court::distance(a, b)
}

//! Test fixtures and assertions for Rally development.
//!
//! Provides terse position constructors, a seeded RNG, and sequence
//! assertions shared by the integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rally_core::{Depth, Horizontal, Position, Side};
use rally_engine::Sequence;
use rally_field::{DistanceWindow, Field};

pub use Depth::*;
pub use Horizontal::*;

/// Shorthand for `Position::new` with a numeric space.
///
/// Panics on a space other than 1 or 2; only for test literals.
pub fn pos(horizontal: Horizontal, depth: Depth, space: u8) -> Position {
    let side = Side::try_from(space).expect("test space must be 1 or 2");
    Position::new(horizontal, depth, side)
}

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// All 50 cells of the field, space 1 first.
pub fn all_positions() -> Vec<Position> {
    Side::ALL.into_iter().flat_map(Position::cells).collect()
}

/// Assert that spaces alternate strictly, starting at `first`.
pub fn assert_alternating_from(sequence: &Sequence, first: Side) {
    let mut expected = first;
    for (i, shot) in sequence.iter().enumerate() {
        assert_eq!(
            shot.side(),
            expected,
            "shot {i} is in space {}, expected {expected}",
            shot.side()
        );
        expected = expected.opposite();
    }
}

/// Assert that every adjacent pair lies inside `window`.
pub fn assert_steps_within(sequence: &Sequence, field: &dyn Field, window: &DistanceWindow) {
    let violations = sequence.out_of_window_steps(field, window);
    assert!(
        violations.is_empty(),
        "{} step(s) outside {window}: {violations:?}",
        violations.len()
    );
}

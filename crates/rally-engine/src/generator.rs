//! The sequence generator.
//!
//! Two modes, selected by the window:
//!
//! - **Unconstrained** (`[0, inf)`): every shot is an independent uniform
//!   draw over its space's 25 cells. One pass, cannot fail.
//! - **Constrained** (any other window): each shot after the first is a
//!   uniform pick among the cells of its space that lie inside the window
//!   relative to the previous shot. A step with no candidates abandons the
//!   attempt, and the whole attempt restarts from its first shot with fresh
//!   draws, up to [`MAX_ATTEMPTS`] times. There is no backtracking: one
//!   early draw can close off later steps even when some valid sequence
//!   exists.
//!
//! Spaces alternate strictly. A fresh sequence starts in space 1; an
//! extension starts opposite the existing last shot, and in constrained
//! mode that last shot is the predecessor of the first new shot.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rally_core::{Depth, Horizontal, Position, ShotId, Side};
use rally_field::{DistanceWindow, Field, MirroredCourt};
use tracing::{debug, trace, warn};

use crate::config::{check_request, GeneratorConfig, DEFAULT_SHOT_CAP, MAX_ATTEMPTS};
use crate::error::GenerateError;
use crate::sequence::Sequence;

/// Builds alternating-space shot sequences over a [`Field`].
///
/// The generator holds no mutable state; every call takes the RNG by
/// `&mut`, so one generator can serve any number of independent
/// sequences.
///
/// # Examples
///
/// ```
/// use rally_engine::SequenceGenerator;
/// use rally_field::DistanceWindow;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = SequenceGenerator::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let window = DistanceWindow::new(1.0, 4.5).unwrap();
/// let seq = generator.generate(12, &window, &mut rng).unwrap();
/// assert_eq!(seq.len(), 12);
/// assert!(seq.alternates());
/// ```
#[derive(Clone, Debug)]
pub struct SequenceGenerator<F: Field = MirroredCourt> {
    field: F,
    shot_cap: usize,
}

impl SequenceGenerator<MirroredCourt> {
    /// A generator over the canonical mirrored court.
    pub fn new() -> Self {
        Self::with_field(MirroredCourt::new())
    }
}

impl Default for SequenceGenerator<MirroredCourt> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> SequenceGenerator<F> {
    /// A generator over a custom field.
    pub fn with_field(field: F) -> Self {
        Self {
            field,
            shot_cap: DEFAULT_SHOT_CAP,
        }
    }

    /// Set the largest accepted shot count (default: [`DEFAULT_SHOT_CAP`]).
    pub fn shot_cap(mut self, cap: usize) -> Self {
        self.shot_cap = cap;
        self
    }

    /// The field distances are measured on.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// A uniform draw over the 25 cells of `side`.
    pub fn random_position<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Position {
        let horizontal = Horizontal::ALL[rng.gen_range(0..Horizontal::ALL.len())];
        let depth = Depth::ALL[rng.gen_range(0..Depth::ALL.len())];
        Position::new(horizontal, depth, side)
    }

    /// Generate a fresh sequence of `count` shots starting in space 1.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidInput`] if `count` is zero or above the
    ///   cap, or `window` is malformed. Checked before any draw.
    /// - [`GenerateError::Unsatisfiable`] if all [`MAX_ATTEMPTS`]
    ///   constrained attempts dead-ended.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        window: &DistanceWindow,
        rng: &mut R,
    ) -> Result<Sequence, GenerateError> {
        let mut sequence = Sequence::new();
        self.extend(&mut sequence, count, window, rng)?;
        Ok(sequence)
    }

    /// Append `count` generated shots to `sequence`.
    ///
    /// All-or-nothing: on error `sequence` is unchanged. Returns the ids of
    /// the appended shots.
    ///
    /// The shot cap bounds `count`, not the resulting length; a sequence
    /// extended past [`DEFAULT_SHOT_CAP`] is refused when its record is
    /// loaded back (see [`SequenceRecord::load`](crate::SequenceRecord::load)).
    pub fn extend<R: Rng + ?Sized>(
        &self,
        sequence: &mut Sequence,
        count: usize,
        window: &DistanceWindow,
        rng: &mut R,
    ) -> Result<Vec<ShotId>, GenerateError> {
        check_request(count, window, self.shot_cap)?;
        self.fill(sequence, count, window, rng)
    }

    /// Validate `config` and run it with a ChaCha8 RNG.
    ///
    /// The RNG is seeded from `config.seed` when present, so equal seeds
    /// produce equal sequences; otherwise it is seeded from OS entropy.
    /// `config.shot_cap` applies instead of the generator's own cap.
    pub fn run(&self, config: &GeneratorConfig) -> Result<Sequence, GenerateError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut sequence = Sequence::new();
        self.fill(&mut sequence, config.shot_count, &config.window, &mut rng)?;
        Ok(sequence)
    }

    /// Draw and append; inputs are already validated.
    fn fill<R: Rng + ?Sized>(
        &self,
        sequence: &mut Sequence,
        count: usize,
        window: &DistanceWindow,
        rng: &mut R,
    ) -> Result<Vec<ShotId>, GenerateError> {
        let predecessor = sequence.last().map(|s| s.position());
        let first_side = sequence.next_side();

        let positions = if window.is_unconstrained() {
            self.draw_unconstrained(first_side, count, rng)
        } else {
            self.draw_constrained(predecessor, first_side, count, window, rng)?
        };
        Ok(sequence.append_all(positions))
    }

    fn draw_unconstrained<R: Rng + ?Sized>(
        &self,
        first_side: Side,
        count: usize,
        rng: &mut R,
    ) -> Vec<Position> {
        let mut side = first_side;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.random_position(side, rng));
            side = side.opposite();
        }
        out
    }

    fn draw_constrained<R: Rng + ?Sized>(
        &self,
        predecessor: Option<Position>,
        first_side: Side,
        count: usize,
        window: &DistanceWindow,
        rng: &mut R,
    ) -> Result<Vec<Position>, GenerateError> {
        for attempt in 1..=MAX_ATTEMPTS {
            match self.attempt(predecessor, first_side, count, window, rng) {
                Ok(positions) => {
                    debug!(attempt, count, %window, "constrained sequence generated");
                    return Ok(positions);
                }
                Err(step) => {
                    debug!(attempt, step, %window, "no candidates inside window; restarting attempt");
                }
            }
        }
        warn!(
            attempts = MAX_ATTEMPTS,
            count,
            %window,
            "cannot satisfy distance constraints with given window"
        );
        Err(GenerateError::Unsatisfiable {
            attempts: MAX_ATTEMPTS,
            window: *window,
        })
    }

    /// One constrained attempt. `Err(step)` names the step that had no
    /// candidates.
    fn attempt<R: Rng + ?Sized>(
        &self,
        predecessor: Option<Position>,
        first_side: Side,
        count: usize,
        window: &DistanceWindow,
        rng: &mut R,
    ) -> Result<Vec<Position>, usize> {
        let mut out = Vec::with_capacity(count);
        let mut previous = predecessor;
        let mut side = first_side;
        for step in 0..count {
            let next = match previous {
                None => self.random_position(side, rng),
                Some(prev) => {
                    let candidates = self.field.valid_candidates(&prev, side, window);
                    trace!(step, candidates = candidates.len(), "enumerated candidates");
                    *candidates.choose(rng).ok_or(step)?
                }
            };
            out.push(next);
            previous = Some(next);
            side = side.opposite();
        }
        Ok(out)
    }
}

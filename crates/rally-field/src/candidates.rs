//! Candidate enumeration for the next shot of a sequence.

use crate::field::Field;
use crate::window::DistanceWindow;
use rally_core::{Position, Side, CELLS_PER_SIDE};
use smallvec::SmallVec;

/// Candidate positions for one step.
///
/// Inline capacity covers a full space, so enumeration never allocates.
pub type Candidates = SmallVec<[Position; CELLS_PER_SIDE]>;

/// Scan all cells of `target` and keep those within `window` of
/// `previous`.
///
/// Order is the canonical cell order (horizontal outer, depth inner).
/// Callers pick uniformly from the result, so nothing should depend on
/// that order.
pub fn valid_candidates<F: Field + ?Sized>(
    field: &F,
    previous: &Position,
    target: Side,
    window: &DistanceWindow,
) -> Candidates {
    Position::cells(target)
        .filter(|candidate| window.contains(field.distance(previous, candidate)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::MirroredCourt;
    use rally_core::{Depth, Horizontal};

    #[test]
    fn unbounded_window_returns_whole_space() {
        let court = MirroredCourt::new();
        let prev = Position::new(Horizontal::Left, Depth::Back, Side::One);
        for side in Side::ALL {
            let c = valid_candidates(&court, &prev, side, &DistanceWindow::UNBOUNDED);
            assert_eq!(c.len(), CELLS_PER_SIDE);
            assert!(c.iter().eq(Position::cells(side).collect::<Vec<_>>().iter()));
        }
    }

    #[test]
    fn front_center_unit_window_has_single_candidate() {
        let court = MirroredCourt::new();
        let prev = Position::new(Horizontal::Center, Depth::Front, Side::One);
        let window = DistanceWindow::new(0.0, 1.0).unwrap();
        let c = court.valid_candidates(&prev, Side::Two, &window);
        assert_eq!(
            c.as_slice(),
            &[Position::new(Horizontal::Center, Depth::Front, Side::Two)]
        );
    }

    #[test]
    fn zero_window_across_spaces_is_empty() {
        let court = MirroredCourt::new();
        let window = DistanceWindow::new(0.0, 0.0).unwrap();
        for prev in Position::cells(Side::One) {
            assert!(court.valid_candidates(&prev, Side::Two, &window).is_empty());
        }
    }

    #[test]
    fn zero_window_same_space_is_self() {
        let court = MirroredCourt::new();
        let window = DistanceWindow::new(0.0, 0.0).unwrap();
        let prev = Position::new(Horizontal::Right, Depth::Mid, Side::Two);
        assert_eq!(
            court.valid_candidates(&prev, Side::Two, &window).as_slice(),
            &[prev]
        );
    }

    #[test]
    fn lower_bound_excludes_near_cells() {
        let court = MirroredCourt::new();
        let prev = Position::new(Horizontal::Center, Depth::Front, Side::One);
        let window = DistanceWindow::from_bounds(Some(5.0), None).unwrap();
        let c = court.valid_candidates(&prev, Side::Two, &window);
        // Only space-2 Back (y = 9) is at least 5 along-court from y = 4.
        assert!(!c.is_empty());
        for p in &c {
            assert_eq!(p.depth, Depth::Back);
            assert!(court.distance(&prev, p) >= 5.0);
        }
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn unreachable_window_is_empty() {
        let court = MirroredCourt::new();
        let prev = Position::new(Horizontal::Center, Depth::Mid, Side::One);
        let window = DistanceWindow::new(20.0, 30.0).unwrap();
        assert!(court.valid_candidates(&prev, Side::Two, &window).is_empty());
    }
}

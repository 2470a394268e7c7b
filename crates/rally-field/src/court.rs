//! The canonical two-space court: space 2 mirrored onto space 1.

use crate::field::Field;
use crate::point::FieldPoint;
use crate::window::DistanceWindow;
use rally_core::{Depth, Horizontal, Position, Side};

/// Along-court extent of the combined field minus one (`y` runs `0..=9`).
const FOLD: i32 = 2 * Depth::ALL.len() as i32 - 1;

/// Distance between the two farthest corners of the field, `sqrt(4^2 + 9^2)`.
pub const MAX_FIELD_DISTANCE: f64 = 9.848_857_801_796_104;

/// Two 5 x 5 spaces facing each other across a shared boundary (a net).
///
/// Space 1 keeps its depth index as `y` (Back = 0, Front = 4). Space 2 is
/// physically mirrored, so its Front touches space 1's Front: `y` is
/// `9 - depth index` (Front = 5, Back = 9). Horizontal index is `x` in
/// both spaces. The result is one 5 x 10 field where plain Euclidean
/// distance measures travel within and across spaces alike.
///
/// # Examples
///
/// ```
/// use rally_core::{Depth, Horizontal, Position, Side};
/// use rally_field::{Field, FieldPoint, MirroredCourt};
///
/// let court = MirroredCourt::new();
/// let near = Position::new(Horizontal::Center, Depth::Front, Side::One);
/// let far = Position::new(Horizontal::Center, Depth::Front, Side::Two);
/// assert_eq!(court.coordinates(&near), FieldPoint::new(2, 4));
/// assert_eq!(court.coordinates(&far), FieldPoint::new(2, 5));
/// assert_eq!(court.distance(&near, &far), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirroredCourt;

impl MirroredCourt {
    /// Create the court.
    pub fn new() -> Self {
        Self
    }
}

impl Field for MirroredCourt {
    fn coordinates(&self, position: &Position) -> FieldPoint {
        let x = position.horizontal.index() as i32;
        let depth = position.depth.index() as i32;
        let y = match position.side {
            Side::One => depth,
            Side::Two => FOLD - depth,
        };
        FieldPoint::new(x, y)
    }

    fn max_distance(&self) -> f64 {
        MAX_FIELD_DISTANCE
    }
}

/// Field coordinates of `position` on the canonical court.
pub fn coordinates_of(position: &Position) -> FieldPoint {
    MirroredCourt.coordinates(position)
}

/// Distance between two positions on the canonical court.
pub fn distance(a: &Position, b: &Position) -> f64 {
    MirroredCourt.distance(a, b)
}

/// Window check on the canonical court.
pub fn is_within_window(a: &Position, b: &Position, window: &DistanceWindow) -> bool {
    MirroredCourt.is_within_window(a, b, window)
}

// The fold is derived from the depth rows; MAX_FIELD_DISTANCE assumes
// five columns and ten rows in total.
const _: () = assert!(Depth::ALL.len() == 5 && FOLD == 9 && Horizontal::ALL.len() == 5);

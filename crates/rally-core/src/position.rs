//! The categorical [`Position`] value and per-space cell enumeration.

use crate::error::LabelError;
use crate::label::{Depth, Horizontal, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categorical cells in one space (5 horizontal x 5 depth).
pub const CELLS_PER_SIDE: usize = Horizontal::ALL.len() * Depth::ALL.len();

/// A categorical shot position: one cell of one space.
///
/// Every combination of labels is valid, so a `Position` cannot be
/// constructed out of range. Serialized as
/// `{"horizontal": "Center", "depth": "Front", "space": 1}`.
///
/// # Examples
///
/// ```
/// use rally_core::{Depth, Horizontal, Position, Side};
///
/// let p = Position::new(Horizontal::Center, Depth::Front, Side::One);
/// assert_eq!(p.to_string(), "Center / Front (space 1)");
/// assert_eq!(Position::cells(Side::Two).count(), 25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal label, left to right.
    pub horizontal: Horizontal,
    /// Depth label, back to front.
    pub depth: Depth,
    /// The space this cell belongs to.
    #[serde(rename = "space")]
    pub side: Side,
}

impl Position {
    /// Create a position from its three labels.
    pub fn new(horizontal: Horizontal, depth: Depth, side: Side) -> Self {
        Self {
            horizontal,
            depth,
            side,
        }
    }

    /// Parse a position from wire labels and a space number.
    pub fn parse(horizontal: &str, depth: &str, space: u8) -> Result<Self, LabelError> {
        Ok(Self {
            horizontal: horizontal.parse()?,
            depth: depth.parse()?,
            side: Side::try_from(space)?,
        })
    }

    /// All 25 cells of `side` in canonical order: horizontal outer,
    /// depth inner.
    pub fn cells(side: Side) -> impl Iterator<Item = Position> {
        Horizontal::ALL.into_iter().flat_map(move |horizontal| {
            Depth::ALL
                .into_iter()
                .map(move |depth| Position::new(horizontal, depth, side))
        })
    }

    /// Rank of this cell in [`Position::cells`] for its own space.
    pub fn cell_index(&self) -> usize {
        self.horizontal.index() * Depth::ALL.len() + self.depth.index()
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    pub fn from_cell_index(side: Side, index: usize) -> Result<Self, LabelError> {
        if index >= CELLS_PER_SIDE {
            return Err(LabelError::CellIndexOutOfRange { index });
        }
        let rows = Depth::ALL.len();
        Ok(Self::new(
            Horizontal::ALL[index / rows],
            Depth::ALL[index % rows],
            side,
        ))
    }

    /// The same cell moved to another space.
    pub fn with_side(self, side: Side) -> Self {
        Self { side, ..self }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} (space {})",
            self.horizontal, self.depth, self.side
        )
    }
}

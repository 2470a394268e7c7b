//! Manual edit validation.
//!
//! A manual append or insert is checked against the shot(s) it will sit
//! next to, and nothing else. Changing the window after shots exist can
//! leave earlier pairs outside it; those are left alone (see
//! [`Sequence::out_of_window_steps`] for an audit).

use std::fmt;

use rally_core::{Position, ShotId};
use rally_field::{DistanceWindow, Field};

use crate::error::EditError;
use crate::sequence::Sequence;

/// Which neighbour of an edit failed the window check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbour {
    /// The shot before the edited slot.
    Previous,
    /// The shot after the edited slot.
    Next,
}

impl fmt::Display for Neighbour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
        }
    }
}

/// Check `candidate` against whichever neighbours are present.
///
/// Appending passes only `previous`, inserting at the head only `next`,
/// inserting mid-sequence both. An unconstrained window always passes.
pub fn check_insertion(
    field: &dyn Field,
    candidate: &Position,
    previous: Option<&Position>,
    next: Option<&Position>,
    window: &DistanceWindow,
) -> Result<(), EditError> {
    if window.is_unconstrained() {
        return Ok(());
    }
    let neighbours = [(Neighbour::Previous, previous), (Neighbour::Next, next)];
    for (neighbour, position) in neighbours {
        let Some(position) = position else { continue };
        let distance = field.distance(candidate, position);
        if !window.contains(distance) {
            return Err(EditError::OutsideWindow {
                neighbour,
                distance,
                window: *window,
            });
        }
    }
    Ok(())
}

/// Boolean form of [`check_insertion`].
pub fn validate_insertion(
    field: &dyn Field,
    candidate: &Position,
    previous: Option<&Position>,
    next: Option<&Position>,
    window: &DistanceWindow,
) -> bool {
    check_insertion(field, candidate, previous, next, window).is_ok()
}

impl Sequence {
    /// Append `position` after checking it against the current last shot.
    pub fn append_checked(
        &mut self,
        field: &dyn Field,
        position: Position,
        window: &DistanceWindow,
    ) -> Result<ShotId, EditError> {
        let previous = self.last().map(|s| s.position());
        check_insertion(field, &position, previous.as_ref(), None, window)?;
        Ok(self.push(position))
    }

    /// Insert `position` at `index` after checking it against the shots
    /// that will become its neighbours.
    ///
    /// `index == len()` is an append.
    pub fn insert_checked(
        &mut self,
        field: &dyn Field,
        index: usize,
        position: Position,
        window: &DistanceWindow,
    ) -> Result<ShotId, EditError> {
        if index > self.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let previous = index
            .checked_sub(1)
            .and_then(|i| self.get(i))
            .map(|s| s.position());
        let next = self.get(index).map(|s| s.position());
        check_insertion(field, &position, previous.as_ref(), next.as_ref(), window)?;
        self.insert(index, position)
    }
}

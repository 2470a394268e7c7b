//! The ordered shot container.
//!
//! A [`Sequence`] owns its shots and hands out a [`ShotId`] for each one.
//! Positions are immutable once placed; edits insert or remove whole
//! shots. Lookups by identity go through ids, never through indices that
//! shift on deletion.

use rally_core::{Position, ShotId, Side};
use rally_field::{DistanceWindow, Field};

use crate::error::EditError;

/// One placed shot: a position plus its identity in the owning sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shot {
    id: ShotId,
    position: Position,
}

impl Shot {
    /// Identity within the owning sequence.
    pub fn id(&self) -> ShotId {
        self.id
    }

    /// Where the shot lands.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Shorthand for `position().side`.
    pub fn side(&self) -> Side {
        self.position.side
    }
}

/// An adjacent pair whose distance falls outside a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepViolation {
    /// Index of the earlier shot of the pair.
    pub index: usize,
    /// Measured distance between the pair.
    pub distance: f64,
}

/// An ordered, indexable list of shots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    shots: Vec<Shot>,
    next_id: u64,
}

impl Sequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from positions, assigning fresh ids in order.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut seq = Self::new();
        for p in positions {
            seq.push(p);
        }
        seq
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// `true` when the sequence holds no shots.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Shot at `index`.
    pub fn get(&self, index: usize) -> Option<&Shot> {
        self.shots.get(index)
    }

    /// First shot.
    pub fn first(&self) -> Option<&Shot> {
        self.shots.first()
    }

    /// Last shot.
    pub fn last(&self) -> Option<&Shot> {
        self.shots.last()
    }

    /// Iterate over shots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shot> {
        self.shots.iter()
    }

    /// Shots as a slice.
    pub fn as_slice(&self) -> &[Shot] {
        &self.shots
    }

    /// Positions in order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.shots.iter().map(Shot::position)
    }

    /// Current index of the shot with `id`.
    pub fn index_of(&self, id: ShotId) -> Option<usize> {
        self.shots.iter().position(|s| s.id == id)
    }

    /// Shot with `id`.
    pub fn get_by_id(&self, id: ShotId) -> Option<&Shot> {
        self.shots.iter().find(|s| s.id == id)
    }

    /// Append without any distance check.
    pub fn push(&mut self, position: Position) -> ShotId {
        let shot = self.allocate(position);
        self.shots.push(shot);
        shot.id
    }

    /// Insert at `index` without any distance check.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, position: Position) -> Result<ShotId, EditError> {
        if index > self.shots.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.shots.len(),
            });
        }
        let shot = self.allocate(position);
        self.shots.insert(index, shot);
        Ok(shot.id)
    }

    /// Remove and return the shot at `index`.
    ///
    /// The new adjacency created by the removal is not checked.
    pub fn remove(&mut self, index: usize) -> Result<Shot, EditError> {
        if index >= self.shots.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.shots.len(),
            });
        }
        Ok(self.shots.remove(index))
    }

    /// Remove and return the shot with `id`.
    pub fn remove_by_id(&mut self, id: ShotId) -> Result<Shot, EditError> {
        let index = self.index_of(id).ok_or(EditError::UnknownShot(id))?;
        Ok(self.shots.remove(index))
    }

    /// Remove every shot. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.shots.clear();
    }

    /// Space the next appended shot would use to keep alternation.
    ///
    /// Space 1 for an empty sequence, otherwise the opposite of the last
    /// shot's space.
    pub fn next_side(&self) -> Side {
        self.last()
            .map(|s| s.side().opposite())
            .unwrap_or(Side::One)
    }

    /// `true` if consecutive shots never share a space.
    pub fn alternates(&self) -> bool {
        self.shots.windows(2).all(|w| w[0].side() != w[1].side())
    }

    /// Distance of every adjacent pair, in order.
    pub fn step_distances(&self, field: &dyn Field) -> Vec<f64> {
        self.shots
            .windows(2)
            .map(|w| field.distance(&w[0].position, &w[1].position))
            .collect()
    }

    /// Adjacent pairs whose distance lies outside `window`.
    ///
    /// Read-only: a sequence edited under one window and later viewed
    /// under another may contain such pairs, and they are reported, not
    /// repaired.
    pub fn out_of_window_steps(
        &self,
        field: &dyn Field,
        window: &DistanceWindow,
    ) -> Vec<StepViolation> {
        self.step_distances(field)
            .into_iter()
            .enumerate()
            .filter(|(_, d)| !window.contains(*d))
            .map(|(index, distance)| StepViolation { index, distance })
            .collect()
    }

    pub(crate) fn append_all(&mut self, positions: Vec<Position>) -> Vec<ShotId> {
        positions.into_iter().map(|p| self.push(p)).collect()
    }

    fn allocate(&mut self, position: Position) -> Shot {
        let id = ShotId(self.next_id);
        self.next_id += 1;
        Shot { id, position }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Shot;
    type IntoIter = std::slice::Iter<'a, Shot>;

    fn into_iter(self) -> Self::IntoIter {
        self.shots.iter()
    }
}

impl FromIterator<Position> for Sequence {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}

//! The sequence shape exchanged with an external store.
//!
//! The store owns naming, ids, timestamps and metadata. This side reads
//! back only `shots` and `settings.{minDistance,maxDistance}`; every other
//! top-level field is carried through untouched so a loaded record can be
//! written back without loss.

use std::error::Error;
use std::fmt;

use rally_core::Position;
use rally_field::{DistanceWindow, WindowError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEFAULT_SHOT_CAP;
use crate::sequence::Sequence;

/// Errors from reading or writing a [`SequenceRecord`].
#[derive(Debug)]
pub enum RecordError {
    /// Malformed JSON or an invalid shot label.
    Json(serde_json::Error),
    /// The stored distance settings do not form a valid window.
    Window(WindowError),
    /// The record holds no shots.
    NoShots,
    /// The record holds more shots than a stored sequence may.
    TooManyShots {
        /// Shots in the record.
        count: usize,
        /// Largest stored sequence accepted.
        cap: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Window(e) => write!(f, "stored settings: {e}"),
            Self::NoShots => write!(f, "sequence has no shots"),
            Self::TooManyShots { count, cap } => {
                write!(f, "sequence has {count} shots, store limit is {cap}")
            }
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::NoShots | Self::TooManyShots { .. } => None,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<WindowError> for RecordError {
    fn from(e: WindowError) -> Self {
        Self::Window(e)
    }
}

/// Generation settings stored alongside a sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceSettings {
    /// Lower travel bound; absent means 0.
    #[serde(default)]
    pub min_distance: Option<f64>,
    /// Upper travel bound; absent means unbounded.
    #[serde(default)]
    pub max_distance: Option<f64>,
}

impl SequenceSettings {
    /// Settings describing `window`. An unconstrained window stores no
    /// bounds; an infinite maximum is stored as absent.
    pub fn from_window(window: &DistanceWindow) -> Self {
        if window.is_unconstrained() {
            return Self::default();
        }
        Self {
            min_distance: Some(window.min),
            max_distance: window.finite_max(),
        }
    }

    /// The validated window these settings describe.
    pub fn window(&self) -> Result<DistanceWindow, WindowError> {
        DistanceWindow::from_bounds(self.min_distance, self.max_distance)
    }
}

/// A stored sequence as seen by this crate.
///
/// # Examples
///
/// ```
/// use rally_engine::SequenceRecord;
///
/// let json = r#"{
///     "id": "abc",
///     "name": "Net drill",
///     "shots": [
///         {"horizontal": "Center", "depth": "Front", "space": 1},
///         {"horizontal": "Center", "depth": "Front", "space": 2}
///     ],
///     "settings": {"minDistance": null, "maxDistance": 1.5}
/// }"#;
/// let record = SequenceRecord::from_json(json).unwrap();
/// let (sequence, window) = record.load().unwrap();
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(window.max, 1.5);
/// assert_eq!(record.extra["name"], "Net drill");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Shots in order.
    pub shots: Vec<Position>,
    /// Distance settings used when the sequence was built, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SequenceSettings>,
    /// Every other field of the stored record, passed through unexamined.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SequenceRecord {
    /// Snapshot a sequence and its active window.
    pub fn new(sequence: &Sequence, window: &DistanceWindow) -> Self {
        Self {
            shots: sequence.positions().collect(),
            settings: Some(SequenceSettings::from_window(window)),
            extra: Map::new(),
        }
    }

    /// Parse a stored record.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the store.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The stored window, or unconstrained when no settings were saved.
    pub fn window(&self) -> Result<DistanceWindow, RecordError> {
        match &self.settings {
            Some(settings) => Ok(settings.window()?),
            None => Ok(DistanceWindow::UNBOUNDED),
        }
    }

    /// Rebuild the sequence (with fresh ids) and its window.
    ///
    /// Shots are loaded as stored; no distance or alternation check runs.
    /// A record must hold between 1 and [`DEFAULT_SHOT_CAP`] shots.
    pub fn load(&self) -> Result<(Sequence, DistanceWindow), RecordError> {
        if self.shots.is_empty() {
            return Err(RecordError::NoShots);
        }
        if self.shots.len() > DEFAULT_SHOT_CAP {
            return Err(RecordError::TooManyShots {
                count: self.shots.len(),
                cap: DEFAULT_SHOT_CAP,
            });
        }
        let window = self.window()?;
        Ok((Sequence::from_positions(self.shots.iter().copied()), window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rally_core::{Depth, Horizontal, Side};

    #[test]
    fn missing_settings_is_unconstrained() {
        let json = r#"{"shots": [{"horizontal": "Left", "depth": "Mid", "space": 2}]}"#;
        let record = SequenceRecord::from_json(json).unwrap();
        let (seq, window) = record.load().unwrap();
        assert!(window.is_unconstrained());
        // Stored as-is, even though a fresh sequence would start in space 1.
        assert_eq!(seq.first().unwrap().side(), Side::Two);
    }

    #[test]
    fn null_bounds_default() {
        let json = r#"{"shots": [{"horizontal": "Left", "depth": "Mid", "space": 1}],
                       "settings": {"minDistance": 2.0, "maxDistance": null}}"#;
        let window = SequenceRecord::from_json(json).unwrap().window().unwrap();
        assert_eq!(window.min, 2.0);
        assert_eq!(window.max, f64::INFINITY);
    }

    #[test]
    fn invalid_stored_window() {
        let json = r#"{"shots": [{"horizontal": "Left", "depth": "Mid", "space": 1}],
                       "settings": {"minDistance": 3.0, "maxDistance": 1.0}}"#;
        let record = SequenceRecord::from_json(json).unwrap();
        assert!(matches!(
            record.load(),
            Err(RecordError::Window(WindowError::Inverted { .. }))
        ));
    }

    #[test]
    fn empty_shots_rejected_on_load() {
        let record = SequenceRecord::from_json(r#"{"shots": []}"#).unwrap();
        assert!(matches!(record.load(), Err(RecordError::NoShots)));
    }

    #[test]
    fn oversized_record_rejected_on_load() {
        let shot = Position::new(Horizontal::Left, Depth::Back, Side::One);
        let mut record = SequenceRecord {
            shots: vec![shot; DEFAULT_SHOT_CAP],
            settings: None,
            extra: Map::new(),
        };
        assert_eq!(record.load().unwrap().0.len(), DEFAULT_SHOT_CAP);

        record.shots.push(shot);
        assert!(matches!(
            record.load(),
            Err(RecordError::TooManyShots { count: 101, cap: 100 })
        ));
    }

    #[test]
    fn bad_space_rejected() {
        let json = r#"{"shots": [{"horizontal": "Left", "depth": "Mid", "space": 3}]}"#;
        assert!(matches!(
            SequenceRecord::from_json(json),
            Err(RecordError::Json(_))
        ));
    }

    #[test]
    fn extra_fields_survive_round_trip() {
        let json = r#"{"id": "s-1", "name": "Corners",
                       "metadata": {"totalShots": 1, "createdAt": "2024-01-01"},
                       "shots": [{"horizontal": "Right", "depth": "Back", "space": 1}]}"#;
        let record = SequenceRecord::from_json(json).unwrap();
        let written: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(written["id"], "s-1");
        assert_eq!(written["metadata"]["totalShots"], 1);
        assert_eq!(written["shots"][0]["horizontal"], "Right");
        assert!(written.get("settings").is_none());
    }

    #[test]
    fn settings_from_window() {
        let seq = Sequence::from_positions([Position::new(
            Horizontal::Center,
            Depth::Mid,
            Side::One,
        )]);
        let bounded = SequenceRecord::new(&seq, &DistanceWindow::new(1.0, 3.0).unwrap());
        assert_eq!(
            bounded.settings,
            Some(SequenceSettings {
                min_distance: Some(1.0),
                max_distance: Some(3.0)
            })
        );
        let open = SequenceRecord::new(&seq, &DistanceWindow::UNBOUNDED);
        assert_eq!(open.settings, Some(SequenceSettings::default()));
        assert_eq!(open.window().unwrap(), DistanceWindow::UNBOUNDED);
    }
}

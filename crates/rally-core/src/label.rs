//! The fixed, ordered label vocabularies of a playing space.
//!
//! Each space is a 5 x 5 grid addressed by a [`Horizontal`] label
//! (left to right) and a [`Depth`] label (back to front, where "front"
//! is the edge shared with the other space). Label order is significant:
//! [`Horizontal::index`] and [`Depth::index`] feed the field coordinate
//! mapping.

use crate::error::LabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two playing spaces (halves of the court).
///
/// Serialized as the number `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Side {
    /// Space 1.
    One,
    /// Space 2, mirrored across the shared boundary.
    Two,
}

impl Side {
    /// Both spaces in numeric order.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    /// The space number, `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// The other space.
    pub fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Space for the shot at `index` in a fresh alternating sequence.
    ///
    /// Even indices land in space 1, odd indices in space 2.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::One
        } else {
            Self::Two
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for Side {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(LabelError::InvalidSide { value }),
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.number()
    }
}

/// Horizontal position within a space, ordered left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Horizontal {
    /// `"Left"`, index 0.
    Left,
    /// `"Center Left"`, index 1.
    #[serde(rename = "Center Left")]
    CenterLeft,
    /// `"Center"`, index 2.
    Center,
    /// `"Center Right"`, index 3.
    #[serde(rename = "Center Right")]
    CenterRight,
    /// `"Right"`, index 4.
    Right,
}

impl Horizontal {
    /// All labels in vocabulary order.
    pub const ALL: [Horizontal; 5] = [
        Horizontal::Left,
        Horizontal::CenterLeft,
        Horizontal::Center,
        Horizontal::CenterRight,
        Horizontal::Right,
    ];

    /// Index of this label in [`Horizontal::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label at `index`, or `None` past the end of the vocabulary.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The wire label, e.g. `"Center Left"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::CenterLeft => "Center Left",
            Self::Center => "Center",
            Self::CenterRight => "Center Right",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizontal {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.label() == s)
            .ok_or_else(|| LabelError::UnknownHorizontal {
                label: s.to_string(),
            })
    }
}

/// Depth within a space, ordered from the back line to the shared front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Depth {
    /// `"Back"`, index 0.
    Back,
    /// `"Mid Back"`, index 1.
    #[serde(rename = "Mid Back")]
    MidBack,
    /// `"Mid"`, index 2.
    Mid,
    /// `"Mid Front"`, index 3.
    #[serde(rename = "Mid Front")]
    MidFront,
    /// `"Front"`, index 4. Touches the other space's front.
    Front,
}

impl Depth {
    /// All labels in vocabulary order.
    pub const ALL: [Depth; 5] = [
        Depth::Back,
        Depth::MidBack,
        Depth::Mid,
        Depth::MidFront,
        Depth::Front,
    ];

    /// Index of this label in [`Depth::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label at `index`, or `None` past the end of the vocabulary.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The wire label, e.g. `"Mid Front"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::MidBack => "Mid Back",
            Self::Mid => "Mid",
            Self::MidFront => "Mid Front",
            Self::Front => "Front",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Depth {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| LabelError::UnknownDepth {
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_vocabulary_order() {
        for (i, h) in Horizontal::ALL.iter().enumerate() {
            assert_eq!(h.index(), i);
            assert_eq!(Horizontal::from_index(i), Some(*h));
        }
        for (i, d) in Depth::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Depth::from_index(i), Some(*d));
        }
        assert_eq!(Horizontal::from_index(5), None);
        assert_eq!(Depth::from_index(5), None);
    }

    #[test]
    fn labels_parse_back() {
        for h in Horizontal::ALL {
            assert_eq!(h.label().parse::<Horizontal>().unwrap(), h);
        }
        for d in Depth::ALL {
            assert_eq!(d.label().parse::<Depth>().unwrap(), d);
        }
    }

    #[test]
    fn unknown_labels_rejected() {
        assert_eq!(
            "CenterLeft".parse::<Horizontal>(),
            Err(LabelError::UnknownHorizontal {
                label: "CenterLeft".into()
            })
        );
        assert_eq!(
            "front".parse::<Depth>(),
            Err(LabelError::UnknownDepth {
                label: "front".into()
            })
        );
    }

    #[test]
    fn side_numbers() {
        assert_eq!(Side::try_from(1), Ok(Side::One));
        assert_eq!(Side::try_from(2), Ok(Side::Two));
        assert_eq!(Side::try_from(0), Err(LabelError::InvalidSide { value: 0 }));
        assert_eq!(Side::try_from(3), Err(LabelError::InvalidSide { value: 3 }));
        assert_eq!(u8::from(Side::Two), 2);
    }

    #[test]
    fn side_alternation() {
        assert_eq!(Side::One.opposite(), Side::Two);
        assert_eq!(Side::Two.opposite(), Side::One);
        assert_eq!(Side::for_index(0), Side::One);
        assert_eq!(Side::for_index(1), Side::Two);
        assert_eq!(Side::for_index(6), Side::One);
    }

    #[test]
    fn serde_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Horizontal::CenterRight).unwrap(),
            "\"Center Right\""
        );
        assert_eq!(serde_json::to_string(&Depth::MidBack).unwrap(), "\"Mid Back\"");
        assert_eq!(serde_json::to_string(&Side::Two).unwrap(), "2");
        assert!(serde_json::from_str::<Side>("3").is_err());
        assert!(serde_json::from_str::<Depth>("\"Deep\"").is_err());
    }
}

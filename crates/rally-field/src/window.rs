//! Inclusive distance windows between consecutive shots.

use crate::error::WindowError;
use std::fmt;

/// An inclusive `[min, max]` range of travel distance between two
/// consecutive shots.
///
/// `max` may be `f64::INFINITY`. The default window `[0, inf)` places no
/// constraint at all. Fields are public so that read-only queries can use
/// a window exactly as given; generation calls [`validate`](Self::validate)
/// before doing any work.
///
/// # Examples
///
/// ```
/// use rally_field::DistanceWindow;
///
/// let w = DistanceWindow::from_bounds(Some(1.0), None).unwrap();
/// assert!(w.contains(1.0));
/// assert!(w.contains(9.0));
/// assert!(!w.contains(0.5));
/// assert!(DistanceWindow::from_bounds(Some(3.0), Some(2.0)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceWindow {
    /// Lower bound, inclusive. Must be `>= 0`.
    pub min: f64,
    /// Upper bound, inclusive. Must be `>= min`; may be infinite.
    pub max: f64,
}

impl DistanceWindow {
    /// The unconstrained window `[0, inf)`.
    pub const UNBOUNDED: DistanceWindow = DistanceWindow {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// Create a validated window.
    pub fn new(min: f64, max: f64) -> Result<Self, WindowError> {
        let window = Self { min, max };
        window.validate()?;
        Ok(window)
    }

    /// Create a validated window from optional bounds.
    ///
    /// A missing `min` means 0; a missing `max` means unbounded above.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Result<Self, WindowError> {
        Self::new(min.unwrap_or(0.0), max.unwrap_or(f64::INFINITY))
    }

    /// Check the window invariants.
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.min.is_nan() {
            return Err(WindowError::NotANumber { name: "min" });
        }
        if self.max.is_nan() {
            return Err(WindowError::NotANumber { name: "max" });
        }
        if self.min < 0.0 {
            return Err(WindowError::NegativeBound {
                name: "min",
                value: self.min,
            });
        }
        if self.max < 0.0 {
            return Err(WindowError::NegativeBound {
                name: "max",
                value: self.max,
            });
        }
        if self.min > self.max {
            return Err(WindowError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// `true` for exactly `[0, inf)`.
    ///
    /// Any other window, including `[0, 0]`, constrains generation.
    pub fn is_unconstrained(&self) -> bool {
        self.min == 0.0 && self.max == f64::INFINITY
    }

    /// `true` iff `min <= distance <= max`.
    pub fn contains(&self, distance: f64) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// The upper bound, or `None` when unbounded above.
    pub fn finite_max(&self) -> Option<f64> {
        self.max.is_finite().then_some(self.max)
    }
}

impl Default for DistanceWindow {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for DistanceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max.is_finite() {
            write!(f, "[{}, {}]", self.min, self.max)
        } else {
            write!(f, "[{}, inf)", self.min)
        }
    }
}

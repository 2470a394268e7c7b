//! Generator configuration, validation, and error types.
//!
//! [`GeneratorConfig`] is the plain-data input for a generation run.
//! [`validate()`](GeneratorConfig::validate) checks every input invariant
//! before any random draw happens, so an invalid request never produces
//! partial state.

use std::error::Error;
use std::fmt;

use rally_field::{DistanceWindow, WindowError};

/// Number of full generation attempts before a constrained request is
/// reported unsatisfiable.
pub const MAX_ATTEMPTS: u32 = 10;

/// Default upper bound on shots per request.
pub const DEFAULT_SHOT_CAP: usize = 100;

// ── ConfigError ────────────────────────────────────────────────────

/// Input errors detected before generation starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A shot count of zero was requested.
    NoShots,
    /// More shots than the cap were requested.
    TooManyShots {
        /// The requested count.
        requested: usize,
        /// The configured cap.
        cap: usize,
    },
    /// The shot cap itself is zero.
    ZeroShotCap,
    /// The distance window is malformed.
    Window(WindowError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoShots => write!(f, "shot count must be at least 1"),
            Self::TooManyShots { requested, cap } => {
                write!(f, "requested {requested} shots, maximum is {cap}")
            }
            Self::ZeroShotCap => write!(f, "shot_cap must be at least 1"),
            Self::Window(e) => write!(f, "window: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Window(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WindowError> for ConfigError {
    fn from(e: WindowError) -> Self {
        Self::Window(e)
    }
}

// ── GeneratorConfig ────────────────────────────────────────────────

/// Complete input for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of shots to generate. Default: 10.
    pub shot_count: usize,
    /// Travel window between consecutive shots. Default: unconstrained.
    pub window: DistanceWindow,
    /// Largest accepted `shot_count`. Default: [`DEFAULT_SHOT_CAP`].
    pub shot_cap: usize,
    /// RNG seed. `Some` makes the run reproducible; `None` draws from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shot_count: 10,
            window: DistanceWindow::UNBOUNDED,
            shot_cap: DEFAULT_SHOT_CAP,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Validate all input invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shot_cap == 0 {
            return Err(ConfigError::ZeroShotCap);
        }
        check_request(self.shot_count, &self.window, self.shot_cap)
    }
}

/// Shared request check used by both the config path and direct calls.
pub(crate) fn check_request(
    count: usize,
    window: &DistanceWindow,
    cap: usize,
) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoShots);
    }
    if count > cap {
        return Err(ConfigError::TooManyShots {
            requested: count,
            cap,
        });
    }
    window.validate()?;
    Ok(())
}

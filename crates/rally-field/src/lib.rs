//! Shared-field geometry for Rally drill sequences.
//!
//! This crate defines the [`Field`] trait, the spatial seam through which
//! the generator and the edit validator measure travel between shots,
//! along with the canonical [`MirroredCourt`] backend.
//!
//! # Pieces
//!
//! - [`FieldPoint`]: a point in the combined 5 x 10 field
//! - [`MirroredCourt`]: folds space 2 onto space 1 across the shared front
//! - [`DistanceWindow`]: inclusive `[min, max]` travel bounds
//! - [`valid_candidates`]: every cell of a target space inside a window

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidates;
pub mod court;
pub mod error;
pub mod field;
pub mod point;
pub mod window;

#[cfg(test)]
pub(crate) mod compliance;

pub use candidates::{valid_candidates, Candidates};
pub use court::{coordinates_of, distance, is_within_window, MirroredCourt, MAX_FIELD_DISTANCE};
pub use error::WindowError;
pub use field::Field;
pub use point::FieldPoint;
pub use window::DistanceWindow;

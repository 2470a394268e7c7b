//! Core types for the Rally drill-sequence workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the categorical position vocabulary shared by every other crate:
//! the two playing spaces, the horizontal and depth labels, the
//! [`Position`] value, shot identifiers, and label parsing errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod label;
pub mod position;

pub use error::LabelError;
pub use id::ShotId;
pub use label::{Depth, Horizontal, Side};
pub use position::{Position, CELLS_PER_SIDE};

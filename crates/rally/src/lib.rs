//! Rally: randomised drill sequences over two mirrored court spaces.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Rally sub-crates. For most users, adding `rally` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rally::prelude::*;
//!
//! // Ten shots, each within 1 to 4.5 units of the one before.
//! let window = DistanceWindow::new(1.0, 4.5).unwrap();
//! let config = GeneratorConfig { window, seed: Some(3), ..Default::default() };
//! let drill = SequenceGenerator::new().run(&config).unwrap();
//! assert_eq!(drill.len(), 10);
//! assert!(drill.alternates());
//! assert!(drill.out_of_window_steps(&MirroredCourt, &window).is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rally-core` | Labels, positions, shot ids |
//! | [`field`] | `rally-field` | Field geometry, distance windows, candidates |
//! | [`engine`] | `rally-engine` | Generation, edits, stored records, import |
//! | [`api`] | (this crate) | One-call functions on the thread-local RNG |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod api;

/// Core value types (`rally-core`).
///
/// Contains the [`types::Horizontal`] and [`types::Depth`] labels, the
/// [`types::Side`] of the net, and the [`types::Position`] they combine into.
pub use rally_core as types;

/// Field geometry (`rally-field`).
///
/// Provides the [`field::Field`] trait, the [`field::MirroredCourt`]
/// backend and [`field::DistanceWindow`].
pub use rally_field as field;

/// Sequence generation and editing (`rally-engine`).
///
/// [`engine::SequenceGenerator`] builds sequences, [`engine::Sequence`]
/// holds them, and [`engine::SequenceRecord`] moves them in and out of
/// storage.
pub use rally_engine as engine;

/// Common imports for typical Rally usage.
///
/// ```rust
/// use rally::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rally_core::{Depth, Horizontal, Position, ShotId, Side};

    // Field
    pub use rally_field::{DistanceWindow, Field, FieldPoint, MirroredCourt};

    // Engine
    pub use rally_engine::{
        GeneratorConfig, Sequence, SequenceGenerator, SequenceRecord, Shot,
    };

    // Errors
    pub use rally_engine::{ConfigError, EditError, GenerateError, RecordError};
}

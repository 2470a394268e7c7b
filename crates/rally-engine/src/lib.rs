//! Drill sequence generation for Rally.
//!
//! Provides the [`SequenceGenerator`], which builds alternating-space shot
//! sequences with optional per-step distance windows, the [`Sequence`]
//! container with stable shot identities, manual-edit validation, and the
//! record shape exchanged with an external sequence store.
//!
//! Constrained generation is a bounded retry-from-scratch search: each
//! attempt picks every next shot uniformly from the cells inside the
//! window, and a step with no candidates abandons the attempt. After
//! [`MAX_ATTEMPTS`] failures the request is reported unsatisfiable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod edit;
pub mod error;
pub mod generator;
pub mod import;
pub mod record;
pub mod sequence;

pub use config::{ConfigError, GeneratorConfig, DEFAULT_SHOT_CAP, MAX_ATTEMPTS};
pub use edit::{check_insertion, validate_insertion, Neighbour};
pub use error::{EditError, GenerateError};
pub use generator::SequenceGenerator;
pub use import::{import_shots, import_shots_json};
pub use record::{RecordError, SequenceRecord, SequenceSettings};
pub use sequence::{Sequence, Shot, StepViolation};

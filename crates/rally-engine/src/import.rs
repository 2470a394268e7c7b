//! Import of externally generated shot lists.
//!
//! An external generator (the AI endpoint) returns a plain list of shots.
//! The list is taken as-is except for spaces: each shot is reassigned to
//! the space its index implies (space 1 at even indices, space 2 at odd),
//! whatever the response said. Reassignments are logged at debug level.

use rally_core::{Position, Side};
use tracing::debug;

use crate::record::RecordError;
use crate::sequence::Sequence;

/// Build a sequence from external shots, forcing strict alternation from
/// space 1.
pub fn import_shots(shots: impl IntoIterator<Item = Position>) -> Sequence {
    shots
        .into_iter()
        .enumerate()
        .map(|(index, shot)| {
            let side = Side::for_index(index);
            if shot.side != side {
                debug!(index, from = %shot.side, to = %side, "reassigning imported shot space");
            }
            shot.with_side(side)
        })
        .collect()
}

/// Parse a JSON array of shots, possibly wrapped in surrounding text, and
/// import it with [`import_shots`].
///
/// Only the span from the first `[` to the last `]` is parsed when both
/// are present.
pub fn import_shots_json(content: &str) -> Result<Sequence, RecordError> {
    let body = match (content.find('['), content.rfind(']')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    };
    let shots: Vec<Position> = serde_json::from_str(body)?;
    if shots.is_empty() {
        return Err(RecordError::NoShots);
    }
    Ok(import_shots(shots))
}

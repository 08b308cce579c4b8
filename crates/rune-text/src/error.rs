//! Error types for rune-text.

use thiserror::Error;

use crate::font::FontError;
use crate::store::SectionId;

/// Result type for rune-text operations.
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors surfaced by the section store and the geometry engine.
#[derive(Error, Debug)]
pub enum TextError {
    /// Edit referencing a section that is not in the store.
    #[error("unknown text section {0}")]
    UnknownSection(SectionId),

    /// Geometry query against an empty layout or a line that no longer
    /// exists.
    #[error("no wrapped line {line_number} (layout has {line_count} lines)")]
    InvalidGeometryQuery {
        line_number: usize,
        line_count: usize,
    },

    #[error(transparent)]
    Font(#[from] FontError),
}

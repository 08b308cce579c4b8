//! Font loading for the shaping measurer.

pub mod face;
pub mod system;

pub use face::{FontFace, LineMetrics};
pub use system::load_system_default_font;

use thiserror::Error;

/// Errors that can occur while working with fonts.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid font data")]
    InvalidFont,

    #[error("no usable system font found")]
    NoSystemFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;

//! Bidirectional (BiDi) text support built on `unicode-bidi`.
//!
//! - Per-section reading direction and its coordinate mapping
//! - Paragraph-level direction detection
//! - Visual runs for mixed-direction lines

pub mod direction;
pub mod levels;
pub mod reorder;

pub use direction::Direction;
pub use levels::{detect_direction, levels_per_char};
pub use reorder::{DirectionRun, visual_runs};

//! Line wrapping and selection geometry.
//!
//! - [`LineLayout::wrap`] turns sections into renumbered wrapped lines
//! - [`LineLayout::resolve`] maps a pixel position to a character
//! - [`LineLayout::selection_of`] turns two characters into a selection
//! - [`SelectionDrag`] drives both from pointer events

pub mod drag;
pub mod geometry;
pub mod line_breaker;
pub mod line_layout;
pub mod prefix_sums;
pub mod selection;
pub mod wrapped_line;

pub use drag::{DragState, SelectionDrag};
pub use hit_test::{HitTestPolicy, Point};
pub use line_breaker::{LineBreak, LineBreakKind, WordBoundary, WordBoundaryKind};
pub use line_layout::LineLayout;
pub use prefix_sums::PrefixSums;
pub use selection::{
    CharacterPosition, Selection, SelectionEndpoint, SelectionOptions, SelectionRect,
};
pub use wrapped_line::WrappedLine;

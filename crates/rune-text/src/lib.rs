//! rune-text: multi-line bidirectional text wrapping and selection.
//!
//! - [`store`]: ordered, independently addressable text sections
//! - [`measure`]: the font-measurement seam and bundled measurers
//! - [`layout`]: line wrapping, pixel -> character resolution, selection
//!   geometry and the drag state machine
//! - [`view`]: one selectable text component tying the above together

pub mod bidi;
pub mod error;
pub mod font;
pub mod layout;
pub mod measure;
pub mod shaping;
pub mod store;
pub mod unicode;
pub mod view;

pub use bidi::{Direction, DirectionRun};
pub use error::{Result, TextError};
pub use font::{FontError, FontFace};
pub use layout::{
    CharacterPosition, DragState, HitTestPolicy, LineLayout, Point, Selection, SelectionDrag,
    SelectionEndpoint, SelectionOptions, SelectionRect, WrappedLine,
};
pub use measure::{FixedAdvanceMeasurer, MeasureFn, MeasuredLine, ShapingMeasurer, TextMeasurer};
pub use store::{SectionId, SectionStore, TextSection};
pub use view::TextView;

//! The font-measurement seam.
//!
//! The line wrapper never shapes text itself: it hands each section to a
//! [`TextMeasurer`], which owns glyph shaping and the word-break policy and
//! returns the section already split into measured lines.

pub mod fit;
pub mod fixed;
pub mod shaping;

pub use fit::fit_lines;
pub use fixed::FixedAdvanceMeasurer;
pub use shaping::ShapingMeasurer;

use crate::bidi::{Direction, DirectionRun, visual_runs};

/// One line of a section as measured by a [`TextMeasurer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    /// Text occupying the line.
    pub text: String,
    /// Visual width of the line in pixels.
    pub width: f32,
    /// Height of the line box in pixels.
    pub height: f32,
    /// Horizontal advance of every character, logical order.
    pub advances: Vec<f32>,
    /// Direction runs in visual order, as character ranges of `text`.
    pub runs: Vec<DirectionRun>,
}

impl MeasuredLine {
    /// Build a line from its text and per-character advances, resolving
    /// direction runs with `direction` as the paragraph level.
    pub fn new(text: impl Into<String>, advances: Vec<f32>, height: f32, direction: Direction) -> Self {
        let text = text.into();
        let width = advances.iter().sum();
        let runs = visual_runs(&text, direction);
        Self {
            text,
            width,
            height,
            advances,
            runs,
        }
    }

    pub fn char_count(&self) -> usize {
        self.advances.len()
    }
}

/// External font measurement service.
///
/// `measure` is called once per section with the section's full text and
/// returns zero or more measured lines that together hold the text in
/// logical order. Lines start at the indent `start_x` and must fit
/// before the right edge `max_width`.
pub trait TextMeasurer {
    fn measure(
        &mut self,
        text: &str,
        direction: Direction,
        start_x: f32,
        max_width: f32,
    ) -> Vec<MeasuredLine>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(
        &mut self,
        text: &str,
        direction: Direction,
        start_x: f32,
        max_width: f32,
    ) -> Vec<MeasuredLine> {
        (**self).measure(text, direction, start_x, max_width)
    }
}

/// Adapts a closure into a [`TextMeasurer`].
pub struct MeasureFn<F>(pub F);

impl<F> TextMeasurer for MeasureFn<F>
where
    F: FnMut(&str, Direction, f32, f32) -> Vec<MeasuredLine>,
{
    fn measure(
        &mut self,
        text: &str,
        direction: Direction,
        start_x: f32,
        max_width: f32,
    ) -> Vec<MeasuredLine> {
        (self.0)(text, direction, start_x, max_width)
    }
}

/// Split `text` into measured lines given its per-character advances.
///
/// Shared tail of the bundled measurers: they differ only in how the
/// advances are produced.
pub(crate) fn lines_from_advances(
    text: &str,
    advances: &[f32],
    direction: Direction,
    available: f32,
    line_height: f32,
) -> Vec<MeasuredLine> {
    let chars: Vec<char> = text.chars().collect();
    fit_lines(text, advances, available)
        .into_iter()
        .map(|range| {
            let slice: String = chars[range.clone()].iter().collect();
            MeasuredLine::new(slice, advances[range].to_vec(), line_height, direction)
        })
        .collect()
}

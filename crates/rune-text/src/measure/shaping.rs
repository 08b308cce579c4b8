use crate::bidi::Direction;
use crate::font::{FontError, FontFace};
use crate::measure::{MeasuredLine, TextMeasurer, lines_from_advances};
use crate::shaping::TextShaper;

/// Measurer backed by a real font: advances come from harfrust shaping,
/// line height from the face's scaled vertical metrics.
#[derive(Debug, Clone)]
pub struct ShapingMeasurer {
    font: FontFace,
    font_size: f32,
    line_height: f32,
}

impl ShapingMeasurer {
    /// `line_padding` is extra space added below every line.
    pub fn new(font: FontFace, font_size: f32, line_padding: f32) -> Result<Self, FontError> {
        TextShaper::validate(&font)?;
        let line_height = font.line_metrics(font_size).line_height() + line_padding;
        Ok(Self {
            font,
            font_size,
            line_height,
        })
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl TextMeasurer for ShapingMeasurer {
    fn measure(
        &mut self,
        text: &str,
        direction: Direction,
        start_x: f32,
        max_width: f32,
    ) -> Vec<MeasuredLine> {
        let advances = match TextShaper::char_advances(text, direction, &self.font, self.font_size) {
            Ok(advances) => advances,
            Err(err) => {
                // Keep the text selectable even if shaping fails.
                log::warn!("shaping failed, measuring with zero advances: {err}");
                vec![0.0; text.chars().count()]
            }
        };
        lines_from_advances(
            text,
            &advances,
            direction,
            max_width - start_x,
            self.line_height,
        )
    }
}

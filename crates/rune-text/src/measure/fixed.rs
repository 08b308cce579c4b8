use crate::bidi::Direction;
use crate::measure::{MeasuredLine, TextMeasurer, lines_from_advances};
use crate::unicode::is_cluster_start;

/// Measurer giving every grapheme cluster the same advance and every
/// line the same height.
///
/// Deterministic and font-free, which makes it the measurer of choice
/// for tests and for hosts that render with a monospace cell grid.
/// Control characters (such as a trailing newline) take no space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    advance: f32,
    line_height: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Advance of every character of `text`, logical order.
    pub fn advances(&self, text: &str) -> Vec<f32> {
        text.chars()
            .zip(is_cluster_start(text))
            .map(|(ch, starts_cluster)| {
                if starts_cluster && !ch.is_control() {
                    self.advance
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(
        &mut self,
        text: &str,
        direction: Direction,
        start_x: f32,
        max_width: f32,
    ) -> Vec<MeasuredLine> {
        let advances = self.advances(text);
        lines_from_advances(
            text,
            &advances,
            direction,
            max_width - start_x,
            self.line_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cluster_gets_one_advance() {
        let m = FixedAdvanceMeasurer::new(6.0, 14.0);
        assert_eq!(m.advances("ab"), vec![6.0, 6.0]);
        // Combining acute rides on its base.
        assert_eq!(m.advances("e\u{0301}x"), vec![6.0, 0.0, 6.0]);
        assert_eq!(m.advances("a\n"), vec![6.0, 0.0]);
    }

    #[test]
    fn measures_single_line() {
        let mut m = FixedAdvanceMeasurer::new(6.0, 14.0);
        let lines = m.measure("Hello line A.", Direction::Ltr, 0.0, 128.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Hello line A.");
        assert_eq!(lines[0].width, 78.0);
        assert_eq!(lines[0].height, 14.0);
    }

    #[test]
    fn start_x_narrows_the_first_fit() {
        let mut m = FixedAdvanceMeasurer::new(1.0, 10.0);
        assert_eq!(m.measure("aaa bbb", Direction::Ltr, 0.0, 7.0).len(), 1);
        assert_eq!(m.measure("aaa bbb", Direction::Ltr, 2.0, 7.0).len(), 2);
    }

    #[test]
    fn rtl_lines_carry_rtl_runs() {
        let mut m = FixedAdvanceMeasurer::new(6.0, 14.0);
        let lines = m.measure("שלום", Direction::Rtl, 0.0, 128.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].runs.len(), 1);
        assert_eq!(lines[0].runs[0].direction, Direction::Rtl);
    }
}

use core::ops::Range;

use crate::layout::{PrefixSums, WrappedLine};
use crate::measure::{MeasuredLine, TextMeasurer};
use crate::store::{SectionId, TextSection};

/// The wrapped, renumbered line sequence for a list of sections.
///
/// Always built in one pass from the current sections, page width and
/// measurer; nothing is patched in place. Line numbers are contiguous
/// from 0 and every line starts where the previous one ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineLayout {
    lines: Vec<WrappedLine>,
    page_width: f32,
    prefix_sums: PrefixSums,
}

impl LineLayout {
    /// Layout with no lines, as seen before the first wrap.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap every section against `page_width`.
    ///
    /// The measurer is called once per section, in store order. A page
    /// width of zero or less does not fail: each section becomes one line
    /// of zero width. The same holds for a section whose narrowest glyph
    /// is at least as wide as the page.
    pub fn wrap<M>(sections: &[TextSection], page_width: f32, measurer: &mut M) -> Self
    where
        M: TextMeasurer + ?Sized,
    {
        let degenerate = page_width <= 0.0;
        if degenerate {
            log::debug!("page width {page_width} too small, one line per section");
        }

        let mut lines = Vec::new();
        let mut y = 0.0f32;

        for section in sections {
            let measured = if degenerate {
                let unbounded =
                    measurer.measure(section.text(), section.direction(), 0.0, f32::INFINITY);
                collapse_to_one_line(unbounded, section)
            } else {
                let measured =
                    measurer.measure(section.text(), section.direction(), 0.0, page_width);
                if narrower_than_every_glyph(&measured, page_width) {
                    log::debug!(
                        "page width {page_width} fits no glyph of section {}, one line",
                        section.id()
                    );
                    collapse_to_one_line(measured, section)
                } else {
                    measured
                }
            };

            let mut char_offset = 0usize;
            for m in measured {
                let chars = m.char_count();
                let line = WrappedLine::from_measured(
                    m,
                    lines.len(),
                    section.id(),
                    section.direction(),
                    char_offset,
                    y,
                    page_width.max(0.0),
                );
                y += line.height;
                char_offset += chars;
                lines.push(line);
            }
        }

        log::debug!(
            "wrapped {} sections into {} lines at width {page_width}",
            sections.len(),
            lines.len()
        );
        let prefix_sums = PrefixSums::new(&lines);
        Self {
            lines,
            page_width,
            prefix_sums,
        }
    }

    /// All lines, ascending by line number.
    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    pub fn line(&self, line_number: usize) -> Option<&WrappedLine> {
        self.lines.get(line_number)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Page width the layout was wrapped against.
    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// Height needed to show every line: the sum of all line heights.
    pub fn minimum_size_y_required(&self) -> f32 {
        self.prefix_sums.total_height()
    }

    /// Line containing `y`, clamped to the first/last line.
    pub fn line_at_y(&self, y: f32) -> Option<usize> {
        self.prefix_sums.line_at_y(y)
    }

    /// Line numbers produced by the section `id`.
    pub fn lines_of_section(&self, id: SectionId) -> Range<usize> {
        let start = self.lines.iter().position(|l| l.section_id == id);
        match start {
            Some(start) => {
                let len = self.lines[start..]
                    .iter()
                    .take_while(|l| l.section_id == id)
                    .count();
                start..start + len
            }
            None => 0..0,
        }
    }

    /// Character offset of a position counted from the start of the
    /// whole layout.
    pub fn document_offset(&self, line_number: usize, index: usize) -> Option<usize> {
        self.prefix_sums
            .char_offset_at_line(line_number)
            .map(|start| start + index)
    }

    /// Number of characters across all lines.
    pub fn char_count(&self) -> usize {
        self.prefix_sums.total_chars()
    }
}

/// True when the page is no wider than the narrowest visible glyph of
/// the measured section.
fn narrower_than_every_glyph(lines: &[MeasuredLine], page_width: f32) -> bool {
    lines
        .iter()
        .flat_map(|line| line.advances.iter().copied())
        .filter(|advance| *advance > 0.0)
        .reduce(f32::min)
        .is_some_and(|narrowest| page_width <= narrowest)
}

/// Fold a section's measured lines into a single zero-width line.
fn collapse_to_one_line(lines: Vec<MeasuredLine>, section: &TextSection) -> Vec<MeasuredLine> {
    if lines.is_empty() {
        return lines;
    }
    let height = lines.iter().map(|l| l.height).fold(0.0f32, f32::max);
    let text: String = lines.iter().map(|l| l.text.as_str()).collect();
    let zero = vec![0.0; text.chars().count()];
    vec![MeasuredLine::new(text, zero, height, section.direction())]
}

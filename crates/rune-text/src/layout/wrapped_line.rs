use crate::bidi::{Direction, DirectionRun};
use crate::measure::MeasuredLine;
use crate::store::SectionId;

/// One visual row of text produced by wrapping a section.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// 0-based position of the line in the whole layout.
    pub line_number: usize,
    /// Section this line was cut from.
    pub section_id: SectionId,
    /// Reading direction of the originating section.
    pub direction: Direction,
    /// Text occupying this line.
    pub text: String,
    /// Character index of this line's first character within its section.
    pub section_char_offset: usize,
    /// Y position of the line box top, in pixels.
    pub y_offset: f32,
    /// Height of the line box in pixels.
    pub height: f32,
    /// Visual width of the line content in pixels.
    pub width: f32,
    /// X of the content's visual left edge (start-edge alignment).
    pub x_offset: f32,
    advances: Vec<f32>,
    /// Visual left edge of each character relative to `x_offset`.
    left_edges: Vec<f32>,
    runs: Vec<DirectionRun>,
}

impl WrappedLine {
    pub(crate) fn from_measured(
        measured: MeasuredLine,
        line_number: usize,
        section_id: SectionId,
        direction: Direction,
        section_char_offset: usize,
        y_offset: f32,
        page_width: f32,
    ) -> Self {
        let MeasuredLine {
            text,
            width,
            height,
            mut advances,
            mut runs,
        } = measured;

        let char_count = text.chars().count();
        if advances.len() != char_count {
            log::warn!(
                "measurer returned {} advances for {} chars on line {line_number}",
                advances.len(),
                char_count
            );
            advances.resize(char_count, 0.0);
        }
        let covered: usize = runs.iter().map(|r| r.chars.len()).sum();
        if covered != char_count || runs.iter().any(|r| r.chars.end > char_count) {
            runs = if char_count == 0 {
                Vec::new()
            } else {
                vec![DirectionRun::new(0..char_count, direction)]
            };
        }

        let mut left_edges = vec![0.0f32; char_count];
        let mut pen = 0.0f32;
        for run in &runs {
            pen = run.direction.place_run(
                &advances[run.chars.clone()],
                pen,
                &mut left_edges[run.chars.clone()],
            );
        }
        let width = if char_count == 0 { 0.0 } else { width.max(pen) };

        Self {
            line_number,
            section_id,
            direction,
            text,
            section_char_offset,
            y_offset,
            height,
            width,
            x_offset: direction.line_offset(page_width, width),
            advances,
            left_edges,
            runs,
        }
    }

    /// Number of characters on this line.
    pub fn char_count(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Character at logical `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Get line box bottom Y position.
    pub fn bottom_y(&self) -> f32 {
        self.y_offset + self.height
    }

    /// Visual left edge of the line content.
    pub fn left(&self) -> f32 {
        self.x_offset
    }

    /// Visual right edge of the line content.
    pub fn right(&self) -> f32 {
        self.x_offset + self.width
    }

    /// Check if `y` falls within this line box.
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.y_offset && y < self.bottom_y()
    }

    /// Direction runs in visual order.
    pub fn runs(&self) -> &[DirectionRun] {
        &self.runs
    }

    pub fn advances(&self) -> &[f32] {
        &self.advances
    }

    /// Absolute horizontal extent `(left, right)` of character `index`.
    pub fn char_bounds(&self, index: usize) -> Option<(f32, f32)> {
        let left = self.x_offset + *self.left_edges.get(index)?;
        Some((left, left + self.advances[index]))
    }

    /// Logical index of the character whose horizontal center is nearest
    /// to `x`. Ties go to the lower logical index. Zero-width characters
    /// are only considered when the whole line has no width.
    pub fn nearest_char(&self, x: f32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let has_width = self.advances.iter().any(|a| *a > 0.0);
        let mut best: Option<(usize, f32)> = None;
        for index in 0..self.char_count() {
            let advance = self.advances[index];
            if has_width && advance <= 0.0 {
                continue;
            }
            let center = self.x_offset + self.left_edges[index] + advance / 2.0;
            let distance = (x - center).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Visual extent `(left, right)` covering logical characters
    /// `first..=last`, or `None` when the range holds no character.
    pub fn span_bounds(&self, first: usize, last: usize) -> Option<(f32, f32)> {
        let last = last.min(self.char_count().checked_sub(1)?);
        (first..=last)
            .filter_map(|i| self.char_bounds(i))
            .fold(None, |acc, (l, r)| match acc {
                None => Some((l, r)),
                Some((al, ar)) => Some((al.min(l), ar.max(r))),
            })
    }
}

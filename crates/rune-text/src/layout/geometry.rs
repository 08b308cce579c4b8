use crate::error::{Result, TextError};
use crate::layout::{
    CharacterPosition, LineLayout, Selection, SelectionEndpoint, SelectionOptions, SelectionRect,
    WrappedLine,
};

impl LineLayout {
    /// Selection between two resolved positions with default options.
    pub fn selection_of(
        &self,
        anchor: CharacterPosition,
        current: CharacterPosition,
    ) -> Result<Selection> {
        self.selection_of_with(anchor, current, &SelectionOptions::default())
    }

    /// Order `anchor` and `current` into document order and compute one
    /// highlight region per covered line.
    ///
    /// Lines strictly between the endpoints are highlighted across their
    /// full content width. The first and last lines cover the visual
    /// extent of their selected characters, which on RTL lines runs from
    /// the logically last selected character on the left to the first on
    /// the right.
    ///
    /// Fails with [`TextError::InvalidGeometryQuery`] when either position
    /// does not exist in this layout.
    pub fn selection_of_with(
        &self,
        anchor: CharacterPosition,
        current: CharacterPosition,
        options: &SelectionOptions,
    ) -> Result<Selection> {
        self.check_position(&anchor)?;
        self.check_position(&current)?;

        let (lower, upper) = if current < anchor {
            (current, anchor)
        } else {
            (anchor, current)
        };

        let mut regions = Vec::with_capacity(upper.line_number - lower.line_number + 1);
        for line in &self.lines()[lower.line_number..=upper.line_number] {
            let n = line.line_number;
            let bounds = if n != lower.line_number && n != upper.line_number {
                Some((line.left(), line.right()))
            } else {
                let first = if n == lower.line_number { lower.index } else { 0 };
                let last = if n == upper.line_number {
                    upper.index
                } else {
                    line.char_count().saturating_sub(1)
                };
                line.span_bounds(first, last)
            };

            // Blank lines (no chars, or only zero-advance ones such as a
            // lone newline) still get a visible highlight.
            let (left, right) = match bounds.filter(|(left, right)| right > left) {
                Some(bounds) => bounds,
                None => empty_line_bounds(line, options.empty_line_width),
            };
            regions.push(SelectionRect::new(
                n,
                left,
                line.y_offset,
                right - left,
                line.height,
            ));
        }

        Ok(Selection {
            lower: SelectionEndpoint::from(lower),
            upper: SelectionEndpoint::from(upper),
            regions,
        })
    }

    /// Whole-layout selection, or `None` when there are no lines.
    pub fn select_all(&self, options: &SelectionOptions) -> Option<Selection> {
        let first = self.lines().first()?;
        let last = self.lines().last()?;
        let start = CharacterPosition::new(first.line_number, 0, first.char_at(0));
        let end_index = last.char_count().saturating_sub(1);
        let end = CharacterPosition::new(last.line_number, end_index, last.char_at(end_index));
        self.selection_of_with(start, end, options).ok()
    }

    fn check_position(&self, position: &CharacterPosition) -> Result<()> {
        let invalid = || TextError::InvalidGeometryQuery {
            line_number: position.line_number,
            line_count: self.line_count(),
        };
        let line = self.line(position.line_number).ok_or_else(invalid)?;
        if position.index < line.char_count() || (line.is_empty() && position.index == 0) {
            Ok(())
        } else {
            Err(invalid())
        }
    }
}

/// Highlight for a line with no visible content, anchored at its start edge.
fn empty_line_bounds(line: &WrappedLine, width: f32) -> (f32, f32) {
    if line.direction.is_rtl() {
        (line.right() - width, line.right())
    } else {
        (line.left(), line.left() + width)
    }
}

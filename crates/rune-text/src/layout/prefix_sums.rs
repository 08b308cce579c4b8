use crate::layout::WrappedLine;

/// Prefix sums over wrapped lines for y -> line and line -> document
/// character lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixSums {
    /// Top of each line (equal to its `y_offset`).
    line_tops: Vec<f32>,
    /// Cumulative character count at the start of each line.
    char_offsets: Vec<usize>,
    total_height: f32,
    total_chars: usize,
}

impl PrefixSums {
    pub fn new(lines: &[WrappedLine]) -> Self {
        let mut line_tops = Vec::with_capacity(lines.len());
        let mut char_offsets = Vec::with_capacity(lines.len());
        let mut y = 0.0f32;
        let mut chars = 0usize;

        for line in lines {
            line_tops.push(y);
            char_offsets.push(chars);
            y += line.height;
            chars += line.char_count();
        }

        Self {
            line_tops,
            char_offsets,
            total_height: y,
            total_chars: chars,
        }
    }

    /// Index of the line whose vertical span contains `y`, clamped to the
    /// first and last line. `None` only when there are no lines.
    pub fn line_at_y(&self, y: f32) -> Option<usize> {
        if self.line_tops.is_empty() {
            return None;
        }
        let after = self.line_tops.partition_point(|top| *top <= y);
        Some(after.saturating_sub(1).min(self.line_tops.len() - 1))
    }

    /// Cumulative character offset at the start of a line.
    pub fn char_offset_at_line(&self, line_index: usize) -> Option<usize> {
        self.char_offsets.get(line_index).copied()
    }

    /// Sum of all line heights.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Number of characters covered by all lines.
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }
}

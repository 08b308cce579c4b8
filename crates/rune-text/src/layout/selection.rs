use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::RangeInclusive;

use crate::layout::LineLayout;

/// A resolved character in the wrapped layout.
///
/// Identity and ordering use `(line_number, index)` only: document order
/// is line first, then logical index. `character` is a snapshot taken at
/// resolve time and never affects comparison.
#[derive(Debug, Clone, Copy)]
pub struct CharacterPosition {
    /// Wrapped line holding the character.
    pub line_number: usize,
    /// Logical character index within the line's text.
    pub index: usize,
    /// The character itself; `None` on an empty line.
    pub character: Option<char>,
}

impl CharacterPosition {
    pub fn new(line_number: usize, index: usize, character: Option<char>) -> Self {
        Self {
            line_number,
            index,
            character,
        }
    }

    fn key(&self) -> (usize, usize) {
        (self.line_number, self.index)
    }
}

impl PartialEq for CharacterPosition {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CharacterPosition {}

impl Hash for CharacterPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for CharacterPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharacterPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// One inclusive end of a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEndpoint {
    pub line_number: usize,
    pub character_at: CharacterPosition,
}

impl From<CharacterPosition> for SelectionEndpoint {
    fn from(position: CharacterPosition) -> Self {
        Self {
            line_number: position.line_number,
            character_at: position,
        }
    }
}

/// Highlight rectangle covering the selected part of one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    /// Wrapped line this rectangle belongs to.
    pub line_number: usize,
    /// X position in pixels.
    pub x: f32,
    /// Y position in pixels (top of the line box).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels (the line height).
    pub height: f32,
}

impl SelectionRect {
    pub fn new(line_number: usize, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            line_number,
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Tunables for region computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOptions {
    /// Width of the highlight given to a selected line with no content,
    /// so empty lines inside a selection stay visible.
    pub empty_line_width: f32,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            empty_line_width: 8.0,
        }
    }
}

/// A selection in document order with its highlight regions.
///
/// Both endpoints are inclusive: the selected characters run from
/// `lower` through `upper`. The drag direction that produced the
/// selection is not recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub(crate) lower: SelectionEndpoint,
    pub(crate) upper: SelectionEndpoint,
    pub(crate) regions: Vec<SelectionRect>,
}

impl Selection {
    /// Document-order first selected character.
    pub fn lower(&self) -> &SelectionEndpoint {
        &self.lower
    }

    /// Document-order last selected character.
    pub fn upper(&self) -> &SelectionEndpoint {
        &self.upper
    }

    /// One rectangle per covered line, ascending by line number.
    pub fn regions(&self) -> &[SelectionRect] {
        &self.regions
    }

    /// True when a single character (or empty line) is selected.
    pub fn is_single_point(&self) -> bool {
        self.lower.character_at == self.upper.character_at
    }

    /// Wrapped lines covered by the selection.
    pub fn line_span(&self) -> RangeInclusive<usize> {
        self.lower.line_number..=self.upper.line_number
    }

    /// Check if `position` lies within the selection.
    pub fn contains(&self, position: &CharacterPosition) -> bool {
        let key = (position.line_number, position.index);
        let lower = (self.lower.line_number, self.lower.character_at.index);
        let upper = (self.upper.line_number, self.upper.character_at.index);
        lower <= key && key <= upper
    }

    /// The selected text in document order.
    ///
    /// Lines cut from the same section are concatenated as-is; a newline
    /// separates text taken from different sections.
    pub fn text(&self, layout: &LineLayout) -> String {
        let mut out = String::new();
        let mut previous_section = None;
        for line_number in self.line_span() {
            let Some(line) = layout.line(line_number) else {
                break;
            };
            if let Some(prev) = previous_section {
                if prev != line.section_id {
                    out.push('\n');
                }
            }
            previous_section = Some(line.section_id);

            let first = if line_number == self.lower.line_number {
                self.lower.character_at.index
            } else {
                0
            };
            let last = if line_number == self.upper.line_number {
                self.upper.character_at.index + 1
            } else {
                line.char_count()
            };
            out.extend(line.text.chars().skip(first).take(last.saturating_sub(first)));
        }
        out
    }
}

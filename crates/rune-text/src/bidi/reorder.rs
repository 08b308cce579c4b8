use core::ops::Range;

use unicode_bidi::BidiInfo;

use crate::bidi::Direction;

/// A run of characters sharing one resolved direction.
///
/// `chars` is a range of character (Unicode scalar) indices within the
/// line the run belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRun {
    pub chars: Range<usize>,
    pub direction: Direction,
}

impl DirectionRun {
    pub fn new(chars: Range<usize>, direction: Direction) -> Self {
        Self { chars, direction }
    }
}

/// Compute the direction runs of a single line in visual (left to
/// right) order, using `direction` as the paragraph level.
pub fn visual_runs(line: &str, direction: Direction) -> Vec<DirectionRun> {
    if line.is_empty() {
        return Vec::new();
    }

    let info = BidiInfo::new(line, Some(direction.level()));

    // Byte offset -> char index; one extra slot for the end of text.
    let mut char_at_byte = vec![0usize; line.len() + 1];
    let mut count = 0usize;
    for (byte_idx, ch) in line.char_indices() {
        for slot in &mut char_at_byte[byte_idx..byte_idx + ch.len_utf8()] {
            *slot = count;
        }
        count += 1;
    }
    char_at_byte[line.len()] = count;

    let mut runs = Vec::new();
    for para in &info.paragraphs {
        let (levels, level_runs) = info.visual_runs(para, para.range.clone());
        for run in level_runs {
            if run.is_empty() {
                continue;
            }
            runs.push(DirectionRun {
                chars: char_at_byte[run.start]..char_at_byte[run.end],
                direction: Direction::from_level(levels[run.start]),
            });
        }
    }
    runs
}

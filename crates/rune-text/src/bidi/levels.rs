use unicode_bidi::{BidiInfo, Level};

use crate::bidi::Direction;

/// Detect the reading direction of `text` from its first strong
/// character (UAX-9 rules P2/P3). Text with no strong character is LTR.
pub fn detect_direction(text: &str) -> Direction {
    let info = BidiInfo::new(text, None);
    info.paragraphs
        .first()
        .map(|para| Direction::from_level(para.level))
        .unwrap_or_default()
}

/// Resolved embedding level of every character of `text`, with the
/// paragraph level forced to `direction`.
///
/// The result is parallel to `text.chars()`.
pub fn levels_per_char(text: &str, direction: Direction) -> Vec<Level> {
    let info = BidiInfo::new(text, Some(direction.level()));
    text.char_indices()
        .map(|(byte_idx, _)| info.levels[byte_idx])
        .collect()
}

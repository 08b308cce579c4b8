use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Character index ranges of every extended grapheme cluster in `text`,
/// in logical order.
pub fn grapheme_char_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0usize;
    for g in text.graphemes(true) {
        let len = g.chars().count();
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Per-character flags marking the first character of each grapheme
/// cluster. Parallel to `text.chars()`.
pub fn is_cluster_start(text: &str) -> Vec<bool> {
    let mut flags = Vec::with_capacity(text.len());
    for g in text.graphemes(true) {
        for (i, _) in g.chars().enumerate() {
            flags.push(i == 0);
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ascii_graphemes() {
        assert_eq!(grapheme_char_ranges("abc"), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn combining_mark_stays_with_base() {
        let text = "a\u{0301}b"; // a + COMBINING ACUTE, b
        assert_eq!(grapheme_char_ranges(text), vec![0..2, 2..3]);
        assert_eq!(is_cluster_start(text), vec![true, false, true]);
    }

    #[test]
    fn zwj_sequence_is_single_cluster() {
        let text = "\u{1F468}\u{200D}\u{1F469}";
        assert_eq!(grapheme_char_ranges(text), vec![0..3]);
    }
}

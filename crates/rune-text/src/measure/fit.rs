use core::ops::Range;

use crate::layout::line_breaker::{LineBreakKind, compute_line_breaks};
use crate::unicode::grapheme_char_ranges;

/// Greedily fit `text` into lines no wider than `max_width`.
///
/// `advances` holds one advance per character. Lines end at UAX-14
/// break opportunities where possible; trailing whitespace hangs past
/// the edge and does not count towards the fit. A word wider than the
/// line falls back to grapheme boundaries, and a line always takes at
/// least one grapheme so the loop terminates for any width.
///
/// Returns character ranges; empty text yields a single empty line.
pub fn fit_lines(text: &str, advances: &[f32], max_width: f32) -> Vec<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len().min(advances.len());
    if len == 0 {
        return vec![0..0];
    }

    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0.0f32);
    for advance in &advances[..len] {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + advance);
    }

    let visible_width = |start: usize, end: usize| {
        let mut trimmed = end;
        while trimmed > start && chars[trimmed - 1].is_whitespace() {
            trimmed -= 1;
        }
        prefix[trimmed] - prefix[start]
    };

    let breaks = compute_line_breaks(text);
    let clusters = grapheme_char_ranges(text);

    let mut lines = Vec::new();
    let mut start = 0usize;
    while start < len {
        let mut best_end = None;
        for br in breaks.iter().filter(|b| b.offset > start) {
            let end = br.offset.min(len);
            if visible_width(start, end) <= max_width {
                best_end = Some(end);
                if br.kind == LineBreakKind::Mandatory {
                    break;
                }
            } else {
                break;
            }
        }

        let end = match best_end {
            Some(end) => end,
            None => {
                // Word wider than the line: break between graphemes,
                // forcing one grapheme when even that does not fit.
                let mut fitted = None;
                let mut first = None;
                for cluster in clusters.iter().filter(|c| c.start >= start) {
                    let end = cluster.end.min(len);
                    first.get_or_insert(end);
                    if prefix[end] - prefix[start] <= max_width {
                        fitted = Some(end);
                    } else {
                        break;
                    }
                }
                fitted.or(first).unwrap_or(start + 1)
            }
        };

        lines.push(start..end);
        start = end;
    }
    lines
}

use core::ops::Range;

use unicode_linebreak::{BreakOpportunity, linebreaks};
use unicode_segmentation::UnicodeSegmentation;

/// Kind of line break at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakKind {
    /// Required line break (explicit newline, end of text).
    Mandatory,
    /// Optional line break opportunity.
    Opportunity,
}

/// A line break opportunity in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    /// Character index *after* the break.
    pub offset: usize,
    pub kind: LineBreakKind,
}

/// Kind of word boundary at a given range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBoundaryKind {
    /// A run of word characters.
    Word,
    /// Non-word run (whitespace, punctuation, etc.).
    NonWord,
}

/// A word or non-word segment, as a character index range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoundary {
    pub range: Range<usize>,
    pub kind: WordBoundaryKind,
}

/// Compute all line break opportunities (UAX-14) in character indices.
///
/// The end of text is always reported as a mandatory break.
pub fn compute_line_breaks(text: &str) -> Vec<LineBreak> {
    let mut char_index = 0usize;
    let mut byte_cursor = 0usize;
    let mut chars = text.chars();

    linebreaks(text)
        .map(|(byte_offset, opp)| {
            while byte_cursor < byte_offset {
                match chars.next() {
                    Some(ch) => {
                        byte_cursor += ch.len_utf8();
                        char_index += 1;
                    }
                    None => break,
                }
            }
            LineBreak {
                offset: char_index,
                kind: match opp {
                    BreakOpportunity::Mandatory => LineBreakKind::Mandatory,
                    BreakOpportunity::Allowed => LineBreakKind::Opportunity,
                },
            }
        })
        .collect()
}

/// Enumerate word and non-word segments (UAX-29) in character indices.
pub fn compute_word_boundaries(text: &str) -> Vec<WordBoundary> {
    let mut result = Vec::new();
    let mut start = 0usize;

    for segment in text.split_word_bounds() {
        let end = start + segment.chars().count();
        let kind = if segment.chars().any(|c| c.is_alphanumeric()) {
            WordBoundaryKind::Word
        } else {
            WordBoundaryKind::NonWord
        };
        result.push(WordBoundary {
            range: start..end,
            kind,
        });
        start = end;
    }

    result
}

/// The word or non-word segment containing character `index`.
pub fn word_at(text: &str, index: usize) -> Option<WordBoundary> {
    compute_word_boundaries(text)
        .into_iter()
        .find(|w| w.range.contains(&index))
}

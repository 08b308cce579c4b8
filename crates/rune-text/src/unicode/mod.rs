//! Unicode utilities for rune-text.
//!
//! Positions handed out by the layout are character (Unicode scalar)
//! indices; these helpers map grapheme clusters onto that index space.

pub mod graphemes;

pub use graphemes::{grapheme_char_ranges, is_cluster_start};

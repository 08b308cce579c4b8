use core::ops::Range;

use crate::bidi::Direction;

/// A same-direction run of text shaped with a single font.
#[derive(Debug, Clone)]
pub struct ShapedRun {
    /// Character range in the shaped text.
    pub chars: Range<usize>,
    /// Direction the run was shaped in.
    pub direction: Direction,
    /// Advance of each character in logical order, in pixels. Every
    /// glyph of a cluster is credited to the cluster's first character;
    /// the remaining characters of the cluster get zero.
    pub advances: Vec<f32>,
}

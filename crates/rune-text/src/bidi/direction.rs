use unicode_bidi::{LTR_LEVEL, Level, RTL_LEVEL};

/// Reading direction of a text section or run.
///
/// Increasing logical index moves visually rightward for `Ltr` and
/// leftward for `Rtl`. All horizontal placement that depends on the
/// direction goes through the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// UAX-9 paragraph embedding level for this direction.
    pub fn level(self) -> Level {
        match self {
            Direction::Ltr => LTR_LEVEL,
            Direction::Rtl => RTL_LEVEL,
        }
    }

    /// Direction of text resolved at the given embedding level.
    pub fn from_level(level: Level) -> Self {
        if level.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// X of the start edge of a line of `line_width` on a page of
    /// `page_width`: LTR lines hug the left edge, RTL lines the right.
    pub fn line_offset(self, page_width: f32, line_width: f32) -> f32 {
        match self {
            Direction::Ltr => 0.0,
            Direction::Rtl => (page_width - line_width).max(0.0),
        }
    }

    /// Place a run of logically ordered advances starting at visual `x`.
    ///
    /// Writes the visual left edge of every character into `left_edges`
    /// (same logical order as `advances`) and returns the x just past
    /// the run's visual right edge.
    pub fn place_run(self, advances: &[f32], x: f32, left_edges: &mut [f32]) -> f32 {
        debug_assert_eq!(advances.len(), left_edges.len());
        let total: f32 = advances.iter().sum();
        match self {
            Direction::Ltr => {
                let mut pen = x;
                for (edge, advance) in left_edges.iter_mut().zip(advances) {
                    *edge = pen;
                    pen += advance;
                }
            }
            Direction::Rtl => {
                // Logically first glyph sits at the visual right.
                let mut pen = x + total;
                for (edge, advance) in left_edges.iter_mut().zip(advances) {
                    pen -= advance;
                    *edge = pen;
                }
            }
        }
        x + total
    }
}

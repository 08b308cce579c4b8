use std::sync::Arc;

use swash::{FontRef, Metrics};

use crate::font::{FontError, Result};

/// Vertical metrics of a font scaled to a pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    /// Height of one line box: ascent + descent + line gap.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// Loaded font face backed by a font file (TTF/OTF).
///
/// Owns the font bytes so the shaper can borrow them per call; metrics
/// are read once through `swash` at load time.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    index: u32,
    units_per_em: u16,
    ascent: f32,
    descent: f32,
    line_gap: f32,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            ..
        } = font.metrics(&[]);
        if units_per_em == 0 {
            return Err(FontError::InvalidFont);
        }
        Ok(Self {
            index: index as u32,
            units_per_em,
            ascent,
            descent,
            line_gap: leading,
            data,
        })
    }

    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, shared with the shaper.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Index of this face within its font collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Pixels per font unit at `font_size` (px per em).
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em as f32
    }

    /// Vertical metrics at `font_size` (px per em).
    pub fn line_metrics(&self, font_size: f32) -> LineMetrics {
        let scale = self.scale(font_size);
        LineMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
        }
    }
}

use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, ShaperData, ShaperInstance,
    UnicodeBuffer as HbUnicodeBuffer,
};

use crate::bidi::{Direction, levels_per_char};
use crate::font::{FontError, FontFace};

use super::ShapedRun;

/// Text shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Splits the text into same-direction runs with UAX-9 levels, shapes
/// each run in its own direction, and folds glyph advances back onto
/// logical characters through the cluster map.
pub struct TextShaper;

impl TextShaper {
    /// Check that harfrust accepts the face's data.
    pub fn validate(font: &FontFace) -> Result<(), FontError> {
        HbFontRef::from_index(font.data(), font.index())
            .map(|_| ())
            .map_err(|_| FontError::InvalidFont)
    }

    /// Shape `text` with `direction` as paragraph direction.
    ///
    /// Runs are returned in logical order and together cover every
    /// character of `text`.
    pub fn shape(
        text: &str,
        direction: Direction,
        font: &FontFace,
        font_size: f32,
    ) -> Result<Vec<ShapedRun>, FontError> {
        let font_ref =
            HbFontRef::from_index(font.data(), font.index()).map_err(|_| FontError::InvalidFont)?;
        let data = ShaperData::new(&font_ref);
        let instance = ShaperInstance::from_variations(
            &font_ref,
            core::iter::empty::<harfrust::Variation>(),
        );
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();
        let scale = font.scale(font_size);

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let levels = levels_per_char(text, direction);

        let mut runs = Vec::new();
        let mut start = 0usize;
        while start < chars.len() {
            let run_dir = Direction::from_level(levels[start]);
            let mut end = start + 1;
            while end < chars.len() && Direction::from_level(levels[end]) == run_dir {
                end += 1;
            }

            let byte_start = chars[start].0;
            let byte_end = chars.get(end).map(|(b, _)| *b).unwrap_or(text.len());
            let segment = &text[byte_start..byte_end];

            let mut buffer = HbUnicodeBuffer::new();
            buffer.push_str(segment);
            buffer.set_direction(match run_dir {
                Direction::Ltr => HbDirection::LeftToRight,
                Direction::Rtl => HbDirection::RightToLeft,
            });
            buffer.guess_segment_properties();

            let glyph_buffer = shaper.shape(buffer, &[]);
            let infos = glyph_buffer.glyph_infos();
            let positions = glyph_buffer.glyph_positions();

            // Clusters are byte offsets into `segment`; credit each
            // glyph's advance to the character starting that cluster.
            let mut advances = vec![0.0f32; end - start];
            for (info, pos) in infos.iter().zip(positions.iter()) {
                let cluster_byte = byte_start + info.cluster as usize;
                let local = chars[start..end]
                    .partition_point(|(b, _)| *b <= cluster_byte)
                    .saturating_sub(1);
                advances[local] += pos.x_advance as f32 * scale;
            }
            runs.push(ShapedRun {
                chars: start..end,
                direction: run_dir,
                advances,
            });
            start = end;
        }
        Ok(runs)
    }

    /// Per-character advances of `text` in logical order.
    pub fn char_advances(
        text: &str,
        direction: Direction,
        font: &FontFace,
        font_size: f32,
    ) -> Result<Vec<f32>, FontError> {
        let mut advances = vec![0.0f32; text.chars().count()];
        for run in Self::shape(text, direction, font, font_size)? {
            log::trace!("shaped {:?} run over chars {:?}", run.direction, run.chars);
            advances[run.chars].copy_from_slice(&run.advances);
        }
        Ok(advances)
    }
}

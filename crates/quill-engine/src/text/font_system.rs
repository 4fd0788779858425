use std::collections::HashMap;

use crate::coords::Vec2;
use crate::error::EngineError;

use super::atlas::GlyphAtlas;
use super::metrics::{GlyphMetrics, GlyphMetricsSource};

/// Pixel size glyphs are rasterized at before being stored in the atlas.
const RASTER_PX: f32 = 48.0;

const DEFAULT_ATLAS_SIZE: u32 = 1024;

/// A loaded font plus its glyph atlas.
///
/// Glyphs are rasterized with `fontdue` the first time they are asked for and
/// cached with unit-size (1px) metrics, so any font size is a multiplication
/// away. Codepoints the font lacks are cached as missing and skipped.
pub struct FontSystem {
    font: fontdue::Font,
    atlas: GlyphAtlas,
    glyphs: HashMap<u32, Option<GlyphMetrics>>,
}

impl FontSystem {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Self::with_atlas_size(bytes, DEFAULT_ATLAS_SIZE)
    }

    pub fn with_atlas_size(bytes: &[u8], atlas_size: u32) -> Result<Self, EngineError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| EngineError::FontLoad(e.to_string()))?;
        Ok(Self {
            font,
            atlas: GlyphAtlas::new(atlas_size, atlas_size),
            glyphs: HashMap::new(),
        })
    }

    /// The coverage atlas backing every glyph handed out so far.
    #[inline]
    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    #[inline]
    pub fn atlas_mut(&mut self) -> &mut GlyphAtlas {
        &mut self.atlas
    }

    /// Rasterizes every glyph of `text` ahead of time.
    ///
    /// Unlike lazy lookups, an exhausted atlas is reported as an error here.
    pub fn preload(&mut self, text: &str) -> Result<(), EngineError> {
        for ch in text.chars() {
            let cp = ch as u32;
            if !self.glyphs.contains_key(&cp) {
                let glyph = self.rasterize(ch)?;
                self.glyphs.insert(cp, glyph);
            }
        }
        Ok(())
    }

    fn unit_metrics(&mut self, codepoint: u32) -> Option<GlyphMetrics> {
        if let Some(cached) = self.glyphs.get(&codepoint) {
            return *cached;
        }

        let glyph = match char::from_u32(codepoint) {
            Some(ch) => self.rasterize(ch).unwrap_or_else(|e| {
                log::warn!("glyph U+{codepoint:04X} dropped: {e}");
                None
            }),
            None => None,
        };
        if glyph.is_none() {
            log::debug!("no glyph for U+{codepoint:04X}");
        }
        self.glyphs.insert(codepoint, glyph);
        glyph
    }

    fn rasterize(&mut self, ch: char) -> Result<Option<GlyphMetrics>, EngineError> {
        if self.font.lookup_glyph_index(ch) == 0 && !ch.is_whitespace() {
            return Ok(None);
        }

        let (m, coverage) = self.font.rasterize(ch, RASTER_PX);
        let (w, h) = (m.width as u32, m.height as u32);

        let (uv_min, uv_max) = if w == 0 || h == 0 {
            ([0.0; 2], [0.0; 2])
        } else {
            let (x, y) = self.atlas.allocate(w, h)?;
            self.atlas.blit(x, y, w, h, &coverage);
            self.atlas.uv(x, y, w, h)
        };

        let inv = 1.0 / RASTER_PX;
        Ok(Some(GlyphMetrics {
            advance: m.advance_width * inv,
            bearing: Vec2::new(m.xmin as f32 * inv, (m.ymin as f32 + m.height as f32) * inv),
            size: Vec2::new(m.width as f32 * inv, m.height as f32 * inv),
            uv_min: Vec2::new(uv_min[0], uv_min[1]),
            uv_max: Vec2::new(uv_max[0], uv_max[1]),
        }))
    }
}

impl GlyphMetricsSource for FontSystem {
    fn metrics(&mut self, codepoint: u32, font_size: f32) -> Option<GlyphMetrics> {
        self.unit_metrics(codepoint).map(|m| m.scaled(font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let err = FontSystem::from_bytes(b"definitely not a font").err();
        assert!(matches!(err, Some(EngineError::FontLoad(_))));
    }
}

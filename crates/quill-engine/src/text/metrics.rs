use crate::coords::Vec2;

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f32 = 1.333;

/// Line advance for `font_size`.
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_RATIO
}

/// Glyph placement data, already scaled to a font size (logical pixels).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Pen advance to the next glyph.
    pub advance: f32,
    /// `x`: left side bearing. `y`: distance from the baseline up to the
    /// glyph's top edge.
    pub bearing: Vec2,
    pub size: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl GlyphMetrics {
    /// Scales unit-size (1px) metrics to `font_size`. UVs are unchanged.
    #[inline]
    pub fn scaled(self, font_size: f32) -> Self {
        Self {
            advance: self.advance * font_size,
            bearing: self.bearing * font_size,
            size: self.size * font_size,
            ..self
        }
    }
}

/// Supplier of glyph metrics and atlas coordinates.
pub trait GlyphMetricsSource {
    /// Metrics for `codepoint` at `font_size`, or `None` when the font has
    /// no glyph for it.
    fn metrics(&mut self, codepoint: u32, font_size: f32) -> Option<GlyphMetrics>;

    fn line_height(&self, font_size: f32) -> f32 {
        line_height(font_size)
    }
}

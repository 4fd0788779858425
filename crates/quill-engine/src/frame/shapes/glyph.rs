use crate::coords::{Rect, Vec2};
use crate::frame::FrameContext;
use crate::frame::instances::GlyphInstance;
use crate::paint::Color;

/// Edge softness applied to glyph quads.
pub const GLYPH_CRISPNESS: f32 = 0.01;

/// One positioned glyph and its atlas region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub rect: Rect,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl FrameContext {
    /// Records a run of glyph quads sharing one color.
    ///
    /// The whole run takes a single depth value.
    pub fn glyph_run(&mut self, quads: impl IntoIterator<Item = GlyphQuad>, color: Color) {
        color.debug_assert_premul();
        let (depth, clip_id) = self.stamp();
        for q in quads {
            self.push_glyph(q, color, depth, clip_id);
        }
    }

    #[inline]
    pub(crate) fn push_glyph(&mut self, q: GlyphQuad, color: Color, depth: f32, clip_id: u32) {
        self.glyphs.push(GlyphInstance {
            origin: q.rect.origin.to_array(),
            size: q.rect.size.to_array(),
            uv_min: q.uv_min.to_array(),
            uv_max: q.uv_max.to_array(),
            color: color.to_array(),
            crispness: GLYPH_CRISPNESS,
            depth,
            clip_id,
        });
    }
}

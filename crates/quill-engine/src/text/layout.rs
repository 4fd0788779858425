use crate::coords::{Rect, Vec2};
use crate::frame::{FrameContext, GlyphQuad};
use crate::paint::Color;

use super::metrics::GlyphMetricsSource;

/// Size and color of a glyph run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size: 16.0, color: Color::BLACK }
    }
}

/// Lays `text` out inside `max_size`, calling `emit` for every visible glyph.
///
/// Rules:
/// - `\n` starts a new line, `line_height(font_size)` below the previous one
/// - a line is not started if its glyphs (`font_size` tall) would overflow
///   `max_size.y`
/// - the rest of a line is dropped once the pen passes `max_size.x`
///
/// Returns the fitted size: widest pen extent by total line advance.
fn layout<S, F>(source: &mut S, text: &str, max_size: Vec2, font_size: f32, mut emit: F) -> Vec2
where
    S: GlyphMetricsSource + ?Sized,
    F: FnMut(GlyphQuad),
{
    let line_advance = source.line_height(font_size);
    let mut y = 0.0f32;
    let mut max_x = 0.0f32;

    for line in text.split('\n') {
        if y + font_size > max_size.y {
            break;
        }

        let mut x = 0.0f32;
        for ch in line.chars() {
            let Some(m) = source.metrics(ch as u32, font_size) else { continue };

            x += m.bearing.x;
            if x > max_size.x {
                break;
            }

            if m.size.x > 0.0 && m.size.y > 0.0 {
                emit(GlyphQuad {
                    rect: Rect::new(x, y + font_size - m.bearing.y, m.size.x, m.size.y),
                    uv_min: m.uv_min,
                    uv_max: m.uv_max,
                });
            }

            x += m.advance - m.bearing.x;
            max_x = max_x.max(x);
        }

        y += line_advance;
    }

    Vec2::new(max_x, y)
}

/// Size `text` would occupy without a bound.
pub fn measure_text<S>(source: &mut S, text: &str, font_size: f32) -> Vec2
where
    S: GlyphMetricsSource + ?Sized,
{
    layout(source, text, Vec2::splat(f32::INFINITY), font_size, |_| {})
}

impl FrameContext {
    /// Lays out and records `text` with its top-left at `origin`, unbounded.
    ///
    /// Returns the fitted rect.
    pub fn text<S>(&mut self, source: &mut S, origin: Vec2, style: TextStyle, text: &str) -> Rect
    where
        S: GlyphMetricsSource + ?Sized,
    {
        self.text_in(source, Rect::from_origin_size(origin, Vec2::splat(f32::INFINITY)), style, text)
    }

    /// Lays out and records `text` inside `bounds` as one glyph run.
    ///
    /// Glyphs that don't fit are dropped, not clipped; use a clip region for
    /// pixel-exact cut-offs. Returns the fitted rect at `bounds.origin`.
    pub fn text_in<S>(&mut self, source: &mut S, bounds: Rect, style: TextStyle, text: &str) -> Rect
    where
        S: GlyphMetricsSource + ?Sized,
    {
        style.color.debug_assert_premul();
        let (depth, clip_id) = self.stamp();
        let origin = bounds.origin;
        let fitted = layout(source, text, bounds.size, style.font_size, |q| {
            let q = GlyphQuad { rect: q.rect.translate(origin), ..q };
            self.push_glyph(q, style.color, depth, clip_id);
        });
        Rect::from_origin_size(origin, fitted)
    }
}

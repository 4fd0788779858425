//! Decorations wrapped around caller content.

use quill_engine::coords::{CornerRadii, Inset, Rect, Vec2};
use quill_engine::frame::{FrameContext, RectStyle};
use quill_engine::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderStyle {
    pub color: Color,
    pub corner_radii: CornerRadii,
    pub width: f32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self { color: Color::WHITE, corner_radii: CornerRadii::zero(), width: 1.0 }
    }
}

/// Fills `rect` with the border color, then runs `body` with the rect shrunk
/// by the border width. Content drawn by `body` covers the middle.
pub fn border<R>(
    frame: &mut FrameContext,
    rect: Rect,
    style: &BorderStyle,
    body: impl FnOnce(&mut FrameContext, Rect, CornerRadii) -> R,
) -> R {
    frame.rect(rect, RectStyle { color: style.color, corner_radii: style.corner_radii, ..RectStyle::default() });
    body(frame, rect.deflate(Inset::all(style.width)), style.corner_radii)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub corner_radii: CornerRadii,
    pub offset: Vec2,
    /// Edge softness handed to the rect as its crispness.
    pub blur: f32,
    /// Grows the shadow on every side.
    pub spread: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::from_straight(0.0, 0.0, 0.0, 0.5),
            corner_radii: CornerRadii::zero(),
            offset: Vec2::new(0.0, 2.0),
            blur: 0.1,
            spread: 0.0,
        }
    }
}

/// Draws a soft shadow behind `rect`, then runs `body` with `rect` itself.
pub fn shadow<R>(
    frame: &mut FrameContext,
    rect: Rect,
    style: &ShadowStyle,
    body: impl FnOnce(&mut FrameContext, Rect, CornerRadii) -> R,
) -> R {
    let spread = Vec2::splat(style.spread);
    let shadow_rect = Rect::from_origin_size(rect.origin - spread + style.offset, rect.size + spread * 2.0);
    frame.rect(
        shadow_rect,
        RectStyle { color: style.color, corner_radii: style.corner_radii, crispness: style.blur, ..RectStyle::default() },
    );
    body(frame, rect, style.corner_radii)
}

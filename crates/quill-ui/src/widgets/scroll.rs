use quill_engine::coords::{CornerRadii, Rect, Vec2};
use quill_engine::frame::{FrameContext, RectStyle};
use quill_engine::paint::Color;

/// Caller-owned state of one scroll region.
///
/// `offset` is how far the content is shifted from the viewport origin. It
/// is never positive and never past the content's far edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub offset: Vec2,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollBarStyle {
    /// Thickness of a thumb.
    pub size: f32,
    pub color: Color,
    pub corner_radii: CornerRadii,
    /// Thumb alpha multiplier while hovered.
    pub hover_alpha: f32,
    /// Extra alpha multiplier while dragged.
    pub press_alpha: f32,
}

impl Default for ScrollBarStyle {
    fn default() -> Self {
        Self {
            size: 8.0,
            color: Color::GRAY,
            corner_radii: CornerRadii::zero(),
            hover_alpha: 0.9,
            press_alpha: 0.7,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollStyle {
    pub bar: ScrollBarStyle,
    /// Rounding of the viewport clip.
    pub corner_radii: CornerRadii,
    pub show_bars: bool,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self { bar: ScrollBarStyle::default(), corner_radii: CornerRadii::zero(), show_bars: true }
    }
}

/// How far `content` sticks out of `viewport` per axis, as a non-positive
/// number. This is the lower bound of the offset.
#[inline]
fn overflow(viewport: Vec2, content: Vec2) -> Vec2 {
    (viewport - content).min(Vec2::zero())
}

#[inline]
fn clamp_offset(offset: Vec2, overflow: Vec2) -> Vec2 {
    offset.clamp(overflow, Vec2::zero())
}

/// Length and position along one axis of a thumb, `None` when the content
/// fits on that axis.
fn thumb_span(viewport: f32, overflow: f32, offset: f32) -> Option<(f32, f32)> {
    if overflow >= 0.0 {
        return None;
    }
    let len = viewport * viewport / (viewport + overflow.abs());
    let pos = (viewport - len) * (offset / overflow).abs();
    Some((len, pos))
}

/// Thumb rects (horizontal, vertical) for the current offset.
fn thumbs(viewport: Rect, overflow: Vec2, offset: Vec2, bar: f32) -> [Option<Rect>; 2] {
    let max = viewport.max();
    let h = thumb_span(viewport.size.x, overflow.x, offset.x)
        .map(|(len, pos)| Rect::new(viewport.origin.x + pos, max.y - bar, len, bar));
    let v = thumb_span(viewport.size.y, overflow.y, offset.y)
        .map(|(len, pos)| Rect::new(max.x - bar, viewport.origin.y + pos, bar, len));
    [h, v]
}

/// A clipped viewport onto content larger than itself.
///
/// Each frame:
/// - wheel deltas move the content, but only while the pointer is over the
///   viewport
/// - holding the button on a thumb drags it; the content moves by the pointer
///   delta scaled by `content / viewport`
/// - the offset is clamped so the content never leaves a gap
///
/// `body` runs inside a clip of `viewport` and gets the content origin,
/// already shifted by the offset. Thumbs are drawn on top of the content.
/// Returns `viewport`.
///
/// Drag state is not stored: a thumb is dragged on any frame the button is
/// held over it.
pub fn scroll_region(
    frame: &mut FrameContext,
    state: &mut ScrollState,
    viewport: Rect,
    content_size: Vec2,
    style: &ScrollStyle,
    body: impl FnOnce(&mut FrameContext, Vec2),
) -> Rect {
    let pointer = frame.pointer();
    let overflow = overflow(viewport.size, content_size);

    let mut offset = state.offset;
    if frame.hit_test(viewport).is_hit() {
        offset += pointer.scroll;
    }
    offset = clamp_offset(offset, overflow);

    let mut colors = [style.bar.color; 2];
    if style.show_bars {
        let ratio = Vec2::new(
            if viewport.size.x > 0.0 { content_size.x / viewport.size.x } else { 0.0 },
            if viewport.size.y > 0.0 { content_size.y / viewport.size.y } else { 0.0 },
        );
        let [h, v] = thumbs(viewport, overflow, offset, style.bar.size);

        if let Some(thumb) = h {
            let color = &mut colors[0];
            frame
                .hit_test(thumb)
                .mouse_over(|| *color = color.scale_alpha(style.bar.hover_alpha))
                .mouse_press(|| {
                    *color = color.scale_alpha(style.bar.press_alpha);
                    offset.x -= pointer.delta.x * ratio.x;
                });
        }
        if let Some(thumb) = v {
            let color = &mut colors[1];
            frame
                .hit_test(thumb)
                .mouse_over(|| *color = color.scale_alpha(style.bar.hover_alpha))
                .mouse_press(|| {
                    *color = color.scale_alpha(style.bar.press_alpha);
                    offset.y -= pointer.delta.y * ratio.y;
                });
        }
        offset = clamp_offset(offset, overflow);
    }

    if offset != state.offset {
        log::trace!("scroll offset {:?} -> {:?}", state.offset, offset);
    }
    state.offset = offset;

    frame.with_clip(viewport, style.corner_radii, 0.0, |f, r| body(f, r.origin + offset));

    if style.show_bars {
        let [h, v] = thumbs(viewport, overflow, offset, style.bar.size);
        for (thumb, color) in [h, v].into_iter().zip(colors) {
            if let Some(thumb) = thumb {
                frame.rect(thumb, RectStyle { color, corner_radii: style.bar.corner_radii, ..RectStyle::default() });
            }
        }
    }

    viewport
}

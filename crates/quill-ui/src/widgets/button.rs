use quill_engine::coords::{CornerRadii, Inset, Rect, Vec2};
use quill_engine::frame::{FrameContext, HitResult, RectStyle};
use quill_engine::paint::Color;
use quill_engine::text::{measure_text, GlyphMetricsSource, TextStyle};

/// Look of a text [`button`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background: Color,
    pub corner_radii: CornerRadii,
    pub padding: Inset,
    pub text: TextStyle,
    /// Background alpha multiplier while hovered.
    pub hover_alpha: f32,
    /// Extra alpha multiplier while pressed.
    pub press_alpha: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Color::GRAY,
            corner_radii: CornerRadii::all(4.0),
            padding: Inset::symmetric(4.0, 8.0),
            text: TextStyle { color: Color::WHITE, ..TextStyle::default() },
            hover_alpha: 0.9,
            press_alpha: 0.8,
        }
    }
}

/// Text button with its top-left corner at `position`.
///
/// Sized to the label plus padding. Returns the hit-test so the caller can
/// chain reactions (`mouse_up(..)` for a click), and the button's bounds.
pub fn button<S>(
    frame: &mut FrameContext,
    fonts: &mut S,
    position: Vec2,
    label: &str,
    style: &ButtonStyle,
) -> (HitResult, Rect)
where
    S: GlyphMetricsSource + ?Sized,
{
    let label_size = measure_text(fonts, label, style.text.font_size);
    let bounds = Rect::from_origin_size(position, label_size).inflate(style.padding);
    let inner = bounds.deflate(style.padding);

    let mut color = style.background;
    let hit = frame
        .hit_test(bounds)
        .mouse_over(|| color = color.scale_alpha(style.hover_alpha))
        .mouse_press(|| color = color.scale_alpha(style.press_alpha));

    frame.rect(bounds, RectStyle { color, corner_radii: style.corner_radii, ..RectStyle::default() });
    frame.text(fonts, inner.origin, style.text, label);

    (hit, bounds)
}

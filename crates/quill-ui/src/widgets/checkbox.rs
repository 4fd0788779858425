use quill_engine::coords::{CornerRadii, Inset, Rect};
use quill_engine::frame::{FrameContext, RectStyle};
use quill_engine::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CheckboxStyle {
    /// Box background.
    pub rect: RectStyle,
    /// Mark drawn inside the box when checked.
    pub mark: RectStyle,
    /// Gap between the box edge and the mark.
    pub mark_inset: f32,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            rect: RectStyle { color: Color::GRAY, corner_radii: CornerRadii::all(4.0), ..RectStyle::default() },
            mark: RectStyle {
                color: Color::from_srgb_u8(255, 255, 255, 150),
                corner_radii: CornerRadii::all(2.0),
                ..RectStyle::default()
            },
            mark_inset: 5.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CheckboxResult {
    pub rect: Rect,
    /// `value` was toggled this frame.
    pub changed: bool,
}

/// Checkbox occupying `rect`. Toggles `value` when the button goes down over it.
pub fn checkbox(
    frame: &mut FrameContext,
    rect: Rect,
    value: &mut bool,
    style: &CheckboxStyle,
) -> CheckboxResult {
    let mut changed = false;

    frame.rect(rect, style.rect);
    frame.hit_test(rect).mouse_down(|| {
        *value = !*value;
        changed = true;
    });

    if *value {
        frame.rect(rect.deflate(Inset::all(style.mark_inset)), style.mark);
    }

    CheckboxResult { rect, changed }
}

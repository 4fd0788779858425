//! Quill UI: immediate-mode widgets on top of `quill-engine`.
//!
//! Widgets are plain functions. They draw into a [`FrameContext`], hit-test
//! against the frame's pointer and keep no state of their own; anything that
//! must survive a frame (scroll offset, checkbox value, a text field's
//! cursor) is owned by the caller and passed in by `&mut`.
//!
//! ```rust,ignore
//! use quill_ui::prelude::*;
//!
//! frame.begin_frame(input.pointer());
//! v_stack(Vec2::new(16.0, 16.0), 8.0, |col| {
//!     let (hit, r) = button(&mut frame, &mut fonts, col.position(), "Save", &theme.button);
//!     hit.mouse_up(|| save());
//!     col.advance(r);
//!
//!     let r = Rect::from_origin_size(col.position(), Vec2::splat(20.0));
//!     col.advance(checkbox(&mut frame, r, &mut enabled, &theme.checkbox).rect);
//!
//!     let mut field_input = FieldInput::new(input.keyboard(), &mut clipboard);
//!     let r = number_field(
//!         &mut frame, &mut fonts, &mut field_input, col.position(),
//!         &mut width_field, &mut width, &theme.text_field,
//!     );
//!     col.advance(r.rect);
//! });
//! frame.submit(&mut backend);
//! ```

pub mod layout;
pub mod theme;
pub mod widgets;

/// Everything needed to write widgets and screens.
pub mod prelude {
    pub use crate::layout::{
        h_align, h_stack, padding, v_align, v_stack, Alignment, HAlignCursor, HCursor, VAlignCursor,
        VCursor,
    };
    pub use crate::theme::Theme;
    pub use crate::widgets::{
        border, button, checkbox, number_field, scroll_region, shadow, text_field, BorderStyle,
        ButtonStyle, CheckboxResult, CheckboxStyle, Clipboard, FieldInput, NumberFieldState,
        ScrollBarStyle, ScrollState, ScrollStyle, ShadowStyle, SystemClipboard, TextFieldState,
        TextFieldStyle,
    };

    pub use quill_engine::coords::{CornerRadii, Inset, Rect, Vec2};
    pub use quill_engine::frame::{FrameContext, HitResult, RectStyle};
    pub use quill_engine::input::{InputState, KeyboardState};
    pub use quill_engine::paint::Color;
    pub use quill_engine::text::{GlyphMetricsSource, TextStyle};
}

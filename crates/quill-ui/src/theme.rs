//! Default widget styles, grouped.

use quill_engine::coords::CornerRadii;
use quill_engine::frame::RectStyle;
use quill_engine::paint::Color;
use quill_engine::text::TextStyle;

use crate::widgets::{ButtonStyle, CheckboxStyle, ScrollBarStyle, ScrollStyle, TextFieldStyle};

/// One style per widget kind, so a screen can pass `&theme.button` around
/// instead of building styles inline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: TextStyle,
    pub button: ButtonStyle,
    pub checkbox: CheckboxStyle,
    pub scroll: ScrollStyle,
    pub text_field: TextFieldStyle,
}

impl Theme {
    /// Light text on dark surfaces.
    pub fn dark() -> Self {
        let text = TextStyle { color: Color::WHITE, ..TextStyle::default() };
        Self {
            background: Color::from_srgb_u8(30, 30, 34, 255),
            text,
            button: ButtonStyle { text, ..ButtonStyle::default() },
            checkbox: CheckboxStyle::default(),
            scroll: ScrollStyle::default(),
            text_field: TextFieldStyle {
                rect: RectStyle {
                    color: Color::from_srgb_u8(48, 48, 54, 255),
                    corner_radii: CornerRadii::all(4.0),
                    ..RectStyle::default()
                },
                text,
                caret: Color::WHITE,
                ..TextFieldStyle::default()
            },
        }
    }

    /// Dark text on light surfaces.
    pub fn light() -> Self {
        let text = TextStyle { color: Color::BLACK, ..TextStyle::default() };
        let surface = Color::from_srgb_u8(210, 210, 215, 255);
        Self {
            background: Color::from_srgb_u8(245, 245, 247, 255),
            text,
            button: ButtonStyle { background: surface, text, ..ButtonStyle::default() },
            checkbox: CheckboxStyle {
                rect: RectStyle { color: surface, corner_radii: CornerRadii::all(4.0), ..RectStyle::default() },
                mark: RectStyle {
                    color: Color::from_srgb_u8(40, 40, 48, 200),
                    corner_radii: CornerRadii::all(2.0),
                    ..RectStyle::default()
                },
                ..CheckboxStyle::default()
            },
            scroll: ScrollStyle {
                bar: ScrollBarStyle { color: Color::from_srgb_u8(120, 120, 128, 255), ..ScrollBarStyle::default() },
                ..ScrollStyle::default()
            },
            text_field: TextFieldStyle {
                rect: RectStyle { color: Color::WHITE, corner_radii: CornerRadii::all(4.0), ..RectStyle::default() },
                text,
                ..TextFieldStyle::default()
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

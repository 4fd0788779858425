use quill_engine::coords::{Inset, Rect, Vec2};
use quill_engine::frame::{FrameContext, HitResult, RectStyle};
use quill_engine::input::KeyboardState;
use quill_engine::paint::Color;
use quill_engine::text::{GlyphMetricsSource, TextStyle};

use super::clipboard::Clipboard;
use super::scroll::{scroll_region, ScrollState, ScrollStyle};
use super::text_edit::TextEdit;

/// Width of the caret.
const CARET_WIDTH: f32 = 1.0;

/// Caller-owned state of one text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldState {
    /// Text, cursor, selection and undo history.
    pub edit: TextEdit,
    /// Horizontal scroll of the text inside the field.
    pub scroll: ScrollState,
    /// The field takes keyboard input.
    pub focused: bool,
    /// Draws the error outline. Set by whoever validates the text.
    pub error: bool,
}

impl TextFieldState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { edit: TextEdit::new(text), ..Self::default() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.edit.text()
    }
}

/// This frame's keyboard input and the clipboard, as seen by a focused field.
pub struct FieldInput<'a> {
    pub keys: KeyboardState<'a>,
    pub clipboard: &'a mut dyn Clipboard,
}

impl<'a> FieldInput<'a> {
    pub fn new(keys: KeyboardState<'a>, clipboard: &'a mut dyn Clipboard) -> Self {
        Self { keys, clipboard }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextFieldStyle {
    pub rect: RectStyle,
    pub text: TextStyle,
    pub padding: Inset,
    /// Width of the text area, padding excluded.
    pub width: f32,
    /// Drawn around the field while focused.
    pub outline: Outline,
    /// Drawn around the field while in error, focused or not.
    pub error_outline: Outline,
    pub caret: Color,
    pub selection: Color,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            rect: RectStyle::solid(Color::WHITE),
            text: TextStyle::default(),
            padding: Inset::symmetric(4.0, 8.0),
            width: 140.0,
            outline: Outline { size: 2.0, color: Color::from_srgb_u8(10, 132, 255, 255) },
            error_outline: Outline { size: 2.0, color: Color::from_srgb_u8(255, 69, 58, 255) },
            caret: Color::BLACK,
            selection: Color::from_srgb_u8(10, 132, 255, 90),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextFieldResult {
    pub rect: Rect,
    pub hit: HitResult,
    /// The text was edited this frame.
    pub changed: bool,
}

/// Pen x after every char boundary of `text`, starting with `(0, 0.0)`.
fn caret_stops<S>(fonts: &mut S, text: &str, font_size: f32) -> Vec<(usize, f32)>
where
    S: GlyphMetricsSource + ?Sized,
{
    let mut stops = Vec::with_capacity(text.len() + 1);
    let mut x = 0.0;
    stops.push((0, x));
    for (i, ch) in text.char_indices() {
        x += fonts.metrics(ch as u32, font_size).map_or(0.0, |m| m.advance);
        stops.push((i + ch.len_utf8(), x));
    }
    stops
}

/// Pen x of the boundary at byte `at`.
fn stop_x(stops: &[(usize, f32)], at: usize) -> f32 {
    stops.iter().find(|s| s.0 >= at).or(stops.last()).map_or(0.0, |s| s.1)
}

/// Boundary closest to pen x `x`.
fn nearest_stop(stops: &[(usize, f32)], x: f32) -> usize {
    stops
        .iter()
        .min_by(|a, b| (a.1 - x).abs().total_cmp(&(b.1 - x).abs()))
        .map_or(0, |s| s.0)
}

/// Scroll offset that keeps the caret at `caret_x` inside `visible` pixels.
fn follow_caret(offset: f32, caret_x: f32, visible: f32) -> f32 {
    let left = -offset;
    if caret_x < left {
        -caret_x
    } else if caret_x + CARET_WIDTH > left + visible {
        -(caret_x + CARET_WIDTH - visible)
    } else {
        offset
    }
}

/// Single-line editable text.
///
/// Each frame:
/// - while focused, the frame's key presses and text are applied in order
/// - a button press anywhere unfocuses the field; a press inside focuses it
///   and moves the cursor to the clicked boundary (shift extends the
///   selection); holding the button drags the selection
/// - the text scrolls horizontally to keep the cursor visible
///
/// The field is `style.width` wide and one line tall, plus padding. Returns
/// its rect, the hit-test over it and whether the text changed.
pub fn text_field<S>(
    frame: &mut FrameContext,
    fonts: &mut S,
    input: &mut FieldInput<'_>,
    position: Vec2,
    state: &mut TextFieldState,
    style: &TextFieldStyle,
) -> TextFieldResult
where
    S: GlyphMetricsSource + ?Sized,
{
    let mut changed = false;
    if state.focused {
        for event in input.keys.events {
            changed |= state.edit.apply(event, &mut *input.clipboard);
        }
    }
    if changed {
        log::trace!("text field edited: {:?}", state.edit.text());
    }

    let font_size = style.text.font_size;
    let line_height = fonts.line_height(font_size);
    let bounds = Rect::from_origin_size(position, Vec2::new(style.width, line_height)).inflate(style.padding);
    let inner = bounds.deflate(style.padding);
    let stops = caret_stops(fonts, state.edit.text(), font_size);

    let pointer = frame.pointer();
    let text_x = inner.origin.x + state.scroll.offset.x;
    let boundary_under_pointer = nearest_stop(&stops, pointer.position.x - text_x);

    if pointer.down {
        state.focused = false;
        state.edit.clear_selection();
    }
    let was_focused = state.focused;
    let hit = frame.hit_test(bounds).mouse_down(|| {
        state.focused = true;
        state.edit.set_cursor(boundary_under_pointer, input.keys.modifiers.shift);
    });
    if was_focused && pointer.pressed && !pointer.down {
        state.edit.set_cursor(boundary_under_pointer, true);
    }

    let caret_x = stop_x(&stops, state.edit.cursor());
    if state.focused {
        state.scroll.offset.x = follow_caret(state.scroll.offset.x, caret_x, inner.size.x);
    }

    let outline = match (state.error, state.focused) {
        (true, _) => Some(style.error_outline),
        (false, true) => Some(style.outline),
        (false, false) => None,
    };
    if let Some(o) = outline {
        let ring = Rect::from_origin_size(bounds.origin - Vec2::splat(o.size), bounds.size + Vec2::splat(2.0 * o.size));
        frame.rect(ring, RectStyle { color: o.color, corner_radii: style.rect.corner_radii, ..RectStyle::default() });
    }
    frame.rect(bounds, style.rect);

    let selection = state.edit.selection();
    let show_caret = state.focused && selection.is_empty();
    let content = Vec2::new(stops.last().map_or(0.0, |s| s.1) + CARET_WIDTH, inner.size.y);
    let scroll_style = ScrollStyle { show_bars: false, ..ScrollStyle::default() };
    let edit = &state.edit;

    scroll_region(frame, &mut state.scroll, inner, content, &scroll_style, |f, origin| {
        if !selection.is_empty() {
            let (x0, x1) = (stop_x(&stops, selection.start), stop_x(&stops, selection.end));
            f.fill_rect(Rect::new(origin.x + x0, origin.y, x1 - x0, line_height), style.selection);
        }
        f.text(fonts, origin, style.text, edit.text());
        if show_caret {
            f.fill_rect(Rect::new(origin.x + caret_x, origin.y, CARET_WIDTH, line_height), style.caret);
        }
    });

    TextFieldResult { rect: bounds, hit, changed }
}

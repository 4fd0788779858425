use std::fmt::Display;
use std::str::FromStr;

use quill_engine::coords::Vec2;
use quill_engine::frame::FrameContext;
use quill_engine::input::LINE_SCROLL_PX;
use quill_engine::text::GlyphMetricsSource;

use super::text_field::{text_field, FieldInput, TextFieldResult, TextFieldState, TextFieldStyle};

/// A number a [`number_field`] can edit.
pub trait FieldNumber: Copy + PartialEq + Display + FromStr {
    /// Step of one wheel line when none is given.
    const STEP: Self;

    /// `self` moved by `lines` steps of `step`. Integers saturate; floats are
    /// rounded to the decimals of `step`, so `0.1` steps don't drift.
    fn nudge(self, lines: i32, step: Self) -> Self;
}

macro_rules! int_number {
    ($($t:ty),*) => {$(
        impl FieldNumber for $t {
            const STEP: Self = 1;

            fn nudge(self, lines: i32, step: Self) -> Self {
                let v = self as i128 + lines as i128 * step as i128;
                v.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
            }
        }
    )*};
}

macro_rules! float_number {
    ($($t:ty),*) => {$(
        impl FieldNumber for $t {
            const STEP: Self = 0.1;

            fn nudge(self, lines: i32, step: Self) -> Self {
                let raw = self as f64 + lines as f64 * step as f64;
                round_to(raw, decimals(&step.to_string())) as $t
            }
        }
    )*};
}

int_number!(i8, u8, i16, u16, i32, u32, i64, u64);
float_number!(f32, f64);

/// Digits after the decimal point of a formatted number.
fn decimals(formatted: &str) -> i32 {
    formatted.split_once('.').map_or(0, |(_, frac)| frac.len().min(15) as i32)
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Caller-owned state of one number field.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFieldState<T> {
    pub field: TextFieldState,
    /// Change per wheel line while hovered.
    pub step: T,
    /// Value the text was last synced from.
    shown: Option<T>,
}

impl<T: FieldNumber> NumberFieldState<T> {
    pub fn new(step: T) -> Self {
        Self { field: TextFieldState::default(), step, shown: None }
    }

    /// Rewrites the text when `value` changed behind the field's back.
    fn sync(&mut self, value: T) {
        if self.shown != Some(value) {
            self.shown = Some(value);
            self.field.edit.set_text(value.to_string());
        }
    }
}

impl<T: FieldNumber> Default for NumberFieldState<T> {
    fn default() -> Self {
        Self::new(T::STEP)
    }
}

/// Text field bound to a number.
///
/// - edits that parse update `value`; edits that don't leave it alone and
///   set the field's error flag until the text parses again
/// - while hovered and not focused, the wheel moves `value` by `state.step`
///   per line
/// - a `value` changed elsewhere replaces the text
pub fn number_field<S, T>(
    frame: &mut FrameContext,
    fonts: &mut S,
    input: &mut FieldInput<'_>,
    position: Vec2,
    state: &mut NumberFieldState<T>,
    value: &mut T,
    style: &TextFieldStyle,
) -> TextFieldResult
where
    S: GlyphMetricsSource + ?Sized,
    T: FieldNumber,
{
    state.sync(*value);

    let result = text_field(frame, fonts, input, position, &mut state.field, style);
    if result.changed {
        match state.field.text().trim().parse::<T>() {
            Ok(v) => {
                *value = v;
                state.shown = Some(v);
                state.field.error = false;
            }
            Err(_) => state.field.error = true,
        }
    }

    if !state.field.focused {
        let lines = (frame.pointer().scroll.y / LINE_SCROLL_PX).round() as i32;
        result.hit.mouse_over(|| {
            if lines != 0 {
                *value = value.nudge(lines, state.step);
                log::trace!("number field nudged to {value}");
            }
        });
        state.sync(*value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_saturate() {
        assert_eq!(250u8.nudge(10, 1), u8::MAX);
        assert_eq!(3u8.nudge(-5, 1), 0);
        assert_eq!((-120i8).nudge(-3, 5), i8::MIN);
        assert_eq!(7i64.nudge(2, 10), 27);
    }

    #[test]
    fn float_steps_round_to_step_decimals() {
        assert_eq!(0.1f32.nudge(2, 0.1), 0.3);
        assert_eq!(1.0f64.nudge(-3, 0.25), 0.25);
        assert_eq!(decimals("0.125"), 3);
        assert_eq!(decimals("5"), 0);
    }
}

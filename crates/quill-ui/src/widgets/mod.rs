//! Built-in widgets.

pub mod button;
pub mod checkbox;
pub mod clipboard;
pub mod decor;
pub mod number_field;
pub mod scroll;
pub mod text_edit;
pub mod text_field;

pub use button::{button, ButtonStyle};
pub use checkbox::{checkbox, CheckboxResult, CheckboxStyle};
pub use clipboard::{Clipboard, SystemClipboard};
pub use decor::{border, shadow, BorderStyle, ShadowStyle};
pub use number_field::{number_field, FieldNumber, NumberFieldState};
pub use scroll::{scroll_region, ScrollBarStyle, ScrollState, ScrollStyle};
pub use text_edit::TextEdit;
pub use text_field::{text_field, FieldInput, Outline, TextFieldResult, TextFieldState, TextFieldStyle};

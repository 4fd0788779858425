//! Input subsystem.
//!
//! Public API is platform-agnostic. Platform glue translates window-system
//! events into [`InputEvent`]s; the engine only ever reads the per-frame
//! [`PointerState`] snapshot. Keyboard input reaches widgets as a
//! [`KeyboardState`] snapshot, outside the engine.

mod keyboard;
mod pointer;
mod state;
mod types;

pub use keyboard::{KeyEvent, KeyboardState};
pub use pointer::PointerState;
pub use state::{InputState, LINE_SCROLL_PX};
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta};

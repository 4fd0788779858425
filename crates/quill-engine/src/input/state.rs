use std::collections::HashSet;

use crate::coords::Vec2;

use super::keyboard::{KeyEvent, KeyboardState};
use super::pointer::PointerState;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta};

/// Pixels scrolled per wheel line.
pub const LINE_SCROLL_PX: f32 = 24.0;

/// Current input state for a single window.
///
/// Holds "is down" information and the pointer position, plus the per-frame
/// transitions accumulated since the last [`end_frame`](Self::end_frame).
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels. `None` when outside the window.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    keyboard: Vec<KeyEvent>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    pointer_delta: Vec2,
    scroll: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoids stuck keys/buttons when focus changes mid-press.
                    self.buttons_down.clear();
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved { position } => {
                if let Some(prev) = self.pointer_pos {
                    self.pointer_delta += position - prev;
                }
                self.pointer_pos = Some(position);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(button) {
                        self.buttons_pressed.insert(button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(&button) {
                        self.buttons_released.insert(button);
                    }
                }
            },

            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(key) || repeat {
                            self.keyboard.push(KeyEvent::Press { key, modifiers });
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(&key);
                    }
                }
            }

            InputEvent::Text(text) => {
                if !text.is_empty() {
                    self.keyboard.push(KeyEvent::Text(text));
                }
            }

            InputEvent::MouseWheel(delta) => {
                self.scroll += match delta {
                    MouseWheelDelta::Line { x, y } => Vec2::new(x, y) * LINE_SCROLL_PX,
                    MouseWheelDelta::Pixel { x, y } => Vec2::new(x, y),
                };
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Key presses and text accumulated for the frame about to be built.
    pub fn keyboard(&self) -> KeyboardState<'_> {
        KeyboardState::new(self.modifiers, &self.keyboard)
    }

    /// Snapshot of the primary (left) button for the frame about to be built.
    ///
    /// When the pointer is outside the window it is parked at `-inf` so no
    /// hit-test can succeed.
    pub fn pointer(&self) -> PointerState {
        let left = MouseButton::Left;
        PointerState {
            position: self.pointer_pos.unwrap_or(Vec2::splat(f32::NEG_INFINITY)),
            delta: self.pointer_delta,
            scroll: self.scroll,
            down: self.buttons_pressed.contains(&left),
            pressed: self.buttons_down.contains(&left),
            up: self.buttons_released.contains(&left),
        }
    }

    /// Clears per-frame transitions. Call once the frame has been submitted.
    pub fn end_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.pointer_delta = Vec2::zero();
        self.scroll = Vec2::zero();
        self.keyboard.clear();
    }
}

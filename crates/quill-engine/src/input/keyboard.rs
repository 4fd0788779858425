use super::types::{Key, Modifiers};

/// One keyboard occurrence within a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyEvent {
    /// A key went down, or auto-repeated while held.
    Press { key: Key, modifiers: Modifiers },
    /// Committed text.
    Text(String),
}

/// Keyboard snapshot for one frame: the current modifiers and every key
/// press and text commit since the previous frame, in arrival order.
///
/// Widgets with keyboard focus replay `events`; everything else ignores them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KeyboardState<'a> {
    pub modifiers: Modifiers,
    pub events: &'a [KeyEvent],
}

impl<'a> KeyboardState<'a> {
    #[inline]
    pub fn new(modifiers: Modifiers, events: &'a [KeyEvent]) -> Self {
        Self { modifiers, events }
    }

    /// Whether `key` went down this frame.
    pub fn pressed(&self, key: Key) -> bool {
        self.events.iter().any(|e| matches!(e, KeyEvent::Press { key: k, .. } if *k == key))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

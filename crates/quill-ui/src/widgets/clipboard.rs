//! Clipboard access for text widgets.

/// Where copied text goes and pasted text comes from.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// No clipboard: copy is dropped, paste yields nothing.
impl Clipboard for () {
    fn get_text(&mut self) -> Option<String> {
        None
    }

    fn set_text(&mut self, _text: &str) {}
}

/// In-process clipboard. Holds the last copied text.
impl Clipboard for String {
    fn get_text(&mut self) -> Option<String> {
        if self.is_empty() { None } else { Some(self.clone()) }
    }

    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// The operating system clipboard.
///
/// Falls back to doing nothing when no clipboard is reachable (headless
/// sessions, missing display server).
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                log::warn!("system clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").field("available", &self.inner.is_some()).finish()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.inner.as_mut()?.get_text().ok()
    }

    fn set_text(&mut self, text: &str) {
        let Some(cb) = self.inner.as_mut() else { return };
        if let Err(e) = cb.set_text(text.to_owned()) {
            log::warn!("clipboard write failed: {e}");
        }
    }
}

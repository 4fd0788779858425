//! Single-line text editing: cursor, selection, clipboard and undo.
//!
//! [`TextEdit`] knows nothing about drawing. Text fields own one and replay
//! the frame's keyboard input into it.

use std::ops::Range;

use quill_engine::input::{Key, KeyEvent, Modifiers};

use super::clipboard::Clipboard;

// ── history ───────────────────────────────────────────────────────────────

/// One reversible change: `removed` at `at` was replaced by `inserted`.
#[derive(Debug, Clone, PartialEq)]
struct Edit {
    at: usize,
    removed: String,
    inserted: String,
    /// Cursor and anchor before the change.
    before: (usize, usize),
}

/// Undo stack with a redo tail.
///
/// `done` edits are applied; the ones after it were undone and can be
/// redone until a new edit is recorded.
#[derive(Debug, Clone, Default, PartialEq)]
struct EditHistory {
    edits: Vec<Edit>,
    done: usize,
}

impl EditHistory {
    fn record(&mut self, edit: Edit) {
        self.edits.truncate(self.done);
        self.edits.push(edit);
        self.done += 1;
    }

    fn undo(&mut self) -> Option<&Edit> {
        self.done = self.done.checked_sub(1)?;
        self.edits.get(self.done)
    }

    fn redo(&mut self) -> Option<&Edit> {
        let edit = self.edits.get(self.done)?;
        self.done += 1;
        Some(edit)
    }

    fn clear(&mut self) {
        self.edits.clear();
        self.done = 0;
    }
}

// ── text edit ─────────────────────────────────────────────────────────────

/// Editable single-line text.
///
/// `cursor` and `anchor` are byte offsets, always on char boundaries.
/// `cursor == anchor` means nothing is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEdit {
    text: String,
    cursor: usize,
    anchor: usize,
    history: EditHistory,
}

impl TextEdit {
    /// Cursor at the end, empty history.
    pub fn new(text: impl Into<String>) -> Self {
        let mut edit = Self::default();
        edit.set_text(text);
        edit
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected byte range, empty when nothing is selected.
    #[inline]
    pub fn selection(&self) -> Range<usize> {
        self.cursor.min(self.anchor)..self.cursor.max(self.anchor)
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    #[inline]
    pub fn selected_text(&self) -> &str {
        &self.text[self.selection()]
    }

    /// Replaces the whole text from outside, forgetting the history.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        self.anchor = self.cursor;
        self.history.clear();
    }

    /// Moves the cursor to the char boundary at or before `at`. With `extend`
    /// the anchor stays put and the selection grows.
    pub fn set_cursor(&mut self, at: usize, extend: bool) {
        let mut at = at.min(self.text.len());
        while !self.text.is_char_boundary(at) {
            at -= 1;
        }
        self.cursor = at;
        if !extend {
            self.anchor = at;
        }
    }

    // ── movement ──────────────────────────────────────────────────────────

    /// One char left. Without `extend`, a selection collapses to its left edge.
    pub fn move_left(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            self.set_cursor(self.selection().start, false);
        } else {
            self.set_cursor(prev_char(&self.text, self.cursor), extend);
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            self.set_cursor(self.selection().end, false);
        } else {
            self.set_cursor(next_char(&self.text, self.cursor), extend);
        }
    }

    pub fn move_word_left(&mut self, extend: bool) {
        self.set_cursor(prev_word(&self.text, self.cursor), extend);
    }

    pub fn move_word_right(&mut self, extend: bool) {
        self.set_cursor(next_word(&self.text, self.cursor), extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        self.set_cursor(0, extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.set_cursor(self.text.len(), extend);
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.text.len();
    }

    /// Drops the selection, keeping the cursor where it is.
    pub fn clear_selection(&mut self) {
        self.anchor = self.cursor;
    }

    /// Selects the word around `at`, bounded by spaces.
    pub fn select_word(&mut self, at: usize) {
        self.set_cursor(at, false);
        let start = self.text[..self.cursor].rfind(' ').map_or(0, |i| i + 1);
        let end = self.text[self.cursor..].find(' ').map_or(self.text.len(), |i| self.cursor + i);
        self.anchor = start;
        self.cursor = end;
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Types `s` over the selection. Control characters are dropped, so a
    /// pasted line break never enters the text. Returns whether the text
    /// changed.
    pub fn insert(&mut self, s: &str) -> bool {
        let s: String = s.chars().filter(|c| !c.is_control()).collect();
        self.replace(self.selection(), &s)
    }

    /// Backspace: the selection, or the char before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        let range = match self.has_selection() {
            true => self.selection(),
            false => prev_char(&self.text, self.cursor)..self.cursor,
        };
        self.replace(range, "")
    }

    /// Delete: the selection, or the char after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        let range = match self.has_selection() {
            true => self.selection(),
            false => self.cursor..next_char(&self.text, self.cursor),
        };
        self.replace(range, "")
    }

    pub fn copy(&self, clipboard: &mut (impl Clipboard + ?Sized)) {
        if self.has_selection() {
            clipboard.set_text(self.selected_text());
        }
    }

    pub fn cut(&mut self, clipboard: &mut (impl Clipboard + ?Sized)) -> bool {
        self.copy(clipboard);
        self.has_selection() && self.replace(self.selection(), "")
    }

    pub fn paste(&mut self, clipboard: &mut (impl Clipboard + ?Sized)) -> bool {
        clipboard.get_text().is_some_and(|s| self.insert(&s))
    }

    /// Reverts the last edit. Returns whether there was one.
    pub fn undo(&mut self) -> bool {
        let Some(e) = self.history.undo() else { return false };
        let range = e.at..e.at + e.inserted.len();
        self.text.replace_range(range, &e.removed);
        (self.cursor, self.anchor) = e.before;
        true
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(e) = self.history.redo() else { return false };
        let range = e.at..e.at + e.removed.len();
        self.text.replace_range(range, &e.inserted);
        self.cursor = e.at + e.inserted.len();
        self.anchor = self.cursor;
        true
    }

    /// Applies one keyboard event. Returns whether the text changed.
    ///
    /// Enter and Tab are left to the owning widget.
    pub fn apply(&mut self, event: &KeyEvent, clipboard: &mut (impl Clipboard + ?Sized)) -> bool {
        match event {
            KeyEvent::Text(text) => self.insert(text),
            KeyEvent::Press { key, modifiers } => self.apply_key(*key, *modifiers, clipboard),
        }
    }

    fn apply_key(&mut self, key: Key, m: Modifiers, clipboard: &mut (impl Clipboard + ?Sized)) -> bool {
        let (shift, command) = (m.shift, m.command());
        match key {
            Key::Backspace => return self.delete_backward(),
            Key::Delete => return self.delete_forward(),
            Key::ArrowLeft if command => self.move_word_left(shift),
            Key::ArrowRight if command => self.move_word_right(shift),
            Key::ArrowLeft => self.move_left(shift),
            Key::ArrowRight => self.move_right(shift),
            Key::Home => self.move_home(shift),
            Key::End => self.move_end(shift),
            Key::Escape => self.clear_selection(),
            Key::A if command => self.select_all(),
            Key::C if command => self.copy(clipboard),
            Key::X if command => return self.cut(clipboard),
            Key::V if command => return self.paste(clipboard),
            Key::Z if command && shift => return self.redo(),
            Key::Z if command => return self.undo(),
            Key::Y if command => return self.redo(),
            _ => {}
        }
        false
    }

    /// Single mutation path: every change goes through here and is recorded.
    fn replace(&mut self, range: Range<usize>, with: &str) -> bool {
        if range.is_empty() && with.is_empty() {
            return false;
        }
        let edit = Edit {
            at: range.start,
            removed: self.text[range.clone()].to_owned(),
            inserted: with.to_owned(),
            before: (self.cursor, self.anchor),
        };
        self.text.replace_range(range, with);
        self.cursor = edit.at + with.len();
        self.anchor = self.cursor;
        self.history.record(edit);
        true
    }
}

// ── UTF-8 helpers ─────────────────────────────────────────────────────────

fn prev_char(s: &str, from: usize) -> usize {
    s[..from].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char(s: &str, from: usize) -> usize {
    s[from..].chars().next().map_or(s.len(), |c| from + c.len_utf8())
}

/// Back over whitespace, then over the word before it.
fn prev_word(s: &str, from: usize) -> usize {
    s[..from].trim_end().trim_end_matches(|c: char| !c.is_whitespace()).len()
}

/// Forward over the rest of the word, then over the whitespace after it.
fn next_word(s: &str, from: usize) -> usize {
    let after = &s[from..];
    let rest = after.trim_start_matches(|c: char| !c.is_whitespace()).trim_start();
    from + after.len() - rest.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> KeyEvent {
        KeyEvent::Press { key, modifiers: Modifiers::NONE }
    }

    fn command(key: Key) -> KeyEvent {
        KeyEvent::Press { key, modifiers: Modifiers { ctrl: true, ..Modifiers::NONE } }
    }

    fn shifted(key: Key) -> KeyEvent {
        KeyEvent::Press { key, modifiers: Modifiers { shift: true, ..Modifiers::NONE } }
    }

    fn replay(edit: &mut TextEdit, events: &[KeyEvent], clipboard: &mut String) -> bool {
        events.iter().fold(false, |changed, e| edit.apply(e, &mut *clipboard) | changed)
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut e = TextEdit::new("held");
        e.set_cursor(3, false);
        assert!(e.insert("lo wor"));
        assert_eq!(e.text(), "hello word");
        assert_eq!(e.cursor(), 9);
    }

    #[test]
    fn backspace_and_delete_respect_char_boundaries() {
        let mut e = TextEdit::new("aé€b");
        e.move_left(false);
        assert!(e.delete_backward());
        assert_eq!(e.text(), "aéb");
        e.move_home(false);
        e.move_right(false);
        assert!(e.delete_forward());
        assert_eq!(e.text(), "ab");
        e.move_home(false);
        assert!(!e.delete_backward());
    }

    #[test]
    fn set_cursor_snaps_inside_a_multibyte_char() {
        let mut e = TextEdit::new("€x");
        e.set_cursor(2, false);
        assert_eq!(e.cursor(), 0);
        e.set_cursor(99, false);
        assert_eq!(e.cursor(), 4);
    }

    #[test]
    fn typing_replaces_selection() {
        let mut e = TextEdit::new("one two three");
        e.set_cursor(4, false);
        e.set_cursor(7, true);
        assert_eq!(e.selected_text(), "two");
        e.insert("2");
        assert_eq!(e.text(), "one 2 three");
        assert!(!e.has_selection());
    }

    #[test]
    fn arrows_collapse_or_extend_selection() {
        let mut e = TextEdit::new("abcdef");
        e.set_cursor(2, false);
        e.set_cursor(4, true);
        e.move_left(false);
        assert_eq!((e.cursor(), e.selection()), (2, 2..2));

        e.move_right(true);
        e.move_right(true);
        assert_eq!(e.selection(), 2..4);
        e.move_right(false);
        assert_eq!(e.cursor(), 4);
    }

    #[test]
    fn word_jumps() {
        let mut e = TextEdit::new("alpha  beta gamma");
        e.move_word_left(false);
        assert_eq!(e.cursor(), 12);
        e.move_word_left(false);
        assert_eq!(e.cursor(), 7);
        e.move_word_right(false);
        assert_eq!(e.cursor(), 12);
        e.move_home(false);
        e.move_word_right(true);
        assert_eq!(e.selected_text(), "alpha  ");
    }

    #[test]
    fn select_word_stops_at_spaces() {
        let mut e = TextEdit::new("say hello there");
        e.select_word(6);
        assert_eq!(e.selected_text(), "hello");
        e.select_word(0);
        assert_eq!(e.selected_text(), "say");
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut e = TextEdit::new("");
        assert!(!e.insert("\n\t"));
        assert!(e.insert("a\r\nb"));
        assert_eq!(e.text(), "ab");
    }

    #[test]
    fn shortcuts_copy_cut_and_paste() {
        let mut e = TextEdit::new("copy me");
        let mut clipboard = String::new();

        let changed = replay(&mut e, &[command(Key::A), command(Key::C), press(Key::End)], &mut clipboard);
        assert!(!changed);
        assert_eq!(clipboard, "copy me");

        assert!(replay(&mut e, &[command(Key::V)], &mut clipboard));
        assert_eq!(e.text(), "copy mecopy me");

        e.set_cursor(0, false);
        e.set_cursor(5, true);
        assert!(replay(&mut e, &[command(Key::X)], &mut clipboard));
        assert_eq!((e.text(), clipboard.as_str()), ("mecopy me", "copy "));

        // Cut with nothing selected leaves the clipboard alone.
        assert!(!replay(&mut e, &[command(Key::X)], &mut clipboard));
        assert_eq!(clipboard, "copy ");
    }

    #[test]
    fn undo_and_redo_walk_the_history() {
        let mut e = TextEdit::new("");
        let mut clipboard = String::new();
        let events = [
            KeyEvent::Text("ab".into()),
            KeyEvent::Text("c".into()),
            press(Key::Backspace),
            shifted(Key::Home),
            KeyEvent::Text("x".into()),
        ];
        replay(&mut e, &events, &mut clipboard);
        assert_eq!(e.text(), "x");

        let mut seen = Vec::new();
        while e.undo() {
            seen.push(e.text().to_owned());
        }
        assert_eq!(seen, ["ab", "abc", "ab", ""]);

        assert!(replay(&mut e, &[command(Key::Y), command(Key::Y)], &mut clipboard));
        assert_eq!((e.text(), e.cursor()), ("abc", 3));

        // A new edit drops the redo tail.
        e.insert("!");
        assert!(!e.redo());
        assert!(e.undo());
        assert_eq!(e.text(), "abc");
    }

    #[test]
    fn undo_restores_selection() {
        let mut e = TextEdit::new("hello");
        e.select_all();
        e.insert("bye");
        assert!(e.undo());
        assert_eq!(e.text(), "hello");
        assert_eq!(e.selection(), 0..5);
    }

    #[test]
    fn set_text_forgets_history() {
        let mut e = TextEdit::new("1");
        e.insert("2");
        e.set_text("42");
        assert!(!e.undo());
        assert_eq!(e.cursor(), 2);
    }
}

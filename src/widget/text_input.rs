//! Text input: a single-line editor.

use super::traits::Control;
use crate::input::{Event, Key};
use crate::layout::{Bounds, Rect};
use crate::terminal::OutputBuffer;

/// A single-line text input.
///
/// Edits arrive as byte-level [`Event::Char`] events (printable ASCII
/// is inserted, everything else ignored) plus the named editing keys.
/// The visible window scrolls horizontally to keep the cursor in view.
/// The display places the terminal cursor at the control's origin when
/// it is active; the editing position inside the line is this
/// control's own state.
pub struct TextInput {
    bounds: Bounds,
    /// Current text content.
    content: String,
    /// Cursor position (byte offset, always on a char boundary).
    cursor: usize,
}

impl TextInput {
    /// Create an empty input with the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            content: String::new(),
            cursor: 0,
        }
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the content, moving the cursor to the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position as a byte offset into the content.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.content[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
        self.content.remove(prev);
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
            true
        } else {
            false
        }
    }

    fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.content[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
        true
    }

    fn cursor_right(&mut self) -> bool {
        match self.content[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    fn cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    fn cursor_end(&mut self) -> bool {
        let moved = self.cursor != self.content.len();
        self.cursor = self.content.len();
        moved
    }

    /// The window of content shown in `width` columns, scrolled so the
    /// cursor's character stays visible.
    fn window(&self, width: usize) -> &str {
        if width == 0 {
            return "";
        }
        let cursor_chars = self.content[..self.cursor].chars().count();
        let scroll = cursor_chars.saturating_sub(width - 1);
        let start = self
            .content
            .char_indices()
            .nth(scroll)
            .map_or(self.content.len(), |(i, _)| i);
        let visible: &str = &self.content[start..];
        match visible.char_indices().nth(width) {
            Some((end, _)) => &visible[..end],
            None => visible,
        }
    }
}

impl Control for TextInput {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn render(&self, area: Rect, out: &mut OutputBuffer) {
        #[allow(clippy::cast_sign_loss)]
        let width = area.width().max(0) as usize;
        out.place(area.x1, area.y1, self.window(width));
    }

    fn handles_keys(&self) -> bool {
        true
    }

    fn on_key(&mut self, event: &Event) -> bool {
        match event {
            Event::Char(b) => {
                if b.is_ascii_graphic() || *b == b' ' {
                    self.insert_char(char::from(*b));
                    true
                } else {
                    false
                }
            }
            Event::Key(Key::Backspace) => self.backspace(),
            Event::Key(Key::Delete) => self.delete(),
            Event::Key(Key::Left) => self.cursor_left(),
            Event::Key(Key::Right) => self.cursor_right(),
            Event::Key(Key::Home) => self.cursor_home(),
            Event::Key(Key::End) => self.cursor_end(),
            _ => false,
        }
    }
}

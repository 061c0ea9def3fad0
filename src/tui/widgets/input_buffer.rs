//! Single-line text input with cursor management.
//!
//! Used by the upload page's path field and the chat input.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::tui::theme;

/// A simple text input buffer with cursor positioning.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
    /// Byte offset into `content`, always on a char boundary.
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a whole string at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let flattened = s.replace("\r\n", " ").replace(['\r', '\n'], " ");
        self.content.insert_str(self.cursor, &flattened);
        self.cursor += flattened.len();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.next_boundary();
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }

    /// Render the buffer as one display line.
    ///
    /// With `show_cursor` the character under the cursor is drawn inverted.
    /// An empty buffer renders the placeholder in muted text.
    pub fn to_line(&self, show_cursor: bool, placeholder: &str) -> Line<'static> {
        if self.content.is_empty() {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(Span::styled(" ", cursor_style()));
            }
            spans.push(Span::styled(placeholder.to_string(), theme::muted()));
            return Line::from(spans);
        }
        if !show_cursor {
            return Line::raw(self.content.clone());
        }

        let before = &self.content[..self.cursor];
        let cursor_char = self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after = self
            .content
            .get(self.cursor + cursor_char.len()..)
            .unwrap_or("");
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(cursor_char, cursor_style()),
            Span::raw(after.to_string()),
        ])
    }
}

fn cursor_style() -> Style {
    Style::default().bg(theme::TEXT).fg(theme::BG_BASE)
}

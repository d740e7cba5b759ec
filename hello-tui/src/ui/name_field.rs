//! Name input with tui-textarea integration
//!
//! Wraps a single-line `TextArea`. The field keeps its own cursor and
//! edit buffer; the store only ever sees the full text after each edit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Stateful name field
pub struct NameField {
    textarea: TextArea<'static>,
}

impl NameField {
    /// Create a field holding `name`, cursor at the end
    pub fn new(name: &str) -> Self {
        let mut textarea = TextArea::from([name.to_string()]);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type a name...");

        let mut field = Self { textarea };
        field.set_focus(true, true);
        field
    }

    /// Current text
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Apply a key press
    ///
    /// Returns the new text when the key modified the field.
    pub fn input(&mut self, key: KeyEvent) -> Option<String> {
        // Newline keys would split the field into several lines
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => return None,
            (KeyCode::Char('m'), m) | (KeyCode::Char('j'), m)
                if m.contains(KeyModifiers::CONTROL) =>
            {
                return None
            }
            _ => {}
        }

        if self.textarea.input(key) {
            Some(self.text())
        } else {
            None
        }
    }

    /// Restyle for focus; unfocused fields hide their cursor
    pub fn set_focus(&mut self, focused: bool, colors: bool) {
        let border_style = match (focused, colors) {
            (true, true) => Style::default().fg(Color::Cyan),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default(),
        };

        self.textarea.set_block(
            Block::default()
                .title(" Name ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        self.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }

    pub(crate) fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_with_name() {
        assert_eq!(NameField::new("Arif").text(), "Arif");
    }

    #[test]
    fn test_typing_appends_at_end() {
        let mut field = NameField::new("Arif");
        assert_eq!(field.input(key(KeyCode::Char('!'))), Some("Arif!".to_string()));
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut field = NameField::new("Zee");
        assert_eq!(field.input(key(KeyCode::Backspace)), Some("Ze".to_string()));
    }

    #[test]
    fn test_cursor_moves_do_not_report_change() {
        let mut field = NameField::new("Zee");
        assert_eq!(field.input(key(KeyCode::Left)), None);
        assert_eq!(field.text(), "Zee");
    }

    #[test]
    fn test_enter_is_rejected() {
        let mut field = NameField::new("Zee");
        assert_eq!(field.input(key(KeyCode::Enter)), None);
        assert_eq!(
            field.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(field.text(), "Zee");
    }
}

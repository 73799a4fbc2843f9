use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Glyph drawn in place of each character of a masked input
pub const MASK_CHAR: char = '•';

/// A single-line text input with cursor support and optional masking
///
/// The cursor is tracked in characters, not bytes, so multi-byte input
/// edits cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    /// Current input value
    pub value: String,

    /// Placeholder text shown when empty
    pub placeholder: String,

    /// When set, each character is drawn as this glyph
    pub mask: Option<char>,

    /// Current cursor position in characters (0-indexed)
    pub cursor_pos: usize,

    /// Whether this input is currently focused
    pub is_focused: bool,
}

impl TextInput {
    /// Create a new empty TextInput
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Draw the value masked with `mask`
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Switch masking on or off without touching the value
    pub fn set_mask(&mut self, mask: Option<char>) {
        self.mask = mask;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the character at `char_idx`
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input (value or cursor) was modified
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                let at = self.byte_offset(self.cursor_pos);
                self.value.insert(at, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                let at = self.byte_offset(self.cursor_pos - 1);
                self.value.remove(at);
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Delete if self.cursor_pos < self.char_len() => {
                let at = self.byte_offset(self.cursor_pos);
                self.value.remove(at);
                true
            }
            KeyCode::Left if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Right if self.cursor_pos < self.char_len() => {
                self.cursor_pos += 1;
                true
            }
            KeyCode::Home if self.cursor_pos > 0 => {
                self.cursor_pos = 0;
                true
            }
            KeyCode::End if self.cursor_pos < self.char_len() => {
                self.cursor_pos = self.char_len();
                true
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen, without the cursor
    pub fn display_value(&self) -> String {
        match self.mask {
            Some(mask) => std::iter::repeat(mask).take(self.char_len()).collect(),
            None => self.value.clone(),
        }
    }

    /// Render the text input widget, overriding the border color when given
    pub fn render_with_border(&self, frame: &mut Frame, area: Rect, border: Option<Color>) {
        let border_color = border.unwrap_or(if self.is_focused {
            Color::Yellow
        } else {
            Color::White
        });

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(border_color));

        let display_text = if self.value.is_empty() && !self.is_focused {
            Line::from(self.placeholder.clone()).style(Style::default().fg(Color::DarkGray))
        } else if self.is_focused {
            let mut display: Vec<char> = self.display_value().chars().collect();
            display.insert(self.cursor_pos.min(display.len()), '█');
            Line::from(display.into_iter().collect::<String>())
        } else {
            Line::from(self.display_value())
        };

        let paragraph = Paragraph::new(display_text).block(block);
        frame.render_widget(paragraph, area);
    }

    /// Clear the input value
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

}

/// Whether a character key with these modifiers produces text
///
/// Ctrl or Alt alone are shortcuts. Both together is how AltGr arrives on
/// Windows, where it composes characters such as `@` or `€`.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    ctrl == alt
}

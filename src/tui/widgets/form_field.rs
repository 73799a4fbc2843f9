use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text_input::TextInput;
use crate::tui::validation::{FieldValidator, ValidationResult};

/// A form field widget that combines a label, input, and validation state
///
/// When a validator is attached the field re-validates itself every time its
/// value changes, so the message under the input always matches the text in it.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Field label
    pub label: String,

    /// The text input widget
    pub input: TextInput,

    /// Current validation state
    pub validation_state: ValidationState,

    /// Whether this field is focused
    pub is_focused: bool,

    /// Optional help text displayed below the field
    pub help_text: Option<String>,

    /// Live validator run on every value change
    pub validator: Option<FieldValidator>,
}

/// Validation state for a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    /// No validation performed yet
    Idle,

    /// Field passed its validator
    Valid,

    /// Field is invalid (with error message)
    Invalid(String),
}

impl From<ValidationResult> for ValidationState {
    fn from(result: ValidationResult) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(msg) => Self::Invalid(msg),
        }
    }
}

impl ValidationState {
    /// Get the color for this validation state
    pub fn color(&self) -> Color {
        match self {
            Self::Idle => Color::White,
            Self::Valid => Color::Green,
            Self::Invalid(_) => Color::Red,
        }
    }

    /// Get the icon for this validation state
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Valid => "✓",
            Self::Invalid(_) => "✗",
        }
    }

    /// Get the error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl FormField {
    /// Create a new form field with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TextInput::new(),
            validation_state: ValidationState::Idle,
            is_focused: false,
            help_text: None,
            validator: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Set the input widget
    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    /// Attach a validator that runs on every value change
    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
        self.input.set_focused(focused);
    }

    /// Run the attached validator against the current value
    ///
    /// Without a validator the field is always valid.
    pub fn validate(&mut self) -> ValidationResult {
        let result = match self.validator {
            Some(validator) => validator(self.input.value()),
            None => Ok(()),
        };
        self.validation_state = result.clone().into();
        result
    }

    /// Refresh the displayed validation state from the current value
    fn revalidate(&mut self) {
        if let Some(validator) = self.validator {
            self.validation_state = validator(self.input.value()).into();
        }
    }

    /// Replace the validation message with an error
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.validation_state = ValidationState::Invalid(msg.into());
    }

    /// Handle keyboard input
    ///
    /// Returns true if the value changed. Cursor movement alone does not
    /// count as a change and does not re-validate.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value.clone();
        self.input.handle_key(key);
        let changed = self.input.value != before;

        if changed {
            self.revalidate();
        }
        changed
    }

    /// Reset value and validation state
    pub fn reset(&mut self) {
        self.input.clear();
        self.validation_state = ValidationState::Idle;
    }

    /// Render the form field
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help/validation message
        ])
        .split(area);

        let label_style = if self.is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let validation_icon = self.validation_state.icon();
        let label_line = if !validation_icon.is_empty() {
            Line::from(vec![
                Span::styled(self.label.clone(), label_style),
                Span::raw(" "),
                Span::styled(validation_icon, Style::default().fg(self.validation_state.color())),
            ])
        } else {
            Line::from(Span::styled(self.label.clone(), label_style))
        };
        frame.render_widget(Paragraph::new(label_line), chunks[0]);

        let border = self.validation_state.is_invalid().then_some(Color::Red);
        self.input.render_with_border(frame, chunks[1], border);

        let message = if let Some(val_msg) = self.validation_state.message() {
            Some((val_msg, self.validation_state.color()))
        } else {
            self.help_text.as_deref().map(|help| (help, Color::DarkGray))
        };

        if let Some((text, color)) = message {
            let message_para = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))));
            frame.render_widget(message_para, chunks[2]);
        }
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        self.input.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn min_two(value: &str) -> ValidationResult {
        if value.len() < 2 {
            Err("too short".to_string())
        } else {
            Ok(())
        }
    }

    fn press(field: &mut FormField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn test_new_form_field() {
        let field = FormField::new("Username");
        assert_eq!(field.label, "Username");
        assert_eq!(field.validation_state, ValidationState::Idle);
        assert!(!field.is_focused);
        assert!(field.validator.is_none());
    }

    #[test]
    fn test_with_help() {
        let field = FormField::new("Password").with_help("Any value is accepted");
        assert_eq!(field.help_text, Some("Any value is accepted".to_string()));
    }

    #[test]
    fn test_validate_without_validator_is_valid() {
        let mut field = FormField::new("Nickname");
        assert_eq!(field.validate(), Ok(()));
        assert_eq!(field.validation_state, ValidationState::Valid);
    }

    #[test]
    fn test_live_validation_on_change() {
        let mut field = FormField::new("Name").with_validator(min_two);

        assert!(press(&mut field, KeyCode::Char('a')));
        assert_eq!(field.validation_state, ValidationState::Invalid("too short".to_string()));

        assert!(press(&mut field, KeyCode::Char('b')));
        assert_eq!(field.validation_state, ValidationState::Valid);

        assert!(press(&mut field, KeyCode::Backspace));
        assert_eq!(field.validation_state, ValidationState::Invalid("too short".to_string()));
    }

    #[test]
    fn test_edits_without_validator_stay_idle() {
        let mut field = FormField::new("Password");
        assert!(press(&mut field, KeyCode::Char('x')));
        assert_eq!(field.validation_state, ValidationState::Idle);
    }

    #[test]
    fn test_cursor_movement_does_not_revalidate() {
        let mut field = FormField::new("Name").with_validator(min_two);
        for c in "abc".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        field.set_error("custom");

        assert!(!press(&mut field, KeyCode::Left));
        assert_eq!(field.validation_state, ValidationState::Invalid("custom".to_string()));
    }

    #[test]
    fn test_reset() {
        let mut field = FormField::new("Name").with_validator(min_two);
        press(&mut field, KeyCode::Char('a'));
        field.reset();
        assert_eq!(field.value(), "");
        assert_eq!(field.validation_state, ValidationState::Idle);
    }

    #[test]
    fn test_focus_state() {
        let mut field = FormField::new("Test");
        field.set_focused(true);
        assert!(field.is_focused);
        assert!(field.input.is_focused);
    }

    #[test]
    fn test_validation_state_from_result() {
        let valid: ValidationResult = Ok(());
        let invalid: ValidationResult = Err("bad".to_string());
        assert_eq!(ValidationState::from(valid), ValidationState::Valid);
        assert_eq!(ValidationState::from(invalid), ValidationState::Invalid("bad".to_string()));
    }

    #[test]
    fn test_validation_state_message() {
        assert_eq!(ValidationState::Idle.message(), None);
        assert_eq!(ValidationState::Valid.message(), None);
        assert_eq!(ValidationState::Invalid("Bad!".to_string()).message(), Some("Bad!"));
    }

    #[test]
    fn test_validation_state_color_and_icon() {
        assert_eq!(ValidationState::Idle.color(), Color::White);
        assert_eq!(ValidationState::Valid.color(), Color::Green);
        assert_eq!(ValidationState::Invalid("e".to_string()).color(), Color::Red);
        assert_eq!(ValidationState::Idle.icon(), "");
        assert_eq!(ValidationState::Invalid("e".to_string()).icon(), "✗");
    }
}

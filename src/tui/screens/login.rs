use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

use crate::models::Route;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenTransition};
use crate::tui::state::FocusCycle;
use crate::tui::validation::{validate_username, INVALID_SUBMIT_MESSAGE};
use crate::tui::widgets::common::{self, ButtonState};
use crate::tui::widgets::{FormField, TextInput, ValidationState};

pub const FOCUS_INPUT: usize = 0;
pub const FOCUS_NEXT: usize = 1;

/// Username entry screen
///
/// The error message is recomputed on every edit; the "Next" button only
/// becomes active once the username is non-empty and error free.
#[derive(Debug, Clone)]
pub struct LoginState {
    pub username: FormField,
    pub focus: FocusCycle,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        let mut username = FormField::new("Username")
            .with_input(TextInput::new().with_placeholder("Enter your username"))
            .with_validator(validate_username);
        username.set_focused(true);

        Self {
            username,
            focus: FocusCycle::new(2),
        }
    }

    /// Current username text
    pub fn username(&self) -> &str {
        self.username.value()
    }

    /// Current error message; empty means no error
    pub fn error_message(&self) -> &str {
        match &self.username.validation_state {
            ValidationState::Invalid(msg) => msg,
            _ => "",
        }
    }

    /// Whether the "Next" button is enabled
    pub fn can_submit(&self) -> bool {
        !self.username().is_empty() && self.error_message().is_empty()
    }

    /// Press "Next"
    ///
    /// With the gate closed the username is validated again and, if still
    /// invalid, the message asks for a valid username.
    pub fn submit(&mut self) -> ScreenTransition {
        if self.can_submit() {
            return ScreenTransition::GoTo(Route::password(self.username()));
        }

        match self.username.validate() {
            Ok(()) => ScreenTransition::GoTo(Route::password(self.username())),
            Err(_) => {
                self.username.set_error(INVALID_SUBMIT_MESSAGE);
                ScreenTransition::Stay
            }
        }
    }

    fn sync_focus(&mut self) {
        self.username.set_focused(self.focus.is(FOCUS_INPUT));
    }

    /// Back to a blank form with the input focused
    pub fn reset(&mut self) {
        self.username.reset();
        self.focus.reset();
        self.sync_focus();
    }
}

pub fn render(state: &LoginState, frame: &mut Frame, context: &AppContext) {
    let chunks = common::render_screen_layout(frame.area());

    let title = format!("Sign in [{}]", context.state_machine.current());
    common::render_title(frame, chunks[0], &title);

    let column = common::centered_rect(60, 100, chunks[1]);
    let rows = Layout::vertical([
        Constraint::Length(1), // Heading
        Constraint::Length(1),
        Constraint::Length(5), // Username field
        Constraint::Length(3), // Next button
    ])
    .flex(Flex::Center)
    .split(column);

    let heading = Paragraph::new("Who is signing in?").style(Style::default().fg(Color::Cyan));
    frame.render_widget(heading, rows[0]);

    state.username.render(frame, rows[2]);

    common::render_button(
        frame,
        rows[3],
        "Next",
        ButtonState {
            enabled: state.can_submit(),
            focused: state.focus.is(FOCUS_NEXT),
        },
    );

    common::render_help(
        frame,
        chunks[2],
        &[("Tab", "Switch focus"), ("Enter", "Next"), ("Esc", "Quit")],
    );
}

#[async_trait]
impl ScreenTrait for LoginState {
    fn render(&self, frame: &mut Frame, context: &AppContext) {
        render(self, frame, context)
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        match key.code {
            KeyCode::Esc => return Ok(ScreenTransition::Back),
            KeyCode::Tab => {
                self.focus.next();
                self.sync_focus();
            }
            KeyCode::BackTab => {
                self.focus.previous();
                self.sync_focus();
            }
            KeyCode::Enter => {
                let transition = self.submit();
                if transition == ScreenTransition::Stay {
                    debug!("username submit blocked by validation");
                }
                return Ok(transition);
            }
            _ if self.focus.is(FOCUS_INPUT) => {
                self.username.handle_key(key);
            }
            _ => {}
        }

        Ok(ScreenTransition::Stay)
    }

    async fn on_enter(&mut self, _context: &mut AppContext) -> Result<()> {
        self.reset();
        Ok(())
    }

    async fn on_exit(&mut self, _context: &mut AppContext) -> Result<()> {
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::validation::TOO_SHORT_MESSAGE;
    use crossterm::event::KeyModifiers;

    fn type_text(state: &mut LoginState, text: &str) {
        for c in text.chars() {
            state.username.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_state() {
        let state = LoginState::new();
        assert_eq!(state.username(), "");
        assert_eq!(state.error_message(), "");
        assert!(!state.can_submit());
        assert!(state.username.is_focused);
    }

    #[test]
    fn test_short_username_shows_error_and_blocks_submit() {
        let mut state = LoginState::new();
        type_text(&mut state, "ab");
        assert_eq!(state.error_message(), TOO_SHORT_MESSAGE);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_valid_username_opens_gate() {
        let mut state = LoginState::new();
        type_text(&mut state, "abc");
        assert_eq!(state.error_message(), "");
        assert!(state.can_submit());
        assert_eq!(state.submit(), ScreenTransition::GoTo(Route::password("abc")));
    }

    #[test]
    fn test_clearing_input_keeps_gate_closed() {
        let mut state = LoginState::new();
        type_text(&mut state, "a");
        state
            .username
            .handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(state.username(), "");
        assert_eq!(state.error_message(), TOO_SHORT_MESSAGE);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_with_closed_gate_asks_for_valid_username() {
        let mut state = LoginState::new();
        type_text(&mut state, "ab");
        assert_eq!(state.submit(), ScreenTransition::Stay);
        assert_eq!(state.error_message(), INVALID_SUBMIT_MESSAGE);

        // Next edit goes back to the live message
        type_text(&mut state, "c");
        assert_eq!(state.error_message(), "");
        assert!(state.can_submit());
    }

    #[test]
    fn test_submit_on_empty_form() {
        let mut state = LoginState::new();
        assert_eq!(state.submit(), ScreenTransition::Stay);
        assert_eq!(state.error_message(), INVALID_SUBMIT_MESSAGE);
    }

    #[test]
    fn test_reset_clears_form() {
        let mut state = LoginState::new();
        type_text(&mut state, "abc");
        state.focus.next();
        state.reset();
        assert_eq!(state.username(), "");
        assert_eq!(state.error_message(), "");
        assert!(state.focus.is(FOCUS_INPUT));
        assert!(state.username.is_focused);
    }
}

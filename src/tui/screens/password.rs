use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::Route;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenTransition};
use crate::tui::state::FocusCycle;
use crate::tui::widgets::common::{self, ButtonState};
use crate::tui::widgets::text_input::MASK_CHAR;
use crate::tui::widgets::{FormField, TextInput};

pub const FOCUS_INPUT: usize = 0;
pub const FOCUS_SIGN_IN: usize = 1;
pub const FOCUS_TOGGLE: usize = 2;

/// Password entry screen
///
/// Any password is accepted. The value only lives while this screen is
/// active and is cleared as soon as navigation leaves it.
#[derive(Debug, Clone)]
pub struct PasswordState {
    /// Username taken from the route, display only
    pub username: String,
    pub password: FormField,
    pub is_password_visible: bool,
    pub focus: FocusCycle,
}

impl Default for PasswordState {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordState {
    pub fn new() -> Self {
        let mut password = FormField::new("Password")
            .with_input(TextInput::new().with_mask(MASK_CHAR))
            .with_help("Any password is accepted");
        password.set_focused(true);

        Self {
            username: String::new(),
            password,
            is_password_visible: false,
            focus: FocusCycle::new(3),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}! Enter your password to continue.", self.username)
    }

    /// Show or hide the password characters; the value itself is untouched
    pub fn toggle_visibility(&mut self) {
        self.is_password_visible = !self.is_password_visible;
        let mask = (!self.is_password_visible).then_some(MASK_CHAR);
        self.password.input.set_mask(mask);
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_password_visible {
            "Hide"
        } else {
            "Show"
        }
    }

    /// Press "Sign in"
    pub fn submit(&self) -> ScreenTransition {
        ScreenTransition::GoTo(Route::logged_in(self.username.clone()))
    }

    fn sync_focus(&mut self) {
        self.password.set_focused(self.focus.is(FOCUS_INPUT));
    }

    /// Drop the password and username and start over masked
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.reset();
        if self.is_password_visible {
            self.toggle_visibility();
        }
        self.focus.reset();
        self.sync_focus();
    }
}

pub fn render(state: &PasswordState, frame: &mut Frame, context: &AppContext) {
    let chunks = common::render_screen_layout(frame.area());

    let title = format!("Sign in [{}]", context.state_machine.current());
    common::render_title(frame, chunks[0], &title);

    let column = common::centered_rect(60, 100, chunks[1]);
    let rows = Layout::vertical([
        Constraint::Length(2), // Greeting
        Constraint::Length(5), // Password field
        Constraint::Length(3), // Buttons
    ])
    .flex(Flex::Center)
    .split(column);

    let greeting = Paragraph::new(state.greeting())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(greeting, rows[0]);

    state.password.render(frame, rows[1]);

    let buttons = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    common::render_button(
        frame,
        buttons[0],
        "Sign in",
        ButtonState {
            enabled: true,
            focused: state.focus.is(FOCUS_SIGN_IN),
        },
    );
    common::render_button(
        frame,
        buttons[1],
        state.toggle_label(),
        ButtonState {
            enabled: true,
            focused: state.focus.is(FOCUS_TOGGLE),
        },
    );

    common::render_help(
        frame,
        chunks[2],
        &[("Tab", "Switch focus"), ("Enter", "Activate"), ("Esc", "Back")],
    );
}

#[async_trait]
impl ScreenTrait for PasswordState {
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
            KeyCode::Enter if self.focus.is(FOCUS_TOGGLE) => self.toggle_visibility(),
            KeyCode::Enter => return Ok(self.submit()),
            _ if self.focus.is(FOCUS_INPUT) => {
                self.password.handle_key(key);
            }
            _ => {}
        }

        Ok(ScreenTransition::Stay)
    }

    async fn on_enter(&mut self, context: &mut AppContext) -> Result<()> {
        self.reset();
        self.username = context
            .state_machine
            .current()
            .username()
            .unwrap_or_default()
            .to_string();
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
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn state_for(username: &str) -> PasswordState {
        let mut state = PasswordState::new();
        state.username = username.to_string();
        state
    }

    #[test]
    fn test_initial_state_is_masked_and_empty() {
        let state = PasswordState::new();
        assert_eq!(state.password.value(), "");
        assert!(!state.is_password_visible);
        assert_eq!(state.password.input.mask, Some(MASK_CHAR));
        assert_eq!(state.toggle_label(), "Show");
    }

    #[test]
    fn test_greeting_uses_route_username() {
        let state = state_for("abc");
        assert_eq!(state.greeting(), "Hello, abc! Enter your password to continue.");
    }

    #[test]
    fn test_toggle_twice_restores_mode_and_keeps_value() {
        let mut state = state_for("abc");
        for c in "hunter2".chars() {
            state
                .password
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        state.toggle_visibility();
        assert!(state.is_password_visible);
        assert_eq!(state.toggle_label(), "Hide");
        assert_eq!(state.password.input.display_value(), "hunter2");

        state.toggle_visibility();
        assert!(!state.is_password_visible);
        assert_eq!(state.password.input.display_value(), "•••••••");
        assert_eq!(state.password.value(), "hunter2");
    }

    #[test]
    fn test_empty_password_submits() {
        let state = state_for("abc");
        assert_eq!(state.submit(), ScreenTransition::GoTo(Route::logged_in("abc")));
    }

    #[test]
    fn test_reset_discards_password_and_visibility() {
        let mut state = state_for("abc");
        state
            .password
            .handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        state.toggle_visibility();
        state.focus.next();
        state.focus.next();
        assert!(state.focus.is(FOCUS_TOGGLE));

        state.reset();
        assert_eq!(state.username, "");
        assert_eq!(state.password.value(), "");
        assert!(!state.is_password_visible);
        assert_eq!(state.password.input.mask, Some(MASK_CHAR));
        assert!(state.focus.is(FOCUS_INPUT));
    }

    #[tokio::test]
    async fn test_enter_without_route_username_shows_empty_name() {
        let mut context = AppContext::default();
        assert_eq!(context.state_machine.current(), &Route::Login);

        let mut state = state_for("stale");
        state.on_enter(&mut context).await.expect("Failed to enter screen");
        assert_eq!(state.username, "");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("Failed to create terminal");
        terminal
            .draw(|frame| state.render(frame, &context))
            .expect("Failed to draw");
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Hello, ! Enter your password to continue."));
    }
}

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenTransition};
use crate::tui::widgets::common;

/// Terminal screen of the flow: a static welcome message
#[derive(Debug, Clone, Default)]
pub struct LoggedInState {
    pub username: String,
}

impl LoggedInState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome, {}! You are logged in.", self.username)
    }
}

pub fn render(state: &LoggedInState, frame: &mut Frame, context: &AppContext) {
    let chunks = common::render_screen_layout(frame.area());

    let title = format!("Sign in [{}]", context.state_machine.current());
    common::render_title(frame, chunks[0], &title);

    let [message_area] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(chunks[1]);

    let message = Paragraph::new(state.welcome_message())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    common::render_help(frame, chunks[2], &[("Esc", "Back"), ("q", "Quit")]);
}

#[async_trait]
impl ScreenTrait for LoggedInState {
    fn render(&self, frame: &mut Frame, context: &AppContext) {
        render(self, frame, context)
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Esc => ScreenTransition::Back,
            KeyCode::Char('q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    async fn on_enter(&mut self, context: &mut AppContext) -> Result<()> {
        self.username = context
            .state_machine
            .current()
            .username()
            .unwrap_or_default()
            .to_string();
        Ok(())
    }

    async fn on_exit(&mut self, _context: &mut AppContext) -> Result<()> {
        self.username.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_welcome_message_interpolates_username() {
        let state = LoggedInState {
            username: "abc".to_string(),
        };
        assert_eq!(state.welcome_message(), "Welcome, abc! You are logged in.");
    }

    #[test]
    fn test_welcome_message_with_missing_username() {
        assert_eq!(LoggedInState::new().welcome_message(), "Welcome, ! You are logged in.");
    }

    #[tokio::test]
    async fn test_enter_without_route_username_shows_empty_name() {
        let mut context = AppContext::default();
        assert_eq!(context.state_machine.current(), &Route::Login);

        let mut state = LoggedInState {
            username: "stale".to_string(),
        };
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
        assert!(screen.contains("Welcome, ! You are logged in."));
    }
}

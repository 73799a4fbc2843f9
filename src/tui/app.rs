use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::time::Duration;
use tracing::{info, warn};

use crate::models::AppConfig;
use super::screen_trait::{Screen as ScreenTrait, ScreenId, ScreenTransition};
use super::screens;
use super::state_machine::ScreenStateMachine;

/// Context that screens need access to (everything except screen states)
#[derive(Debug, Default)]
pub struct AppContext {
    pub should_quit: bool,
    pub state_machine: ScreenStateMachine,
}

/// Container for all screen states
#[derive(Debug, Default)]
pub struct ScreenStates {
    pub login_state: screens::LoginState,
    pub password_state: screens::PasswordState,
    pub logged_in_state: screens::LoggedInState,
}

impl ScreenStates {
    pub fn screen(&self, id: ScreenId) -> &dyn ScreenTrait {
        match id {
            ScreenId::Login => &self.login_state,
            ScreenId::Password => &self.password_state,
            ScreenId::LoggedIn => &self.logged_in_state,
        }
    }

    pub fn screen_mut(&mut self, id: ScreenId) -> &mut dyn ScreenTrait {
        match id {
            ScreenId::Login => &mut self.login_state,
            ScreenId::Password => &mut self.password_state,
            ScreenId::LoggedIn => &mut self.logged_in_state,
        }
    }
}

pub struct App {
    pub context: AppContext,
    pub states: ScreenStates,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            context: AppContext::default(),
            states: ScreenStates::default(),
            tick_rate: config.tick_rate,
        })
    }

    /// Identifier of the screen for the current route
    pub fn current_screen(&self) -> ScreenId {
        self.context.state_machine.current().screen_id()
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.enter_current_screen().await?;

        while !self.context.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Handle input with timeout
            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }
        }

        info!("sign-in flow finished");
        Ok(())
    }

    /// Draw the screen for the current route
    pub fn render(&self, frame: &mut Frame) {
        self.states
            .screen(self.current_screen())
            .render(frame, &self.context);
    }

    /// Feed one key press through the current screen and apply its transition
    ///
    /// Ctrl+C quits from anywhere before the screen sees the key.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.apply_transition(ScreenTransition::Quit).await;
        }

        // Split borrows: context and states are separate, so we can borrow both
        let id = self.current_screen();
        let context = &mut self.context;
        let transition = self.states.screen_mut(id).handle_key(context, key).await?;

        self.apply_transition(transition).await
    }

    async fn apply_transition(&mut self, transition: ScreenTransition) -> Result<()> {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoTo(route) => {
                let current = self.context.state_machine.current();
                if !current.allows(&route) {
                    warn!(from = %current, to = %route, "screen requested a transition outside the flow");
                    return Ok(());
                }

                self.exit_current_screen().await?;
                self.context.state_machine.go_to(route);
                self.enter_current_screen().await?;
            }
            ScreenTransition::Back => {
                if self.context.state_machine.history().is_empty() {
                    info!("back pressed on the first screen, quitting");
                    self.context.should_quit = true;
                    return Ok(());
                }

                self.exit_current_screen().await?;
                self.context.state_machine.go_back();
                self.enter_current_screen().await?;
            }
            ScreenTransition::Quit => {
                info!("quit requested");
                self.context.should_quit = true;
            }
        }

        Ok(())
    }

    async fn enter_current_screen(&mut self) -> Result<()> {
        let id = self.current_screen();
        info!(route = %self.context.state_machine.current(), "entering screen");
        let context = &mut self.context;
        self.states.screen_mut(id).on_enter(context).await
    }

    async fn exit_current_screen(&mut self) -> Result<()> {
        let id = self.current_screen();
        let context = &mut self.context;
        self.states.screen_mut(id).on_exit(context).await
    }
}

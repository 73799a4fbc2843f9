use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::models::Route;
use crate::tui::app::AppContext;

/// Screen trait defines the interface for all TUI screens
///
/// This trait formalizes the screen lifecycle and provides a consistent
/// interface for rendering, input handling, and lifecycle hooks.
///
/// Note: Methods take `&mut self` for state and `context` for app-level resources.
/// This separation allows us to borrow screen state and app context independently,
/// avoiding self-referential borrow issues.
#[async_trait]
pub trait Screen: Send {
    /// Render this screen to the terminal frame
    fn render(&self, frame: &mut Frame, context: &AppContext);

    /// Handle keyboard input and return the next screen transition
    async fn handle_key(&mut self, context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition>;

    /// Called when entering this screen (optional lifecycle hook)
    ///
    /// Screens rebuild their state here from the route they were entered with.
    async fn on_enter(&mut self, context: &mut AppContext) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Called when leaving this screen (optional lifecycle hook)
    ///
    /// Use this to drop anything the screen must not keep once navigation moves on
    async fn on_exit(&mut self, context: &mut AppContext) -> Result<()> {
        let _ = context;
        Ok(())
    }
}

/// Screen transition represents the result of handling input
///
/// This enum defines all possible navigation actions that can occur
/// after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen (no navigation)
    Stay,

    /// Navigate forward to a route
    GoTo(Route),

    /// Go back to the previous route in history
    Back,

    /// Quit the application
    Quit,
}

/// Screen identifier for each screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    Password,
    LoggedIn,
}

use tracing::{debug, warn};

use crate::models::Route;

/// ScreenStateMachine manages route navigation state
///
/// This state machine tracks:
/// - The current route, parameters included
/// - Navigation history for back support
///
/// Forward moves are limited to the edges of the sign-in flow; anything
/// else is refused and leaves the state untouched.
#[derive(Debug, Default)]
pub struct ScreenStateMachine {
    /// Currently active route
    current: Route,

    /// Navigation history (for back functionality)
    history: Vec<Route>,
}

impl ScreenStateMachine {
    /// Create a new ScreenStateMachine starting at the login route
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate forward to `route`
    ///
    /// Returns true if the transition was applied
    pub fn go_to(&mut self, route: Route) -> bool {
        if !self.current.allows(&route) {
            warn!(from = %self.current, to = %route, "refusing transition outside the flow");
            return false;
        }

        debug!(from = %self.current, to = %route, "navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Go back to the previous route
    ///
    /// Returns true if we went back, false if there's no history
    pub fn go_back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            debug!(from = %self.current, to = %previous, "navigating back");
            self.current = previous;
            true
        } else {
            false
        }
    }

    /// Get the current route
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Get the navigation history
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

use std::fmt;

use crate::tui::screen_trait::ScreenId;

/// A navigation destination together with the parameters its screen needs
///
/// The username travels by value: each route owns its own copy, so no screen
/// ever shares state with another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Password { username: String },
    LoggedIn { username: String },
}

impl Route {
    /// Route reached after a successful username submit
    pub fn password(username: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
        }
    }

    /// Route reached after submitting the password screen
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self::LoggedIn {
            username: username.into(),
        }
    }

    /// The screen that renders this route
    pub fn screen_id(&self) -> ScreenId {
        match self {
            Self::Login => ScreenId::Login,
            Self::Password { .. } => ScreenId::Password,
            Self::LoggedIn { .. } => ScreenId::LoggedIn,
        }
    }

    /// The username parameter, if this route carries one
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Login => None,
            Self::Password { username } | Self::LoggedIn { username } => Some(username),
        }
    }

    /// Whether a forward transition from this route to `next` is part of the flow
    ///
    /// Login may only move to Password, Password may only move to LoggedIn for
    /// the same username, and LoggedIn is terminal.
    pub fn allows(&self, next: &Route) -> bool {
        match (self, next) {
            (Self::Login, Self::Password { .. }) => true,
            (Self::Password { username: from }, Self::LoggedIn { username: to }) => from == to,
            _ => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Password { username } => write!(f, "password/{}", username),
            Self::LoggedIn { username } => write!(f, "loggedIn/{}", username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_username_extraction() {
        assert_eq!(Route::Login.username(), None);
        assert_eq!(Route::password("abc").username(), Some("abc"));
        assert_eq!(Route::logged_in("abc").username(), Some("abc"));
    }

    #[test]
    fn test_missing_username_falls_back_to_empty() {
        assert_eq!(Route::Login.username().unwrap_or_default(), "");
    }

    #[test]
    fn test_screen_ids() {
        assert_eq!(Route::Login.screen_id(), ScreenId::Login);
        assert_eq!(Route::password("x").screen_id(), ScreenId::Password);
        assert_eq!(Route::logged_in("x").screen_id(), ScreenId::LoggedIn);
    }

    #[test]
    fn test_allowed_transitions() {
        assert!(Route::Login.allows(&Route::password("abc")));
        assert!(Route::password("abc").allows(&Route::logged_in("abc")));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!Route::Login.allows(&Route::logged_in("abc")));
        assert!(!Route::Login.allows(&Route::Login));
        assert!(!Route::password("abc").allows(&Route::logged_in("abd")));
        assert!(!Route::password("abc").allows(&Route::Login));
        assert!(!Route::logged_in("abc").allows(&Route::Login));
        assert!(!Route::logged_in("abc").allows(&Route::password("abc")));
    }

    #[test]
    fn test_display_matches_path_templates() {
        assert_eq!(Route::Login.to_string(), "login");
        assert_eq!(Route::password("abc").to_string(), "password/abc");
        assert_eq!(Route::logged_in("abc").to_string(), "loggedIn/abc");
    }
}

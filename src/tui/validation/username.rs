//! Username validation for the login screen
//!
//! The rule is a plain length check evaluated on every keystroke, plus the
//! message shown when the user submits while the gate is still closed.

use super::ValidationResult;

/// Minimum username length, counted in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Shown while the candidate is too short
pub const TOO_SHORT_MESSAGE: &str = "username must be at least 3 characters";

/// Shown when submit is pressed with an invalid candidate
pub const INVALID_SUBMIT_MESSAGE: &str = "enter a valid username";

/// Validate a candidate username
///
/// Returns `Ok(())` for a valid username and `Err(message)` otherwise.
pub fn validate_username(candidate: &str) -> ValidationResult {
    if candidate.chars().count() < MIN_USERNAME_LEN {
        Err(TOO_SHORT_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

pub mod username;

pub use username::{validate_username, INVALID_SUBMIT_MESSAGE, MIN_USERNAME_LEN, TOO_SHORT_MESSAGE};

/// Result of validating a field value; `Err` carries the message to show
pub type ValidationResult = Result<(), String>;

/// Signature of a whole-value field validator
pub type FieldValidator = fn(&str) -> ValidationResult;

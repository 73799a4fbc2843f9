pub mod common;
pub mod form_field;
pub mod text_input;

pub use form_field::{FormField, ValidationState};
pub use text_input::TextInput;

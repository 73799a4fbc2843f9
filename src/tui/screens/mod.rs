pub mod logged_in;
pub mod login;
pub mod password;

pub use logged_in::LoggedInState;
pub use login::LoginState;
pub use password::PasswordState;

pub mod models;
pub mod tui;

pub mod config;
pub mod route;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use route::Route;

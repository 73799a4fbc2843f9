use anyhow::{Context, Result};
use dotenvy::dotenv;
use login_flow::models::config::AppConfig;
use login_flow::tui::App;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "login-flow.log";

/// Install file logging when a log directory is configured
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// The returned guard must live until exit to flush buffered lines.
fn init_logging(cfg: &AppConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = &cfg.log_dir else {
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let cfg = AppConfig::from_env()?;
    let _log_guard = init_logging(&cfg)?;
    cfg.log_adjustments();
    tracing::info!(tick_ms = cfg.tick_rate.as_millis() as u64, "starting sign-in flow");

    let mut app = App::new(&cfg)?;

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear().context("failed to clear terminal")?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}

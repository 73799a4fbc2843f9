use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 100;
const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long the event loop waits for input before redrawing
    pub tick_rate: Duration,
    /// Directory for `login-flow.log`; logging is off when unset
    pub log_dir: Option<PathBuf>,
    /// Out-of-range `LOGIN_FLOW_TICK_MS` that was replaced by `tick_rate`
    pub clamped_tick_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_dir: None,
            clamped_tick_ms: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let (tick_rate, clamped_tick_ms) =
            parse_tick_rate(std::env::var("LOGIN_FLOW_TICK_MS").ok().as_deref());

        let log_dir = std::env::var("LOGIN_FLOW_LOG_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            tick_rate,
            log_dir,
            clamped_tick_ms,
        })
    }

    /// Warn about settings that were adjusted while loading
    ///
    /// Must run after the subscriber is installed, otherwise the events are lost.
    pub fn log_adjustments(&self) {
        if let Some(requested) = self.clamped_tick_ms {
            tracing::warn!(
                "LOGIN_FLOW_TICK_MS is set to {}, outside {}..={}. Using {} ms.",
                requested,
                MIN_TICK_MS,
                MAX_TICK_MS,
                self.tick_rate.as_millis()
            );
        }
    }
}

/// Parse the poll interval, falling back to the default on missing or bad input
/// and capping it to a range that keeps the UI responsive
///
/// The second value is the requested interval when it had to be capped.
pub fn parse_tick_rate(raw: Option<&str>) -> (Duration, Option<u64>) {
    let requested = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICK_MS);

    let clamped = requested.clamp(MIN_TICK_MS, MAX_TICK_MS);
    let adjusted = (clamped != requested).then_some(requested);

    (Duration::from_millis(clamped), adjusted)
}

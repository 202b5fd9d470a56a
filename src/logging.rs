//! Tracing setup.
//!
//! The terminal belongs to the game, so log output only ever goes to a file.
//! Without `TUI_2048_LOG_PATH` no subscriber is installed and every event is
//! dropped.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Install the file subscriber if configured. Returns whether logging is on.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let (filter, bad_filter) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("failed to install tracing subscriber")?;

    if bad_filter {
        warn!(filter = %config.log_filter, "invalid log filter, using info");
    }
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_subscriber() {
        let config = AppConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let config = AppConfig {
            log_path: Some("/nonexistent-dir/for/sure/2048.log".into()),
            ..AppConfig::default()
        };
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}

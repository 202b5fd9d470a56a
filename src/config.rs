//! Runtime configuration, read from environment variables.
//!
//! - `TUI_2048_SEED`: u64 seed for tile spawns (default: random)
//! - `TUI_2048_ANIM_MS`: slide animation length in milliseconds (default: 150)
//! - `TUI_2048_LOG_PATH`: write tracing output to this file (default: logging off)
//! - `TUI_2048_LOG`: tracing filter directive (default: "info")
//!
//! Malformed values fall back to the default. The problem is kept in
//! [`AppConfig::warnings`] so it can be logged once logging is up.

use std::path::PathBuf;

use crate::types::ANIMATION_MS;

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_ANIM_MS: &str = "TUI_2048_ANIM_MS";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_LOG: &str = "TUI_2048_LOG";

/// Longest accepted animation; anything above is clamped.
pub const MAX_ANIM_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub animation_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            animation_ms: ANIMATION_MS,
            log_path: None,
            log_filter: "info".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get(ENV_SEED) {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("{}={:?} is not a u64, using a random seed", ENV_SEED, raw)),
            }
        }

        if let Some(raw) = get(ENV_ANIM_MS) {
            match raw.parse::<u32>() {
                Ok(ms) => config.animation_ms = ms.min(MAX_ANIM_MS),
                Err(_) => config.warnings.push(format!(
                    "{}={:?} is not a number of milliseconds, using {}",
                    ENV_ANIM_MS, raw, ANIMATION_MS
                )),
            }
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.animation_ms, 150);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_ANIM_MS, " 80 "),
            (ENV_LOG_PATH, "/tmp/2048.log"),
            (ENV_LOG, "debug"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.animation_ms, 80);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/2048.log")));
        assert_eq!(config.log_filter, "debug");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn malformed_values_fall_back_with_warning() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_SEED, "banana"),
            (ENV_ANIM_MS, "-5"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.animation_ms, ANIMATION_MS);
        assert_eq!(config.log_path, None);
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn animation_is_clamped() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_ANIM_MS, "999999")]));
        assert_eq!(config.animation_ms, MAX_ANIM_MS);
    }
}

//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::filter::LevelFilter;

pub const SEED_VAR: &str = "BLOCK_PUZZLE_SEED";
pub const HIGHSCORE_PATH_VAR: &str = "BLOCK_PUZZLE_HIGHSCORE_PATH";
pub const LOG_PATH_VAR: &str = "BLOCK_PUZZLE_LOG_PATH";
pub const LOG_LEVEL_VAR: &str = "BLOCK_PUZZLE_LOG_LEVEL";
pub const NO_PERSIST_VAR: &str = "BLOCK_PUZZLE_NO_PERSIST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// `None` means the store's default location.
    pub highscore_path: Option<PathBuf>,
    /// No log file, no subscriber.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// Keep the high score in memory only
    pub no_persist: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(SEED_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let highscore_path = get(HIGHSCORE_PATH_VAR).map(PathBuf::from);
        let log_path = get(LOG_PATH_VAR).map(PathBuf::from);

        let log_level = get(LOG_LEVEL_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::INFO);

        let no_persist = get(NO_PERSIST_VAR)
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            seed,
            highscore_path,
            log_path,
            log_level,
            no_persist,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.highscore_path, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::INFO);
        assert!(!cfg.no_persist);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            (SEED_VAR, "42"),
            (HIGHSCORE_PATH_VAR, "/tmp/hs"),
            (LOG_PATH_VAR, " /tmp/puzzle.log "),
            (LOG_LEVEL_VAR, "debug"),
            (NO_PERSIST_VAR, "TRUE"),
        ]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.highscore_path, Some(PathBuf::from("/tmp/hs")));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/puzzle.log")));
        assert_eq!(cfg.log_level, LevelFilter::DEBUG);
        assert!(cfg.no_persist);
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let cfg = config(&[(LOG_PATH_VAR, "   "), (LOG_LEVEL_VAR, "loud"), (NO_PERSIST_VAR, "0")]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::INFO);
        assert!(!cfg.no_persist);
    }
}

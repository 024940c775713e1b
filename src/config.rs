// src/config.rs
use std::env;
use std::path::PathBuf;

/// Ambient configuration for embedders: generation defaults plus where
/// the opaque persistence blobs live.
#[derive(Debug, Clone)]
pub struct Config {
    // Password generation
    pub default_length: usize,
    pub default_word_count: usize,

    // Persistence
    pub history_file: PathBuf,
    pub stats_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            default_word_count: 3,
            history_file: PathBuf::from("./data/history.json"),
            stats_file: PathBuf::from("./data/beststats.json"),
        }
    }
}

impl Config {
    /// Defaults with environment overrides. Unparseable values fall back
    /// to the default rather than failing.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(value) = env::var("KEYSMITH_DEFAULT_LENGTH") {
            if let Ok(length) = value.parse() {
                config.default_length = length;
            }
        }

        if let Ok(value) = env::var("KEYSMITH_DEFAULT_WORD_COUNT") {
            if let Ok(count) = value.parse() {
                config.default_word_count = count;
            }
        }

        if let Ok(value) = env::var("KEYSMITH_HISTORY_FILE") {
            config.history_file = PathBuf::from(value);
        }

        if let Ok(value) = env::var("KEYSMITH_STATS_FILE") {
            config.stats_file = PathBuf::from(value);
        }

        config
    }
}

use pagetree_editor::{EditorOptions, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_CONFIG_NAME: &str = "pagetree.config.json";

/// Pagetree configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Undo snapshots kept before the oldest is evicted (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Maximum log level written to stderr (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            history_limit: self.history_limit,
        }
    }

    pub fn level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid logLevel: {}", self.log_level))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            log_level: default_log_level(),
        }
    }
}

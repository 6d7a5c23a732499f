use flexcraft_editor::EditorOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "flexcraft.config.json";

/// Flexcraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Theme color for panels created from scratch
    #[serde(default)]
    pub theme_color: Option<String>,

    /// Undo levels kept while editing (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_history_limit() -> usize {
    EditorOptions::default().history_limit
}

fn default_pretty() -> bool {
    true
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
            theme_color: self.theme_color.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_color: None,
            history_limit: default_history_limit(),
            pretty: default_pretty(),
        }
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container for the demo binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Settings for the demo TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Counter value the store starts from (default: 0).
    #[serde(default)]
    pub initial_counter: i64,
    /// Log file path. Logging is disabled when unset; the terminal is
    /// owned by the TUI.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            initial_counter: 0,
            log_file: None,
        }
    }
}

use std::env;

use serde::{Deserialize, Serialize};

use self::output::OutputConfig;

pub mod output;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,

    /// Log filter applied when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("VERBA_LOG").unwrap_or_else(|_| "info".to_string());

        Config {
            output: OutputConfig::new(),
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

use std::env;

use serde::{Deserialize, Serialize};

fn default_script_var() -> String {
    "wordsData".to_string()
}

fn default_json_indent() -> usize {
    4
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Variable name assigned in the browser script artifact
    #[serde(default = "default_script_var")]
    pub script_var: String,
    /// Indent width of the pretty JSON artifact
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
}

impl OutputConfig {
    pub fn new() -> Self {
        let script_var =
            env::var("VERBA_SCRIPT_VAR").unwrap_or_else(|_| default_script_var());

        let json_indent = env::var("VERBA_JSON_INDENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_json_indent);

        OutputConfig {
            script_var,
            json_indent,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            script_var: default_script_var(),
            json_indent: default_json_indent(),
        }
    }
}

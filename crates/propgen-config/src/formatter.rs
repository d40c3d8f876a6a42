//! Output formatter settings.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

const fn default_timeout() -> u64 {
    20
}

fn default_program() -> String {
    "npx".to_string()
}

fn default_args() -> Vec<String> {
    ["--no-install", "prettier", "--parser", "typescript"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Formatter that reads the document on stdin and writes it to stdout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatterConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            args: default_args(),
            timeout_secs: default_timeout(),
        }
    }
}

//! Where generated documents are written.

use serde::{Deserialize, Serialize};

fn default_directory() -> String {
    ".".to_string()
}

fn default_suffix() -> String {
    ".types.ts".to_string()
}

fn default_fallback_name() -> String {
    "component-props.types.ts".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory, relative to the project root unless absolute.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Appended to the type-name prefix to form the file name.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// File name used when the primary write fails.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

impl OutputConfig {
    /// `<prefix><suffix>`, e.g. `Accordion.types.ts`.
    #[must_use]
    pub fn file_name(&self, type_name_prefix: &str) -> String {
        format!("{type_name_prefix}{}", self.suffix)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            suffix: default_suffix(),
            fallback_name: default_fallback_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_joins_prefix_and_suffix() {
        let config = OutputConfig::default();
        assert_eq!(config.file_name("AlertDialog"), "AlertDialog.types.ts");
        assert_eq!(config.fallback_name, "component-props.types.ts");
    }
}

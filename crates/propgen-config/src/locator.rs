//! Source file discovery settings.

use serde::{Deserialize, Serialize};

const fn default_max_depth() -> usize {
    4
}

fn default_search_roots() -> Vec<String> {
    [
        "components/ui",
        "src/components/ui",
        "app/components/ui",
        "components",
        "src/components",
        "lib/components",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocatorConfig {
    /// Directories (relative to the project root) searched for component sources.
    #[serde(default = "default_search_roots")]
    pub search_roots: Vec<String>,

    /// Source extensions considered, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Maximum directory depth below each search root.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            search_roots: default_search_roots(),
            extensions: default_extensions(),
            max_depth: default_max_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LocatorConfig::default();
        assert_eq!(config.search_roots[0], "components/ui");
        assert_eq!(config.extensions, ["tsx", "ts", "jsx", "js"]);
        assert_eq!(config.max_depth, 4);
    }
}

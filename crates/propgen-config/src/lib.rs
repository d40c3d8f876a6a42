//! # propgen-config
//!
//! Layered configuration loading for propgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROPGEN_*` prefix, `__` as separator)
//! 2. Project-level `propgen.toml`
//! 3. User-level `~/.config/propgen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROPGEN_INSTALLER__TIMEOUT_SECS` -> `installer.timeout_secs`,
//! `PROPGEN_OUTPUT__SUFFIX` -> `output.suffix`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use propgen_config::PropgenConfig;
//!
//! let config = PropgenConfig::load_with_dotenv(Path::new(".")).expect("config");
//! if config.installer.enabled {
//!     println!("installer: {} {:?}", config.installer.program, config.installer.args);
//! }
//! ```

mod error;
mod formatter;
mod installer;
mod locator;
mod output;

pub use error::ConfigError;
pub use formatter::FormatterConfig;
pub use installer::{InstallerConfig, PackageManager, PackagesConfig};
pub use locator::LocatorConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILE: &str = "propgen.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PropgenConfig {
    #[serde(default)]
    pub locator: LocatorConfig,
    #[serde(default)]
    pub installer: InstallerConfig,
    #[serde(default)]
    pub packages: PackagesConfig,
    #[serde(default)]
    pub formatter: FormatterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl PropgenConfig {
    /// Load configuration from all sources for the given project root.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// out of range.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `<project_root>/.env`.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PROPGEN_").split("__"))
    }

    /// Reject values that would make a collaborator unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeouts = [
            ("installer.timeout_secs", self.installer.timeout_secs),
            ("packages.timeout_secs", self.packages.timeout_secs),
            ("formatter.timeout_secs", self.formatter.timeout_secs),
        ];
        for (field, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "timeout must be at least one second".to_string(),
                });
            }
        }
        if self.output.suffix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.suffix".to_string(),
                reason: "suffix must not be empty".to_string(),
            });
        }
        if self.locator.search_roots.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locator.search_roots".to_string(),
                reason: "at least one search root is required".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("propgen").join("config.toml"))
    }
}

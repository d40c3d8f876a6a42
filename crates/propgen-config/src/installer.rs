//! External installer and package manager settings.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

const fn default_installer_timeout() -> u64 {
    120
}

const fn default_packages_timeout() -> u64 {
    180
}

fn default_program() -> String {
    "npx".to_string()
}

fn default_installer_args() -> Vec<String> {
    ["shadcn@latest", "add", "--yes"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Component installer invoked as `<program> <args..> <component-key>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstallerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_installer_args")]
    pub args: Vec<String>,

    #[serde(default = "default_installer_timeout")]
    pub timeout_secs: u64,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            args: default_installer_args(),
            timeout_secs: default_installer_timeout(),
        }
    }
}

/// Which package manager installs missing dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// Pick from the lockfile present in the project root.
    #[default]
    Auto,
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Program name, or `None` for [`PackageManager::Auto`].
    #[must_use]
    pub const fn program(self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Npm => Some("npm"),
            Self::Pnpm => Some("pnpm"),
            Self::Yarn => Some("yarn"),
            Self::Bun => Some("bun"),
        }
    }

    /// Subcommand that adds packages (`npm install`, `pnpm add`, ...).
    #[must_use]
    pub const fn add_subcommand(self) -> &'static str {
        match self {
            Self::Auto | Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackagesConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub manager: PackageManager,

    #[serde(default = "default_packages_timeout")]
    pub timeout_secs: u64,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            manager: PackageManager::Auto,
            timeout_secs: default_packages_timeout(),
        }
    }
}

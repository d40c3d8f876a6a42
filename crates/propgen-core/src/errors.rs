//! Cross-cutting error types for propgen.
//!
//! This module defines the failure taxonomy shared by every pipeline stage.
//! Parser-specific errors (`ParserError`) and configuration errors
//! (`ConfigError`) live in their own crates; the binary converges all of
//! them into `anyhow::Error` at the top level.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can be raised by any propgen stage.
///
/// Every variant except [`CoreError::InvalidInput`] and an exhausted
/// [`CoreError::Write`] is recoverable: the stage that owns it logs the
/// failure and produces nothing, and the pipeline carries on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The component identifier is empty or unusable.
    #[error("Invalid component identifier: {0}")]
    InvalidInput(String),

    /// No source files were found for the component.
    #[error("No source files found for component '{key}'")]
    Discovery { key: String },

    /// A strategy tier failed while extracting declarations.
    #[error("Extraction failed in {strategy} tier: {message}")]
    Extraction { strategy: String, message: String },

    /// A package could not be installed by the host package manager.
    #[error("Failed to install {package}: {message}")]
    DependencyInstall { package: String, message: String },

    /// The output document could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        /// True once every fallback path (alternate file name, console) is spent.
        exhausted: bool,
    },

    /// A bounded external call exceeded its time limit.
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Whether the pipeline may continue after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidInput(_) => false,
            Self::Write { exhausted, .. } => !*exhausted,
            Self::Discovery { .. }
            | Self::Extraction { .. }
            | Self::DependencyInstall { .. }
            | Self::Timeout { .. }
            | Self::Other(_) => true,
        }
    }

    /// A one-line suggestion printed under fatal errors.
    #[must_use]
    pub const fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput(_) => Some(
                "pass a component name such as `accordion` or a docs URL such as \
                 https://ui.shadcn.com/docs/components/tabs",
            ),
            Self::Write { .. } => {
                Some("check that the output directory exists and is writable, or pass --out-dir")
            }
            Self::Timeout { .. } => {
                Some("raise the matching `timeout_secs` in propgen.toml or PROPGEN_* env")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_fatal() {
        let err = CoreError::InvalidInput("empty".into());
        assert!(!err.is_recoverable());
        assert!(err.remediation().is_some());
    }

    #[test]
    fn write_is_recoverable_until_exhausted() {
        let pending = CoreError::Write {
            path: PathBuf::from("Button.types.ts"),
            source: std::io::Error::other("read-only"),
            exhausted: false,
        };
        let spent = CoreError::Write {
            path: PathBuf::from("Button.types.ts"),
            source: std::io::Error::other("read-only"),
            exhausted: true,
        };
        assert!(pending.is_recoverable());
        assert!(!spent.is_recoverable());
    }

    #[test]
    fn timeout_message_names_operation() {
        let err = CoreError::Timeout {
            operation: "component installer".into(),
            seconds: 120,
        };
        assert_eq!(err.to_string(), "component installer timed out after 120s");
        assert!(err.is_recoverable());
    }
}

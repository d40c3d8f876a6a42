use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use propgen_config::FormatterConfig;
use propgen_core::CoreError;
use propgen_parser::{Formatter, ParserError};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Pipes the document through an external pretty-printer.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    timeout: Duration,
}

impl ExternalFormatter {
    #[must_use]
    pub fn from_config(config: &FormatterConfig, project_root: &Path) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            cwd: project_root.to_path_buf(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Formatter for ExternalFormatter {
    async fn format(&self, source: &str) -> Result<String, ParserError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ParserError::Format("formatter stdin unavailable".to_string()))?;
        let input = source.to_string();
        let writer = tokio::spawn(async move { stdin.write_all(input.as_bytes()).await });

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ParserError::Format(
                    CoreError::Timeout {
                        operation: "formatter".to_string(),
                        seconds: self.timeout.as_secs(),
                    }
                    .to_string(),
                )
            })??;
        if let Ok(Err(error)) = writer.await {
            tracing::debug!(%error, "formatter closed stdin early");
        }

        if !output.status.success() {
            return Err(ParserError::Format(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        String::from_utf8(output.stdout).map_err(|error| ParserError::Format(error.to_string()))
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use propgen_config::PropgenConfig;

/// Resolve the host project root from `--project` or the working directory.
pub fn resolve_project_root(project: Option<&Path>) -> anyhow::Result<PathBuf> {
    match project {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        Some(path) => anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            path.display()
        ),
        None => std::env::current_dir().context("failed to read current directory"),
    }
}

/// Load `.env` and the layered configuration for `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<PropgenConfig> {
    let config = PropgenConfig::load_with_dotenv(project_root).with_context(|| {
        format!(
            "failed to load propgen configuration for {}",
            project_root.display()
        )
    })?;
    tracing::debug!(
        search_roots = ?config.locator.search_roots,
        installer = config.installer.enabled,
        formatter = config.formatter.enabled,
        "configuration loaded"
    );
    Ok(config)
}

//! Bounded external installers: the component installer and the host
//! project's package manager.
//!
//! Every child process runs under `tokio::time::timeout` with
//! `kill_on_drop`, so a timed-out child is terminated when its future is
//! dropped. Failures are logged and reported, never propagated.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use propgen_config::{InstallerConfig, PackageManager, PackagesConfig};
use propgen_core::{CoreError, DependencyProfile};
use serde::Serialize;
use tokio::process::Command;

use crate::progress::Progress;

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub success: bool,
    /// Stdout followed by stderr.
    pub log: String,
}

/// Run `program args..` in `cwd`, bounded by `timeout_secs`.
pub async fn run_bounded(
    operation: &str,
    program: &str,
    args: &[String],
    cwd: &Path,
    timeout_secs: u64,
) -> Result<ProcessOutput, CoreError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(Duration::from_secs(timeout_secs), command.output())
        .await
        .map_err(|_| CoreError::Timeout {
            operation: operation.to_string(),
            seconds: timeout_secs,
        })?
        .map_err(|error| {
            CoreError::Other(anyhow::Error::new(error).context(format!("failed to run {program}")))
        })?;

    let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
    log.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(ProcessOutput {
        success: output.status.success(),
        log,
    })
}

// ── Component installer ────────────────────────────────────────────

/// Ask the component installer to add `key` to the project.
///
/// Returns the installer's log, even from a failed run, so package names
/// it printed can still feed inference. `None` when it could not run.
pub async fn install_component(
    config: &InstallerConfig,
    project_root: &Path,
    key: &str,
) -> Option<String> {
    let mut args = config.args.clone();
    args.push(key.to_string());

    let progress = Progress::spinner(&format!("installing component {key}"));
    match run_bounded(
        "component installer",
        &config.program,
        &args,
        project_root,
        config.timeout_secs,
    )
    .await
    {
        Ok(output) => {
            if output.success {
                progress.finish_clear();
                tracing::info!(key, "component installer finished");
            } else {
                progress.finish_err("component installer failed");
                tracing::warn!(key, "component installer exited with an error");
            }
            Some(output.log)
        }
        Err(error) => {
            progress.finish_err("component installer failed");
            tracing::warn!(%error, key, "component installer unavailable; continuing");
            None
        }
    }
}

// ── Dependency installer ───────────────────────────────────────────

/// Outcome for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub package: String,
    pub installed: bool,
}

/// Resolve [`PackageManager::Auto`] from the lockfiles in `project_root`.
#[must_use]
pub fn detect_manager(project_root: &Path, configured: PackageManager) -> PackageManager {
    if configured != PackageManager::Auto {
        return configured;
    }
    let has = |name: &str| project_root.join(name).exists();
    if has("pnpm-lock.yaml") {
        PackageManager::Pnpm
    } else if has("yarn.lock") {
        PackageManager::Yarn
    } else if has("bun.lockb") || has("bun.lock") {
        PackageManager::Bun
    } else {
        PackageManager::Npm
    }
}

fn module_dir(project_root: &Path, package: &str) -> PathBuf {
    package
        .split('/')
        .fold(project_root.join("node_modules"), |dir, part| dir.join(part))
}

/// Required packages with no directory under `node_modules/`.
#[must_use]
pub fn missing_packages(project_root: &Path, profile: &DependencyProfile) -> Vec<String> {
    profile
        .required_packages
        .iter()
        .filter(|package| !module_dir(project_root, package).is_dir())
        .cloned()
        .collect()
}

/// Install every missing required package with the host package manager.
///
/// Skipped when the project has no `package.json`.
pub async fn install_missing(
    config: &PackagesConfig,
    project_root: &Path,
    profile: &DependencyProfile,
) -> Vec<InstallReport> {
    if !project_root.join("package.json").is_file() {
        tracing::debug!("no package.json; skipping dependency installation");
        return Vec::new();
    }
    let missing = missing_packages(project_root, profile);
    if missing.is_empty() {
        return Vec::new();
    }

    let manager = detect_manager(project_root, config.manager);
    let program = manager.program().unwrap_or("npm");
    let mut args = vec![manager.add_subcommand().to_string()];
    args.extend(missing.iter().cloned());

    let progress = Progress::spinner(&format!(
        "installing {} package(s) with {program}",
        missing.len()
    ));
    let result = run_bounded(
        "package manager",
        program,
        &args,
        project_root,
        config.timeout_secs,
    )
    .await;

    let succeeded = match result {
        Ok(output) if output.success => true,
        Ok(output) => {
            tracing::debug!(log = %output.log, "package manager output");
            false
        }
        Err(error) => {
            tracing::warn!(%error, "package manager did not complete");
            false
        }
    };

    let reports: Vec<InstallReport> = missing
        .into_iter()
        .map(|package| {
            let installed = succeeded && module_dir(project_root, &package).is_dir();
            if !installed {
                let error = CoreError::DependencyInstall {
                    package: package.clone(),
                    message: format!("{program} did not install it"),
                };
                tracing::warn!(%error, "continuing with degraded type resolution");
            }
            InstallReport { package, installed }
        })
        .collect();

    if reports.iter().all(|r| r.installed) {
        progress.finish_clear();
    } else {
        progress.finish_err("some packages were not installed");
    }
    reports
}

// ── Cleanup ────────────────────────────────────────────────────────

/// Remove component files the installer created during this run.
pub async fn remove_created(paths: &[PathBuf]) {
    for path in paths {
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "removed installer output"),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "failed to remove installer output");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&["pnpm-lock.yaml"], PackageManager::Pnpm)]
    #[case(&["yarn.lock"], PackageManager::Yarn)]
    #[case(&["bun.lock"], PackageManager::Bun)]
    #[case(&["package-lock.json"], PackageManager::Npm)]
    #[case(&[], PackageManager::Npm)]
    fn detects_manager_from_lockfiles(#[case] files: &[&str], #[case] expected: PackageManager) {
        let dir = tempfile::tempdir().expect("tempdir");
        for file in files {
            fs::write(dir.path().join(file), "").expect("write lockfile");
        }
        assert_eq!(detect_manager(dir.path(), PackageManager::Auto), expected);
    }

    #[test]
    fn configured_manager_wins_over_lockfiles() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("yarn.lock"), "").expect("write lockfile");
        assert_eq!(detect_manager(dir.path(), PackageManager::Bun), PackageManager::Bun);
    }

    #[test]
    fn missing_packages_checks_scoped_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("node_modules/@radix-ui/react-tabs")).expect("mkdir");
        fs::create_dir_all(dir.path().join("node_modules/clsx")).expect("mkdir");

        let mut profile = DependencyProfile::new();
        profile.bind_catalogue_namespace("TabsPrimitive", "@radix-ui/react-tabs");
        profile.require_package("clsx");
        profile.require_package("lucide-react");

        assert_eq!(missing_packages(dir.path(), &profile), ["lucide-react"]);
    }

    #[tokio::test]
    async fn projects_without_package_json_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut profile = DependencyProfile::new();
        profile.require_package("zod");
        let reports = install_missing(&PackagesConfig::default(), dir.path(), &profile).await;
        assert!(reports.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_and_stderr() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ["-c".to_string(), "echo added; echo warn >&2".to_string()];
        let output = run_bounded("test", "sh", &args, dir.path(), 5)
            .await
            .expect("sh runs");
        assert!(output.success);
        assert_eq!(output.log, "added\nwarn\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_processes_time_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ["5".to_string()];
        let error = run_bounded("sleeper", "sleep", &args, dir.path(), 1)
            .await
            .expect_err("times out");
        assert!(matches!(error, CoreError::Timeout { seconds: 1, .. }));
    }

    #[tokio::test]
    async fn missing_programs_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = run_bounded("ghost", "propgen-no-such-program", &[], dir.path(), 5)
            .await
            .expect_err("spawn fails");
        assert!(matches!(error, CoreError::Other(_)));
    }

    #[tokio::test]
    async fn cleanup_removes_listed_files_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let created = dir.path().join("accordion.tsx");
        let kept = dir.path().join("button.tsx");
        fs::write(&created, "").expect("write");
        fs::write(&kept, "").expect("write");

        remove_created(std::slice::from_ref(&created)).await;
        assert!(!created.exists());
        assert!(kept.exists());
    }
}

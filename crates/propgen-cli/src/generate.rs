//! One `propgen <COMPONENT>` run: discover, install, extract, format, write.

use std::path::{Path, PathBuf};

use propgen_config::PropgenConfig;
use propgen_core::{ComponentIdentity, CoreError, DependencyProfile, SubComponentRegistry};
use propgen_parser::{OutputDocument, PassthroughFormatter, Request, Strategy, finalize};
use propgen_registry::RegistryEntry;
use serde::Serialize;

use crate::cli::Cli;
use crate::formatter::ExternalFormatter;
use crate::installer::{self, InstallReport};
use crate::locator::Locator;
use crate::output::{self, Written};
use crate::pipeline;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct FileSummary<'a> {
    path: &'a Path,
    strategy: Option<Strategy>,
    failed: &'a [Strategy],
    candidates: usize,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    identity: &'a ComponentIdentity,
    registry_hit: bool,
    files: Vec<FileSummary<'a>>,
    profile: &'a DependencyProfile,
    tags: &'a SubComponentRegistry,
    type_names: Vec<&'a str>,
    synthesized: bool,
    installed: &'a [InstallReport],
    output: &'a Written,
}

pub async fn handle(
    cli: &Cli,
    identity: ComponentIdentity,
    entry: Option<&'static RegistryEntry>,
    project_root: &Path,
    config: &PropgenConfig,
) -> anyhow::Result<()> {
    let key = identity.normalized_key().to_string();
    let mut request = Request::new(identity);
    request.record_id.clone_from(&cli.record);
    if let Some(entry) = entry {
        tracing::debug!(key = entry.key, "static registry hit");
        request.seed_profile = entry.seed_profile();
        request.seed_tags = entry.seed_sub_components();
    }

    let may_install = !cli.skip_install && !cli.deps_only;
    let locator = Locator::new(project_root, &config.locator, &request.identity)?;
    let mut paths = locate(&locator);
    let mut created = Vec::new();

    if paths.is_empty() {
        let error = CoreError::Discovery { key: key.clone() };
        if may_install && config.installer.enabled {
            tracing::info!(%error, "asking the component installer");
            if let Some(log) =
                installer::install_component(&config.installer, project_root, &key).await
            {
                request.absorb_log(&log);
            }
            paths = locate(&locator);
            created.clone_from(&paths);
        }
        if paths.is_empty() {
            tracing::warn!(%error, "falling back to synthetic defaults");
        }
    }

    let sources = pipeline::read_sources(&paths).await;
    let (request, result) = pipeline::analyze_blocking(request, sources).await?;
    for report in &result.reports {
        tracing::debug!(
            path = %report.path.display(),
            strategy = ?report.strategy,
            failed = ?report.failed,
            "file extraction"
        );
    }

    if !created.is_empty() && !cli.no_cleanup {
        installer::remove_created(&created).await;
    }

    if cli.deps_only {
        return output::print_json(&result.profile);
    }

    let installed = if may_install && config.packages.enabled {
        installer::install_missing(&config.packages, project_root, &result.profile).await
    } else {
        Vec::new()
    };

    let text = format_document(&result.document, config, project_root).await;

    let out_dir = output_dir(cli, config, project_root);
    let file_name = config.output.file_name(request.identity.type_name_prefix());
    // stdout carries the JSON summary, so the last-resort dump goes to stderr.
    let written = if cli.json {
        output::write_document_to(
            &out_dir,
            &file_name,
            &config.output.fallback_name,
            &text,
            &mut std::io::stderr().lock(),
        )?
    } else {
        output::write_document(&out_dir, &file_name, &config.output.fallback_name, &text)?
    };

    if cli.json {
        output::print_json(&RunSummary {
            identity: &request.identity,
            registry_hit: entry.is_some(),
            files: result
                .reports
                .iter()
                .map(|report| FileSummary {
                    path: &report.path,
                    strategy: report.strategy,
                    failed: &report.failed,
                    candidates: report.candidates.len(),
                })
                .collect(),
            profile: &result.profile,
            tags: &result.classified.registry,
            type_names: result.document.type_names(),
            synthesized: result.synthesized,
            installed: &installed,
            output: &written,
        })?;
    } else if let (Written::File(path), false) = (&written, cli.quiet) {
        println!("wrote {}", path.display());
    }
    Ok(())
}

async fn format_document(
    document: &OutputDocument,
    config: &PropgenConfig,
    project_root: &Path,
) -> String {
    if !config.formatter.enabled {
        return finalize(document, &PassthroughFormatter).await;
    }
    let formatter = ExternalFormatter::from_config(&config.formatter, project_root);
    let progress = Progress::spinner("formatting");
    let text = finalize(document, &formatter).await;
    progress.finish_clear();
    text
}

fn locate(locator: &Locator) -> Vec<PathBuf> {
    // rayon walk; blocks this worker until every root is searched.
    tokio::task::block_in_place(|| locator.locate())
}

fn output_dir(cli: &Cli, config: &PropgenConfig, project_root: &Path) -> PathBuf {
    cli.out_dir
        .clone()
        .unwrap_or_else(|| project_root.join(&config.output.directory))
}

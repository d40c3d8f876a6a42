//! Fan-out over discovered files, fan-in into one output.
//!
//! Reading is async; extraction is CPU-bound and runs on rayon. The reports
//! come back in discovery order, so the single-threaded reduction in
//! [`propgen_parser::complete`] sees the same input whatever the scheduling.

use std::path::PathBuf;

use anyhow::Context;
use propgen_parser::{PipelineOutput, Request, SourceFile, analyze_source, complete};
use rayon::prelude::*;

/// Read every path, skipping (and logging) unreadable files.
pub async fn read_sources(paths: &[PathBuf]) -> Vec<SourceFile> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => sources.push(SourceFile::new(path.clone(), text)),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "skipping unreadable source file");
            }
        }
    }
    sources
}

/// Analyze every file in parallel, then reduce.
#[must_use]
pub fn analyze(request: &Request, sources: &[SourceFile]) -> PipelineOutput {
    let reports = sources
        .par_iter()
        .map(|source| analyze_source(request, source))
        .collect();
    complete(request, reports)
}

/// [`analyze`] on the blocking pool, handing ownership back afterwards.
pub async fn analyze_blocking(
    request: Request,
    sources: Vec<SourceFile>,
) -> anyhow::Result<(Request, PipelineOutput)> {
    tokio::task::spawn_blocking(move || {
        let output = analyze(&request, &sources);
        (request, output)
    })
    .await
    .context("extraction task failed")
}

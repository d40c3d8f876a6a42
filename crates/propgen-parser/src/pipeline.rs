//! Per-file analysis and the fan-in that turns file reports into one
//! output document.
//!
//! [`analyze_source`] is pure and independent per file, so callers may run
//! it in parallel. [`complete`] must see the reports in discovery order:
//! candidate order drives sub-component order and which duplicate wins.

use std::path::PathBuf;

use propgen_core::{ComponentIdentity, DependencyProfile, PropCandidate, SubComponentRegistry};
use serde::Serialize;

use crate::assemble::{AssembleOptions, OutputDocument, assemble};
use crate::classify::{Classified, classify};
use crate::extractors::{ExtractionContext, Strategy, run_chain};
use crate::inference;
use crate::parser::detect_language;
use crate::synthetic;

/// One discovered component source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Everything the pipeline knows before reading sources.
#[derive(Debug, Clone)]
pub struct Request {
    pub identity: ComponentIdentity,
    /// Registry seed plus anything inferred from installer logs.
    pub seed_profile: DependencyProfile,
    /// Tags to synthesize when no source yields a declaration.
    pub seed_tags: SubComponentRegistry,
    pub record_id: Option<String>,
}

impl Request {
    #[must_use]
    pub fn new(identity: ComponentIdentity) -> Self {
        Self {
            identity,
            seed_profile: DependencyProfile::new(),
            seed_tags: SubComponentRegistry::new(),
            record_id: None,
        }
    }

    /// Fold package names mentioned in an installer log into the seed.
    pub fn absorb_log(&mut self, log: &str) {
        inference::infer_into(log, &mut self.seed_profile);
    }
}

/// Outcome of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub strategy: Option<Strategy>,
    pub failed: Vec<Strategy>,
    pub candidates: Vec<PropCandidate>,
    /// Dependencies inferred from this file alone.
    pub profile: DependencyProfile,
}

/// Final result for one component.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub profile: DependencyProfile,
    pub classified: Classified,
    pub document: OutputDocument,
    /// True when every file came up empty and defaults were generated.
    pub synthesized: bool,
    pub reports: Vec<FileReport>,
}

/// Infer dependencies and run the extraction chain over one file.
#[must_use]
pub fn analyze_source(request: &Request, file: &SourceFile) -> FileReport {
    let own = inference::infer(&file.text);
    let profile = request.seed_profile.clone().union(&own);
    let ctx = ExtractionContext {
        identity: &request.identity,
        profile: &profile,
        lang: detect_language(&file.path),
    };
    let outcome = run_chain(&file.text, &ctx);
    tracing::debug!(
        path = %file.path.display(),
        strategy = ?outcome.strategy,
        candidates = outcome.candidates.len(),
        "analyzed source file"
    );
    FileReport {
        path: file.path.clone(),
        strategy: outcome.strategy,
        failed: outcome.failed,
        candidates: outcome.candidates,
        profile: own,
    }
}

/// Merge file reports, classify, and assemble.
///
/// Falls back to synthesized defaults when no file produced a candidate,
/// so the output always declares the root props type.
#[must_use]
pub fn complete(request: &Request, reports: Vec<FileReport>) -> PipelineOutput {
    let profile = reports
        .iter()
        .fold(request.seed_profile.clone(), |acc, report| acc.union(&report.profile));
    let merged: Vec<PropCandidate> = reports
        .iter()
        .flat_map(|report| report.candidates.iter().cloned())
        .collect();

    let mut classified = classify(&request.identity, merged);
    let synthesized = classified.is_empty();
    if synthesized {
        tracing::info!(
            key = request.identity.normalized_key(),
            files = reports.len(),
            "no declarations extracted; synthesizing defaults"
        );
        classified = classify(
            &request.identity,
            synthetic::generate(&request.identity, &request.seed_tags),
        );
    }

    let document = assemble(
        &request.identity,
        &profile,
        &classified,
        &AssembleOptions {
            record_id: request.record_id.clone(),
        },
    );
    PipelineOutput {
        profile,
        classified,
        document,
        synthesized,
        reports,
    }
}

/// Sequential convenience over [`analyze_source`] and [`complete`].
#[must_use]
pub fn run(request: &Request, files: &[SourceFile]) -> PipelineOutput {
    let reports = files.iter().map(|file| analyze_source(request, file)).collect();
    complete(request, reports)
}

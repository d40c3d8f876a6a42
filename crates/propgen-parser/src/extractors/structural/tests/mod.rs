use ast_grep_language::SupportLang;
use propgen_core::{ComponentIdentity, DependencyProfile};

use super::*;

mod references;

fn scan_tsx(source: &str) -> Findings {
    scan(source, SupportLang::Tsx).expect("scan should succeed")
}

fn extract_for(name: &str, profile: &DependencyProfile, source: &str) -> Vec<PropCandidate> {
    let identity = ComponentIdentity::parse(name).expect("valid identity");
    let ctx = ExtractionContext {
        identity: &identity,
        profile,
        lang: SupportLang::Tsx,
    };
    extract(source, &ctx).expect("extraction should succeed")
}

fn names(candidates: &[PropCandidate]) -> Vec<&str> {
    candidates
        .iter()
        .filter_map(PropCandidate::declared_name)
        .collect()
}

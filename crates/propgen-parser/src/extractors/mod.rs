//! Extraction orchestrator: three-tier fallback chain.
//!
//! `StructuralPrimary` (ast-grep) → `StructuralSecondary` (swc) →
//! `PatternMatch` (regex). The first tier that yields at least one
//! candidate ends the chain. A tier error is logged and counts as zero
//! candidates.

pub mod findings;
pub mod pattern;
pub mod secondary;
pub mod structural;

use std::fmt;

use propgen_core::{CoreError, PropCandidate};
use serde::{Deserialize, Serialize};

use crate::error::ParserError;
pub use findings::{ExtractionContext, Findings};

/// One tier of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    StructuralPrimary,
    StructuralSecondary,
    PatternMatch,
}

impl Strategy {
    /// Tiers in the order they are tried.
    pub const ORDER: [Self; 3] = [
        Self::StructuralPrimary,
        Self::StructuralSecondary,
        Self::PatternMatch,
    ];

    fn tier(self) -> Tier {
        match self {
            Self::StructuralPrimary => structural::extract,
            Self::StructuralSecondary => secondary::extract,
            Self::PatternMatch => pattern::extract,
        }
    }
}

type Tier = fn(&str, &ExtractionContext<'_>) -> Result<Vec<PropCandidate>, ParserError>;

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StructuralPrimary => "structural_primary",
            Self::StructuralSecondary => "structural_secondary",
            Self::PatternMatch => "pattern_match",
        })
    }
}

/// Result of running the chain over one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainOutcome {
    /// Tier that produced the candidates; `None` when all came up empty.
    pub strategy: Option<Strategy>,
    pub candidates: Vec<PropCandidate>,
    /// Tiers whose parse failed along the way.
    pub failed: Vec<Strategy>,
}

/// Try each tier in order until one yields candidates.
#[must_use]
pub fn run_chain(source: &str, ctx: &ExtractionContext<'_>) -> ChainOutcome {
    run_tiers(source, ctx, Strategy::ORDER.map(|strategy| (strategy, strategy.tier())))
}

fn run_tiers(
    source: &str,
    ctx: &ExtractionContext<'_>,
    tiers: impl IntoIterator<Item = (Strategy, Tier)>,
) -> ChainOutcome {
    let mut outcome = ChainOutcome::default();
    for (strategy, tier) in tiers {
        match tier(source, ctx) {
            Ok(candidates) if !candidates.is_empty() => {
                tracing::debug!(%strategy, count = candidates.len(), "extraction strategy succeeded");
                outcome.strategy = Some(strategy);
                outcome.candidates = candidates;
                return outcome;
            }
            Ok(_) => {
                tracing::debug!(%strategy, "extraction strategy found nothing");
            }
            Err(error) => {
                let error = CoreError::Extraction {
                    strategy: strategy.to_string(),
                    message: error.to_string(),
                };
                tracing::warn!(%error, "extraction strategy failed; trying next tier");
                outcome.failed.push(strategy);
            }
        }
    }
    outcome
}

//! # propgen-parser
//!
//! Props-type extraction and synthesis for UI component sources.
//!
//! A component's files flow through:
//! - [`inference`]: required packages and primitive namespaces
//! - [`extractors`]: a three-tier chain (ast-grep → swc → regex) producing
//!   props candidates
//! - [`classify`]: sub-component grouping, renaming, and deduplication
//! - [`synthetic`]: template defaults when nothing could be extracted
//! - [`assemble`]: the final type file and formatter hand-off
//!
//! [`pipeline`] wires these together per file and across files.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod extractors;
pub mod inference;
pub mod parser;
pub mod pipeline;
pub mod predicate;
pub mod synthetic;

pub use assemble::{AssembleOptions, Formatter, OutputDocument, PassthroughFormatter, finalize};
pub use classify::{Classified, classify};
pub use error::ParserError;
pub use extractors::{ChainOutcome, Strategy, run_chain};
pub use parser::detect_language;
pub use pipeline::{FileReport, PipelineOutput, Request, SourceFile, analyze_source, complete};

//! Parser error types for propgen-parser.

/// Errors raised inside a single extraction tier or by the formatter.
///
/// None of these escape the pipeline: the strategy chain treats a tier
/// error as "no candidates" and the assembler falls back to the
/// unformatted document.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Formatter failed: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

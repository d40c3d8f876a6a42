//! ast-grep wrapper and language detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the grammar for a component source file.
///
/// Plain `.ts` files use the TypeScript grammar so that `<T>(x) => x`
/// generics are not read as JSX. Everything else, including files with
/// unknown extensions, is parsed as TSX.
#[must_use]
pub fn detect_language(path: &Path) -> SupportLang {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ts" | "mts" | "cts") => SupportLang::TypeScript,
        _ => SupportLang::Tsx,
    }
}

/// Whether the grammar accepts JSX.
#[must_use]
pub const fn allows_jsx(lang: SupportLang) -> bool {
    !matches!(lang, SupportLang::TypeScript)
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

//! Primary tier: ast-grep (tree-sitter) syntax tree walk.

use ast_grep_core::{Doc, Node};
use ast_grep_language::SupportLang;
use propgen_core::PropCandidate;

use super::findings::{
    self, Declaration, ExtractionContext, Findings, MemberReference, UtilityReference,
    member_chain, parse_utility,
};
use crate::error::ParserError;
use crate::parser::parse_source;

/// Run the primary tier over one file.
///
/// # Errors
/// Returns `ParserError::ParseFailed` when the tree has syntax errors and
/// nothing usable was recovered from it.
pub fn extract(source: &str, ctx: &ExtractionContext<'_>) -> Result<Vec<PropCandidate>, ParserError> {
    let findings = scan(source, ctx.lang)?;
    Ok(findings::candidates(&findings, ctx))
}

/// Collect raw findings from the tree.
///
/// # Errors
/// See [`extract`].
pub fn scan(source: &str, lang: SupportLang) -> Result<Findings, ParserError> {
    let root = parse_source(source, lang);
    let root_node = root.root();
    let mut findings = Findings::default();
    walk(&root_node, Scope::default(), &mut findings);

    if findings.is_empty() && has_error(&root_node) {
        return Err(ParserError::ParseFailed {
            language: format!("{lang:?}"),
            message: "syntax tree contains errors".to_string(),
        });
    }
    Ok(findings)
}

/// Enclosing names while walking.
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'s> {
    declaration: Option<&'s str>,
    function: Option<&'s str>,
}

fn walk<D: Doc>(node: &Node<D>, scope: Scope<'_>, findings: &mut Findings) {
    match node.kind().as_ref() {
        "interface_declaration" | "type_alias_declaration" => {
            if let Some(name) = node.field("name").map(|n| n.text().to_string()) {
                findings.declarations.push(Declaration {
                    name: name.clone(),
                    text: node.text().to_string(),
                });
                let inner = Scope {
                    declaration: Some(&name),
                    ..scope
                };
                walk_children(node, inner, findings);
                return;
            }
        }
        "function_declaration" | "generator_function_declaration" | "variable_declarator" => {
            let name = node
                .field("name")
                .filter(|n| n.kind().as_ref() == "identifier")
                .map(|n| n.text().to_string());
            if let Some(name) = name {
                let inner = Scope {
                    function: Some(&name),
                    ..scope
                };
                walk_children(node, inner, findings);
                return;
            }
        }
        "generic_type" => {
            let text = node.text().to_string();
            if parse_utility(&text).is_some() {
                findings.utility_refs.push(UtilityReference {
                    text,
                    declaration: scope.declaration.map(str::to_string),
                    function: scope.function.map(str::to_string),
                });
            }
        }
        // `typeof Ns.Member` is a type query, not a usage.
        "type_query" => return,
        "member_expression" | "nested_identifier" => {
            let text = node.text();
            if member_chain(&text).is_some() {
                findings.member_refs.push(MemberReference {
                    path: text.to_string(),
                    declaration: scope.declaration.map(str::to_string),
                });
                return;
            }
        }
        _ => {}
    }
    walk_children(node, scope, findings);
}

fn walk_children<D: Doc>(node: &Node<D>, scope: Scope<'_>, findings: &mut Findings) {
    for child in node.children() {
        walk(&child, scope, findings);
    }
}

fn has_error<D: Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "ERROR" || node.children().any(|child| has_error(&child))
}

#[cfg(test)]
#[path = "structural/tests/mod.rs"]
mod tests;

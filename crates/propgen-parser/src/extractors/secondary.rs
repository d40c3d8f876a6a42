//! Secondary tier: an independent swc parse of the same file.
//!
//! Reports the same findings as the primary tier, so classification is
//! identical whichever parser read the file.

use propgen_core::PropCandidate;
use swc_common::{FileName, SourceFile, SourceMap, Span, Spanned};
use swc_ecma_ast::{
    FnDecl, JSXMemberExpr, MemberExpr, Module, Pat, TsExprWithTypeArgs, TsInterfaceDecl,
    TsTypeAliasDecl, TsTypeQuery, TsTypeRef, VarDeclarator,
};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

use super::findings::{
    self, Declaration, ExtractionContext, Findings, MemberReference, UtilityReference,
    member_chain, parse_utility,
};
use crate::error::ParserError;
use crate::parser::allows_jsx;

/// Run the secondary tier over one file.
///
/// # Errors
/// Returns `ParserError::ParseFailed` when swc rejects the module.
pub fn extract(source: &str, ctx: &ExtractionContext<'_>) -> Result<Vec<PropCandidate>, ParserError> {
    let findings = scan(source, allows_jsx(ctx.lang))?;
    Ok(findings::candidates(&findings, ctx))
}

/// Collect raw findings from the swc module.
///
/// # Errors
/// See [`extract`].
pub fn scan(source: &str, tsx: bool) -> Result<Findings, ParserError> {
    let cm = SourceMap::default();
    let fm = cm.new_source_file(
        FileName::Custom("component-source".into()).into(),
        source.to_string(),
    );
    let module = parse_module(&fm, tsx)?;

    let mut collector = Collector {
        source,
        base: fm.start_pos.0,
        findings: Findings::default(),
        declaration: None,
        function: None,
    };
    module.visit_with(&mut collector);
    Ok(collector.findings)
}

fn parse_module(fm: &SourceFile, tsx: bool) -> Result<Module, ParserError> {
    let syntax = Syntax::Typescript(TsSyntax {
        tsx,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(fm), None);
    parser.parse_module().map_err(|err| ParserError::ParseFailed {
        language: if tsx { "tsx" } else { "typescript" }.to_string(),
        message: format!("{:?}", err.kind()),
    })
}

struct Collector<'a> {
    source: &'a str,
    base: u32,
    findings: Findings,
    declaration: Option<String>,
    function: Option<String>,
}

impl Collector<'_> {
    fn snippet(&self, span: Span) -> Option<String> {
        let lo = span.lo.0.checked_sub(self.base)? as usize;
        let hi = span.hi.0.checked_sub(self.base)? as usize;
        self.source.get(lo..hi).map(str::to_string)
    }

    fn record_declaration<N: VisitWith<Self>>(&mut self, name: String, span: Span, node: &N) {
        if let Some(text) = self.snippet(span) {
            self.findings.declarations.push(Declaration {
                name: name.clone(),
                text,
            });
        }
        let outer = self.declaration.replace(name);
        node.visit_children_with(self);
        self.declaration = outer;
    }

    fn within_function<N: VisitWith<Self>>(&mut self, name: String, node: &N) {
        let outer = self.function.replace(name);
        node.visit_children_with(self);
        self.function = outer;
    }

    /// Record `Ns.Member` usages; returns `false` for other member chains.
    fn record_member(&mut self, span: Span) -> bool {
        let Some(path) = self.snippet(span) else {
            return false;
        };
        if member_chain(&path).is_none() {
            return false;
        }
        self.findings.member_refs.push(MemberReference {
            path,
            declaration: self.declaration.clone(),
        });
        true
    }

    fn record_utility(&mut self, span: Span) {
        let Some(text) = self.snippet(span) else {
            return;
        };
        if parse_utility(&text).is_some() {
            self.findings.utility_refs.push(UtilityReference {
                text,
                declaration: self.declaration.clone(),
                function: self.function.clone(),
            });
        }
    }
}

impl Visit for Collector<'_> {
    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        self.record_declaration(node.id.sym.to_string(), node.span(), node);
    }

    fn visit_ts_type_alias_decl(&mut self, node: &TsTypeAliasDecl) {
        self.record_declaration(node.id.sym.to_string(), node.span(), node);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.within_function(node.ident.sym.to_string(), node);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        match &node.name {
            Pat::Ident(binding) => self.within_function(binding.id.sym.to_string(), node),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_ts_type_ref(&mut self, node: &TsTypeRef) {
        if node.type_params.is_some() {
            self.record_utility(node.span());
        }
        node.visit_children_with(self);
    }

    // `interface X extends React.ComponentProps<..>`: the heritage clause is
    // an expression in swc, not a type reference.
    fn visit_ts_expr_with_type_args(&mut self, node: &TsExprWithTypeArgs) {
        match &node.type_args {
            Some(args) => {
                self.record_utility(node.span());
                args.visit_with(self);
            }
            None => node.visit_children_with(self),
        }
    }

    // `typeof Ns.Member` is a type query, not a usage.
    fn visit_ts_type_query(&mut self, _node: &TsTypeQuery) {}

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if !self.record_member(node.span()) {
            node.visit_children_with(self);
        }
    }

    fn visit_jsx_member_expr(&mut self, node: &JSXMemberExpr) {
        if !self.record_member(node.span()) {
            node.visit_children_with(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collects_declarations_and_references() {
        let source = r#"
import * as TabsPrimitive from "@radix-ui/react-tabs"

export interface TabsListProps extends React.ComponentProps<typeof TabsPrimitive.List> {
  dense?: boolean
}

function TabsTrigger(props: React.ComponentProps<typeof TabsPrimitive.Trigger>) {
  return <TabsPrimitive.Trigger {...props} />
}
"#;
        let findings = scan(source, true).expect("parses");
        let names: Vec<_> = findings.declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["TabsListProps"]);
        assert!(findings.declarations[0].text.contains("interface TabsListProps"));

        assert_eq!(findings.utility_refs.len(), 2);
        assert_eq!(
            findings.utility_refs[0].declaration.as_deref(),
            Some("TabsListProps")
        );
        assert_eq!(findings.utility_refs[1].function.as_deref(), Some("TabsTrigger"));

        let paths: Vec<_> = findings.member_refs.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["TabsPrimitive.Trigger"]);
    }

    #[test]
    fn rejects_broken_module() {
        let err = scan("export type = = {", true).expect_err("invalid source");
        assert!(matches!(err, ParserError::ParseFailed { .. }));
    }

    #[test]
    fn plain_typescript_without_jsx() {
        let findings = scan("export type Id<T> = T;\nconst f = <T,>(x: T) => x;", false)
            .expect("parses");
        assert_eq!(findings.declarations.len(), 1);
    }
}

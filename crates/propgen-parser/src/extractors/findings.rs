//! Raw observations shared by all extraction tiers, and the single place
//! where they are turned into [`PropCandidate`]s.
//!
//! Each tier only has to report what it saw (declarations, utility-type
//! references, primitive member usages). Classification happens here, so
//! every tier yields the same candidates for the same observations.

use std::collections::HashSet;

use ast_grep_language::SupportLang;
use propgen_core::{ComponentIdentity, DependencyProfile, PropCandidate};

use crate::classify::canonical_tag;
use crate::predicate::{PROPS_MARKER, is_props_utility, looks_like_props};

/// A named `interface` or `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Full declaration text as written (may carry `export`).
    pub text: String,
}

/// A reference to a framework props utility type, e.g.
/// `React.ComponentProps<typeof AccordionPrimitive.Item>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityReference {
    pub text: String,
    /// Name of the type declaration containing the reference.
    pub declaration: Option<String>,
    /// Name of the enclosing function or variable.
    pub function: Option<String>,
}

/// A namespace-qualified usage such as `AccordionPrimitive.Item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberReference {
    pub path: String,
    pub declaration: Option<String>,
}

/// Everything one tier observed in one file, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub declarations: Vec<Declaration>,
    pub utility_refs: Vec<UtilityReference>,
    pub member_refs: Vec<MemberReference>,
}

impl Findings {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.utility_refs.is_empty() && self.member_refs.is_empty()
    }
}

/// Read-only inputs every tier receives.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub identity: &'a ComponentIdentity,
    pub profile: &'a DependencyProfile,
    pub lang: SupportLang,
}

/// A utility reference taken apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedUtility {
    /// Normalized text, always `React.`-qualified.
    pub text: String,
    /// `Ns.Member` named by a `typeof` argument.
    pub target: Option<String>,
    /// Concatenated property-access chain after the namespace.
    pub chain_tag: Option<String>,
}

/// Parse `Name<Arg>` when `Name` is a props utility type.
pub(crate) fn parse_utility(text: &str) -> Option<ParsedUtility> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let open = collapsed.find('<')?;
    let body = collapsed.strip_suffix('>')?;
    let head = collapsed[..open].trim();
    if !is_props_utility(head) {
        return None;
    }
    let arg = body.get(open + 1..)?.trim();
    if arg.is_empty() {
        return None;
    }

    let head = if head.contains('.') {
        head.to_string()
    } else {
        format!("React.{head}")
    };

    let (target, chain_tag) = arg
        .strip_prefix("typeof ")
        .map(str::trim)
        .filter(|path| path.split('.').count() > 1)
        .map_or((None, None), |path| {
            if !path.split('.').all(is_identifier) {
                return (None, None);
            }
            (Some(path.to_string()), member_chain(path).map(|(_, tag)| tag))
        });

    Some(ParsedUtility {
        text: format!("{head}<{arg}>"),
        target,
        chain_tag,
    })
}

/// Split `Ns.A.B` into (`Ns`, `AB`) when every member segment is capitalized.
pub(crate) fn member_chain(path: &str) -> Option<(&str, String)> {
    let mut segments = path.split('.');
    let namespace = segments.next().filter(|s| is_identifier(s))?;
    let members: Vec<&str> = segments.collect();
    if members.is_empty()
        || !members
            .iter()
            .all(|m| is_identifier(m) && m.starts_with(|c: char| c.is_ascii_uppercase()))
    {
        return None;
    }
    Some((namespace, members.concat()))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Declaration text without `export`/`declare`/`default` and with a
/// consistent terminator, so all tiers produce identical text.
pub(crate) fn normalize_declaration(text: &str) -> String {
    let mut rest = text.trim();
    loop {
        let stripped = ["export", "declare", "default"].iter().find_map(|kw| {
            rest.strip_prefix(kw)
                .filter(|r| r.starts_with(char::is_whitespace))
                .map(str::trim_start)
        });
        match stripped {
            Some(r) => rest = r,
            None => break,
        }
    }
    let body = rest.trim_end_matches(';').trim_end();
    if body.starts_with("type") {
        format!("{body};")
    } else {
        body.to_string()
    }
}

/// Tag implied by a declared name: `AccordionItemProps` → `Item`.
fn tag_from_name(name: &str, identity: &ComponentIdentity) -> Option<String> {
    let middle = name
        .strip_prefix(identity.type_name_prefix())?
        .strip_suffix(PROPS_MARKER)?;
    if middle.starts_with(|c: char| c.is_uppercase()) {
        canonical_tag(Some(middle.to_string()))
    } else {
        None
    }
}

/// Tag implied by the enclosing function: `CardHeader` → `Header`.
fn enclosing_tag(function: Option<&str>, identity: &ComponentIdentity) -> Option<String> {
    let function = function?;
    if let Some(rest) = function.strip_prefix(identity.type_name_prefix()) {
        if rest.is_empty() {
            return None;
        }
        if rest.starts_with(|c: char| c.is_uppercase()) {
            return canonical_tag(Some(rest.to_string()));
        }
    }
    function
        .starts_with(|c: char| c.is_uppercase())
        .then(|| function.to_string())
}

fn type_name(identity: &ComponentIdentity, tag: Option<&str>) -> String {
    tag.map_or_else(
        || identity.root_type_name(),
        |t| identity.sub_component_type_name(t),
    )
}

/// Classify one tier's findings into candidates.
///
/// Explicit props declarations come first, in document order. Then one
/// derived alias per tag: utility references outside any declaration,
/// followed by primitive member usages. References already used by a kept
/// declaration are covered and not derived again, and a derived alias
/// never shadows an explicit declaration of the same name.
#[must_use]
pub fn candidates(findings: &Findings, ctx: &ExtractionContext<'_>) -> Vec<PropCandidate> {
    let identity = ctx.identity;
    let mut out = Vec::new();

    let mut kept: HashSet<&str> = HashSet::new();
    for declaration in &findings.declarations {
        if looks_like_props(&declaration.name, identity) && kept.insert(&declaration.name) {
            out.push(
                PropCandidate::extracted(normalize_declaration(&declaration.text))
                    .tagged(tag_from_name(&declaration.name, identity)),
            );
        }
    }

    let within_kept = |declaration: Option<&String>| {
        declaration.is_some_and(|name| kept.contains(name.as_str()))
    };
    let mut covered: HashSet<String> = findings
        .utility_refs
        .iter()
        .filter(|r| within_kept(r.declaration.as_ref()))
        .filter_map(|r| parse_utility(&r.text)?.target)
        .collect();
    covered.extend(
        findings
            .member_refs
            .iter()
            .filter(|r| within_kept(r.declaration.as_ref()))
            .map(|r| r.path.clone()),
    );

    let mut derived_tags: HashSet<Option<String>> = HashSet::new();
    let mut derive = |tag: Option<String>, body: String, out: &mut Vec<PropCandidate>| {
        let name = type_name(identity, tag.as_deref());
        if kept.contains(name.as_str()) || !derived_tags.insert(tag.clone()) {
            return;
        }
        out.push(PropCandidate::derived(format!("type {name} = {body};"), tag));
    };

    for reference in findings.utility_refs.iter().filter(|r| r.declaration.is_none()) {
        let Some(parsed) = parse_utility(&reference.text) else {
            continue;
        };
        if parsed.target.as_ref().is_some_and(|t| covered.contains(t)) {
            continue;
        }
        let tag = match parsed.chain_tag {
            Some(chain) => canonical_tag(Some(chain)),
            None => enclosing_tag(reference.function.as_deref(), identity),
        };
        derive(tag, parsed.text, &mut out);
    }

    for reference in findings.member_refs.iter().filter(|r| r.declaration.is_none()) {
        let Some((namespace, chain)) = member_chain(&reference.path) else {
            continue;
        };
        if ctx.profile.package_for(namespace).is_none() || covered.contains(&reference.path) {
            continue;
        }
        derive(
            canonical_tag(Some(chain)),
            format!("React.ComponentProps<typeof {}>", reference.path),
            &mut out,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("React.ComponentProps<typeof AccordionPrimitive.Item>", "React.ComponentProps<typeof AccordionPrimitive.Item>", Some("Item"))]
    #[case("ComponentPropsWithoutRef<typeof X.Sub.Trigger>", "React.ComponentPropsWithoutRef<typeof X.Sub.Trigger>", Some("SubTrigger"))]
    #[case("React.ComponentProps<\"div\">", "React.ComponentProps<\"div\">", None)]
    #[case("React.HTMLAttributes<\n  HTMLDivElement\n>", "React.HTMLAttributes<HTMLDivElement>", None)]
    fn parses_utilities(#[case] input: &str, #[case] text: &str, #[case] tag: Option<&str>) {
        let parsed = parse_utility(input).expect("utility");
        assert_eq!(parsed.text, text);
        assert_eq!(parsed.chain_tag.as_deref(), tag);
    }

    #[test]
    fn non_utilities_are_ignored() {
        assert_eq!(parse_utility("VariantProps<typeof buttonVariants>"), None);
        assert_eq!(parse_utility("React.ComponentProps"), None);
    }

    #[rstest]
    #[case("export type A = { a: string }", "type A = { a: string };")]
    #[case("type A = string;;", "type A = string;")]
    #[case("export declare interface B { b: number };", "interface B { b: number }")]
    #[case("  interface C {}\n", "interface C {}")]
    fn normalizes_declarations(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_declaration(input), expected);
    }

    #[test]
    fn member_chain_requires_capitalized_members() {
        assert_eq!(
            member_chain("AccordionPrimitive.Item"),
            Some(("AccordionPrimitive", "Item".to_string()))
        );
        assert_eq!(member_chain("AccordionPrimitive.Item.displayName"), None);
        assert_eq!(member_chain("props.children"), None);
        assert_eq!(member_chain("Single"), None);
    }
}

//! Last-resort tier: regular-expression scan of the raw text.
//!
//! Used for files neither parser can read. Declaration bodies are delimited
//! with a small bracket-aware scanner rather than a grammar.

use std::sync::LazyLock;

use propgen_core::PropCandidate;
use regex::Regex;

use super::findings::{
    self, Declaration, ExtractionContext, Findings, MemberReference, UtilityReference,
    member_chain, parse_utility,
};
use crate::error::ParserError;
use crate::predicate::PROPS_MARKER;

static DECLARATION_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:export[ \t]+)?(?:declare[ \t]+)?(interface|type)[ \t]+([A-Za-z_$][\w$]*)")
        .expect("valid regex")
});

static UTILITY_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:React\.)?(?:ComponentProps(?:WithoutRef|WithRef)?|HTMLProps|\w*HTMLAttributes)\s*<")
        .expect("valid regex")
});

static ENCLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)|\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*[:=])")
        .expect("valid regex")
});

static MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_$][\w$]*(?:\.[A-Z][\w$]*)+").expect("valid regex")
});

/// Run the pattern tier over one file.
///
/// # Errors
/// Never fails in practice; the signature matches the other tiers.
pub fn extract(source: &str, ctx: &ExtractionContext<'_>) -> Result<Vec<PropCandidate>, ParserError> {
    Ok(findings::candidates(&scan(source), ctx))
}

/// Collect raw findings with regular expressions.
#[must_use]
pub fn scan(source: &str) -> Findings {
    let mut findings = Findings::default();

    let mut spans: Vec<(usize, usize, String)> = Vec::new();
    for caps in DECLARATION_HEAD.captures_iter(source) {
        let (Some(keyword), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if spans.last().is_some_and(|(_, end, _)| keyword.start() < *end) {
            continue;
        }
        let end = declaration_end(source, keyword.start(), keyword.as_str() == "interface");
        spans.push((keyword.start(), end, name.as_str().to_string()));
        findings.declarations.push(Declaration {
            name: name.as_str().to_string(),
            text: source[keyword.start()..end].to_string(),
        });
    }
    let declaration_at = |offset: usize| {
        spans
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&offset))
            .map(|(_, _, name)| name.clone())
    };

    let functions: Vec<(usize, String)> = ENCLOSING
        .captures_iter(source)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let name = caps.get(1).or_else(|| caps.get(2))?;
            Some((start, name.as_str().to_string()))
        })
        .collect();
    let function_at = |offset: usize| {
        functions
            .iter()
            .take_while(|(start, _)| *start < offset)
            .last()
            .map(|(_, name)| name.clone())
    };

    for m in UTILITY_HEAD.find_iter(source) {
        let Some(end) = matching_angle(source, m.end() - 1) else {
            continue;
        };
        let text = &source[m.start()..end];
        if parse_utility(text).is_none() {
            continue;
        }
        findings.utility_refs.push(UtilityReference {
            text: text.to_string(),
            declaration: declaration_at(m.start()),
            function: function_at(m.start()),
        });
    }

    for m in MEMBER.find_iter(source) {
        let path = m.as_str();
        let after = source[m.end()..].chars().next();
        if source[..m.start()].trim_end().ends_with("typeof")
            || after == Some('<')
            || path.ends_with(PROPS_MARKER)
            || member_chain(path).is_none()
        {
            continue;
        }
        findings.member_refs.push(MemberReference {
            path: path.to_string(),
            declaration: declaration_at(m.start()),
        });
    }

    findings
}

/// Byte offset just past the `>` closing the `<` at `open`.
fn matching_angle(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in text[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '=' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + i + 1);
                }
            }
            ';' | '{' | '}' => return None,
            _ => {}
        }
        prev = c;
    }
    None
}

/// End of the declaration starting at `start` (its keyword).
///
/// Interfaces end at the brace closing their body, which is the first `{`
/// outside the generic arguments of the header. Type aliases end at a
/// `;` outside brackets, or at a line break after which the type clearly
/// does not continue.
fn declaration_end(text: &str, start: usize, interface: bool) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut angle = 0usize;
    let mut opened = false;
    let mut seen_eq = false;
    let mut i = start;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b'"' | b'\'' | b'`' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = text[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map_or(bytes.len(), |n| i + 2 + n + 2);
                continue;
            }
            b'<' if interface && !opened => angle += 1,
            b'>' if interface && !opened && i > start && bytes[i - 1] != b'=' => {
                angle = angle.saturating_sub(1);
            }
            b'{' if interface && !opened && depth == 0 && angle == 0 => {
                depth += 1;
                opened = true;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if interface && opened && depth == 0 {
                    return i + 1;
                }
            }
            b'=' if depth == 0 && bytes.get(i + 1) != Some(&b'>') => seen_eq = true,
            b';' if depth == 0 => return i + 1,
            b'\n' if depth == 0 && seen_eq && !interface => {
                if !type_continues(&text[start..i], &text[i..]) {
                    return i;
                }
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

fn type_continues(before: &str, after: &str) -> bool {
    let last = before.trim_end().chars().next_back();
    let next = after.trim_start().chars().next();
    last.is_some_and(|c| "=|&<,(:?".contains(c)) || next.is_some_and(|c| "|&>.?:=)".contains(c))
}

fn skip_string(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn delimits_interfaces_and_aliases() {
        let source = "export interface CardProps {\n  title: string; nested: { a: 1 }\n}\n\ntype CardTone =\n  | \"muted\"\n  | \"loud\"\nconst x = 1;\n";
        let findings = scan(source);
        let texts: Vec<_> = findings.declarations.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "interface CardProps {\n  title: string; nested: { a: 1 }\n}",
                "type CardTone =\n  | \"muted\"\n  | \"loud\"",
            ]
        );
    }

    #[test]
    fn generic_arguments_do_not_open_the_interface_body() {
        let source = "interface FooProps extends Base<{ a: string }>, Omit<X, \"b\"> {\n  b: number\n  cb: () => void\n}\nconst y = 2;\n";
        let findings = scan(source);
        assert_eq!(findings.declarations.len(), 1);
        assert_eq!(
            findings.declarations[0].text,
            "interface FooProps extends Base<{ a: string }>, Omit<X, \"b\"> {\n  b: number\n  cb: () => void\n}"
        );
    }

    #[test]
    fn finds_utilities_with_enclosing_names() {
        let source = "function CardHeader({ className, ...props }: React.ComponentProps<\"div\">) {\n  return null\n}\n";
        let findings = scan(source);
        assert_eq!(findings.utility_refs.len(), 1);
        assert_eq!(findings.utility_refs[0].text, "React.ComponentProps<\"div\">");
        assert_eq!(findings.utility_refs[0].function.as_deref(), Some("CardHeader"));
    }

    #[test]
    fn skips_type_queries_and_type_positions() {
        let source = "type A = typeof Ns.Item\nconst b: Ns.ItemProps = x\n<Ns.Trigger />\n";
        let findings = scan(source);
        let paths: Vec<_> = findings.member_refs.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["Ns.Trigger"]);
    }

    #[test]
    fn string_contents_do_not_end_declarations() {
        let source = "type Sep = \";\" | \"}\";\n";
        let findings = scan(source);
        assert_eq!(findings.declarations[0].text, "type Sep = \";\" | \"}\";");
    }
}

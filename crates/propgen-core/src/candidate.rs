//! Props declaration candidates.

use serde::{Deserialize, Serialize};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    /// Copied from a declaration found in source.
    #[default]
    Extracted,
    /// Alias generated around a framework utility type or primitive member.
    Derived,
    /// Heuristic template; nothing usable was found.
    Synthetic,
}

/// One standalone `interface` or `type` declaration.
///
/// Candidates are never edited in place; renaming yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropCandidate {
    pub declaration_text: String,
    /// `None` for the root component, otherwise the sub-part (e.g. `Trigger`).
    pub sub_component_tag: Option<String>,
    #[serde(default)]
    pub origin: CandidateOrigin,
}

impl PropCandidate {
    #[must_use]
    pub fn extracted(declaration_text: impl Into<String>) -> Self {
        Self {
            declaration_text: declaration_text.into(),
            sub_component_tag: None,
            origin: CandidateOrigin::Extracted,
        }
    }

    #[must_use]
    pub fn derived(declaration_text: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            declaration_text: declaration_text.into(),
            sub_component_tag: tag,
            origin: CandidateOrigin::Derived,
        }
    }

    #[must_use]
    pub fn synthetic(declaration_text: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            declaration_text: declaration_text.into(),
            sub_component_tag: tag,
            origin: CandidateOrigin::Synthetic,
        }
    }

    /// The declared type name, e.g. `AccordionItemProps`.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        header_name_span(&self.declaration_text).map(|(start, end)| &self.declaration_text[start..end])
    }

    /// Copy of this candidate with the declared name replaced.
    ///
    /// Only the header identifier changes; the body is left untouched even
    /// when it mentions the old name.
    #[must_use]
    pub fn renamed(&self, new_name: &str) -> Self {
        let Some((start, end)) = header_name_span(&self.declaration_text) else {
            return self.clone();
        };
        let mut text = String::with_capacity(self.declaration_text.len() + new_name.len());
        text.push_str(&self.declaration_text[..start]);
        text.push_str(new_name);
        text.push_str(&self.declaration_text[end..]);
        Self {
            declaration_text: text,
            sub_component_tag: self.sub_component_tag.clone(),
            origin: self.origin,
        }
    }

    /// Copy of this candidate with the given tag.
    #[must_use]
    pub fn tagged(&self, tag: Option<String>) -> Self {
        Self {
            sub_component_tag: tag,
            ..self.clone()
        }
    }

    /// Declaration text without a leading `export` keyword.
    #[must_use]
    pub fn unexported_text(&self) -> &str {
        let trimmed = self.declaration_text.trim_start();
        trimmed
            .strip_prefix("export")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map_or(trimmed, str::trim_start)
    }
}

/// Byte span of the declared identifier in `interface X` / `type X`.
fn header_name_span(text: &str) -> Option<(usize, usize)> {
    let mut pos = 0;
    loop {
        let (word_start, word_end) = next_word(text, pos)?;
        match &text[word_start..word_end] {
            "export" | "declare" | "default" => pos = word_end,
            "interface" | "type" => {
                let (name_start, name_end) = next_word(text, word_end)?;
                return Some((name_start, name_end));
            }
            _ => return None,
        }
    }
}

/// Next identifier-like word at or after `from`, skipping whitespace only.
fn next_word(text: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &text[from..];
    let offset = rest.len() - rest.trim_start().len();
    let start = from + offset;
    let len = text[start..]
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(text.len() - start);
    if len == 0 {
        None
    } else {
        Some((start, start + len))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn declared_name_of_alias_and_interface() {
        let alias = PropCandidate::extracted(
            "export type AccordionProps = React.ComponentProps<typeof AccordionPrimitive.Root>;",
        );
        assert_eq!(alias.declared_name(), Some("AccordionProps"));

        let iface = PropCandidate::extracted("interface ButtonProps<T> extends Base { a: T }");
        assert_eq!(iface.declared_name(), Some("ButtonProps"));

        let ambient = PropCandidate::extracted("export declare interface X { }");
        assert_eq!(ambient.declared_name(), Some("X"));
    }

    #[test]
    fn declared_name_rejects_non_declarations() {
        assert_eq!(PropCandidate::extracted("const x = 1;").declared_name(), None);
        assert_eq!(PropCandidate::extracted("").declared_name(), None);
    }

    #[test]
    fn rename_touches_header_only() {
        let original = PropCandidate::derived(
            "export interface AccordionProps { nested?: AccordionProps }",
            Some("Item".into()),
        );
        let renamed = original.renamed("AccordionItemProps");
        assert_eq!(
            renamed.declaration_text,
            "export interface AccordionItemProps { nested?: AccordionProps }"
        );
        assert_eq!(renamed.sub_component_tag.as_deref(), Some("Item"));
        // The source candidate is unchanged.
        assert_eq!(original.declared_name(), Some("AccordionProps"));
    }

    #[test]
    fn unexported_text_strips_keyword() {
        let c = PropCandidate::extracted("export type ExportedProps = {}");
        assert_eq!(c.unexported_text(), "type ExportedProps = {}");

        let c = PropCandidate::extracted("type exporterProps = {}");
        assert_eq!(c.unexported_text(), "type exporterProps = {}");
    }
}

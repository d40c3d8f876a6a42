//! Output document assembly and formatting hand-off.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::future::Future;
use std::sync::LazyLock;

use propgen_core::{ComponentIdentity, DependencyProfile, PropCandidate};
use regex::Regex;
use serde::Serialize;

use crate::classify::Classified;
use crate::error::ParserError;
use crate::inference::import_statement;

/// Namespace every generated file uses for framework types.
const REACT_NAMESPACE: &str = "React";

/// Utility types written without the `React.` qualifier.
static BARE_UTILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^.\w$])(ComponentProps(?:WithoutRef|WithRef)?|HTMLProps|\w*HTMLAttributes)\s*<")
        .expect("valid regex")
});

/// The generated type file, before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDocument {
    pub header: String,
    pub import_block: String,
    /// Final declarations in output order, `export` applied where needed.
    pub declarations: Vec<PropCandidate>,
    pub export_block: Option<String>,
}

/// Inputs that only affect presentation.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// External record identifier stamped into the header.
    pub record_id: Option<String>,
}

impl OutputDocument {
    /// Render as one source string, sections separated by blank lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut sections: Vec<&str> = vec![self.header.as_str()];
        if !self.import_block.is_empty() {
            sections.push(&self.import_block);
        }
        sections.extend(self.declarations.iter().map(|c| c.declaration_text.as_str()));
        if let Some(export_block) = &self.export_block {
            sections.push(export_block);
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    /// Every declared type name, in order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .filter_map(PropCandidate::declared_name)
            .collect()
    }
}

/// Build the document from the final profile and classified candidates.
///
/// When sub-components exist, the root and every `<Prefix><Tag>Props`
/// are exported through a single `export type { .. };` statement and
/// lose their own `export` keyword. All other declarations are exported
/// in place.
#[must_use]
pub fn assemble(
    identity: &ComponentIdentity,
    profile: &DependencyProfile,
    classified: &Classified,
    options: &AssembleOptions,
) -> OutputDocument {
    let re_exported: Vec<String> = if classified.registry.is_empty() {
        Vec::new()
    } else {
        std::iter::once(identity.root_type_name())
            .chain(
                classified
                    .registry
                    .iter()
                    .map(|tag| identity.sub_component_type_name(tag)),
            )
            .collect()
    };

    let declarations: Vec<PropCandidate> = classified
        .candidates
        .iter()
        .map(|candidate| {
            let bare = candidate.unexported_text();
            let listed = candidate
                .declared_name()
                .is_some_and(|name| re_exported.iter().any(|n| n == name));
            let text = if listed {
                bare.to_string()
            } else {
                format!("export {bare}")
            };
            PropCandidate {
                declaration_text: text,
                ..candidate.clone()
            }
        })
        .collect();

    let export_block =
        (!re_exported.is_empty()).then(|| format!("export type {{ {} }};", re_exported.join(", ")));

    OutputDocument {
        header: header(identity, options.record_id.as_deref()),
        import_block: import_block(profile, &declarations),
        declarations,
        export_block,
    }
}

fn header(identity: &ComponentIdentity, record_id: Option<&str>) -> String {
    let mut header = format!(
        "// Props types for `{}`, generated by propgen. Do not edit by hand.",
        identity.normalized_key()
    );
    if let Some(record_id) = record_id {
        let _ = write!(header, "\n// Record: {record_id}");
    }
    header
}

fn import_block(profile: &DependencyProfile, declarations: &[PropCandidate]) -> String {
    let mut lines = Vec::new();
    let react_prefix = format!("{REACT_NAMESPACE}.");
    let needs_react = declarations
        .iter()
        .any(|c| c.declaration_text.contains(&react_prefix));
    if needs_react && profile.package_for(REACT_NAMESPACE).is_none() {
        lines.push(import_statement(REACT_NAMESPACE, "react"));
    }
    let bare: BTreeSet<&str> = declarations
        .iter()
        .flat_map(|c| BARE_UTILITY.captures_iter(&c.declaration_text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    if !bare.is_empty() {
        let names: Vec<&str> = bare.into_iter().collect();
        lines.push(format!(
            "import type {{ {} }} from \"react\";",
            names.join(", ")
        ));
    }
    lines.extend(
        profile
            .primitive_namespaces
            .iter()
            .map(|(namespace, package)| import_statement(namespace, package)),
    );
    lines.join("\n")
}

// ── Formatting ─────────────────────────────────────────────────────

/// External pretty-printer for the rendered document.
pub trait Formatter {
    /// Return the formatted source.
    fn format(&self, source: &str) -> impl Future<Output = Result<String, ParserError>> + Send;
}

/// Formatter that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    async fn format(&self, source: &str) -> Result<String, ParserError> {
        Ok(source.to_string())
    }
}

/// Render and format the document, falling back to the unformatted text
/// when the formatter fails or returns nothing.
pub async fn finalize<F: Formatter + Sync>(document: &OutputDocument, formatter: &F) -> String {
    let rendered = document.render();
    match formatter.format(&rendered).await {
        Ok(formatted) if !formatted.trim().is_empty() => formatted,
        Ok(_) => {
            tracing::warn!("formatter returned an empty document; keeping unformatted output");
            rendered
        }
        Err(error) => {
            tracing::warn!(%error, "formatter failed; keeping unformatted output");
            rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use propgen_core::SubComponentRegistry;

    use super::*;

    struct FailingFormatter;

    impl Formatter for FailingFormatter {
        async fn format(&self, _source: &str) -> Result<String, ParserError> {
            Err(ParserError::Format("prettier not installed".into()))
        }
    }

    struct UppercaseHeader;

    impl Formatter for UppercaseHeader {
        async fn format(&self, source: &str) -> Result<String, ParserError> {
            Ok(source.replacen("// Props", "// PROPS", 1))
        }
    }

    fn tabs_document() -> OutputDocument {
        let identity = ComponentIdentity::parse("tabs").expect("valid identity");
        let mut profile = DependencyProfile::new();
        profile.bind_catalogue_namespace("TabsPrimitive", "@radix-ui/react-tabs");
        let classified = Classified {
            candidates: vec![
                PropCandidate::derived(
                    "type TabsProps = React.ComponentProps<typeof TabsPrimitive.Root>;",
                    None,
                ),
                PropCandidate::derived(
                    "type TabsListProps = React.ComponentProps<typeof TabsPrimitive.List>;",
                    Some("List".into()),
                ),
            ],
            registry: ["List"].into_iter().collect::<SubComponentRegistry>(),
        };
        assemble(
            &identity,
            &profile,
            &classified,
            &AssembleOptions {
                record_id: Some("rec_42".into()),
            },
        )
    }

    #[test]
    fn renders_imports_declarations_and_re_exports() {
        let expected = r#"// Props types for `tabs`, generated by propgen. Do not edit by hand.
// Record: rec_42

import type * as React from "react";
import type * as TabsPrimitive from "@radix-ui/react-tabs";

type TabsProps = React.ComponentProps<typeof TabsPrimitive.Root>;

type TabsListProps = React.ComponentProps<typeof TabsPrimitive.List>;

export type { TabsProps, TabsListProps };
"#;
        assert_eq!(tabs_document().render(), expected);
    }

    #[test]
    fn declarations_outside_the_registry_keep_export() {
        let identity = ComponentIdentity::parse("badge").expect("valid identity");
        let classified = Classified {
            candidates: vec![PropCandidate::extracted("interface BadgeProps { tone?: string }")],
            registry: SubComponentRegistry::new(),
        };
        let doc = assemble(
            &identity,
            &DependencyProfile::new(),
            &classified,
            &AssembleOptions::default(),
        );
        assert_eq!(doc.export_block, None);
        assert_eq!(doc.import_block, "");
        assert_eq!(
            doc.declarations[0].declaration_text,
            "export interface BadgeProps { tone?: string }"
        );
    }

    #[test]
    fn bare_utility_types_are_imported_by_name() {
        let identity = ComponentIdentity::parse("slider").expect("valid identity");
        let classified = Classified {
            candidates: vec![PropCandidate::extracted(
                "type SliderProps = ComponentProps<typeof SliderPrimitive.Root>;",
            )],
            registry: SubComponentRegistry::new(),
        };
        let doc = assemble(
            &identity,
            &DependencyProfile::new(),
            &classified,
            &AssembleOptions::default(),
        );
        assert_eq!(
            doc.import_block,
            "import type { ComponentProps } from \"react\";"
        );
    }

    #[tokio::test]
    async fn formatter_failure_keeps_unformatted_document() {
        let doc = tabs_document();
        assert_eq!(finalize(&doc, &FailingFormatter).await, doc.render());
    }

    #[tokio::test]
    async fn formatter_output_is_used_on_success() {
        let doc = tabs_document();
        let out = finalize(&doc, &UppercaseHeader).await;
        assert!(out.starts_with("// PROPS types"));
        assert_eq!(finalize(&doc, &PassthroughFormatter).await, doc.render());
    }
}

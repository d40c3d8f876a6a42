//! Sub-component classification, renaming, and deduplication.

use std::collections::HashSet;

use indexmap::IndexMap;
use propgen_core::{ComponentIdentity, PropCandidate, SubComponentRegistry};
use serde::Serialize;

use crate::synthetic;

/// Tag naming the component itself; folded into the root group.
pub const ROOT_TAG: &str = "Root";

/// Final, ordered candidate list plus the tags it exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classified {
    pub candidates: Vec<PropCandidate>,
    pub registry: SubComponentRegistry,
}

impl Classified {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Declared names in output order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().filter_map(PropCandidate::declared_name)
    }
}

/// `None` for empty and `Root` tags, the tag otherwise.
#[must_use]
pub fn canonical_tag(tag: Option<String>) -> Option<String> {
    tag.filter(|t| !t.is_empty() && t != ROOT_TAG)
}

/// Group, rename, and deduplicate the merged candidates of every file.
///
/// Root candidates come first and are never renamed. Tag groups follow
/// in first-seen order; when more than one group exists, their headers are
/// rewritten to `<Prefix><Tag>Props`. Exact duplicates are dropped, and so
/// is any later candidate whose rendered name is already taken.
#[must_use]
pub fn classify(identity: &ComponentIdentity, candidates: Vec<PropCandidate>) -> Classified {
    let mut candidates: Vec<PropCandidate> = candidates
        .into_iter()
        .map(|c| {
            let tag = canonical_tag(c.sub_component_tag.clone());
            if tag == c.sub_component_tag {
                c
            } else {
                c.tagged(tag)
            }
        })
        .collect();

    let root_name = identity.root_type_name();
    let has_tags = candidates.iter().any(|c| c.sub_component_tag.is_some());
    let has_root = candidates
        .iter()
        .any(|c| c.sub_component_tag.is_none() && c.declared_name() == Some(root_name.as_str()));
    if has_tags && !has_root {
        candidates.push(synthetic::declaration(identity, None));
    }

    let mut root = Vec::new();
    let mut groups: IndexMap<String, Vec<PropCandidate>> = IndexMap::new();
    for candidate in candidates {
        match candidate.sub_component_tag.clone() {
            None => root.push(candidate),
            Some(tag) => groups.entry(tag).or_default().push(candidate),
        }
    }

    let group_count = groups.len() + usize::from(!root.is_empty());
    let ordered = root.into_iter().chain(groups.into_iter().flat_map(|(tag, members)| {
        let qualified = identity.sub_component_type_name(&tag);
        members.into_iter().map(move |c| {
            if group_count > 1 && c.declared_name() != Some(qualified.as_str()) {
                c.renamed(&qualified)
            } else {
                c
            }
        })
    }));

    let mut texts: HashSet<String> = HashSet::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut kept = Vec::new();
    let mut registry = SubComponentRegistry::new();
    for candidate in ordered {
        if !texts.insert(candidate.declaration_text.clone()) {
            continue;
        }
        if let Some(name) = candidate.declared_name() {
            if !names.insert(name.to_string()) {
                tracing::debug!(name, "dropping candidate with duplicate type name");
                continue;
            }
        }
        if let Some(tag) = &candidate.sub_component_tag {
            registry.insert(tag.clone());
        }
        kept.push(candidate);
    }

    Classified {
        candidates: kept,
        registry,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn identity(name: &str) -> ComponentIdentity {
        ComponentIdentity::parse(name).expect("valid identity")
    }

    fn derived(text: &str, tag: Option<&str>) -> PropCandidate {
        PropCandidate::derived(text, tag.map(str::to_string))
    }

    #[test]
    fn root_first_then_tags_in_first_seen_order() {
        let id = identity("accordion");
        let out = classify(
            &id,
            vec![
                derived("type AccordionProps = X;", Some("Trigger")),
                PropCandidate::extracted("type AccordionProps = React.ComponentProps<typeof P.Root>;"),
                derived("type AccordionProps = Y;", Some("Item")),
                derived("type AccordionProps = Z;", Some("Trigger")),
            ],
        );
        let names: Vec<_> = out.type_names().collect();
        assert_eq!(
            names,
            ["AccordionProps", "AccordionTriggerProps", "AccordionItemProps"]
        );
        let tags: Vec<_> = out.registry.iter().collect();
        assert_eq!(tags, ["Trigger", "Item"]);
    }

    #[test]
    fn root_is_never_renamed() {
        let id = identity("card");
        let out = classify(
            &id,
            vec![
                PropCandidate::extracted("interface FancyProps { a: string }"),
                derived("type CardHeaderProps = React.ComponentProps<\"div\">;", Some("Header")),
            ],
        );
        assert_eq!(out.candidates[0].declared_name(), Some("FancyProps"));
    }

    #[test]
    fn root_tag_folds_into_root_group() {
        let id = identity("tabs");
        let out = classify(
            &id,
            vec![derived(
                "type TabsProps = React.ComponentProps<typeof TabsPrimitive.Root>;",
                Some(ROOT_TAG),
            )],
        );
        assert!(out.registry.is_empty());
        assert_eq!(out.candidates.len(), 1);
        assert_eq!(out.candidates[0].sub_component_tag, None);
    }

    #[test]
    fn missing_root_is_synthesized_when_tags_exist() {
        let id = identity("accordion");
        let out = classify(
            &id,
            vec![derived(
                "type AccordionItemProps = React.ComponentProps<typeof P.Item>;",
                Some("Item"),
            )],
        );
        let names: Vec<_> = out.type_names().collect();
        assert_eq!(names, ["AccordionProps", "AccordionItemProps"]);
    }

    #[test]
    fn exact_duplicates_collapse() {
        let id = identity("foo");
        let text = "interface FooProps { a: string }";
        let out = classify(
            &id,
            vec![PropCandidate::extracted(text), PropCandidate::extracted(text)],
        );
        assert_eq!(out.candidates.len(), 1);
    }

    #[test]
    fn later_duplicate_names_are_dropped() {
        let id = identity("accordion");
        let out = classify(
            &id,
            vec![
                PropCandidate::extracted("type AccordionProps = A;"),
                derived("type AccordionItemProps = B;", Some("Item")),
                derived("type AccordionItemProps = C;", Some("Item")),
            ],
        );
        let names: Vec<_> = out.type_names().collect();
        assert_eq!(names, ["AccordionProps", "AccordionItemProps"]);
        assert!(out.candidates[1].declaration_text.ends_with("B;"));
    }
}

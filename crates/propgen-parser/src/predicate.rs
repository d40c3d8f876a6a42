//! Name-level classification shared by every extraction tier.

use propgen_core::ComponentIdentity;

/// Marker carried by almost every props type name.
pub const PROPS_MARKER: &str = "Props";

/// Lowercase marker words that, next to the component name, mark a props type.
const MARKER_WORDS: &[&str] = &["props", "attributes", "attrs"];

/// Framework utility types that describe the props of an element or component.
const UTILITY_TYPES: &[&str] = &[
    "ComponentProps",
    "ComponentPropsWithoutRef",
    "ComponentPropsWithRef",
    "HTMLProps",
];

/// Does `name` look like a props type for this component?
///
/// True when the name contains `Props`, or when it mentions the component
/// (in any of its spellings) together with a props or attributes marker.
#[must_use]
pub fn looks_like_props(name: &str, identity: &ComponentIdentity) -> bool {
    if name.contains(PROPS_MARKER) {
        return true;
    }
    let lower = name.to_lowercase();
    let mentions_component = identity
        .match_forms()
        .iter()
        .any(|form| lower.contains(form.as_str()));
    mentions_component && MARKER_WORDS.iter().any(|marker| lower.contains(marker))
}

/// Is `type_name` (optionally `React.`-qualified) a props utility type?
#[must_use]
pub fn is_props_utility(type_name: &str) -> bool {
    let bare = type_name.strip_prefix("React.").unwrap_or(type_name);
    if bare.contains('.') {
        return false;
    }
    UTILITY_TYPES.contains(&bare) || bare.ends_with("HTMLAttributes")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn identity(name: &str) -> ComponentIdentity {
        ComponentIdentity::parse(name).expect("valid identity")
    }

    #[rstest]
    #[case("Props", true)]
    #[case("AccordionProps", true)]
    #[case("TriggerProps", true)]
    #[case("AccordionAttributes", true)]
    #[case("accordionAttrs", true)]
    #[case("AccordionState", false)]
    #[case("ButtonAttributes", false)]
    #[case("Proposal", false)]
    fn classifies_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(looks_like_props(name, &identity("accordion")), expected);
    }

    #[test]
    fn kebab_names_match_joined_spelling() {
        let id = identity("alert-dialog");
        assert!(looks_like_props("AlertDialogAttributes", &id));
        assert!(!looks_like_props("DialogAttributes", &id));
    }

    #[rstest]
    #[case("ComponentProps", true)]
    #[case("React.ComponentPropsWithoutRef", true)]
    #[case("React.ButtonHTMLAttributes", true)]
    #[case("HTMLAttributes", true)]
    #[case("React.HTMLProps", true)]
    #[case("React.ElementRef", false)]
    #[case("VariantProps", false)]
    #[case("Other.ComponentProps", false)]
    fn recognizes_utility_types(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_props_utility(name), expected);
    }
}

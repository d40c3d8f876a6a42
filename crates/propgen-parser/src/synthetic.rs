//! Heuristic props declarations for components with nothing extractable.
//!
//! Output is a pure function of the component identity and the seed tags.

use propgen_core::{ComponentIdentity, PropCandidate, SubComponentRegistry};
use serde::Serialize;

/// Field set chosen from the component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    InteractiveControl,
    Overlay,
    Form,
    Selection,
    TextInput,
    Minimal,
}

/// Checked in order; the first template with a matching keyword wins.
const KEYWORDS: &[(Template, &[&str])] = &[
    (
        Template::Overlay,
        &[
            "dialog", "sheet", "drawer", "popover", "tooltip", "modal", "hover", "menu",
            "dropdown",
        ],
    ),
    (Template::Form, &["form", "field"]),
    (
        Template::Selection,
        &[
            "select", "radio", "combobox", "command", "tabs", "accordion", "listbox", "group",
        ],
    ),
    (Template::TextInput, &["input", "textarea", "otp", "search"]),
    (
        Template::InteractiveControl,
        &["button", "toggle", "switch", "checkbox", "slider", "link"],
    ),
];

const CHILDREN: &str = "children?: React.ReactNode;";
const CLASS_NAME: &str = "className?: string;";
const AS_CHILD: &str = "asChild?: boolean;";
const DISABLED: &str = "disabled?: boolean;";

impl Template {
    /// Case-insensitive keyword match against the raw component name.
    #[must_use]
    pub fn select(raw_name: &str) -> Self {
        let lower = raw_name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map_or(Self::Minimal, |(template, _)| *template)
    }

    fn root_fields(self) -> Vec<&'static str> {
        let mut fields = match self {
            Self::InteractiveControl => vec![
                "variant?: \"default\" | \"destructive\" | \"outline\" | \"secondary\" | \"ghost\" | \"link\";",
                "size?: \"default\" | \"sm\" | \"lg\" | \"icon\";",
                AS_CHILD,
                DISABLED,
                "onClick?: React.MouseEventHandler<HTMLButtonElement>;",
            ],
            Self::Overlay => vec![
                "open?: boolean;",
                "defaultOpen?: boolean;",
                "onOpenChange?: (open: boolean) => void;",
                "modal?: boolean;",
            ],
            Self::Form => vec![
                "onSubmit?: React.FormEventHandler<HTMLFormElement>;",
                DISABLED,
            ],
            Self::Selection => vec![
                "value?: string;",
                "defaultValue?: string;",
                "onValueChange?: (value: string) => void;",
                DISABLED,
            ],
            Self::TextInput => vec![
                "value?: string;",
                "defaultValue?: string;",
                "placeholder?: string;",
                DISABLED,
                "onChange?: React.ChangeEventHandler<HTMLInputElement>;",
            ],
            Self::Minimal => Vec::new(),
        };
        if self != Self::TextInput {
            fields.push(CHILDREN);
        }
        fields.push(CLASS_NAME);
        fields
    }

    fn sub_component_fields(self, tag: &str) -> Vec<&'static str> {
        let mut fields = match tag {
            "Trigger" => vec![AS_CHILD, DISABLED],
            "Close" | "Action" | "Cancel" => vec![AS_CHILD],
            "Content" if self == Self::Overlay => vec![
                "forceMount?: true;",
                "side?: \"top\" | \"right\" | \"bottom\" | \"left\";",
                "align?: \"start\" | \"center\" | \"end\";",
                "onEscapeKeyDown?: (event: KeyboardEvent) => void;",
            ],
            "Content" => vec!["forceMount?: true;"],
            "Item" if self == Self::Selection => vec!["value: string;", DISABLED],
            "Item" if self == Self::Overlay => vec![
                DISABLED,
                "inset?: boolean;",
                "onSelect?: (event: Event) => void;",
            ],
            "Item" => vec![DISABLED],
            _ => Vec::new(),
        };
        fields.push(CHILDREN);
        fields.push(CLASS_NAME);
        fields
    }
}

fn render(name: &str, fields: &[&str]) -> String {
    let mut text = format!("interface {name} {{\n");
    for field in fields {
        text.push_str("  ");
        text.push_str(field);
        text.push('\n');
    }
    text.push('}');
    text
}

/// One synthetic declaration: the root when `tag` is `None`.
#[must_use]
pub fn declaration(identity: &ComponentIdentity, tag: Option<&str>) -> PropCandidate {
    let template = Template::select(identity.raw_name());
    match tag {
        None => PropCandidate::synthetic(
            render(&identity.root_type_name(), &template.root_fields()),
            None,
        ),
        Some(tag) => PropCandidate::synthetic(
            render(
                &identity.sub_component_type_name(tag),
                &template.sub_component_fields(tag),
            ),
            Some(tag.to_string()),
        ),
    }
}

/// Root declaration plus one per seeded sub-component.
#[must_use]
pub fn generate(identity: &ComponentIdentity, seed: &SubComponentRegistry) -> Vec<PropCandidate> {
    std::iter::once(declaration(identity, None))
        .chain(seed.iter().map(|tag| declaration(identity, Some(tag))))
        .collect()
}

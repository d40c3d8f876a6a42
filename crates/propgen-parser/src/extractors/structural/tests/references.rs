use pretty_assertions::assert_eq;

use super::*;

const ACCORDION: &str = r#"
import * as React from "react"
import * as AccordionPrimitive from "@radix-ui/react-accordion"

export type AccordionProps = React.ComponentProps<typeof AccordionPrimitive.Root>

function AccordionItem({ className, ...props }: React.ComponentProps<typeof AccordionPrimitive.Item>) {
  return <AccordionPrimitive.Item className={className} {...props} />
}

function AccordionTrigger(props: React.ComponentProps<typeof AccordionPrimitive.Trigger>) {
  return (
    <AccordionPrimitive.Header className="flex">
      <AccordionPrimitive.Trigger {...props} />
    </AccordionPrimitive.Header>
  )
}

function AccordionContent({ children, ...props }: React.ComponentProps<typeof AccordionPrimitive.Content>) {
  return <AccordionPrimitive.Content {...props}>{children}</AccordionPrimitive.Content>
}
"#;

fn accordion_profile() -> DependencyProfile {
    let mut profile = DependencyProfile::new();
    profile.bind_catalogue_namespace("AccordionPrimitive", "@radix-ui/react-accordion");
    profile
}

#[test]
fn utility_references_carry_scope() {
    let findings = scan_tsx(ACCORDION);
    let scoped: Vec<_> = findings
        .utility_refs
        .iter()
        .map(|r| (r.declaration.as_deref(), r.function.as_deref()))
        .collect();
    assert_eq!(
        scoped,
        [
            (Some("AccordionProps"), None),
            (None, Some("AccordionItem")),
            (None, Some("AccordionTrigger")),
            (None, Some("AccordionContent")),
        ]
    );
}

#[test]
fn type_queries_are_not_member_usages() {
    let findings = scan_tsx("type A = React.ComponentProps<typeof Ns.Root>\n");
    assert!(findings.member_refs.is_empty());
}

#[test]
fn jsx_member_usages_are_collected() {
    let findings = scan_tsx(ACCORDION);
    let paths: Vec<_> = findings.member_refs.iter().map(|m| m.path.as_str()).collect();
    assert!(paths.contains(&"AccordionPrimitive.Item"));
    assert!(paths.contains(&"AccordionPrimitive.Header"));
}

#[test]
fn accordion_yields_root_and_tagged_aliases() {
    let candidates = extract_for("accordion", &accordion_profile(), ACCORDION);
    assert_eq!(
        names(&candidates),
        [
            "AccordionProps",
            "AccordionItemProps",
            "AccordionTriggerProps",
            "AccordionContentProps",
            "AccordionHeaderProps",
        ]
    );
    assert_eq!(
        candidates[1].declaration_text,
        "type AccordionItemProps = React.ComponentProps<typeof AccordionPrimitive.Item>;"
    );
    assert_eq!(candidates[4].sub_component_tag.as_deref(), Some("Header"));
}

#[test]
fn member_usages_need_a_known_namespace() {
    let candidates = extract_for("accordion", &DependencyProfile::new(), ACCORDION);
    assert!(!names(&candidates).contains(&"AccordionHeaderProps"));
}

#[test]
fn untagged_reference_uses_enclosing_component() {
    let candidates = extract_for(
        "card",
        &DependencyProfile::new(),
        r#"
function Card({ className, ...props }: React.ComponentProps<"div">) {
  return <div className={className} {...props} />
}

function CardHeader({ className, ...props }: React.ComponentProps<"div">) {
  return <div className={className} {...props} />
}
"#,
    );
    assert_eq!(names(&candidates), ["CardProps", "CardHeaderProps"]);
    assert_eq!(candidates[0].sub_component_tag, None);
    assert_eq!(candidates[1].sub_component_tag.as_deref(), Some("Header"));
}

//! The component catalogue. Keep entries sorted by key.

use crate::RegistryEntry;

const fn primitive(
    key: &'static str,
    package: &'static str,
    namespace: &'static str,
    sub_components: &'static [&'static str],
) -> RegistryEntry {
    RegistryEntry {
        key,
        package: Some(package),
        primitive_namespace: Some(namespace),
        sub_components,
        extra_packages: &[],
    }
}

const fn plain(key: &'static str, sub_components: &'static [&'static str]) -> RegistryEntry {
    RegistryEntry {
        key,
        package: None,
        primitive_namespace: None,
        sub_components,
        extra_packages: &[],
    }
}

const MENU_PARTS: &[&str] = &[
    "Trigger",
    "Content",
    "Group",
    "Item",
    "CheckboxItem",
    "RadioGroup",
    "RadioItem",
    "Label",
    "Separator",
    "Shortcut",
    "Sub",
    "SubTrigger",
    "SubContent",
];

const DIALOG_PARTS: &[&str] = &[
    "Trigger",
    "Close",
    "Overlay",
    "Content",
    "Header",
    "Footer",
    "Title",
    "Description",
];

pub(crate) const ENTRIES: &[RegistryEntry] = &[
    primitive(
        "accordion",
        "@radix-ui/react-accordion",
        "AccordionPrimitive",
        &["Item", "Trigger", "Content"],
    ),
    plain("alert", &["Title", "Description"]),
    primitive(
        "alert-dialog",
        "@radix-ui/react-alert-dialog",
        "AlertDialogPrimitive",
        &[
            "Trigger",
            "Overlay",
            "Content",
            "Header",
            "Footer",
            "Title",
            "Description",
            "Action",
            "Cancel",
        ],
    ),
    primitive(
        "aspect-ratio",
        "@radix-ui/react-aspect-ratio",
        "AspectRatioPrimitive",
        &[],
    ),
    primitive(
        "avatar",
        "@radix-ui/react-avatar",
        "AvatarPrimitive",
        &["Image", "Fallback"],
    ),
    RegistryEntry {
        key: "badge",
        package: Some("@radix-ui/react-slot"),
        primitive_namespace: None,
        sub_components: &[],
        extra_packages: &["class-variance-authority"],
    },
    plain(
        "breadcrumb",
        &["List", "Item", "Link", "Page", "Separator", "Ellipsis"],
    ),
    RegistryEntry {
        key: "button",
        package: Some("@radix-ui/react-slot"),
        primitive_namespace: None,
        sub_components: &[],
        extra_packages: &["class-variance-authority"],
    },
    RegistryEntry {
        key: "calendar",
        package: Some("react-day-picker"),
        primitive_namespace: None,
        sub_components: &[],
        extra_packages: &["lucide-react"],
    },
    plain("card", &["Header", "Title", "Description", "Action", "Content", "Footer"]),
    RegistryEntry {
        key: "carousel",
        package: Some("embla-carousel-react"),
        primitive_namespace: None,
        sub_components: &["Content", "Item", "Previous", "Next"],
        extra_packages: &["lucide-react"],
    },
    primitive("chart", "recharts", "RechartsPrimitive", &[
        "Container",
        "Tooltip",
        "TooltipContent",
        "Legend",
        "LegendContent",
        "Style",
    ]),
    primitive("checkbox", "@radix-ui/react-checkbox", "CheckboxPrimitive", &[]),
    primitive(
        "collapsible",
        "@radix-ui/react-collapsible",
        "CollapsiblePrimitive",
        &["Trigger", "Content"],
    ),
    primitive(
        "command",
        "cmdk",
        "CommandPrimitive",
        &[
            "Dialog", "Input", "List", "Empty", "Group", "Item", "Separator", "Shortcut",
        ],
    ),
    primitive(
        "context-menu",
        "@radix-ui/react-context-menu",
        "ContextMenuPrimitive",
        MENU_PARTS,
    ),
    primitive(
        "dialog",
        "@radix-ui/react-dialog",
        "DialogPrimitive",
        DIALOG_PARTS,
    ),
    primitive("drawer", "vaul", "DrawerPrimitive", DIALOG_PARTS),
    primitive(
        "dropdown-menu",
        "@radix-ui/react-dropdown-menu",
        "DropdownMenuPrimitive",
        MENU_PARTS,
    ),
    RegistryEntry {
        key: "form",
        package: Some("react-hook-form"),
        primitive_namespace: None,
        sub_components: &["Item", "Label", "Control", "Description", "Message", "Field"],
        extra_packages: &["@radix-ui/react-label", "@radix-ui/react-slot"],
    },
    primitive(
        "hover-card",
        "@radix-ui/react-hover-card",
        "HoverCardPrimitive",
        &["Trigger", "Content"],
    ),
    plain("input", &[]),
    RegistryEntry {
        key: "input-otp",
        package: Some("input-otp"),
        primitive_namespace: None,
        sub_components: &["Group", "Slot", "Separator"],
        extra_packages: &["lucide-react"],
    },
    primitive("label", "@radix-ui/react-label", "LabelPrimitive", &[]),
    primitive(
        "menubar",
        "@radix-ui/react-menubar",
        "MenubarPrimitive",
        MENU_PARTS,
    ),
    primitive(
        "navigation-menu",
        "@radix-ui/react-navigation-menu",
        "NavigationMenuPrimitive",
        &["List", "Item", "Trigger", "Content", "Link", "Viewport", "Indicator"],
    ),
    plain(
        "pagination",
        &["Content", "Item", "Link", "Previous", "Next", "Ellipsis"],
    ),
    primitive(
        "popover",
        "@radix-ui/react-popover",
        "PopoverPrimitive",
        &["Trigger", "Content", "Anchor"],
    ),
    primitive("progress", "@radix-ui/react-progress", "ProgressPrimitive", &[]),
    primitive(
        "radio-group",
        "@radix-ui/react-radio-group",
        "RadioGroupPrimitive",
        &["Item"],
    ),
    primitive(
        "resizable",
        "react-resizable-panels",
        "ResizablePrimitive",
        &["PanelGroup", "Panel", "Handle"],
    ),
    primitive(
        "scroll-area",
        "@radix-ui/react-scroll-area",
        "ScrollAreaPrimitive",
        &["ScrollBar"],
    ),
    primitive(
        "select",
        "@radix-ui/react-select",
        "SelectPrimitive",
        &[
            "Group",
            "Value",
            "Trigger",
            "Content",
            "Label",
            "Item",
            "Separator",
            "ScrollUpButton",
            "ScrollDownButton",
        ],
    ),
    primitive(
        "separator",
        "@radix-ui/react-separator",
        "SeparatorPrimitive",
        &[],
    ),
    primitive(
        "sheet",
        "@radix-ui/react-dialog",
        "SheetPrimitive",
        DIALOG_PARTS,
    ),
    plain("skeleton", &[]),
    primitive("slider", "@radix-ui/react-slider", "SliderPrimitive", &[]),
    RegistryEntry {
        key: "sonner",
        package: Some("sonner"),
        primitive_namespace: None,
        sub_components: &[],
        extra_packages: &["next-themes"],
    },
    primitive("switch", "@radix-ui/react-switch", "SwitchPrimitive", &[]),
    plain(
        "table",
        &["Header", "Body", "Footer", "Row", "Head", "Cell", "Caption"],
    ),
    primitive(
        "tabs",
        "@radix-ui/react-tabs",
        "TabsPrimitive",
        &["List", "Trigger", "Content"],
    ),
    plain("textarea", &[]),
    primitive("toggle", "@radix-ui/react-toggle", "TogglePrimitive", &[]),
    primitive(
        "toggle-group",
        "@radix-ui/react-toggle-group",
        "ToggleGroupPrimitive",
        &["Item"],
    ),
    primitive(
        "tooltip",
        "@radix-ui/react-tooltip",
        "TooltipPrimitive",
        &["Provider", "Trigger", "Content"],
    ),
];

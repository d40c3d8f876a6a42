//! # propgen-registry
//!
//! Static registry of well-known shared-library components.
//!
//! Maps a normalized component key to the primitive package it wraps, the
//! namespace that package is conventionally imported under, and the
//! structural sub-components the component exposes. A hit short-circuits
//! dependency inference and seeds the synthetic default generator.

mod components;

use propgen_core::{DependencyProfile, SubComponentRegistry};
use serde::Serialize;

// ── Types ──────────────────────────────────────────────────────────

/// One well-known component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    /// Normalized key (e.g. `alert-dialog`).
    pub key: &'static str,
    /// Primitive package the component wraps (e.g. `@radix-ui/react-accordion`).
    pub package: Option<&'static str>,
    /// Namespace the primitive is imported under (e.g. `AccordionPrimitive`).
    pub primitive_namespace: Option<&'static str>,
    /// Structural sub-parts in declaration order.
    pub sub_components: &'static [&'static str],
    /// Other packages the component source imports.
    pub extra_packages: &'static [&'static str],
}

impl RegistryEntry {
    /// Profile implied by this entry alone.
    #[must_use]
    pub fn seed_profile(&self) -> DependencyProfile {
        let mut profile = DependencyProfile::new();
        if let Some(package) = self.package {
            match self.primitive_namespace {
                Some(namespace) => profile.bind_catalogue_namespace(namespace, package),
                None => profile.require_package(package),
            }
        }
        for package in self.extra_packages {
            profile.require_package(*package);
        }
        profile
    }

    /// Sub-component tags in declaration order.
    #[must_use]
    pub fn seed_sub_components(&self) -> SubComponentRegistry {
        self.sub_components.iter().copied().collect()
    }
}

// ── Registry ───────────────────────────────────────────────────────

/// Lookup table over the built-in component catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegistry;

impl StaticRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Find the entry for a normalized key, following aliases.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'static RegistryEntry> {
        let key = canonical_key(key);
        components::ENTRIES.iter().find(|entry| entry.key == key)
    }

    /// Every entry, in key order.
    #[must_use]
    pub fn entries(&self) -> &'static [RegistryEntry] {
        components::ENTRIES
    }
}

/// Resolve common alternate spellings to the catalogue key.
#[must_use]
pub fn canonical_key(key: &str) -> &str {
    match key {
        "dropdown" | "dropdown-menus" => "dropdown-menu",
        "otp" | "otp-input" => "input-otp",
        "modal" => "dialog",
        "nav-menu" | "navigation" => "navigation-menu",
        "toast" | "toaster" => "sonner",
        "scrollarea" => "scroll-area",
        "alertdialog" => "alert-dialog",
        "hovercard" => "hover-card",
        "radio" => "radio-group",
        "text-area" => "textarea",
        "toggle-buttons" => "toggle-group",
        other => other,
    }
}

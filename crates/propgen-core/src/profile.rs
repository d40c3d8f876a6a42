//! Inferred external dependencies of a component.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Packages a component needs and the primitive namespaces it references.
///
/// Profiles only grow: no package or namespace binding is ever removed.
/// Aliases observed in import statements are always kept. The catalogue adds
/// its canonical namespace alongside them, and a guessed namespace is only
/// recorded for a package nothing else has named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyProfile {
    pub required_packages: BTreeSet<String>,
    /// Namespace identifier → package, e.g. `AccordionPrimitive` →
    /// `@radix-ui/react-accordion`.
    pub primitive_namespaces: BTreeMap<String, String>,
    /// Packages whose namespace binding came from the catalogue.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    catalogued: BTreeSet<String>,
}

impl DependencyProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required_packages.is_empty() && self.primitive_namespaces.is_empty()
    }

    pub fn require_package(&mut self, package: impl Into<String>) {
        self.required_packages.insert(package.into());
    }

    /// Bind a canonical catalogue namespace next to any existing binding.
    pub fn bind_catalogue_namespace(&mut self, namespace: impl Into<String>, package: &str) {
        self.catalogued.insert(package.to_string());
        self.bind(namespace.into(), package);
    }

    /// Bind an alias the source actually imports. The first binding of a
    /// namespace wins.
    pub fn bind_observed_namespace(&mut self, namespace: impl Into<String>, package: &str) {
        self.bind(namespace.into(), package);
    }

    /// Bind a namespace guessed from the package path, unless the package
    /// is already named by the catalogue or an observed import.
    pub fn bind_inferred_namespace(&mut self, namespace: impl Into<String>, package: &str) {
        self.require_package(package);
        let named = self.catalogued.contains(package)
            || self.primitive_namespaces.values().any(|p| p == package);
        if named {
            return;
        }
        self.bind(namespace.into(), package);
    }

    fn bind(&mut self, namespace: String, package: &str) {
        self.require_package(package);
        self.primitive_namespaces
            .entry(namespace)
            .or_insert_with(|| package.to_string());
    }

    /// Whether the namespace is bound to the catalogue's canonical name.
    #[must_use]
    pub fn is_catalogued(&self, package: &str) -> bool {
        self.catalogued.contains(package)
    }

    #[must_use]
    pub fn package_for(&self, namespace: &str) -> Option<&str> {
        self.primitive_namespaces.get(namespace).map(String::as_str)
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.required_packages
            .extend(other.required_packages.iter().cloned());
        self.catalogued.extend(other.catalogued.iter().cloned());
        for (namespace, package) in &other.primitive_namespaces {
            self.bind(namespace.clone(), package);
        }
    }

    /// Consuming form of [`merge`](Self::merge) for fold-style reduction.
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }
}

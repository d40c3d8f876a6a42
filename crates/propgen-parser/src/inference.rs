//! Primitive and dependency inference.
//!
//! Two independent signals feed a [`DependencyProfile`]:
//!
//! - **Catalogue**: well-known package names (exact or prefix match) found
//!   anywhere in the text. A match requires the package; when the text also
//!   imports it under the catalogue's canonical namespace, that binding is
//!   recorded as authoritative.
//! - **Generic imports**: every import/export statement of a non-relative
//!   module. The package root is required; namespace imports bind their alias.
//!
//! Works on component source and on installer log output alike.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use heck::ToUpperCamelCase;
use propgen_core::DependencyProfile;
use regex::Regex;

/// How a namespace is brought into scope in generated type files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStyle {
    /// `import type * as Ns from "pkg";`
    Namespace,
    /// `import type { Export as Ns } from "pkg";`
    NamedAlias { export: &'static str },
}

#[derive(Debug, Clone, Copy)]
enum PackagePattern {
    Exact(&'static str),
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy)]
enum Primitive {
    /// Fixed canonical namespace.
    Canonical {
        namespace: &'static str,
        style: ImportStyle,
    },
    /// `<PascalSuffix>Primitive`, suffix taken after the prefix.
    FromSuffix,
}

#[derive(Debug, Clone, Copy)]
struct CatalogueEntry {
    pattern: PackagePattern,
    /// `None` for packages that are required but never a primitive namespace.
    primitive: Option<Primitive>,
}

impl CatalogueEntry {
    fn matches(&self, package: &str) -> bool {
        match self.pattern {
            PackagePattern::Exact(name) => package == name,
            PackagePattern::Prefix(prefix) => {
                package.len() > prefix.len() && package.starts_with(prefix)
            }
        }
    }

    fn canonical(&self, package: &str) -> Option<(String, ImportStyle)> {
        match (self.primitive?, self.pattern) {
            (Primitive::Canonical { namespace, style }, _) => Some((namespace.to_string(), style)),
            (Primitive::FromSuffix, PackagePattern::Prefix(prefix)) => {
                let suffix = package.strip_prefix(prefix)?;
                Some((
                    format!("{}Primitive", suffix.to_upper_camel_case()),
                    ImportStyle::Namespace,
                ))
            }
            (Primitive::FromSuffix, PackagePattern::Exact(name)) => Some((
                format!("{}Primitive", name.to_upper_camel_case()),
                ImportStyle::Namespace,
            )),
        }
    }
}

const fn plain(name: &'static str) -> CatalogueEntry {
    CatalogueEntry {
        pattern: PackagePattern::Exact(name),
        primitive: None,
    }
}

const fn namespace(name: &'static str, ns: &'static str) -> CatalogueEntry {
    CatalogueEntry {
        pattern: PackagePattern::Exact(name),
        primitive: Some(Primitive::Canonical {
            namespace: ns,
            style: ImportStyle::Namespace,
        }),
    }
}

const fn named(name: &'static str, export: &'static str, ns: &'static str) -> CatalogueEntry {
    CatalogueEntry {
        pattern: PackagePattern::Exact(name),
        primitive: Some(Primitive::Canonical {
            namespace: ns,
            style: ImportStyle::NamedAlias { export },
        }),
    }
}

const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        pattern: PackagePattern::Prefix("@radix-ui/react-"),
        primitive: Some(Primitive::FromSuffix),
    },
    named("cmdk", "Command", "CommandPrimitive"),
    named("vaul", "Drawer", "DrawerPrimitive"),
    namespace("recharts", "RechartsPrimitive"),
    namespace("react-resizable-panels", "ResizablePrimitive"),
    plain("react"),
    plain("react-dom"),
    plain("class-variance-authority"),
    plain("lucide-react"),
    plain("input-otp"),
    plain("sonner"),
    plain("next-themes"),
    plain("react-hook-form"),
    plain("@hookform/resolvers"),
    plain("zod"),
    plain("embla-carousel-react"),
    plain("react-day-picker"),
    plain("clsx"),
    plain("tailwind-merge"),
];

static PACKAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*").expect("valid regex")
});

static NAMESPACE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:type\s+)?\*\s+as\s+([A-Za-z_$][\w$]*)\s+from\s+["']([^"']+)["']"#)
        .expect("valid regex")
});

static NAMED_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import\s+(?:type\s+)?(?:[A-Za-z_$][\w$]*\s*,\s*)?\{([^}]*)\}\s*from\s+["']([^"']+)["']"#,
    )
    .expect("valid regex")
});

static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:import|export)\b[^;'"]*?\bfrom\s+["']([^"']+)["']"#).expect("valid regex")
});

static BARE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(?\s*["']([^"']+)["']"#).expect("valid regex")
});

static EXPORT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export\s+\*\s+(?:as\s+([A-Za-z_$][\w$]*)\s+)?from\s+["']([^"']+)["']"#)
        .expect("valid regex")
});

/// Infer a fresh profile from `text`.
#[must_use]
pub fn infer(text: &str) -> DependencyProfile {
    let mut profile = DependencyProfile::new();
    infer_into(text, &mut profile);
    profile
}

/// Grow `profile` with everything `text` reveals. Never removes packages.
pub fn infer_into(text: &str, profile: &mut DependencyProfile) {
    let namespace_imports: Vec<(String, String)> = NAMESPACE_IMPORT
        .captures_iter(text)
        .filter_map(|caps| Some((caps[1].to_string(), package_root(&caps[2])?)))
        .collect();
    let aliased_imports: Vec<(String, String)> = NAMED_IMPORT
        .captures_iter(text)
        .filter_map(|caps| {
            let package = package_root(&caps[2])?;
            Some(
                caps[1]
                    .split(',')
                    .filter_map(|spec| spec.split_once(" as ").map(|(_, alias)| alias.trim()))
                    .filter(|alias| !alias.is_empty())
                    .map(|alias| (alias.to_string(), package.clone()))
                    .collect::<Vec<_>>(),
            )
        })
        .flatten()
        .collect();

    // (a) catalogue
    for package in catalogued_packages(text) {
        let Some(entry) = catalogue_entry(&package) else {
            continue;
        };
        match entry.canonical(&package) {
            Some((canonical, style)) => {
                let companion = match style {
                    ImportStyle::Namespace => &namespace_imports,
                    ImportStyle::NamedAlias { .. } => &aliased_imports,
                };
                if companion
                    .iter()
                    .any(|(alias, pkg)| *alias == canonical && *pkg == package)
                {
                    profile.bind_catalogue_namespace(canonical, &package);
                } else {
                    profile.require_package(package);
                }
            }
            None => profile.require_package(package),
        }
    }

    // (b) generic statement parse
    for caps in FROM_CLAUSE.captures_iter(text).chain(BARE_IMPORT.captures_iter(text)) {
        if let Some(package) = package_root(&caps[1]) {
            profile.require_package(package);
        }
    }
    for (alias, package) in &namespace_imports {
        let is_plain = catalogue_entry(package).is_some_and(|e| e.primitive.is_none());
        if !is_plain {
            profile.bind_observed_namespace(alias.clone(), package);
        }
    }
    for caps in EXPORT_STAR.captures_iter(text) {
        let Some(package) = package_root(&caps[2]) else {
            continue;
        };
        if catalogue_entry(&package).is_some_and(|e| e.primitive.is_none()) {
            profile.require_package(package);
            continue;
        }
        match caps.get(1) {
            Some(alias) => profile.bind_observed_namespace(alias.as_str(), &package),
            None => profile.bind_inferred_namespace(namespace_from_segment(&package), &package),
        }
    }
}

/// Reduce a module specifier to its package root.
///
/// Returns `None` for relative paths, absolute paths, project aliases
/// (`@/`, `~/`, `#`), and `node:` builtins.
#[must_use]
pub fn package_root(specifier: &str) -> Option<String> {
    let spec = specifier.trim();
    if spec.is_empty()
        || spec.starts_with('.')
        || spec.starts_with('/')
        || spec.starts_with("@/")
        || spec.starts_with("~/")
        || spec.starts_with('#')
        || spec.starts_with("node:")
    {
        return None;
    }
    let mut parts = spec.split('/');
    let first = parts.next()?;
    let root = if first.starts_with('@') {
        let name = parts.next().filter(|n| !n.is_empty())?;
        format!("{first}/{name}")
    } else {
        first.to_string()
    };
    Some(root)
}

/// Guess a namespace for a package from its trailing path segment,
/// e.g. `@radix-ui/react-tabs` → `TabsPrimitive`.
#[must_use]
pub fn namespace_from_segment(package: &str) -> String {
    let segment = package.rsplit('/').next().unwrap_or(package);
    let segment = segment.strip_prefix("react-").unwrap_or(segment);
    format!("{}Primitive", segment.to_upper_camel_case())
}

/// Type-only import statement bringing `namespace` into scope.
#[must_use]
pub fn import_statement(namespace: &str, package: &str) -> String {
    let style = catalogue_entry(package)
        .and_then(|entry| entry.canonical(package))
        .filter(|(canonical, _)| canonical == namespace)
        .map_or(ImportStyle::Namespace, |(_, style)| style);
    match style {
        ImportStyle::Namespace => format!("import type * as {namespace} from \"{package}\";"),
        ImportStyle::NamedAlias { export } => {
            format!("import type {{ {export} as {namespace} }} from \"{package}\";")
        }
    }
}

/// Canonical namespace the catalogue assigns to `package`, if any.
#[must_use]
pub fn canonical_namespace(package: &str) -> Option<String> {
    catalogue_entry(package)
        .and_then(|entry| entry.canonical(package))
        .map(|(namespace, _)| namespace)
}

fn catalogue_entry(package: &str) -> Option<&'static CatalogueEntry> {
    CATALOGUE.iter().find(|entry| entry.matches(package))
}

fn catalogued_packages(text: &str) -> BTreeSet<String> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    PACKAGE_TOKEN
        .find_iter(text)
        // Skip fragments of longer identifiers such as `AccordionPrimitive`.
        .filter(|m| {
            !text[..m.start()].chars().next_back().is_some_and(is_word)
                && !text[m.end()..].chars().next().is_some_and(is_word)
        })
        .map(|m| m.as_str().trim_end_matches(['.', '-']))
        .filter(|token| catalogue_entry(token).is_some())
        .map(str::to_string)
        .collect()
}

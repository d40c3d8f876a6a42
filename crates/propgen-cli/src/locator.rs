//! Component source discovery.
//!
//! Each configured search root is walked on its own rayon task with the
//! gitignore-aware `ignore` walker. Hits are merged in search-root order,
//! sorted by path within a root, and deduplicated on their canonical path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use propgen_config::LocatorConfig;
use propgen_core::ComponentIdentity;
use rayon::prelude::*;

const SKIPPED_DIRS: &[&str] = &["node_modules", ".next", "dist", "build"];

pub struct Locator {
    roots: Vec<PathBuf>,
    max_depth: usize,
    matcher: GlobSet,
}

impl Locator {
    /// Build the matcher for `identity` under `project_root`.
    pub fn new(
        project_root: &Path,
        config: &LocatorConfig,
        identity: &ComponentIdentity,
    ) -> anyhow::Result<Self> {
        let mut names = vec![identity.normalized_key()];
        if identity.type_name_prefix() != identity.normalized_key() {
            names.push(identity.type_name_prefix());
        }

        let mut builder = GlobSetBuilder::new();
        for name in names {
            for ext in &config.extensions {
                for pattern in [
                    format!("{name}.{ext}"),
                    format!("{name}/index.{ext}"),
                    format!("{name}/*.{ext}"),
                ] {
                    let glob = GlobBuilder::new(&pattern)
                        .literal_separator(true)
                        .build()
                        .with_context(|| format!("invalid locator pattern '{pattern}'"))?;
                    builder.add(glob);
                }
            }
        }

        Ok(Self {
            roots: config
                .search_roots
                .iter()
                .map(|root| project_root.join(root))
                .collect(),
            max_depth: config.max_depth,
            matcher: builder.build().context("failed to build locator matcher")?,
        })
    }

    /// Every matching file, in search-root order.
    #[must_use]
    pub fn locate(&self) -> Vec<PathBuf> {
        let per_root: Vec<Vec<PathBuf>> = self
            .roots
            .par_iter()
            .map(|root| self.search(root))
            .collect();

        let mut seen = HashSet::new();
        per_root
            .into_iter()
            .flatten()
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }

    fn search(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }
        let walker = WalkBuilder::new(root)
            .max_depth(Some(self.max_depth))
            .filter_entry(|entry| {
                !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name))
            })
            .build();

        let mut hits: Vec<PathBuf> = walker
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| self.matcher.is_match(relative))
            })
            .map(|entry| {
                std::fs::canonicalize(entry.path()).unwrap_or_else(|_| entry.path().to_path_buf())
            })
            .collect();
        hits.sort();
        tracing::debug!(root = %root.display(), hits = hits.len(), "searched locator root");
        hits
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
        fs::write(path, "export {}\n").expect("write");
    }

    fn locate(root: &Path, name: &str) -> Vec<String> {
        let identity = ComponentIdentity::parse(name).expect("valid identity");
        let locator =
            Locator::new(root, &LocatorConfig::default(), &identity).expect("locator builds");
        let canonical_root = fs::canonicalize(root).expect("canonical root");
        locator
            .locate()
            .into_iter()
            .map(|p| {
                p.strip_prefix(&canonical_root)
                    .expect("under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn finds_flat_index_and_directory_layouts_in_root_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "src/components/ui/accordion.tsx");
        touch(dir.path(), "components/ui/accordion/index.tsx");
        touch(dir.path(), "components/ui/accordion/item.tsx");
        touch(dir.path(), "components/ui/button.tsx");

        assert_eq!(
            locate(dir.path(), "accordion"),
            [
                "components/ui/accordion/index.tsx",
                "components/ui/accordion/item.tsx",
                "src/components/ui/accordion.tsx",
            ]
        );
    }

    #[test]
    fn nested_roots_report_each_file_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "components/tabs.tsx");
        touch(dir.path(), "components/ui/tabs.tsx");
        let found = locate(dir.path(), "tabs");
        assert_eq!(found, ["components/ui/tabs.tsx", "components/tabs.tsx"]);
    }

    #[test]
    fn pascal_case_files_and_other_extensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "components/ui/AlertDialog.jsx");
        touch(dir.path(), "components/ui/alert-dialog.css");
        assert_eq!(
            locate(dir.path(), "alert dialog"),
            ["components/ui/AlertDialog.jsx"]
        );
    }

    #[test]
    fn node_modules_and_missing_roots_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "components/node_modules/dialog.tsx");
        assert!(locate(dir.path(), "dialog").is_empty());
    }
}

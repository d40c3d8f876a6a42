//! Component name normalization.
//!
//! A request names a component either directly (`accordion`, `AlertDialog`,
//! `input otp`) or through a docs/registry URL
//! (`https://ui.shadcn.com/docs/components/tabs`). Everything downstream works
//! from the three canonical forms held by [`ComponentIdentity`].

use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Registry/source file extensions stripped from the last URL segment.
const URL_FILE_EXTENSIONS: &[&str] = &[".json", ".tsx", ".ts", ".jsx", ".js"];

/// Canonical forms of a requested component name.
///
/// `normalized_key` and `type_name_prefix` are pure functions of `raw_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentIdentity {
    raw_name: String,
    normalized_key: String,
    type_name_prefix: String,
}

impl ComponentIdentity {
    /// Derive the identity from user input (free text or URL).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when the input is empty, when a URL
    /// has no usable path segment, or when the name has no alphanumeric
    /// characters at all.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CoreError::InvalidInput(
                "component identifier is empty".into(),
            ));
        }

        let raw_name = if has_url_scheme(input) {
            last_url_segment(input).ok_or_else(|| {
                CoreError::InvalidInput(format!("URL has no component path segment: {input}"))
            })?
        } else {
            input.to_string()
        };

        let normalized_key = normalize_key(&raw_name);
        if normalized_key.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "'{raw_name}' contains no letters or digits"
            )));
        }
        let type_name_prefix = normalized_key.to_upper_camel_case();

        Ok(Self {
            raw_name,
            normalized_key,
            type_name_prefix,
        })
    }

    /// The name as given (or as taken from the URL).
    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Kebab-case lookup key, e.g. `alert-dialog`.
    #[must_use]
    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }

    /// Pascal-case type-name prefix, e.g. `AlertDialog`.
    #[must_use]
    pub fn type_name_prefix(&self) -> &str {
        &self.type_name_prefix
    }

    /// `<Prefix>Props`, the root props type name.
    #[must_use]
    pub fn root_type_name(&self) -> String {
        format!("{}Props", self.type_name_prefix)
    }

    /// `<Prefix><Tag>Props`, the props type name for a sub-component.
    #[must_use]
    pub fn sub_component_type_name(&self, tag: &str) -> String {
        format!("{}{tag}Props", self.type_name_prefix)
    }

    /// Lowercased spellings of the component name used for fuzzy matching
    /// against identifiers: raw, key without separators, and prefix.
    #[must_use]
    pub fn match_forms(&self) -> Vec<String> {
        let mut forms = vec![
            self.raw_name.to_lowercase(),
            self.normalized_key.replace('-', ""),
            self.type_name_prefix.to_lowercase(),
        ];
        forms.retain(|f| !f.is_empty());
        forms.dedup();
        forms
    }
}

/// Convert any name to its kebab-case key.
///
/// A separator is inserted at every lowercase→uppercase boundary, every run of
/// non-alphanumeric characters collapses to one `-`, and the result is
/// lowercased. Applying it to its own output returns the output unchanged.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if prev.is_some_and(char::is_lowercase) && ch.is_uppercase() {
                out.push('-');
            }
            out.extend(ch.to_lowercase().filter(|c| c.is_alphanumeric()));
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
        prev = Some(ch);
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn has_url_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn last_url_segment(input: &str) -> Option<String> {
    let segment = match url::Url::parse(input) {
        Ok(parsed) => parsed
            .path_segments()?
            .filter(|s| !s.is_empty())
            .next_back()?
            .to_string(),
        // Lenient path for scheme-looking strings the url crate rejects.
        Err(_) => {
            let without_scheme = input.split_once("://").map_or(input, |(_, rest)| rest);
            let path = without_scheme
                .split(['?', '#'])
                .next()
                .unwrap_or(without_scheme);
            let mut parts = path.split('/').filter(|s| !s.is_empty());
            // First part is the authority.
            parts.next()?;
            parts.next_back()?.to_string()
        }
    };

    let decoded = urlencoding::decode(&segment)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(segment);

    let stripped = URL_FILE_EXTENSIONS
        .iter()
        .find_map(|ext| decoded.strip_suffix(ext))
        .unwrap_or(&decoded)
        .to_string();

    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

//! Extension based eligibility of source files.

use std::collections::BTreeSet;
use std::path::Path;

/// Normalizes a configured or discovered extension to the `.ext` lowercase form.
///
/// Returns `None` for blank input so that `--only ""` does not turn into a
/// filter matching extension-less files.
#[must_use]
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return None;
    }
    let lower = ext.to_ascii_lowercase();
    if lower.starts_with('.') { Some(lower) } else { Some(format!(".{lower}")) }
}

/// Suffix of the file name starting at its last `.`, case preserved, or an
/// empty string when the name has no dot.
///
/// A dotfile such as `.bashrc` is its own extension.
#[must_use]
pub fn source_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|dot| name[dot..].to_string()))
        .unwrap_or_default()
}

/// Set of normalized extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Case-insensitive membership; `ext` may carry a leading dot or not.
    #[must_use]
    pub fn contains(&self, ext: &str) -> bool {
        normalize_extension(ext).is_some_and(|e| self.0.contains(&e))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|s| normalize_extension(s.as_ref())).collect())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ExtensionSet {
    fn from(values: Vec<S>) -> Self {
        values.into_iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ExtensionSet {
    fn from(values: [S; N]) -> Self {
        values.into_iter().collect()
    }
}

/// How the ignored list interacts with a non-empty included list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtensionPrecedence {
    /// A non-empty included list is authoritative; the ignored list only
    /// applies when no included list is configured.
    #[default]
    IncludeOverrides,
    /// Ignored extensions are rejected before the included list is consulted.
    IgnoreFirst,
}

/// Eligibility check for a single extension against both lists.
///
/// `extension` may be given with or without its leading dot; an empty string
/// stands for a file without extension.
#[must_use]
pub fn is_included(extension: &str, ignored: &ExtensionSet, included: &ExtensionSet) -> bool {
    if included.is_empty() { !ignored.contains(extension) } else { included.contains(extension) }
}

/// Filter bound to a run configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    ignored: ExtensionSet,
    included: ExtensionSet,
    precedence: ExtensionPrecedence,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new(ignored: ExtensionSet, included: ExtensionSet, precedence: ExtensionPrecedence) -> Self {
        Self { ignored, included, precedence }
    }

    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        match self.precedence {
            ExtensionPrecedence::IncludeOverrides => is_included(extension, &self.ignored, &self.included),
            ExtensionPrecedence::IgnoreFirst => {
                !self.ignored.contains(extension) && is_included(extension, &self.ignored, &self.included)
            }
        }
    }

    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        self.accepts_extension(&source_extension(path))
    }
}

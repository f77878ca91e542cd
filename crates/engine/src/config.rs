use crate::error::{EngineError, Result};
use crate::filter::{ExtensionFilter, ExtensionPrecedence, ExtensionSet};
use derive_builder::Builder;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
pub const DEFAULT_IGNORED_EXTS: [&str; 2] = [".jpg", ".png"];

/// Maximum number of words a single output file may hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordBudget {
    #[default]
    Unbounded,
    Limited(NonZeroUsize),
}

impl WordBudget {
    /// `Unbounded` for `0`.
    #[must_use]
    pub fn from_limit(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Self::Unbounded, Self::Limited)
    }

    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limited(n) => Some(n.get()),
        }
    }

    /// True when a file holding `total` words would break the budget.
    #[must_use]
    pub fn is_exceeded_by(self, total: usize) -> bool {
        self.limit().is_some_and(|limit| total > limit)
    }

    /// Words that still fit next to `current`; `None` means no limit.
    #[must_use]
    pub fn room_after(self, current: usize) -> Option<usize> {
        self.limit().map(|limit| limit.saturating_sub(current))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory walked for source files.
    pub input_dir: PathBuf,
    /// Base of every output file name; outputs are `{base}_{n}{ext}`.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    pub output_base: PathBuf,
    #[builder(default = "ExtensionSet::from(DEFAULT_IGNORED_EXTS)")]
    pub ignored_exts: ExtensionSet,
    #[builder(default)]
    pub included_exts: ExtensionSet,
    #[builder(default)]
    pub precedence: ExtensionPrecedence,
    #[builder(default)]
    pub budget: WordBudget,
}

impl Config {
    /// Checks the input directory before any traversal starts.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when the input directory is empty,
    /// missing, unreadable or not a directory.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(EngineError::Config("input directory is required".to_string()));
        }
        let meta = std::fs::metadata(&self.input_dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EngineError::Config(format!("input directory does not exist: {}", self.input_dir.display()))
            } else {
                EngineError::Config(format!("cannot access input directory {}: {e}", self.input_dir.display()))
            }
        })?;
        if !meta.is_dir() {
            return Err(EngineError::Config(format!(
                "input path is not a directory: {}",
                self.input_dir.display()
            )));
        }
        if self.output_base.as_os_str().is_empty() {
            return Err(EngineError::Config("output file name must not be empty".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(self.ignored_exts.clone(), self.included_exts.clone(), self.precedence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builder_applies_defaults() {
        let config = ConfigBuilder::default().input_dir("in").build().unwrap();
        assert_eq!(config.output_base, PathBuf::from("output.txt"));
        assert!(config.ignored_exts.contains(".jpg"));
        assert!(config.ignored_exts.contains("png"));
        assert!(config.included_exts.is_empty());
        assert_eq!(config.budget, WordBudget::Unbounded);
        assert_eq!(config.precedence, ExtensionPrecedence::IncludeOverrides);
    }

    #[test]
    fn missing_input_dir_is_a_config_error() {
        let config = ConfigBuilder::default().input_dir("").build().unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(ConfigBuilder::default().build().is_err());
    }

    #[test]
    fn nonexistent_input_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = ConfigBuilder::default().input_dir(missing).build().unwrap().validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"), "{err}");
    }

    #[test]
    fn file_as_input_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();
        let err = ConfigBuilder::default().input_dir(file).build().unwrap().validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"), "{err}");
    }

    #[test]
    fn budget_comparison_is_strict() {
        let budget = WordBudget::from_limit(10);
        assert!(!budget.is_exceeded_by(10));
        assert!(budget.is_exceeded_by(11));
        assert_eq!(budget.room_after(4), Some(6));
        assert_eq!(budget.room_after(12), Some(0));
        assert!(!WordBudget::Unbounded.is_exceeded_by(usize::MAX));
        assert_eq!(WordBudget::from_limit(0), WordBudget::Unbounded);
    }
}

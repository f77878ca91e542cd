use crate::error::Result;
use crate::rollover::OutputFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub input_dir: PathBuf,
    /// Regular files reached by the walk.
    pub files_visited: usize,
    /// Files whose content was aggregated.
    pub files_included: usize,
    /// Files rejected by the extension filter.
    pub files_skipped: usize,
    pub words_written: usize,
    /// Outputs in creation order.
    pub outputs: Vec<OutputFile>,
    pub dry_run: bool,
}

impl RunSummary {
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), ..Self::default() }
    }

    /// # Errors
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

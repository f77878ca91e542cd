// crates/engine/src/lib.rs
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod output;
pub mod rollover;
pub mod stats;
pub mod words;

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{SourceWalk, read_source};
use crate::output::{FsOutputSink, MemoryOutputSink, OutputSink};
use crate::rollover::{Aggregator, OutputFile};
use crate::stats::RunSummary;

/// Walk `config.input_dir` and write the aggregated output files.
///
/// # Errors
///
/// Fails fast: a configuration problem, a walk error, or any read/write
/// failure aborts the run. Output written before the failure is left on disk.
pub fn run(config: &Config) -> Result<RunSummary> {
    run_with_sink(config, FsOutputSink)
}

/// Same as [`run`] but keeps every output in memory instead of writing it.
///
/// # Errors
///
/// See [`run`]; only configuration, walk and read errors can occur.
pub fn dry_run(config: &Config) -> Result<(RunSummary, MemoryOutputSink)> {
    let mut sink = MemoryOutputSink::new();
    let mut summary = run_with_sink(config, &mut sink)?;
    summary.dry_run = true;
    Ok((summary, sink))
}

/// Run against an arbitrary [`OutputSink`].
///
/// # Errors
///
/// See [`run`].
pub fn run_with_sink<S: OutputSink>(config: &Config, sink: S) -> Result<RunSummary> {
    config.validate()?;
    info!(
        "aggregating {} into {} (budget: {})",
        config.input_dir.display(),
        config.output_base.display(),
        config.budget.limit().map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    let filter = config.extension_filter();
    let mut aggregator = Aggregator::new(sink, config.output_base.clone(), config.budget);
    let mut guard = OutputGuard::default();
    let mut summary = RunSummary::new(config.input_dir.clone());

    for entry in SourceWalk::new(&config.input_dir) {
        let path = entry?;
        summary.files_visited += 1;

        if guard.contains(&path) {
            debug!("skipping own output {}", path.display());
            continue;
        }
        if !filter.accepts(&path) {
            debug!("filtered out {}", path.display());
            summary.files_skipped += 1;
            continue;
        }

        let content = read_source(&path)?;
        let words = aggregator.push(&path, &content)?;
        debug!("appended {} ({words} words)", path.display());
        summary.files_included += 1;
        guard.track(aggregator.outputs());
    }

    summary.words_written = aggregator.words_written();
    let (_, outputs) = aggregator.finish();
    summary.outputs = outputs;
    info!(
        "done: {} of {} files included, {} words in {} output file(s)",
        summary.files_included,
        summary.files_visited,
        summary.words_written,
        summary.outputs.len()
    );
    Ok(summary)
}

/// Canonical paths of outputs created in this run, so that an output base
/// inside the input directory does not feed the run its own output.
#[derive(Debug, Default)]
struct OutputGuard {
    seen: usize,
    paths: HashSet<PathBuf>,
}

impl OutputGuard {
    fn track<'a>(&mut self, outputs: impl Iterator<Item = &'a OutputFile>) {
        for output in outputs.skip(self.seen) {
            self.seen += 1;
            if let Ok(canonical) = std::fs::canonicalize(&output.path) {
                self.paths.insert(canonical);
            }
        }
    }

    fn contains(&self, path: &Path) -> bool {
        !self.paths.is_empty() && std::fs::canonicalize(path).is_ok_and(|p| self.paths.contains(&p))
    }
}

//! Word-budget rollover of output files.
//!
//! [`Aggregator`] consumes `(source path, content)` pairs in walk order and
//! decides which output file each word lands in. It never touches the
//! filesystem itself; all writes go through an [`OutputSink`].

use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::WordBudget;
use crate::error::Result;
use crate::filter::source_extension;
use crate::output::{OutputSink, output_path};
use crate::words::words;

/// An output file produced during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub index: usize,
    pub path: PathBuf,
    /// Extension of the source file that caused this output to be created.
    pub extension: String,
    /// Words currently held, including any content present before the run.
    pub words: usize,
}

pub struct Aggregator<S> {
    sink: S,
    base: PathBuf,
    budget: WordBudget,
    last_index: usize,
    active: Option<OutputFile>,
    finished: Vec<OutputFile>,
    words_written: usize,
}

impl<S: OutputSink> Aggregator<S> {
    pub fn new(sink: S, base: impl Into<PathBuf>, budget: WordBudget) -> Self {
        Self {
            sink,
            base: base.into(),
            budget,
            last_index: 0,
            active: None,
            finished: Vec::new(),
            words_written: 0,
        }
    }

    /// Appends the words of one source file, rolling over to new output files
    /// as the budget requires. Returns the number of words written.
    ///
    /// # Errors
    /// Propagates any sink failure; the aggregator should not be reused after.
    pub fn push(&mut self, source: &Path, content: &str) -> Result<usize> {
        let tokens: Vec<&str> = words(content).collect();
        let extension = source_extension(source);

        let mut active = match self.active.take() {
            Some(file) if !self.budget.is_exceeded_by(file.words + tokens.len()) => file,
            previous => {
                if let Some(previous) = previous {
                    self.finalize(previous);
                }
                self.open_next(&extension)?
            }
        };

        let mut rest = tokens.as_slice();
        while !rest.is_empty() {
            let take = self.budget.room_after(active.words).map_or(rest.len(), |room| room.min(rest.len()));
            if take == 0 {
                self.finalize(active);
                active = self.open_next(&extension)?;
                continue;
            }
            let (chunk, tail) = rest.split_at(take);
            self.write_chunk(&mut active, chunk)?;
            rest = tail;
        }

        self.active = Some(active);
        Ok(tokens.len())
    }

    /// Currently open output file, if any.
    #[must_use]
    pub fn active(&self) -> Option<&OutputFile> {
        self.active.as_ref()
    }

    /// All outputs created so far, in creation order.
    pub fn outputs(&self) -> impl Iterator<Item = &OutputFile> {
        self.finished.iter().chain(self.active.iter())
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.last_index
    }

    #[must_use]
    pub fn words_written(&self) -> usize {
        self.words_written
    }

    /// Ends the run and hands back the sink plus every output in creation order.
    pub fn finish(mut self) -> (S, Vec<OutputFile>) {
        if let Some(active) = self.active.take() {
            self.finalize(active);
        }
        (self.sink, self.finished)
    }

    fn open_next(&mut self, extension: &str) -> Result<OutputFile> {
        self.last_index += 1;
        let path = output_path(&self.base, self.last_index, extension);
        let existing = self.sink.create(&path)?;
        debug!("opened output {} ({} existing words)", path.display(), existing);
        Ok(OutputFile { index: self.last_index, path, extension: extension.to_string(), words: existing })
    }

    fn finalize(&mut self, file: OutputFile) {
        debug!("closed output {} at {} words", file.path.display(), file.words);
        self.finished.push(file);
    }

    fn write_chunk(&mut self, file: &mut OutputFile, chunk: &[&str]) -> Result<()> {
        let mut text = String::with_capacity(chunk.iter().map(|w| w.len() + 1).sum());
        for word in chunk {
            if file.words > 0 || !text.is_empty() {
                text.push(' ');
            }
            text.push_str(word);
        }
        self.sink.append(&file.path, &text)?;
        trace!("wrote {} words to {}", chunk.len(), file.path.display());
        file.words += chunk.len();
        self.words_written += chunk.len();
        Ok(())
    }
}

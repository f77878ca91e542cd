use crate::error::{EngineError, Result};
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

/// Lazy, depth-first walk over the regular files below `root`.
///
/// Entries within a directory are visited in file-name order so that output
/// is reproducible across runs. Nothing is filtered by the walker: hidden
/// files and ignore files get no special treatment, and symlinks are not
/// followed.
pub struct SourceWalk {
    inner: Walk,
}

impl SourceWalk {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self { inner: builder.build() }
    }
}

impl Iterator for SourceWalk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(e) => return Some(Err(EngineError::Walk(e))),
            }
        }
    }
}

/// Reads a source file as text. Invalid UTF-8 is replaced, never rejected.
///
/// # Errors
/// Returns [`EngineError::FileRead`] when the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::read(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

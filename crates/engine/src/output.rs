//! Output file naming and the sinks the aggregator writes through.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};
use crate::words::count_words;

/// `{base}_{index}{extension}`; `extension` carries its leading dot or is empty.
#[must_use]
pub fn output_path(base: &Path, index: usize, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!("_{index}{extension}"));
    PathBuf::from(name)
}

/// Destination of aggregated text.
pub trait OutputSink {
    /// Makes sure `path` exists as an output file and returns the number of
    /// words it already holds.
    fn create(&mut self, path: &Path) -> Result<usize>;

    /// Appends `text` to `path`.
    fn append(&mut self, path: &Path, text: &str) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn create(&mut self, path: &Path) -> Result<usize> {
        (**self).create(path)
    }

    fn append(&mut self, path: &Path, text: &str) -> Result<()> {
        (**self).append(path, text)
    }
}

/// Writes to the real filesystem. Every append opens, writes, flushes and
/// closes the file, so no handle outlives a single call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOutputSink;

impl OutputSink for FsOutputSink {
    fn create(&mut self, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| EngineError::write(parent, e))?;
        }
        match fs::read(path) {
            Ok(bytes) => Ok(count_words(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                fs::File::create(path).map_err(|e| EngineError::write(path, e))?;
                Ok(0)
            }
            Err(e) => Err(EngineError::read(path, e)),
        }
    }

    fn append(&mut self, path: &Path, text: &str) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| EngineError::write(path, e))?;
        let mut w = BufWriter::new(file);
        w.write_all(text.as_bytes()).map_err(|e| EngineError::write(path, e))?;
        w.flush().map_err(|e| EngineError::write(path, e))
    }
}

/// Keeps outputs in memory; used for dry runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutputSink {
    files: BTreeMap<PathBuf, String>,
    order: Vec<PathBuf>,
}

impl MemoryOutputSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Paths in creation order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.order
    }

    /// `(path, contents)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.order.iter().map(|p| (p.as_path(), self.files.get(p).map_or("", String::as_str)))
    }
}

impl OutputSink for MemoryOutputSink {
    fn create(&mut self, path: &Path) -> Result<usize> {
        if let Some(existing) = self.files.get(path) {
            return Ok(count_words(existing));
        }
        self.files.insert(path.to_path_buf(), String::new());
        self.order.push(path.to_path_buf());
        Ok(0)
    }

    fn append(&mut self, path: &Path, text: &str) -> Result<()> {
        if !self.files.contains_key(path) {
            self.order.push(path.to_path_buf());
        }
        self.files.entry(path.to_path_buf()).or_default().push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn output_path_appends_index_and_source_extension() {
        assert_eq!(output_path(Path::new("output.txt"), 1, ".md"), PathBuf::from("output.txt_1.md"));
        assert_eq!(output_path(Path::new("out/all"), 12, ""), PathBuf::from("out/all_12"));
    }

    #[test]
    fn fs_sink_creates_parents_and_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out_1.txt");
        let mut sink = FsOutputSink;
        assert_eq!(sink.create(&path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn fs_sink_reports_existing_words_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out_1.txt");
        fs::write(&path, "already here").unwrap();
        let mut sink = FsOutputSink;
        assert_eq!(sink.create(&path).unwrap(), 2);
        sink.append(&path, " and more").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "already here and more");
    }

    #[test]
    fn fs_sink_surfaces_write_errors() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for appending.
        let err = FsOutputSink.append(dir.path(), "x").unwrap_err();
        assert!(matches!(err, EngineError::FileWrite { .. }), "{err}");
    }

    #[test]
    fn memory_sink_tracks_creation_order() {
        let mut sink = MemoryOutputSink::new();
        sink.create(Path::new("b_1.txt")).unwrap();
        sink.create(Path::new("a_2.txt")).unwrap();
        sink.append(Path::new("a_2.txt"), "x y").unwrap();
        assert_eq!(sink.paths(), [PathBuf::from("b_1.txt"), PathBuf::from("a_2.txt")]);
        assert_eq!(sink.create(Path::new("a_2.txt")).unwrap(), 2);
        assert_eq!(sink.contents(Path::new("a_2.txt")), Some("x y"));
    }
}

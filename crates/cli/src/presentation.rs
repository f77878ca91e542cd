// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use std::fmt::Write as _;
use std::io::Write as _;
use textractor_engine::stats::RunSummary;

pub fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(summary),
        OutputFormat::Json => summary.to_json()?,
    };
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

#[must_use]
pub fn render_text(summary: &RunSummary) -> String {
    let mut s = String::new();
    let mode = if summary.dry_run { " · dry-run" } else { "" };
    let _ = writeln!(s, "textractor v{}{mode}", crate::VERSION);
    let _ = writeln!(s);

    if summary.outputs.is_empty() {
        let _ = writeln!(
            s,
            "No matching files in {} ({} files visited); nothing written.",
            summary.input_dir.display(),
            summary.files_visited
        );
        return s;
    }

    let _ = writeln!(s, "    WORDS  EXT       FILE");
    let _ = writeln!(s, "----------------------------------------------");
    for out in &summary.outputs {
        let _ = writeln!(s, "{:>9}  {:<8}  {}", out.words, out.extension, out.path.display());
    }
    let _ = writeln!(s, "---");
    let _ = writeln!(
        s,
        "{:>9}            TOTAL ({} outputs, {} of {} files included)",
        summary.words_written,
        summary.outputs.len(),
        summary.files_included,
        summary.files_visited
    );
    s
}

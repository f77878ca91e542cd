use crate::args::Args;
use crate::error::{AppError, Result};
pub use textractor_engine::config::{Config, ConfigBuilder};
use textractor_engine::error::EngineError;
use textractor_engine::filter::{ExtensionPrecedence, ExtensionSet};

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let precedence = if args.ignore_first {
            ExtensionPrecedence::IgnoreFirst
        } else {
            ExtensionPrecedence::IncludeOverrides
        };

        let config = ConfigBuilder::default()
            .input_dir(args.input_directory.clone())
            .output_base(args.output_file.clone())
            .ignored_exts(args.ignored_exts.iter().collect::<ExtensionSet>())
            .included_exts(args.only.iter().collect::<ExtensionSet>())
            .precedence(precedence)
            .budget(args.max_words_per_file)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use textractor_engine::config::WordBudget;

    #[test]
    fn args_map_onto_engine_config() {
        let args = Args::try_parse_from([
            "textractor",
            "-d",
            "docs",
            "-o",
            "out/all.txt",
            "-i",
            "PDF",
            "--only",
            "md,txt",
            "--ignore-first",
            "-w",
            "500",
        ])
        .unwrap();

        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.input_dir, std::path::PathBuf::from("docs"));
        assert_eq!(config.output_base, std::path::PathBuf::from("out/all.txt"));
        assert!(config.ignored_exts.contains(".pdf"));
        assert_eq!(config.included_exts.iter().collect::<Vec<_>>(), [".md", ".txt"]);
        assert_eq!(config.precedence, ExtensionPrecedence::IgnoreFirst);
        assert_eq!(config.budget, WordBudget::from_limit(500));
    }

    #[test]
    fn blank_only_entries_do_not_restrict() {
        let args = Args::try_parse_from(["textractor", "-d", "docs", "--only", ""]).unwrap();
        let config = Config::try_from(&args).unwrap();
        assert!(config.included_exts.is_empty());
    }
}

use clap::Parser;
use std::process::ExitCode;
use textractor_cli::args::Args;
use textractor_cli::config::Config;
use textractor_cli::error::Result;
use textractor_cli::{logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("resolved configuration: {config:?}");

    let summary = if args.dry_run {
        textractor_engine::dry_run(&config)?.0
    } else {
        textractor_engine::run(&config)?
    };

    presentation::print_summary(&summary, args.format)
}

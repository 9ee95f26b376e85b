//! `tagscrape` binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tagscrape::cli::args::ScrapeArgs;
use tagscrape::cli::output;
use tagscrape::cli::prompt::ConsolePrompt;
use tagscrape::cli::scrape_cmd::{self, ScrapeOutcome, ScrapeRequest};
use tagscrape::ScrapeError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = ScrapeArgs::parse();

    // Global flags are forwarded to the output helpers through the environment.
    if args.quiet {
        std::env::set_var("TAGSCRAPE_QUIET", "1");
    }
    if args.no_color {
        std::env::set_var("TAGSCRAPE_NO_COLOR", "1");
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(&args) {
        Ok(ScrapeOutcome::Saved { path, count }) => {
            output::print_ok(&format!("Saved {count} value(s) to {}.", path.display()));
            ExitCode::SUCCESS
        }
        Ok(ScrapeOutcome::Cancelled) => {
            output::print_ok("Exiting..");
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_fail(&format!("{err:#}"));
            let code = err
                .downcast_ref::<ScrapeError>()
                .map_or(1, ScrapeError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute(args: &ScrapeArgs) -> Result<ScrapeOutcome> {
    let request = ScrapeRequest::from_args(args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let mut prompt = ConsolePrompt::new().context("failed to open the terminal for selector input")?;

    let outcome = runtime.block_on(scrape_cmd::run(&request, &mut prompt))?;
    Ok(outcome)
}

//! Command-line flags.

use crate::acquisition::USER_AGENT_FILENAME;
use crate::results::DEFAULT_OUTPUT_FILE;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Extract the text of HTML elements matching a CSS selector.
///
/// The HTML comes from a site (--get) or a saved file (--file). You are
/// prompted for a selector until one matches; press Ctrl+C to give up.
#[derive(Debug, Parser)]
#[command(name = "tagscrape", version, about, long_about)]
pub struct ScrapeArgs {
    /// Site to get the html tag information from (https:// is added when no scheme is given)
    #[arg(short = 'g', long = "get", value_name = "URL")]
    pub site: Option<String>,

    /// File to get the html tag information from
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// File to write the tag information to. An existing file is overwritten without asking.
    #[arg(
        short = 'o',
        long = "output",
        visible_alias = "write",
        visible_short_alias = 'w',
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILE
    )]
    pub output: PathBuf,

    /// Try this selector before prompting
    #[arg(short = 's', long, value_name = "CSS")]
    pub selector: Option<String>,

    /// Side file whose first line overrides the User-Agent header
    #[arg(
        long,
        env = "TAGSCRAPE_USER_AGENT_FILE",
        value_name = "PATH",
        default_value = USER_AGENT_FILENAME
    )]
    pub user_agent_file: PathBuf,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, env = "TAGSCRAPE_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl ScrapeArgs {
    /// Default `tracing` directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "tagscrape=warn",
            1 => "tagscrape=info",
            _ => "tagscrape=debug",
        }
    }
}

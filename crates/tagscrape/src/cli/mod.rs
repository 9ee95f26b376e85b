//! Command-line front end for the `tagscrape` binary.

pub mod args;
pub mod output;
pub mod prompt;
pub mod scrape_cmd;

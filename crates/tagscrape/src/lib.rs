//! Selector-driven text scraping for a single web page or saved HTML file.
//!
//! A run acquires HTML (see [`acquisition`]), asks the operator for a CSS
//! selector until something matches (see [`extraction`]), and writes the
//! matched elements' text one per line (see [`results`]).

pub mod acquisition;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod results;
pub mod session;

pub use error::{FetchError, ScrapeError};
pub use session::Session;

//! Plain-text result file: one value per line.
//!
//! The target is truncated without confirmation. Values are written as-is, so
//! a value that itself contains a newline spans several lines of the file.

use crate::error::ScrapeError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "tag_info_file.txt";

/// Write `values` to `path`, each followed by `\n`, replacing any existing file.
pub fn write_lines(path: &Path, values: &[String]) -> Result<(), ScrapeError> {
    let to_write_error = |source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut out = BufWriter::new(file);
    for value in values {
        writeln!(out, "{value}").map_err(to_write_error)?;
    }
    out.flush().map_err(to_write_error)?;

    info!(path = %path.display(), lines = values.len(), "results written");
    Ok(())
}

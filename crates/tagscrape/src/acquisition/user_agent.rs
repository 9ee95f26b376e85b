//! Optional `User-Agent` override read from a side file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default side file name, resolved against the working directory.
pub const USER_AGENT_FILENAME: &str = "user_agent.txt";

/// Reads the user-agent override from a fixed-name file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentProvider {
    path: PathBuf,
}

impl Default for UserAgentProvider {
    fn default() -> Self {
        Self::new(USER_AGENT_FILENAME)
    }
}

impl UserAgentProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the side file this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the first line of the side file, trimmed.
    ///
    /// A missing file or a blank first line yields `Ok(None)`. Any other I/O
    /// failure is returned to the caller.
    pub fn load(&self) -> io::Result<Option<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no user agent override file");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;

        let agent = line.trim();
        if agent.is_empty() {
            debug!(path = %self.path.display(), "user agent override file is blank");
            return Ok(None);
        }
        Ok(Some(agent.to_string()))
    }
}

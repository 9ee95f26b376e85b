//! Error taxonomy for acquisition, extraction, and output.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the network path. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("http error: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("connection error: could not reach {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("timeout error: {url} did not answer in time")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not build the http client")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a transport error raised while talking to `url`.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if let Some(status) = source.status() {
            FetchError::Status { url, status }
        } else if source.is_timeout() {
            FetchError::Timeout { url, source }
        } else if source.is_connect() {
            FetchError::Connect { url, source }
        } else {
            FetchError::Transport { url, source }
        }
    }
}

/// Terminal failure of a scrape run.
///
/// Operator cancellation is not represented here; it is a clean exit
/// reported through [`PromptError::Cancelled`](crate::extraction::PromptError).
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("file with the name {} could not be read", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read a selector from the terminal")]
    Prompt(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ScrapeError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScrapeError::Usage(_) => 2,
            _ => 1,
        }
    }
}

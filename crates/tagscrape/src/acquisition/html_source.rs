//! Where the HTML comes from: a site or a saved file.

use super::http_client::HttpClient;
use super::user_agent::UserAgentProvider;
use crate::error::{FetchError, ScrapeError};
use crate::session::Session;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// Scheme prepended to targets that carry none.
pub const HTTPS_PREFIX: &str = "https://";

const KNOWN_SCHEMES: &[&str] = &["https://", "http://"];

/// Prefix `target` with `https://` unless it already starts with an http(s)
/// scheme. Idempotent.
pub fn normalize_url(target: &str) -> String {
    let has_scheme = KNOWN_SCHEMES.iter().any(|scheme| {
        target
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        target.to_string()
    } else {
        format!("{HTTPS_PREFIX}{target}")
    }
}

/// The one HTML source selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    /// Fetch a page over HTTP(S). Stored as given; normalized on use.
    Site(String),
    /// Read a saved HTML snapshot.
    File(PathBuf),
}

impl HtmlSource {
    /// Resolve the source from the two mutually exclusive CLI inputs.
    pub fn from_flags(site: Option<String>, file: Option<PathBuf>) -> Result<Self, ScrapeError> {
        match (site, file) {
            (Some(site), None) => Ok(HtmlSource::Site(site)),
            (None, Some(file)) => Ok(HtmlSource::File(file)),
            (None, None) => Err(ScrapeError::Usage(
                "please, specify a site (--get) or file (--file) to get the html tags information"
                    .to_string(),
            )),
            (Some(_), Some(_)) => Err(ScrapeError::Usage(
                "--get and --file cannot be used together; pick one html source".to_string(),
            )),
        }
    }

    /// Human-readable target, with the site already normalized.
    pub fn describe(&self) -> String {
        match self {
            HtmlSource::Site(site) => normalize_url(site),
            HtmlSource::File(path) => path.display().to_string(),
        }
    }

    /// Acquire the HTML and start a session with it.
    ///
    /// The user-agent side file is only read on the network path.
    pub async fn acquire(
        &self,
        client: &HttpClient,
        agents: &UserAgentProvider,
    ) -> Result<Session, ScrapeError> {
        match self {
            HtmlSource::Site(site) => {
                let target = normalize_url(site);
                let url = Url::parse(&target).map_err(|source| FetchError::InvalidUrl {
                    url: target.clone(),
                    source,
                })?;

                let user_agent = agents.load().map_err(|source| ScrapeError::Read {
                    path: agents.path().to_path_buf(),
                    source,
                })?;

                let html = client.get_text(&url, user_agent.as_deref()).await?;
                Ok(Session::new(html, user_agent))
            }
            HtmlSource::File(path) => {
                let html = read_html_file(path)?;
                Ok(Session::new(html, None))
            }
        }
    }
}

/// Read a saved snapshot as UTF-8 text.
pub fn read_html_file(path: &Path) -> Result<String, ScrapeError> {
    info!(path = %path.display(), "reading html file");
    std::fs::read_to_string(path).map_err(|source| ScrapeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

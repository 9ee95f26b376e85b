//! Per-run state.

/// Everything a single run knows about the page it is scraping.
///
/// Created by [`HtmlSource::acquire`](crate::acquisition::HtmlSource::acquire)
/// and discarded when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Raw page or file content.
    pub html: String,
    /// User-agent override sent with the request, if one was loaded.
    pub user_agent: Option<String>,
    /// Extracted text values in document order.
    pub values: Vec<String>,
}

impl Session {
    /// Start a session from already acquired HTML.
    pub fn new(html: String, user_agent: Option<String>) -> Self {
        Self {
            html,
            user_agent,
            values: Vec::new(),
        }
    }
}

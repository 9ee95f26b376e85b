//! HTML acquisition from the network or a saved snapshot.
//!
//! Exactly one [`HtmlSource`] is used per run. The network path consults
//! [`UserAgentProvider`] for an optional `User-Agent` override and performs a
//! single GET through [`HttpClient`]; the file path reads the snapshot as
//! UTF-8. There is no fallback between the two.

pub mod html_source;
pub mod http_client;
pub mod user_agent;

pub use html_source::{normalize_url, HtmlSource};
pub use http_client::HttpClient;
pub use user_agent::{UserAgentProvider, USER_AGENT_FILENAME};

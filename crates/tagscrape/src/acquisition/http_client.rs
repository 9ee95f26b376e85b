//! Single-shot HTTP GET with failure classification.

use crate::error::FetchError;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Async page fetcher backed by `reqwest`.
///
/// No `User-Agent` header is set on the client itself, so a request without an
/// override carries none at all.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client. `timeout` of `None` keeps the transport default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` once and return the body decoded as UTF-8.
    ///
    /// The server's declared charset is ignored; invalid sequences are
    /// replaced. Any non-2xx status is an error and is never retried.
    pub async fn get_text(&self, url: &Url, user_agent: Option<&str>) -> Result<String, FetchError> {
        let mut request = self.client.get(url.clone());
        if let Some(agent) = user_agent {
            request = request.header(USER_AGENT, agent);
        }

        info!(%url, custom_agent = user_agent.is_some(), "requesting page");
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;
        debug!(%url, %status, bytes = body.len(), "page returned");

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_url(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{route}", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_text_sends_user_agent_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(None).unwrap();
        let body = client
            .get_text(&page_url(&server, "/page"), Some("MyAgent/1.0"))
            .await
            .unwrap();
        assert_eq!(body, "<p>ok</p>");

        let requests = server.received_requests().await.unwrap();
        let agent = requests[0].headers.get("user-agent").unwrap();
        assert_eq!(agent.to_str().unwrap(), "MyAgent/1.0");
    }

    #[tokio::test]
    async fn test_get_text_omits_user_agent_without_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hi"))
            .mount(&server)
            .await;

        let client = HttpClient::new(None).unwrap();
        client.get_text(&page_url(&server, "/"), None).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("user-agent").is_none());
    }

    #[tokio::test]
    async fn test_get_text_ignores_declared_charset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("caf\u{e9}".as_bytes().to_vec(), "text/html; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(None).unwrap();
        let body = client.get_text(&page_url(&server, "/"), None).await.unwrap();
        assert_eq!(body, "caf\u{e9}");
    }

    #[tokio::test]
    async fn test_get_text_non_success_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(None).unwrap();
        let err = client
            .get_text(&page_url(&server, "/busy"), None)
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status.as_u16(), 503);
                assert!(url.ends_with("/busy"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        server.verify().await;
    }

    #[tokio::test]
    async fn test_get_text_timeout_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = HttpClient::new(Some(Duration::from_millis(100))).unwrap();
        let err = client.get_text(&page_url(&server, "/"), None).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_get_text_refused_connection_is_classified() {
        // Bind then drop to get a port nothing listens on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

        let client = HttpClient::new(None).unwrap();
        let err = client.get_text(&url, None).await.unwrap_err();
        assert!(matches!(err, FetchError::Connect { .. }), "got {err:?}");
    }
}

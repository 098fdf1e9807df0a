// src/sources/wayback.rs
use crate::session::Session;
use crate::sources::Source;
use crate::types::{ParaMinerError, SourceInfo};
use async_trait::async_trait;

const CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

/// Wayback Machine CDX index source
#[derive(Debug, Clone)]
pub struct WaybackSource {
    name: String,
    endpoint: String,
}

impl Default for WaybackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WaybackSource {
    pub fn new() -> Self {
        Self {
            name: "wayback".to_string(),
            endpoint: CDX_ENDPOINT.to_string(),
        }
    }

    /// Build the index request URL for a bare domain: plain-text output,
    /// rows collapsed on the URL key, only the original URL column.
    fn index_url(&self, domain: &str) -> String {
        format!(
            "{}?url={}/*&output=txt&collapse=urlkey&fl=original&page=/",
            self.endpoint, domain
        )
    }
}

#[async_trait]
impl Source for WaybackSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: self.name().to_string(),
            needs_key: false,
            is_default: true,
        }
    }

    fn clone_source(&self) -> Box<dyn Source> {
        Box::new(self.clone())
    }

    async fn fetch_urls(
        &self,
        domain: &str,
        session: &Session,
    ) -> Result<Vec<String>, ParaMinerError> {
        let url = self.index_url(domain);

        match session.get_text(&url).await {
            Ok(body) => Ok(body.split_whitespace().map(|s| s.to_string()).collect()),
            Err(e) => Err(ParaMinerError::SourceError {
                source_name: self.name.to_string(),
                message: format!("Failed to fetch index: {}", e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Config;

    #[test]
    fn test_index_url() {
        let source = WaybackSource::new();
        assert_eq!(
            source.index_url("example.com"),
            "https://web.archive.org/cdx/search/cdx?url=example.com/*&output=txt&collapse=urlkey&fl=original&page=/"
        );
    }

    #[tokio::test]
    async fn test_fetch_urls() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("http://e.com/a?x=1 http://e.com/b\nhttp://e.com/c?y=2")
            .create_async()
            .await;

        let source = WaybackSource {
            name: "wayback".to_string(),
            endpoint: server.url(),
        };
        let session = Session::new(&Config::default()).unwrap();

        let urls = source.fetch_urls("e.com", &session).await.unwrap();
        assert_eq!(
            urls,
            vec!["http://e.com/a?x=1", "http://e.com/b", "http://e.com/c?y=2"]
        );

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_urls_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let source = WaybackSource {
            name: "wayback".to_string(),
            endpoint: server.url(),
        };
        let session = Session::new(&Config::default()).unwrap();

        assert!(source.fetch_urls("e.com", &session).await.is_err());
    }
}

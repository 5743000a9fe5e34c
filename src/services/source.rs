//! Character Source
//!
//! The remote data source seam. `HttpCharacterSource` talks to the public
//! character API; tests substitute scripted in-memory sources.

use std::future::Future;
use std::sync::Arc;

use crate::domain::CharacterPage;
use crate::error::Result;

/// Default API root
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Anything that can serve 1-indexed pages of characters
pub trait CharacterSource: Send + Sync + 'static {
    /// Fetch page `page`; the response carries the current total page count
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<CharacterPage>> + Send;
}

/// reqwest-backed source for `GET <base>/character?page=<n>`
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpCharacterSource {
    /// Create a source rooted at `base_url` (e.g. `https://rickandmortyapi.com/api`)
    pub fn new(base_url: impl Into<Arc<str>>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rm-table/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Character collection endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/character", self.base_url.trim_end_matches('/'))
    }
}

impl CharacterSource for HttpCharacterSource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<CharacterPage>> + Send {
        let request = self.client.get(self.endpoint()).query(&[("page", page)]);

        async move {
            let response = request.send().await?.error_for_status()?;
            let body = response.json::<CharacterPage>().await?;
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let source = HttpCharacterSource::new(DEFAULT_API_BASE_URL).expect("client");
        assert_eq!(
            source.endpoint(),
            "https://rickandmortyapi.com/api/character"
        );

        let source = HttpCharacterSource::new("http://localhost:8080/api/").expect("client");
        assert_eq!(source.endpoint(), "http://localhost:8080/api/character");
    }

    #[test]
    fn test_request_carries_page_query() {
        let source = HttpCharacterSource::new(DEFAULT_API_BASE_URL).expect("client");
        let request = source
            .client
            .get(source.endpoint())
            .query(&[("page", 3u32)])
            .build()
            .expect("request");
        assert_eq!(
            request.url().as_str(),
            "https://rickandmortyapi.com/api/character?page=3"
        );
    }
}

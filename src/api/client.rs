//! Async client for the paginated character API.
//!
//! Not a scraper — just JSON over HTTP. The full-catalog fetch fans out
//! one request per page and join-waits on all of them: the first failure
//! fails the whole operation and in-flight results are discarded. No
//! retry, no partial results.

use crate::api::{Character, CharacterPage};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use futures::future;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the character API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured base URL.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("rickdex/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a single page of the character listing.
    pub async fn fetch_page(&self, page: u32) -> FetchResult<CharacterPage> {
        let url = format!("{}/character", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| FetchError::Network {
                page,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network {
                page,
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let body: Value = response.json().await.map_err(|e| FetchError::Network {
            page,
            message: format!("unparseable body: {e}"),
        })?;

        parse_page(page, body)
    }

    /// Fetch the complete character list across all pages.
    ///
    /// Page 1 is requested first to learn the page count, then every page
    /// (page 1 included, again) is requested concurrently. Results are
    /// concatenated in ascending page order; within a page the API's
    /// order is preserved.
    pub async fn fetch_all(&self) -> FetchResult<Vec<Character>> {
        let first = self.fetch_page(1).await?;
        let pages = first.info.pages;
        debug!(pages, count = first.info.count, "discovered catalog size");

        if pages == 0 {
            return Ok(Vec::new());
        }

        let fetches = (1..=pages).map(|page| self.fetch_page(page));
        let batches = future::try_join_all(fetches).await?;

        let characters: Vec<Character> = batches
            .into_iter()
            .flat_map(|batch| batch.results)
            .collect();
        debug!(total = characters.len(), "catalog fetch complete");

        Ok(characters)
    }
}

/// Validate the page shape and deserialize it.
///
/// A body without a `results` array is the one thing reported as
/// `Format`; everything below that (a malformed character entry, missing
/// `info`) is a shape problem too and folds into the same kind.
fn parse_page(page: u32, body: Value) -> FetchResult<CharacterPage> {
    if !body.get("results").is_some_and(Value::is_array) {
        return Err(FetchError::Format { page });
    }

    serde_json::from_value(body).map_err(|_| FetchError::Format { page })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_page_rejects_missing_results() {
        let body = json!({ "info": { "count": 0, "pages": 0, "next": null, "prev": null } });
        let err = parse_page(3, body).unwrap_err();
        assert!(matches!(err, FetchError::Format { page: 3 }));
    }

    #[test]
    fn parse_page_rejects_non_array_results() {
        let body = json!({
            "info": { "count": 0, "pages": 0, "next": null, "prev": null },
            "results": "nope"
        });
        assert!(parse_page(1, body).is_err());
    }

    #[test]
    fn parse_page_accepts_empty_results() {
        let body = json!({
            "info": { "count": 0, "pages": 0, "next": null, "prev": null },
            "results": []
        });
        let page = parse_page(1, body).unwrap();
        assert_eq!(page.info.pages, 0);
        assert!(page.results.is_empty());
    }
}

//! Deezer search client (RapidAPI gateway)
//!
//! No OAuth step: each request carries the RapidAPI key and host headers.
//!
//! The query uses Deezer's advanced search syntax, `track:"..." artist:"..."`.
//! We build the URL by hand so the quotes and colons are percent-encoded
//! exactly once.

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, CatalogResult};
use crate::catalog::ensure_success;

const RAPIDAPI_HOST: &str = "deezerdevs-deezer.p.rapidapi.com";

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl DeezerClient {
    pub fn new(http_client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_key,
            base_url: format!("https://{}", RAPIDAPI_HOST),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Search for a track. Never fails; problems give an empty result.
    pub async fn query(&self, title: &str, artist: &str) -> CatalogResult {
        match self.search(title, artist).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(target: "catalog", "Deezer query for {:?} failed: {}", title, e);
                CatalogResult::default()
            }
        }
    }

    async fn search(&self, title: &str, artist: &str) -> Result<CatalogResult, CatalogError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CatalogError::MissingCredentials("rapidapi key"))?;

        let query = format!("track:\"{}\" artist:\"{}\"", title, artist);
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(&query));

        let response = self
            .http_client
            .get(&url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let response = ensure_success(response)
            .await?
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        adapter::to_catalog_result(response)
    }
}

//! Catalog module - resolves a title/artist pair against external music catalogs.
//!
//! # Architecture
//!
//! Same split for each provider:
//! - **Domain models** (`domain.rs`) - `CatalogResult`, `MergedMetadata`
//! - **API DTOs** (`spotify/dto.rs`, `tidal/dto.rs`, `deezer/dto.rs`) - exact response shapes
//! - **Adapters** - convert the top search hit into a `CatalogResult`
//! - **Clients** - HTTP clients, including the OAuth2 login where needed
//! - **Aggregator** - concurrent fan-out and fixed-precedence merge
//!
//! # Usage
//!
//! ```ignore
//! use vibe_display::catalog::{Aggregator, http_client};
//!
//! let aggregator = Aggregator::with_credentials(http_client()?, spotify, tidal, rapidapi_key);
//! if let Some(meta) = aggregator.resolve("Song Z", "Artist Q").await {
//!     println!("{} by {}", meta.song_name, meta.artist);
//! }
//! ```

pub mod aggregator;
pub mod deezer;
pub mod domain;
pub mod spotify;
pub mod tidal;
pub mod traits;

pub use aggregator::{Aggregator, merge};
pub use domain::{Catalog, CatalogError, CatalogResult, ClientCredentials, MergedMetadata};
pub use traits::CatalogApi;

/// Build the HTTP client shared by the catalogs and remote tables.
///
/// The client:
/// - accepts gzip-compressed responses
/// - sends a User-Agent identifying the application
///
/// No request timeout is set; a slow catalog delays the merge rather than
/// dropping out of it.
pub fn http_client() -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| CatalogError::Client(e.to_string()))
}

/// Turn a non-2xx response into a `CatalogError::Network` carrying a body excerpt.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Network(format!(
        "HTTP {}: {} - {}",
        status,
        status.canonical_reason().unwrap_or("Unknown"),
        body.chars().take(200).collect::<String>()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_builds() {
        assert!(http_client().is_ok());
    }
}

//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Spotify API returns, trimmed to the fields we read.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api/reference/search
//!
//! Example search response (`type=track&limit=1`):
//! ```json
//! {
//!   "tracks": {
//!     "items": [{
//!       "name": "Song Title",
//!       "artists": [{"name": "Artist Name"}],
//!       "album": {"images": [{"url": "https://i.scdn.co/image/abc", "width": 640}]},
//!       "external_urls": {"spotify": "https://open.spotify.com/track/xyz"}
//!     }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Response of the client-credentials token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
}

/// Top-level search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: Paging,
}

/// A page of search hits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paging {
    #[serde(default)]
    pub items: Vec<Track>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    /// Largest image first
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

//! Deezer search Data Transfer Objects
//!
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api/search
//!
//! Example response:
//! ```json
//! {
//!   "data": [{
//!     "title": "Song Title",
//!     "link": "https://www.deezer.com/track/3135556",
//!     "artist": {"name": "Artist Name"},
//!     "album": {"cover_xl": "https://e-cdns-images.dzcdn.net/images/cover/.../1000x1000.jpg"}
//!   }],
//!   "total": 1
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Track>,
    pub total: Option<u32>,
    /// Present instead of `data` when the request was rejected
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: String,
    pub code: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub title: String,
    pub link: Option<String>,
    pub artist: Option<Artist>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub cover_xl: Option<String>,
}

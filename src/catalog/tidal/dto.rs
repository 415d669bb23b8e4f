//! Tidal Open API Data Transfer Objects
//!
//! DO NOT use these types outside the tidal module - convert to domain types.
//!
//! Example search response (`type=TRACKS&limit=1`):
//! ```json
//! {
//!   "tracks": [{
//!     "id": "251380837",
//!     "status": 200,
//!     "resource": {
//!       "title": "Song Title",
//!       "artists": [{"name": "Artist Name", "main": true}],
//!       "album": {"imageCover": [
//!         {"url": ".../1080x1080.jpg", "width": 1080, "height": 1080},
//!         {"url": ".../640x640.jpg", "width": 640, "height": 640}
//!       ]},
//!       "tidalUrl": "https://tidal.com/browse/track/251380837"
//!     }
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Response of the OAuth2 token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Top-level search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Vec<TrackHit>,
}

/// One search hit wrapping the track resource
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackHit {
    pub id: Option<String>,
    pub status: Option<u16>,
    pub resource: Track,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    #[serde(rename = "tidalUrl")]
    pub tidal_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
    pub main: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    /// Cover variants, largest first
    #[serde(rename = "imageCover", default)]
    pub image_cover: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": [{
                "id": "1",
                "status": 200,
                "resource": {
                    "title": "Song Z",
                    "artists": [{"name": "Artist Q", "main": true}],
                    "album": {"imageCover": [
                        {"url": "https://resources.tidal.com/1080.jpg", "width": 1080},
                        {"url": "https://resources.tidal.com/640.jpg", "width": 640}
                    ]},
                    "tidalUrl": "https://tidal.com/browse/track/1"
                }
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");
        let track = &response.tracks[0].resource;
        assert_eq!(track.title, "Song Z");
        assert_eq!(track.artists[0].main, Some(true));
        assert_eq!(track.album.as_ref().unwrap().image_cover[1].width, Some(640));
        assert_eq!(track.tidal_url.as_deref(), Some("https://tidal.com/browse/track/1"));
    }

    #[test]
    fn test_parse_no_tracks() {
        let response: SearchResponse = serde_json::from_str("{}").expect("Should parse");
        assert!(response.tracks.is_empty());
    }
}

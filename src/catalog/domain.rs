//! Internal domain models for catalog lookups.
//!
//! These types are OUR types - they don't change when a provider's API changes.
//! Each provider's DTOs are converted into [`CatalogResult`] by its adapter.

use std::fmt;

/// The external catalogs queried for every track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Spotify,
    Tidal,
    Deezer,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spotify => "Spotify",
            Self::Tidal => "Tidal",
            Self::Deezer => "Deezer",
        };
        f.pad(name)
    }
}

/// What one catalog knows about a track.
///
/// `None` means "this catalog had no answer". A failed lookup is
/// represented by [`CatalogResult::default`] (everything absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogResult {
    pub song_name: Option<String>,
    pub artist: Option<String>,
    pub album_art: Option<String>,
    /// Canonical web link to the track on this catalog
    pub link: Option<String>,
}

impl CatalogResult {
    /// True if every field is absent
    pub fn is_empty(&self) -> bool {
        self.song_name.is_none()
            && self.artist.is_none()
            && self.album_art.is_none()
            && self.link.is_none()
    }
}

/// Canonical song metadata after merging every catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedMetadata {
    pub song_name: String,
    pub artist: String,
    pub album_art: Option<String>,
    /// `None` means the track is unavailable on that service
    pub spotify_link: Option<String>,
    pub tidal_link: Option<String>,
    pub deezer_link: Option<String>,
}

impl MergedMetadata {
    /// Links in display order, paired with their catalog
    pub fn links(&self) -> [(Catalog, Option<&str>); 3] {
        [
            (Catalog::Spotify, self.spotify_link.as_deref()),
            (Catalog::Tidal, self.tidal_link.as_deref()),
            (Catalog::Deezer, self.deezer_link.as_deref()),
        ]
    }
}

/// OAuth2 client-credentials pair for catalogs that need a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Build credentials if both halves are configured.
    pub fn from_parts(client_id: Option<&str>, client_secret: Option<&str>) -> Option<Self> {
        match (client_id, client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some(Self {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
            }),
            _ => None,
        }
    }
}

/// Errors inside a catalog client.
///
/// These never leave the client's `query` boundary; they are logged and
/// turned into an empty [`CatalogResult`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("Login failed: {0}")]
    Login(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("API contract violation: expected {expected}, got {actual}")]
    ContractViolation { expected: String, actual: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

//! Aggregator - queries every catalog at once and merges the answers.
//!
//! Merge precedence, field by field:
//!
//! | field        | source                        |
//! |--------------|-------------------------------|
//! | song name    | Tidal, else Spotify           |
//! | artist       | Tidal, else Spotify           |
//! | album art    | Tidal, else Spotify           |
//! | spotify link | Spotify                       |
//! | tidal link   | Tidal                         |
//! | deezer link  | Deezer                        |
//!
//! Deezer only ever contributes its link.

use std::sync::Arc;

use super::deezer::DeezerClient;
use super::domain::{Catalog, CatalogResult, ClientCredentials, MergedMetadata};
use super::spotify::SpotifyClient;
use super::tidal::TidalClient;
use super::traits::CatalogApi;

/// Fans a title/artist query out to the three catalogs.
#[derive(Clone)]
pub struct Aggregator {
    spotify: Arc<dyn CatalogApi>,
    tidal: Arc<dyn CatalogApi>,
    deezer: Arc<dyn CatalogApi>,
}

impl Aggregator {
    pub fn new(
        spotify: Arc<dyn CatalogApi>,
        tidal: Arc<dyn CatalogApi>,
        deezer: Arc<dyn CatalogApi>,
    ) -> Self {
        Self {
            spotify,
            tidal,
            deezer,
        }
    }

    /// Build the production clients sharing one HTTP client.
    pub fn with_credentials(
        http_client: reqwest::Client,
        spotify: Option<ClientCredentials>,
        tidal: Option<ClientCredentials>,
        rapidapi_key: Option<String>,
    ) -> Self {
        Self::new(
            Arc::new(SpotifyClient::new(http_client.clone(), spotify)),
            Arc::new(TidalClient::new(http_client.clone(), tidal)),
            Arc::new(DeezerClient::new(http_client, rapidapi_key)),
        )
    }

    /// Query all catalogs and merge their answers.
    ///
    /// Waits for every catalog, however slow. Returns `None` when neither
    /// Spotify nor Tidal knows the song.
    pub async fn resolve(&self, title: &str, artist: &str) -> Option<MergedMetadata> {
        let [spotify, tidal, deezer] = self.query_all(title, artist).await;

        tracing::debug!(target: "catalog", ?spotify, ?tidal, ?deezer, "Catalog results");

        let merged = merge(spotify, tidal, deezer);
        if merged.is_none() {
            tracing::warn!(target: "catalog", "No catalog knows {:?} by {:?}", title, artist);
        }
        merged
    }

    /// Query all catalogs at once, in Spotify, Tidal, Deezer order.
    pub async fn query_all(&self, title: &str, artist: &str) -> [CatalogResult; 3] {
        let (spotify, tidal, deezer) = tokio::join!(
            self.spotify.query(title, artist),
            self.tidal.query(title, artist),
            self.deezer.query(title, artist),
        );
        [spotify, tidal, deezer]
    }

    /// The clients, in Spotify, Tidal, Deezer order
    pub fn catalogs(&self) -> [Catalog; 3] {
        [
            self.spotify.catalog(),
            self.tidal.catalog(),
            self.deezer.catalog(),
        ]
    }
}

/// Merge per-catalog results with the fixed precedence above.
pub fn merge(
    spotify: CatalogResult,
    tidal: CatalogResult,
    deezer: CatalogResult,
) -> Option<MergedMetadata> {
    let song_name = tidal.song_name.or(spotify.song_name)?;
    let artist = tidal.artist.or(spotify.artist)?;

    Some(MergedMetadata {
        song_name,
        artist,
        album_art: tidal.album_art.or(spotify.album_art),
        spotify_link: spotify.link,
        tidal_link: tidal.link,
        deezer_link: deezer.link,
    })
}

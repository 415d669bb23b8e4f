//! Trait definition for catalog clients.
//!
//! The aggregator only sees `dyn CatalogApi`, so tests can swap any of the
//! three real clients for a mock.

use async_trait::async_trait;

use super::domain::{Catalog, CatalogResult};

/// One external music catalog.
///
/// `query` never fails: provider errors are logged and reported as an
/// all-absent [`CatalogResult`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Which catalog this is
    fn catalog(&self) -> Catalog;

    /// Search for the best match of `title` by `artist`.
    async fn query(&self, title: &str, artist: &str) -> CatalogResult;
}

#[async_trait]
impl CatalogApi for super::spotify::SpotifyClient {
    fn catalog(&self) -> Catalog {
        Catalog::Spotify
    }

    async fn query(&self, title: &str, artist: &str) -> CatalogResult {
        self.query(title, artist).await
    }
}

#[async_trait]
impl CatalogApi for super::tidal::TidalClient {
    fn catalog(&self) -> Catalog {
        Catalog::Tidal
    }

    async fn query(&self, title: &str, artist: &str) -> CatalogResult {
        self.query(title, artist).await
    }
}

#[async_trait]
impl CatalogApi for super::deezer::DeezerClient {
    fn catalog(&self) -> Catalog {
        Catalog::Deezer
    }

    async fn query(&self, title: &str, artist: &str) -> CatalogResult {
        self.query(title, artist).await
    }
}

/// Mock catalogs for testing.
#[cfg(test)]
pub mod mocks {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use super::*;

    /// Mock catalog that returns a fixed result for every query.
    pub struct MockCatalog {
        pub catalog: Catalog,
        pub result: CatalogResult,
        /// Number of queries received
        pub calls: AtomicUsize,
        /// Answer with the queried title/artist instead of `result`'s
        pub echo: bool,
        /// Queries for this title wait on `gate` before answering
        pub gated_title: Option<(String, Arc<Notify>)>,
    }

    impl MockCatalog {
        /// A catalog with no answer for anything.
        pub fn empty(catalog: Catalog) -> Self {
            Self::with_result(catalog, CatalogResult::default())
        }

        /// A catalog that answers every query with `result`.
        pub fn with_result(catalog: Catalog, result: CatalogResult) -> Self {
            Self {
                catalog,
                result,
                calls: AtomicUsize::new(0),
                echo: false,
                gated_title: None,
            }
        }

        /// A catalog that echoes the queried title and artist back.
        pub fn echo(catalog: Catalog, link: &str) -> Self {
            let mut mock = Self::with_result(
                catalog,
                CatalogResult {
                    link: Some(link.to_string()),
                    ..Default::default()
                },
            );
            mock.echo = true;
            mock
        }

        /// Hold queries for `title` until `gate` is notified.
        pub fn gate(mut self, title: &str, gate: Arc<Notify>) -> Self {
            self.gated_title = Some((title.to_string(), gate));
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogApi for MockCatalog {
        fn catalog(&self) -> Catalog {
            self.catalog
        }

        async fn query(&self, title: &str, artist: &str) -> CatalogResult {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some((gated, gate)) = &self.gated_title
                && gated == title
            {
                gate.notified().await;
            }

            if self.echo {
                return CatalogResult {
                    song_name: Some(title.to_string()),
                    artist: Some(artist.to_string()),
                    album_art: Some(format!("https://img.example.com/{}.jpg", title)),
                    link: self.result.link.clone(),
                };
            }
            self.result.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_empty() {
            let mock = MockCatalog::empty(Catalog::Spotify);
            assert!(mock.query("Song", "Artist").await.is_empty());
            assert_eq!(mock.call_count(), 1);
        }

        #[tokio::test]
        async fn test_mock_echo() {
            let mock = MockCatalog::echo(Catalog::Tidal, "https://tidal.com/track/1");
            let result = mock.query("Song Z", "Artist Q").await;
            assert_eq!(result.song_name.as_deref(), Some("Song Z"));
            assert_eq!(result.artist.as_deref(), Some("Artist Q"));
            assert_eq!(result.link.as_deref(), Some("https://tidal.com/track/1"));
        }
    }
}

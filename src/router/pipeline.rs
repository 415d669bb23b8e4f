//! Resolution pipelines started by the router.
//!
//! Song: lookup table -> aggregator -> `present_metadata` / `present_error`.
//! Vibe: lookup table -> `present_vibe` (failures are only logged).
//!
//! Pipelines are never cancelled. When two overlap, whichever finishes last
//! wins the screen unless `discard_superseded` is set, in which case a
//! pipeline whose generation is no longer the latest drops its output.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::{Aggregator, MergedMetadata};
use crate::lookup::{LookupError, LookupStore, vibe_id_for};
use crate::present::PresentationSink;

/// Why a song couldn't be resolved
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("Song lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("No catalog knows {title:?} by {artist:?}")]
    NotInCatalogs { title: String, artist: String },
}

/// Shared by every pipeline the router starts.
pub struct Pipeline {
    lookup: LookupStore,
    aggregator: Aggregator,
    sink: Arc<dyn PresentationSink>,
    /// Latest generation issued by the router
    latest: AtomicU64,
    discard_superseded: bool,
}

impl Pipeline {
    pub fn new(
        lookup: LookupStore,
        aggregator: Aggregator,
        sink: Arc<dyn PresentationSink>,
        discard_superseded: bool,
    ) -> Self {
        Self {
            lookup,
            aggregator,
            sink,
            latest: AtomicU64::new(0),
            discard_superseded,
        }
    }

    pub fn sink(&self) -> &Arc<dyn PresentationSink> {
        &self.sink
    }

    /// Record the newest generation. Called only from the router's
    /// synchronous transition step.
    pub fn mark_latest(&self, generation: u64) {
        self.latest.store(generation, Ordering::SeqCst);
    }

    /// Run the song and vibe pipelines for `music_id` side by side.
    pub async fn run(&self, music_id: i64, generation: u64) {
        tokio::join!(
            self.present_song(music_id, generation),
            self.present_vibe(music_id, generation),
        );
    }

    /// Table lookup followed by the catalog merge.
    pub async fn resolve_song(&self, music_id: i64) -> Result<MergedMetadata, ResolveError> {
        let song = self.lookup.lookup_song(music_id).await?;

        self.aggregator
            .resolve(&song.song_name, &song.artist)
            .await
            .ok_or(ResolveError::NotInCatalogs {
                title: song.song_name,
                artist: song.artist,
            })
    }

    async fn present_song(&self, music_id: i64, generation: u64) {
        let outcome = self.resolve_song(music_id).await;

        if self.is_superseded(generation) {
            tracing::debug!(
                target: "router",
                "Dropping song result for {} (generation {})",
                music_id,
                generation
            );
            return;
        }

        match outcome {
            Ok(metadata) => {
                tracing::info!(
                    target: "router",
                    "Now playing {:?} by {:?}",
                    metadata.song_name,
                    metadata.artist
                );
                self.sink.present_metadata(&metadata);
            }
            Err(ResolveError::Lookup(LookupError::Transport { location, message })) => {
                tracing::error!(
                    target: "router",
                    "Song table unreadable ({}): {}",
                    location,
                    message
                );
                self.sink.present_error();
            }
            Err(e) => {
                tracing::warn!(target: "router", "Failed to find song {}: {}", music_id, e);
                self.sink.present_error();
            }
        }
    }

    async fn present_vibe(&self, music_id: i64, generation: u64) {
        let vibe_id = vibe_id_for(music_id);
        let outcome = self.lookup.lookup_vibe(vibe_id).await;

        if self.is_superseded(generation) {
            tracing::debug!(
                target: "router",
                "Dropping vibe result for {} (generation {})",
                music_id,
                generation
            );
            return;
        }

        match outcome {
            Ok(vibe) => self.sink.present_vibe(&vibe),
            Err(e) if e.is_not_found() => {
                tracing::warn!(target: "router", "Failed to find vibe {}: {}", vibe_id, e);
            }
            Err(e) => tracing::error!(target: "router", "Vibe table unreadable: {}", e),
        }
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.discard_superseded && self.latest.load(Ordering::SeqCst) != generation
    }
}

//! Lookup store - maps integer music/vibe IDs to rows of the CSV tables.
//!
//! Both tables are plain comma-separated text with a reserved header at row 0:
//!
//! ```text
//! songs.csv                 vibes.csv
//! id,song,artist            id,vibe,primary,secondary
//! 1,Song A,Artist A         1,Energetic,#ff0000,#00ff00
//! ...                       2,Chill,#112233,#445566
//! ```
//!
//! Song row `n` is music ID `n`. Vibe ID `v` lives at row `v + 1`.
//!
//! A missing row is [`LookupError::NotFound`]. A table that can't be read at
//! all is [`LookupError::Transport`]. Callers present both as an error, but
//! they log them differently.

mod records;
mod table;

pub use records::{GROUP_SIZE, NO_MUSIC, SongRecord, VibeRecord, vibe_id_for};
pub use table::{FileTable, HttpTable, StaticTable, TableSource, source_for};

use std::fmt;
use std::sync::Arc;

/// Why a row lookup produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Row 0 is the column header, never data
    HeaderRow,
    /// Index is negative or past the last row
    OutOfRange { index: i64, rows: usize },
    /// Row exists but doesn't have the expected fields
    Malformed { index: i64 },
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderRow => write!(f, "row 0 is the table header"),
            Self::OutOfRange { index, rows } => {
                write!(f, "row {} out of range ({} rows)", index, rows)
            }
            Self::Malformed { index } => write!(f, "row {} is malformed", index),
        }
    }
}

/// Lookup errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("No record: {0}")]
    NotFound(NotFoundReason),

    #[error("Failed to read table {location}: {message}")]
    Transport { location: String, message: String },
}

impl LookupError {
    pub fn transport(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            location: location.into(),
            message: message.into(),
        }
    }

    /// True for a missing row, false for a table read failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Resolves song and vibe IDs against their tables.
///
/// Cheap to clone; the sources are shared.
#[derive(Clone)]
pub struct LookupStore {
    songs: Arc<dyn TableSource>,
    vibes: Arc<dyn TableSource>,
}

impl LookupStore {
    pub fn new(songs: Box<dyn TableSource>, vibes: Box<dyn TableSource>) -> Self {
        Self {
            songs: Arc::from(songs),
            vibes: Arc::from(vibes),
        }
    }

    /// Build a store from configured table locations (paths or URLs).
    pub fn from_locations(songs: &str, vibes: &str, http_client: &reqwest::Client) -> Self {
        Self::new(source_for(songs, http_client), source_for(vibes, http_client))
    }

    /// Look up the song at row `music_id`.
    pub async fn lookup_song(&self, music_id: i64) -> Result<SongRecord, LookupError> {
        let contents = self.songs.fetch().await?;
        let fields = row_fields(&contents, music_id, 3)?;

        let song = SongRecord {
            song_name: fields[1].to_string(),
            artist: fields[2].to_string(),
        };
        tracing::debug!(target: "lookup", "Song {} -> {:?}", music_id, song);
        Ok(song)
    }

    /// Look up vibe `vibe_id`, stored at row `vibe_id + 1`.
    pub async fn lookup_vibe(&self, vibe_id: i64) -> Result<VibeRecord, LookupError> {
        let contents = self.vibes.fetch().await?;
        let fields = row_fields(&contents, vibe_id.saturating_add(1), 4)?;

        let vibe = VibeRecord {
            vibe_name: fields[1].to_string(),
            primary_colour: fields[2].to_string(),
            secondary_colour: fields[3].to_string(),
        };
        tracing::debug!(target: "lookup", "Vibe {} -> {:?}", vibe_id, vibe);
        Ok(vibe)
    }

    pub fn song_location(&self) -> String {
        self.songs.location()
    }

    pub fn vibe_location(&self) -> String {
        self.vibes.location()
    }
}

/// Split row `index` of `contents` into fields, requiring at least
/// `min_fields` with a non-empty name column.
fn row_fields(contents: &str, index: i64, min_fields: usize) -> Result<Vec<&str>, LookupError> {
    let rows: Vec<&str> = contents.split('\n').collect();

    if index < 0 || index as usize >= rows.len() {
        return Err(LookupError::NotFound(NotFoundReason::OutOfRange {
            index,
            rows: rows.len(),
        }));
    }
    if index == 0 {
        return Err(LookupError::NotFound(NotFoundReason::HeaderRow));
    }

    let fields: Vec<&str> = rows[index as usize]
        .trim_end_matches('\r')
        .split(',')
        .map(str::trim)
        .collect();

    if fields.len() < min_fields || fields[1].is_empty() {
        return Err(LookupError::NotFound(NotFoundReason::Malformed { index }));
    }

    Ok(fields)
}

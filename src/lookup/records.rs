//! Records produced by the lookup tables.

/// Number of consecutive music IDs that share one vibe.
pub const GROUP_SIZE: i64 = 20;

/// Sentinel music ID meaning "nothing is playing".
pub const NO_MUSIC: i64 = -1;

/// A row of the song table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub song_name: String,
    pub artist: String,
}

/// A row of the vibe table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibeRecord {
    pub vibe_name: String,
    /// CSS colour, e.g. `#112233`
    pub primary_colour: String,
    pub secondary_colour: String,
}

/// Vibe group a music ID belongs to (`floor(music_id / GROUP_SIZE)`).
pub fn vibe_id_for(music_id: i64) -> i64 {
    music_id.div_euclid(GROUP_SIZE)
}

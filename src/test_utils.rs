//! Test utilities and fixtures for vibe-display tests.
//!
//! Provides the fixture tables, a lookup store built from them, a sink that
//! records every presentation call and a table source that always fails.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{fixture_store, RecordingSink};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let store = fixture_store();
//!     let song = store.lookup_song(21).await.unwrap();
//!     assert_eq!(song.song_name, "Song Z");
//! }
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::catalog::MergedMetadata;
use crate::lookup::{LookupError, LookupStore, StaticTable, TableSource, VibeRecord};
use crate::present::PresentationSink;

/// Song table: header, rows 1-20 generic, 21 "Song Z", 22 "Song Y".
/// Ends with a newline, so the last split row is empty.
pub const SONG_TABLE: &str = "\
id,song,artist
1,Song 1,Artist 1
2,Song 2,Artist 2
3,Song 3,Artist 3
4,Song 4,Artist 4
5,Song 5,Artist 5
6,Song 6,Artist 6
7,Song 7,Artist 7
8,Song 8,Artist 8
9,Song 9,Artist 9
10,Song 10,Artist 10
11,Song 11,Artist 11
12,Song 12,Artist 12
13,Song 13,Artist 13
14,Song 14,Artist 14
15,Song 15,Artist 15
16,Song 16,Artist 16
17,Song 17,Artist 17
18,Song 18,Artist 18
19,Song 19,Artist 19
20,Song 20,Artist 20
21,Song Z,Artist Q
22,Song Y,Artist Y
";

/// Vibe table: vibe 0 at row 1, vibe 1 at row 2.
pub const VIBE_TABLE: &str = "\
id,vibe,primary,secondary
1,Energetic,#ff0000,#00ff00
2,Chill,#112233,#445566
";

/// Lookup store over the fixture tables.
pub fn fixture_store() -> LookupStore {
    LookupStore::new(
        Box::new(StaticTable::new("songs", SONG_TABLE)),
        Box::new(StaticTable::new("vibes", VIBE_TABLE)),
    )
}

/// Table source whose reads always fail.
pub struct FailingTable;

#[async_trait]
impl TableSource for FailingTable {
    fn location(&self) -> String {
        "failing".to_string()
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        Err(LookupError::transport("failing", "connection refused"))
    }
}

/// One call made on a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presented {
    Metadata(MergedMetadata),
    Offline,
    Error,
    Vibe(VibeRecord),
    DeviceState(i64, i64),
}

/// Sink that records every call in order.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<Presented>>,
}

impl RecordingSink {
    /// Drain the recorded calls.
    pub fn take(&self) -> Vec<Presented> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Song name of the most recent `present_metadata` call
    pub fn last_song(&self) -> Option<String> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            Presented::Metadata(meta) => Some(meta.song_name.clone()),
            _ => None,
        })
    }
}

impl PresentationSink for RecordingSink {
    fn present_metadata(&self, metadata: &MergedMetadata) {
        self.calls.lock().push(Presented::Metadata(metadata.clone()));
    }

    fn present_offline(&self) {
        self.calls.lock().push(Presented::Offline);
    }

    fn present_error(&self) {
        self.calls.lock().push(Presented::Error);
    }

    fn present_vibe(&self, vibe: &VibeRecord) {
        self.calls.lock().push(Presented::Vibe(vibe.clone()));
    }

    fn present_device_state(&self, device_id: i64, state: i64) {
        self.calls.lock().push(Presented::DeviceState(device_id, state));
    }
}

//! Screen model - what the display currently shows.
//!
//! Pure data plus a text renderer. The console sink keeps one of these and
//! redraws it after every presentation call.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::catalog::MergedMetadata;
use crate::lookup::VibeRecord;

use super::DeviceState;

/// Song area of the display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SongPanel {
    /// Nothing playing
    #[default]
    Offline,
    /// Something is playing but couldn't be identified
    Error,
    Playing(MergedMetadata),
}

/// Everything on screen
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub song: SongPanel,
    /// `None` shows "No vibe selected"
    pub vibe: Option<VibeRecord>,
    /// Latest reported state per device
    pub devices: BTreeMap<i64, DeviceState>,
}

impl Screen {
    pub fn show_metadata(&mut self, metadata: &MergedMetadata) {
        self.song = SongPanel::Playing(metadata.clone());
    }

    /// Offline also clears the vibe; nothing is playing so nothing sets the mood.
    pub fn show_offline(&mut self) {
        self.song = SongPanel::Offline;
        self.vibe = None;
    }

    pub fn show_error(&mut self) {
        self.song = SongPanel::Error;
    }

    pub fn show_vibe(&mut self, vibe: &VibeRecord) {
        self.vibe = Some(vibe.clone());
    }

    pub fn show_device_state(&mut self, device_id: i64, state: DeviceState) {
        self.devices.insert(device_id, state);
    }

    /// Scrolling banner along the side of the display
    pub fn banner(&self) -> String {
        match &self.song {
            SongPanel::Offline => "Offline / ".repeat(40),
            SongPanel::Error => "Error / ".repeat(40),
            SongPanel::Playing(meta) => {
                format!("{} by {} / ", meta.song_name, meta.artist).repeat(20)
            }
        }
    }

    /// Render the whole screen as text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.vibe {
            Some(vibe) => {
                let _ = writeln!(
                    out,
                    "Vibe: {} ({} / {})",
                    vibe.vibe_name, vibe.primary_colour, vibe.secondary_colour
                );
            }
            None => {
                let _ = writeln!(out, "Vibe: No vibe selected");
            }
        }

        match &self.song {
            SongPanel::Offline => {
                let _ = writeln!(out, "No music is playing");
                let _ = writeln!(out, "Offline");
            }
            SongPanel::Error => {
                let _ = writeln!(out, "Cannot find song that is playing");
                let _ = writeln!(out, "Error");
            }
            SongPanel::Playing(meta) => {
                let _ = writeln!(out, "{}", meta.song_name);
                let _ = writeln!(out, "{}", meta.artist);
                let _ = writeln!(
                    out,
                    "Art: {}",
                    meta.album_art.as_deref().unwrap_or("(none)")
                );
                for (catalog, link) in meta.links() {
                    let _ = writeln!(out, "  {:<8} {}", catalog, link.unwrap_or("offline"));
                }
            }
        }

        if !self.devices.is_empty() {
            let devices: Vec<String> = self
                .devices
                .iter()
                .map(|(id, state)| format!("#{} {}", id, state))
                .collect();
            let _ = writeln!(out, "Devices: {}", devices.join(", "));
        }

        out
    }
}

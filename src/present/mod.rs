//! Presentation - the sink the router drives.
//!
//! The router never renders anything itself; it calls a [`PresentationSink`].
//! [`ConsoleSink`] is the terminal implementation.

mod console;
mod screen;

pub use console::ConsoleSink;
pub use screen::{Screen, SongPanel};

use std::fmt;

use crate::catalog::MergedMetadata;
use crate::lookup::VibeRecord;

/// Receives everything the display should show.
pub trait PresentationSink: Send + Sync {
    /// A song was identified
    fn present_metadata(&self, metadata: &MergedMetadata);

    /// Nothing is playing
    fn present_offline(&self);

    /// Something is playing but it couldn't be resolved
    fn present_error(&self);

    fn present_vibe(&self, vibe: &VibeRecord);

    /// A device reported its state (`state` is the raw wire value)
    fn present_device_state(&self, device_id: i64, state: i64);
}

/// State a device reports on the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Online,
    Waiting,
    Submitted,
    Unknown(i64),
}

impl From<i64> for DeviceState {
    fn from(value: i64) -> Self {
        match value {
            // 3 is "finished submitting", shown as online again
            0 | 3 => Self::Online,
            1 => Self::Waiting,
            2 => Self::Submitted,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::Waiting => f.write_str("waiting"),
            Self::Submitted => f.write_str("submitted"),
            Self::Unknown(value) => write!(f, "unknown({})", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_state_from_wire() {
        assert_eq!(DeviceState::from(0), DeviceState::Online);
        assert_eq!(DeviceState::from(1), DeviceState::Waiting);
        assert_eq!(DeviceState::from(2), DeviceState::Submitted);
        assert_eq!(DeviceState::from(3), DeviceState::Online);
        assert_eq!(DeviceState::from(7), DeviceState::Unknown(7));
        assert_eq!(DeviceState::from(7).to_string(), "unknown(7)");
    }
}

//! Router state machine.
//!
//! [`transition`] is a pure function: it takes the current state and one
//! event, and returns the next state plus what to dispatch. It never
//! suspends, so `last_music_id` is updated in arrival order even when the
//! pipelines it starts finish out of order.

use serde::Deserialize;

use crate::lookup::NO_MUSIC;

/// One inbound channel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PlaybackEvent {
    pub device_id: Option<i64>,
    pub music_id: Option<i64>,
    pub current_state: Option<i64>,
}

/// What the display is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Idle,
    Playing(i64),
}

/// Router state. Owned by the router, threaded through [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterState {
    pub play: PlayState,
    /// Last music ID acted on, [`NO_MUSIC`] initially
    pub last_music_id: i64,
    /// Bumped for every music action; stamps pipelines
    pub generation: u64,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            play: PlayState::Idle,
            last_music_id: NO_MUSIC,
            generation: 0,
        }
    }
}

/// Music-related work triggered by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicAction {
    /// Run the song and vibe pipelines for `music_id`
    Resolve { music_id: i64, generation: u64 },
    /// The primary device reported that nothing is playing
    Offline { generation: u64 },
}

/// Work to dispatch for an accepted event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub music: Option<MusicAction>,
    /// `(device_id, current_state)` for the device-state sink
    pub device_state: Option<(i64, i64)>,
}

impl Dispatch {
    pub fn is_empty(&self) -> bool {
        self.music.is_none() && self.device_state.is_none()
    }
}

/// Why an event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingDevice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Rejected(RejectReason),
    Accepted(Dispatch),
}

/// Apply one event to the router state.
///
/// - No `device_id`: rejected, state unchanged.
/// - `music_id` from the primary device that is non-zero and differs from
///   `last_music_id`: becomes the new `last_music_id`. `NO_MUSIC` goes
///   offline, anything else is resolved.
/// - `current_state` present: forwarded, independent of the music rule.
pub fn transition(
    state: RouterState,
    event: &PlaybackEvent,
    primary_device_id: i64,
) -> (RouterState, Transition) {
    let Some(device_id) = event.device_id else {
        return (state, Transition::Rejected(RejectReason::MissingDevice));
    };

    let mut next = state;
    let mut dispatch = Dispatch::default();

    if let Some(music_id) = event.music_id
        && music_id != 0
        && music_id != state.last_music_id
        && device_id == primary_device_id
    {
        next.last_music_id = music_id;
        next.generation = state.generation + 1;

        if music_id == NO_MUSIC {
            next.play = PlayState::Idle;
            dispatch.music = Some(MusicAction::Offline {
                generation: next.generation,
            });
        } else {
            next.play = PlayState::Playing(music_id);
            dispatch.music = Some(MusicAction::Resolve {
                music_id,
                generation: next.generation,
            });
        }
    }

    if let Some(current_state) = event.current_state {
        dispatch.device_state = Some((device_id, current_state));
    }

    (next, Transition::Accepted(dispatch))
}

//! Playback state store
//!
//! A pure state-transition function over explicit intents. The store never
//! reads from or depends on the media element; bridging element events to
//! intents (and state changes back to element effects) is the controller's
//! job in `watchparty-player`.

use serde::{Deserialize, Serialize};

/// Player state owned by the store, replaced on each transition.
///
/// `time` is authoritative for *display* only. The media element remains
/// authoritative for the actual position: `time` is reconciled from it on
/// progress notifications and pushed to it on explicit seeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Last known playback position in seconds.
    pub time: f64,
    /// Desired playback intent, not observed element state. The element's
    /// actual playing/paused status may transiently lag behind this flag.
    pub is_playing: bool,
    /// Whether the full player overlay is shown.
    pub is_open: bool,
}

impl PlaybackState {
    /// State for a freshly opened screen, seeded with the party's shared
    /// position snapshot.
    pub fn seeded(current_time: f64) -> Self {
        Self {
            time: current_time,
            is_playing: false,
            is_open: false,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::seeded(0.0)
    }
}

/// A discrete description of something that happened, submitted to the store.
///
/// `Seek` (explicit user seek) and `TimeUpdate` (passive element progress)
/// currently have identical effects but stay separate kinds so their
/// handling can diverge later, e.g. suppressing displayed updates during an
/// active drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerIntent {
    /// Show the player overlay.
    OpenControls,
    /// Hide the player overlay.
    CloseControls,
    /// User moved the playhead to an absolute position in seconds.
    Seek {
        /// Target position in seconds.
        time: f64,
    },
    /// Flip the desired play/pause state. Applying this twice returns to
    /// the original state, so callers must dispatch it exactly once per
    /// user action, never speculatively.
    PlayToggle,
    /// The element reported playback progress.
    TimeUpdate {
        /// Element position in seconds.
        time: f64,
    },
}

/// Apply an intent to a state, producing the next state.
///
/// Pure, total and synchronous: there are no failure cases. The three
/// fields are orthogonal, so every `(is_open, is_playing, time)`
/// combination is reachable and valid.
pub fn transition(state: &PlaybackState, intent: &PlayerIntent) -> PlaybackState {
    match intent {
        PlayerIntent::OpenControls => PlaybackState {
            is_open: true,
            ..*state
        },
        PlayerIntent::CloseControls => PlaybackState {
            is_open: false,
            ..*state
        },
        PlayerIntent::Seek { time } => PlaybackState {
            time: *time,
            ..*state
        },
        PlayerIntent::PlayToggle => PlaybackState {
            is_playing: !state.is_playing,
            ..*state
        },
        PlayerIntent::TimeUpdate { time } => PlaybackState {
            time: *time,
            ..*state
        },
    }
}

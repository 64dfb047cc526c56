//! Watch screen surface
//!
//! Ties the playback controller and the chat feed together and exposes the
//! values the display collaborators consume: overlay props recomputed from
//! store state, and a pending action queue the host drains each tick. The
//! surfaces themselves perform no logic.

use watchparty_core::chat::{ActivityKind, ChatFeed};
use watchparty_core::party::{Member, Party};
use watchparty_core::playback::PlaybackState;
use watchparty_player::{ElementHandle, PlaybackController};

/// Actions the display surface raises for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Poster click. The overlay itself never raises this; it only closes.
    OpenControls,
    /// Close the player overlay.
    CloseControls,
    /// The single play/pause affordance was pressed.
    TogglePlay,
    /// The playhead was dragged to an absolute position in seconds.
    Seek(f64),
    /// The viewer submitted a chat line.
    SendChat(String),
    /// Leave the screen.
    Quit,
}

/// Values handed to the player overlay. Pure output of the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerOverlayProps {
    /// Displayed playback position in seconds.
    pub time: f64,
    /// Drives the play/pause icon.
    pub is_playing: bool,
    /// Whether the overlay is visible at all.
    pub is_open: bool,
}

/// One active watch-party screen.
pub struct WatchScreen {
    /// The session snapshot this screen renders.
    pub party: Party,
    /// Chat panel contents.
    pub chat: ChatFeed,
    controller: PlaybackController,
    viewer: Member,
    pending_actions: Vec<UiAction>,
}

impl WatchScreen {
    /// Build a screen for a party, seeding playback from the shared
    /// position snapshot.
    pub fn new(party: Party, viewer: Member) -> Self {
        let controller = PlaybackController::seeded(party.current_time);
        let mut chat = ChatFeed::new();
        chat.push_activity(&viewer, ActivityKind::Joined);

        Self {
            party,
            chat,
            controller,
            viewer,
            pending_actions: Vec::new(),
        }
    }

    /// Hand the mounted media element to the controller.
    pub fn attach_element(&mut self, element: ElementHandle) {
        self.controller.attach(element);
    }

    /// Drop the media element on unmount.
    pub fn detach_element(&mut self) {
        self.controller.detach();
    }

    /// Forward a native progress notification to the controller.
    pub fn element_time_progress(&mut self) {
        self.controller.element_time_progress();
    }

    /// The playback controller, for action handling.
    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    /// Current playback state.
    pub fn playback(&self) -> PlaybackState {
        self.controller.state()
    }

    /// Props for the player overlay, recomputed from store state.
    pub fn overlay_props(&self) -> PlayerOverlayProps {
        let state = self.controller.state();
        PlayerOverlayProps {
            time: state.time,
            is_playing: state.is_playing,
            is_open: state.is_open,
        }
    }

    /// Displayed timestamp for the overlay scrubber.
    pub fn timestamp_label(&self) -> String {
        format_timestamp(self.controller.state().time)
    }

    /// The local viewer.
    pub fn viewer(&self) -> &Member {
        &self.viewer
    }

    /// Append the viewer's own message to the chat panel.
    pub fn send_own_message(&mut self, body: impl Into<String>) {
        self.chat.push_message(&self.viewer, true, body);
    }

    /// Queue an action raised by a display surface.
    pub fn push_action(&mut self, action: UiAction) {
        self.pending_actions.push(action);
    }

    /// Drain the pending actions for this tick.
    pub fn take_actions(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.pending_actions)
    }
}

/// Render seconds as `m:ss`, or `h:mm:ss` past the hour mark.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

//! Playback controller
//!
//! Owns the current playback state and an optional handle to the live
//! media element, and translates between the two. Data flows one way:
//! user action or element notification becomes an intent, the store
//! produces the next state, and the controller brings the element into
//! conformance. The element is never consulted when reducing.

use crate::element::MediaElement;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};
use watchparty_core::playback::{transition, PlaybackState, PlayerIntent};

/// Shared handle to the externally-owned media element.
///
/// The host owns the element across its mount/unmount cycle; the
/// controller only borrows it for effects, on the single UI thread.
pub type ElementHandle = Rc<RefCell<dyn MediaElement>>;

/// Bridges the playback state store and the media element.
pub struct PlaybackController {
    state: PlaybackState,
    element: Option<ElementHandle>,
}

impl PlaybackController {
    /// Controller with an explicit initial state and no element attached.
    pub fn new(initial: PlaybackState) -> Self {
        Self {
            state: initial,
            element: None,
        }
    }

    /// Controller seeded from the party's shared position snapshot.
    pub fn seeded(current_time: f64) -> Self {
        Self::new(PlaybackState::seeded(current_time))
    }

    /// Current state, the single source of truth for display decisions.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether an element is currently attached.
    pub fn has_element(&self) -> bool {
        self.element.is_some()
    }

    /// Attach the mounted element and bring it into conformance with the
    /// current desired play/pause state. The stored `time` is not pushed:
    /// the element stays authoritative for position and receives it only
    /// through explicit seeks.
    pub fn attach(&mut self, element: ElementHandle) {
        self.element = Some(element);
        debug!("Media element attached");
        self.reconcile_playback();
    }

    /// Drop the element handle on unmount. Subsequent effects are skipped
    /// until a new element is attached.
    pub fn detach(&mut self) {
        self.element = None;
        debug!("Media element detached");
    }

    /// Show the player overlay.
    pub fn open_controls(&mut self) {
        self.dispatch(PlayerIntent::OpenControls);
    }

    /// Hide the player overlay.
    pub fn close_controls(&mut self) {
        self.dispatch(PlayerIntent::CloseControls);
    }

    /// Flip the desired play/pause state. Call exactly once per user
    /// action; the intent is its own inverse.
    pub fn toggle_play(&mut self) {
        self.dispatch(PlayerIntent::PlayToggle);
    }

    /// Seek to an absolute position in seconds.
    ///
    /// Dual effect, issued together: the state update for display and the
    /// direct element write. Seeking must take hold immediately rather
    /// than waiting for a later reconciliation pass, and nothing may
    /// interleave between the two halves.
    pub fn seek(&mut self, time: f64) {
        self.dispatch(PlayerIntent::Seek { time });
        match &self.element {
            Some(element) => element.borrow_mut().set_position(time),
            None => trace!("Seek to {:.3}s with no element; skipping element write", time),
        }
    }

    /// Fold the element's current position back into displayed state.
    /// Invoked by the host on every native progress notification.
    pub fn element_time_progress(&mut self) {
        let position = match &self.element {
            Some(element) => element.borrow().position(),
            None => {
                trace!("Progress notification with no element; ignoring");
                return;
            }
        };
        self.dispatch(PlayerIntent::TimeUpdate { time: position });
    }

    fn dispatch(&mut self, intent: PlayerIntent) {
        let next = transition(&self.state, &intent);
        let playing_changed = next.is_playing != self.state.is_playing;
        trace!(?intent, ?next, "Applied intent");
        self.state = next;

        // Keyed on the observed state change, not on which intent caused
        // it: is_playing stays the single authoritative signal for desired
        // playback no matter where a flip comes from.
        if playing_changed {
            self.reconcile_playback();
        }
    }

    fn reconcile_playback(&self) {
        let Some(element) = &self.element else {
            trace!("No element attached; play/pause reconciliation skipped");
            return;
        };
        if self.state.is_playing {
            debug!("Reconciling element: play");
            element.borrow_mut().play();
        } else {
            debug!("Reconciling element: pause");
            element.borrow_mut().pause();
        }
    }
}

//! WatchParty Player - Media Element Control
//!
//! The effectful shell around the playback state store:
//! - Media element abstraction (play, pause, position)
//! - Playback controller bridging store state and element effects
//!
//! The store stays pure; everything that touches the element lives here.

use thiserror::Error;

pub mod controller;
pub mod element;

pub use controller::{ElementHandle, PlaybackController};
pub use element::{ClockElement, MediaElement};

/// Player errors
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The video source cannot back a media element
    #[error("Invalid media source: {0}")]
    InvalidSource(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

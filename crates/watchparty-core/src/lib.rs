//! WatchParty Core - Domain Model and Playback State
//!
//! This crate contains the core domain model for WatchParty, including:
//! - Playback state store (pure intent reducer)
//! - Party context types (video, members, shared position snapshot)
//! - Chat feed display model
//! - Logging configuration

#![warn(missing_docs)]

use thiserror::Error;

pub mod chat;
pub mod logging;
pub mod party;
pub mod playback;

// --- Re-exports grouped by category ---

// Playback state
pub use playback::{transition, PlaybackState, PlayerIntent};

// Party context
pub use party::{load_party, Member, Party, Video};

// Chat feed
pub use chat::{ActivityKind, ChatFeed, ChatMessage, FeedEntry};

// Logging
pub use logging::LogConfig;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O failure while reading or maintaining files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed party snapshot
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

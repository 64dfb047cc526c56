//! Party context types
//!
//! The party is the externally managed shared-viewing-session object. This
//! crate only consumes a snapshot of it: the video source for the media
//! element, the member list for the chat surface, and `current_time`, which
//! seeds the playback state exactly once when the screen opens. Keeping the
//! other viewers in sync is not handled here.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The video a party is watching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Stable identifier inside the catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Source URL handed to the media element.
    pub video_url: String,
    /// Poster thumbnail shown before the overlay is opened; clicking it
    /// opens the player controls.
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// A party participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if the member has one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A snapshot of the shared viewing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Stable identifier.
    pub id: String,
    /// What the party is watching.
    pub video: Video,
    /// Shared playback position in seconds at snapshot time. Read once, at
    /// screen initialization.
    #[serde(default)]
    pub current_time: f64,
    /// Current participants.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Load a party snapshot from a JSON file.
pub fn load_party<P: AsRef<Path>>(path: P) -> Result<Party> {
    let data = fs::read_to_string(path)?;
    let party = serde_json::from_str(&data)?;
    Ok(party)
}

//! Chat feed display model
//!
//! The feed is a local display model: it receives already-computed values
//! and holds them the way the chat panel renders them. Message transport is
//! out of scope. Consecutive messages from the same author collapse into
//! one group so the panel can show a single avatar per run, interleaved
//! with activity rows for joins and leaves.

use crate::party::Member;
use serde::{Deserialize, Serialize};

/// A single chat message body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message text.
    pub body: String,
}

/// Membership change shown inline in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Member entered the room.
    Joined,
    /// Member left the room.
    Left,
}

impl ActivityKind {
    /// Feed row copy for a member, e.g. "Kier joined the room."
    pub fn describe(&self, name: &str) -> String {
        match self {
            ActivityKind::Joined => format!("{} joined the room.", name),
            ActivityKind::Left => format!("{} left the room.", name),
        }
    }
}

/// One rendered run of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedEntry {
    /// A run of consecutive messages from one author.
    Messages {
        /// Who sent the run.
        author: Member,
        /// Whether the run belongs to the local viewer (right-aligned in
        /// the panel).
        own: bool,
        /// The messages, oldest first.
        messages: Vec<ChatMessage>,
    },
    /// A membership change row.
    Activity {
        /// The member who joined or left.
        member: Member,
        /// What happened.
        kind: ActivityKind,
    },
}

/// Ordered feed of message groups and activity rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatFeed {
    /// Entries, oldest first.
    pub entries: Vec<FeedEntry>,
}

impl ChatFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, extending the trailing group when the author and
    /// ownness match, otherwise opening a new group.
    pub fn push_message(&mut self, author: &Member, own: bool, body: impl Into<String>) {
        let message = ChatMessage { body: body.into() };

        if let Some(FeedEntry::Messages {
            author: last_author,
            own: last_own,
            messages,
        }) = self.entries.last_mut()
        {
            if last_author.id == author.id && *last_own == own {
                messages.push(message);
                return;
            }
        }

        self.entries.push(FeedEntry::Messages {
            author: author.clone(),
            own,
            messages: vec![message],
        });
    }

    /// Append a membership change row. Activity never coalesces.
    pub fn push_activity(&mut self, member: &Member, kind: ActivityKind) {
        self.entries.push(FeedEntry::Activity {
            member: member.clone(),
            kind,
        });
    }

    /// Number of feed entries (groups and activity rows, not messages).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

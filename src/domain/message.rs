//! Direct messages and conversation threading.
//!
//! A conversation is keyed by a string built from both participant ids
//! (sorted, so the key is the same whichever side writes first) and the
//! subject with spaces turned into `_`. Only the exact same subject between
//! the same pair continues a thread.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserResponse;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
    pub conversation_id: String,
}

impl Message {
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// The participant that is not `user_id`.
    pub fn counterpart(&self, user_id: Uuid) -> Uuid {
        if self.receiver_id == user_id {
            self.sender_id
        } else {
            self.receiver_id
        }
    }
}

/// Data for a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub subject: String,
    pub content: String,
    pub conversation_id: String,
}

impl NewMessage {
    /// Message opening (or continuing) the thread for this pair and subject.
    pub fn new(sender_id: Uuid, receiver_id: Uuid, subject: String, content: String) -> Self {
        let conversation_id = conversation_id(sender_id, receiver_id, &subject);
        Self {
            sender_id,
            receiver_id,
            subject,
            content,
            conversation_id,
        }
    }
}

/// Replace every space with `_`. Other characters, runs of spaces and
/// surrounding spaces are kept, so only identical subjects share a thread.
pub fn normalize_subject(subject: &str) -> String {
    subject.replace(' ', "_")
}

/// Derive the thread key for two participants and a subject.
pub fn conversation_id(a: Uuid, b: Uuid, subject: &str) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{}_{}_{}", low, high, normalize_subject(subject))
}

/// Collapse a user's messages into one entry per thread: the latest message
/// and how many messages of that thread addressed to `user_id` are unread.
/// Entries come back newest first.
pub fn latest_per_conversation(user_id: Uuid, messages: Vec<Message>) -> Vec<(Message, u64)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut threads: Vec<(Message, u64)> = Vec::new();

    for message in messages {
        let unread = u64::from(message.receiver_id == user_id && !message.is_read);
        match index.get(&message.conversation_id) {
            Some(&i) => {
                let (latest, count) = &mut threads[i];
                *count += unread;
                if message.sent_at > latest.sent_at {
                    *latest = message;
                }
            }
            None => {
                index.insert(message.conversation_id.clone(), threads.len());
                threads.push((message, unread));
            }
        }
    }

    threads.sort_by(|a, b| b.0.sent_at.cmp(&a.0.sent_at));
    threads
}

/// One inbox row: a thread seen from one participant.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub latest_message: Message,
    /// Other participant; absent if that account no longer resolves
    pub other_user: Option<UserResponse>,
    /// Messages in the thread addressed to the viewer and not yet read
    pub unread_count: u64,
}

/// A full thread as shown to one participant.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConversationThread {
    pub conversation_id: String,
    pub subject: String,
    pub messages: Vec<Message>,
    pub other_user: Option<UserResponse>,
}

//! Chat turn types for Feeler.
//!
//! A turn is one message exchanged in a chat session, tagged with its
//! sender role. Turns are immutable once written and ordered by their
//! store-assigned sequence id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

/// Who produced a chat turn.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (sender IN ('user', 'bot'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// One message exchanged in a chat session.
///
/// `id` is assigned by the turn store (AUTOINCREMENT) and is the only
/// meaningful ordering key; `created_at` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: i64,
    pub user_id: UserId,
    pub sender: Sender,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Bot] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let sender = Sender::Bot;
        let json = serde_json::to_string(&sender).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Sender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Sender::Bot);
    }

    #[test]
    fn test_sender_rejects_other_values() {
        assert!("assistant".parse::<Sender>().is_err());
        assert!("system".parse::<Sender>().is_err());
    }

    #[test]
    fn test_chat_turn_serialize() {
        let turn = ChatTurn {
            id: 7,
            user_id: UserId::new("Alice"),
            sender: Sender::User,
            message: "hi".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"sender\":\"user\""));
        assert!(json.contains("\"user_id\":\"alice\""));
    }
}

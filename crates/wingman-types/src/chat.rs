//! Chat turn types for the interactive front-ends.
//!
//! A turn is one role-tagged message in a session's visible history.
//! Turns are append-only: created when input is submitted or a response
//! arrives, never mutated afterwards, and discarded only in bulk when the
//! user clears the chat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from llm (the same role tags appear in both the
// wire request and the visible history).
pub use crate::llm::MessageRole;

/// One message in a session's visible history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Model that produced this turn (assistant turns only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Round-trip latency in milliseconds (assistant turns only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_ms: Option<u64>,
}

impl Turn {
    /// Create a user turn from submitted text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
            model: None,
            response_ms: None,
        }
    }

    /// Create an assistant turn from a completed round trip.
    pub fn assistant(content: impl Into<String>, model: Option<String>, response_ms: Option<u64>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            model,
            response_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_turn() {
        let turn = Turn::user("what is a flat-six?");
        assert_eq!(turn.role, MessageRole::User);
        assert_eq!(turn.content, "what is a flat-six?");
        assert!(turn.model.is_none());
        assert!(turn.response_ms.is_none());
    }

    #[test]
    fn test_assistant_turn_carries_metadata() {
        let turn = Turn::assistant("A boxer engine.", Some("llama-3.3-70b-versatile".to_string()), Some(420));
        assert_eq!(turn.role, MessageRole::Assistant);
        assert_eq!(turn.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(turn.response_ms, Some(420));
    }

    #[test]
    fn test_turn_ids_are_time_sortable() {
        let first = Turn::user("one");
        let second = Turn::user("two");
        // UUID v7 encodes creation time in the high bits.
        assert!(first.id < second.id);
    }

    #[test]
    fn test_turn_serialize_skips_absent_metadata() {
        let turn = Turn::user("hello");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("response_ms"));
    }
}

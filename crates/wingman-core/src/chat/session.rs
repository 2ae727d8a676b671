//! In-memory chat session state.
//!
//! A session owns the append-only turn history plus the currently
//! selected domain. It is owned exclusively by one running front-end
//! (one CLI process, one browser page) and dies with it -- nothing here
//! outlives process memory.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use wingman_types::chat::Turn;
use wingman_types::persona::Domain;

/// The ordered turn history and selected domain for one conversation.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    domain: Domain,
    turns: Vec<Turn>,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start an empty session for a domain.
    pub fn new(domain: Domain) -> Self {
        Self {
            id: Uuid::now_v7(),
            domain,
            turns: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Change the domain for future completions.
    ///
    /// Prior turns are left untouched: they were answered under whatever
    /// persona was selected at their call time.
    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    /// Append a user turn and return a reference to it.
    pub fn push_user(&mut self, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::user(content));
        self.turns.last().expect("just pushed")
    }

    /// Append an assistant turn and return a reference to it.
    pub fn push_assistant(
        &mut self,
        content: impl Into<String>,
        model: Option<String>,
        response_ms: Option<u64>,
    ) -> &Turn {
        self.turns.push(Turn::assistant(content, model, response_ms));
        self.turns.last().expect("just pushed")
    }

    /// Ordered turn history, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Discard the entire turn history. Irreversible.
    ///
    /// The session itself survives, keeping its id and selected domain.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

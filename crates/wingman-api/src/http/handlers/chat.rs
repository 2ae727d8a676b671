//! Chat round-trip endpoint.
//!
//! POST /api/v1/chat
//!
//! Appends the user turn, performs one completion with the session's
//! current persona instruction, appends the assistant turn, and returns
//! both. A remote-call failure becomes the assistant turn's text (the
//! HTTP request itself still succeeds) so the page always has something
//! to render and the session continues.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use wingman_core::chat::{Session, inline_error_text};
use wingman_types::chat::Turn;
use wingman_types::persona::Domain;

use crate::http::error::AppError;
use crate::state::{AppState, SessionHandle};

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Existing session to continue; if absent, a new session is created.
    pub session_id: Option<Uuid>,
    /// The user text to send.
    pub message: String,
    /// Domain to select before dispatch. Affects this and future calls only.
    pub domain: Option<Domain>,
}

/// Response body: the two turns this exchange appended.
#[derive(Debug, Serialize)]
pub struct ChatResponsePayload {
    pub session_id: Uuid,
    /// Exactly `[user, assistant]`, in order.
    pub turns: Vec<Turn>,
}

/// POST /api/v1/chat -- one user/assistant exchange.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponsePayload>, AppError> {
    let message = body.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::Validation(
            "message must not be empty".to_string(),
        ));
    }

    let handle = resolve_session(&state, body.session_id, body.domain)?;

    // The per-session lock is held across the round trip: one call in
    // flight per session, later submissions wait.
    let mut session = handle.lock().await;
    if let Some(domain) = body.domain {
        session.set_domain(domain);
    }

    let instruction = state.catalog.get(session.domain()).instruction.clone();
    let user_turn = session.push_user(message.clone()).clone();

    let start = Instant::now();
    let outcome = state.engine.ask(&instruction, &message).await;
    let response_ms = start.elapsed().as_millis() as u64;

    let assistant_turn = match outcome {
        Ok(text) => session
            .push_assistant(
                text,
                Some(state.engine.config().model.clone()),
                Some(response_ms),
            )
            .clone(),
        Err(err) => session
            .push_assistant(inline_error_text(&err), None, Some(response_ms))
            .clone(),
    };

    Ok(Json(ChatResponsePayload {
        session_id: session.id(),
        turns: vec![user_turn, assistant_turn],
    }))
}

/// Look up an existing session or create a new one.
fn resolve_session(
    state: &AppState,
    session_id: Option<Uuid>,
    domain: Option<Domain>,
) -> Result<SessionHandle, AppError> {
    match session_id {
        Some(id) => state
            .sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::SessionNotFound),
        None => {
            let session = Session::new(domain.unwrap_or_default());
            let id = session.id();
            let handle: SessionHandle = Arc::new(Mutex::new(session));
            state.sessions.insert(id, handle.clone());
            Ok(handle)
        }
    }
}

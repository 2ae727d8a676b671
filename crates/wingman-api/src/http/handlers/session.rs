//! Session inspection and control endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wingman_types::chat::Turn;
use wingman_types::persona::Domain;

use crate::http::error::AppError;
use crate::state::{AppState, SessionHandle};

/// Full session view: selected persona plus the ordered turn history.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub domain: Domain,
    pub label: String,
    pub turns: Vec<Turn>,
}

/// Request body for the persona-change endpoint.
#[derive(Debug, Deserialize)]
pub struct SetPersonaRequest {
    pub domain: Domain,
}

fn lookup(state: &AppState, id: &Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .map(|entry| entry.value().clone())
        .ok_or(AppError::SessionNotFound)
}

/// GET /api/v1/sessions/{id} -- current domain and turn history.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = lookup(&state, &id)?;
    let session = handle.lock().await;
    Ok(Json(SessionView {
        session_id: session.id(),
        domain: session.domain(),
        label: state.catalog.get(session.domain()).label.clone(),
        turns: session.turns().to_vec(),
    }))
}

/// POST /api/v1/sessions/{id}/clear -- discard the turn history.
///
/// Irreversible; the session and its selected persona survive.
pub async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = lookup(&state, &id)?;
    let mut session = handle.lock().await;
    session.clear();
    Ok(Json(SessionView {
        session_id: session.id(),
        domain: session.domain(),
        label: state.catalog.get(session.domain()).label.clone(),
        turns: Vec::new(),
    }))
}

/// PUT /api/v1/sessions/{id}/persona -- select the persona for future calls.
///
/// Prior turns keep their text; only subsequent completions use the new
/// instruction.
pub async fn set_persona(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetPersonaRequest>,
) -> Result<Json<SessionView>, AppError> {
    let handle = lookup(&state, &id)?;
    let mut session = handle.lock().await;
    session.set_domain(body.domain);
    Ok(Json(SessionView {
        session_id: session.id(),
        domain: session.domain(),
        label: state.catalog.get(session.domain()).label.clone(),
        turns: session.turns().to_vec(),
    }))
}

//! Persona listing endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use wingman_types::persona::Domain;

use crate::state::AppState;

/// Selector option for the UI: domain key plus display label.
#[derive(Debug, Serialize)]
pub struct PersonaInfo {
    pub domain: Domain,
    pub label: String,
}

/// GET /api/v1/personas -- the fixed selector options.
pub async fn list_personas(State(state): State<AppState>) -> Json<Vec<PersonaInfo>> {
    let personas = state
        .catalog
        .all()
        .iter()
        .map(|p| PersonaInfo {
            domain: p.domain,
            label: p.label.clone(),
        })
        .collect();
    Json(personas)
}

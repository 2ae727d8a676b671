//! Browser chat UI: axum routes plus the embedded single-page front-end.

pub mod error;
pub mod handlers;
pub mod router;

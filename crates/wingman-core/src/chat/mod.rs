//! Chat session state and the completion engine.

pub mod engine;
pub mod session;

pub use engine::{ChatEngine, inline_error_text};
pub use session::Session;

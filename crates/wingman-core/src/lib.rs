//! Business logic for Wingman.
//!
//! This crate defines the completion "port" (the [`llm::provider::LlmProvider`]
//! trait) that the infrastructure layer implements, the fixed persona catalog,
//! and the in-memory chat session state. It depends only on `wingman-types`
//! -- never on `wingman-infra` or any network/IO crate.

pub mod chat;
pub mod llm;
pub mod persona;

//! Shared domain types for Wingman.
//!
//! This crate contains the types used across the Wingman front-ends:
//! personas, chat turns, completion request/response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;

//! Infrastructure layer for Wingman.
//!
//! Implements the completion port defined in `wingman-core` against the
//! Groq OpenAI-compatible API, and provides credential resolution from
//! the environment plus the tolerant `config.toml` loader.

pub mod config;
pub mod llm;
pub mod secret;

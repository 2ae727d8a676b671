//! Credential resolution.
//!
//! Wingman reads exactly one credential: the completion API key, sourced
//! from the process environment and wrapped in [`secrecy::SecretString`]
//! the moment it is read.

pub mod env;

pub use env::EnvSecretStore;

/// Environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

//! LlmProvider trait definition.
//!
//! The one abstraction over the remote completion service. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); the object-safe
//! variant lives in [`super::box_provider`].
//!
//! Implementations live in wingman-infra (e.g., `OpenAiCompatibleProvider`).

use wingman_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion service backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// One outbound network request per call; no caching, no retry.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

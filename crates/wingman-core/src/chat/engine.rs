//! Completion engine: one persona-conditioned round trip per call.
//!
//! The engine owns the type-erased provider and the model settings, and
//! returns an explicit `Result` that callers inspect -- remote failures
//! never propagate past the front-end loop; they are rendered inline via
//! [`inline_error_text`] in place of an answer.

use tracing::{debug, warn};

use wingman_types::config::AppConfig;
use wingman_types::llm::{CompletionRequest, LlmError, Message, MessageRole};

use crate::llm::BoxLlmProvider;

/// Stateless dispatcher for persona-conditioned completions.
pub struct ChatEngine {
    provider: BoxLlmProvider,
    config: AppConfig,
}

impl ChatEngine {
    pub fn new(provider: BoxLlmProvider, config: AppConfig) -> Self {
        Self { provider, config }
    }

    /// Name of the backing provider (for diagnostics).
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Perform one round trip: `instruction` as the system message, `query`
    /// as the sole user message. Returns the generated text unchanged.
    ///
    /// Empty or whitespace-only inputs are rejected locally without a
    /// network call.
    pub async fn ask(&self, instruction: &str, query: &str) -> Result<String, LlmError> {
        if instruction.trim().is_empty() {
            return Err(LlmError::InvalidRequest(
                "persona instruction must not be empty".to_string(),
            ));
        }
        if query.trim().is_empty() {
            return Err(LlmError::InvalidRequest(
                "query must not be empty".to_string(),
            ));
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: query.to_string(),
            }],
            system: Some(instruction.to_string()),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        debug!(provider = self.provider.name(), model = %request.model, "dispatching completion");
        match self.provider.complete(&request).await {
            Ok(response) => Ok(response.content),
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "completion failed");
                Err(err)
            }
        }
    }
}

/// User-visible text rendered in place of an answer when the remote call
/// fails. Both front-ends print/display this and keep the session going.
pub fn inline_error_text(err: &LlmError) -> String {
    format!("⚠️ Error getting a response from the model: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use wingman_types::llm::{CompletionResponse, StopReason, Usage};

    use crate::llm::LlmProvider;

    struct StubProvider {
        reply: Result<String, String>,
        calls: Arc<AtomicUsize>,
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    id: "stub-1".to_string(),
                    content: text.clone(),
                    model: request.model.clone(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
            }
        }
    }

    fn engine_with(reply: Result<String, String>, calls: Arc<AtomicUsize>) -> ChatEngine {
        ChatEngine::new(
            BoxLlmProvider::new(StubProvider { reply, calls }),
            AppConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_ask_returns_stubbed_text_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = engine_with(Ok("A cam phaser advances valve timing.".to_string()), calls.clone());

        let answer = engine
            .ask("You are an automobile expert.", "what is a cam phaser?")
            .await
            .unwrap();

        assert_eq!(answer, "A cam phaser advances valve timing.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ask_failure_is_an_error_value_not_a_panic() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = engine_with(Err("connection refused".to_string()), calls.clone());

        let result = engine.ask("You are an expert.", "hello").await;
        let err = result.unwrap_err();

        let rendered = inline_error_text(&err);
        assert!(rendered.contains("Error"));
        assert!(rendered.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_without_a_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = engine_with(Ok("unused".to_string()), calls.clone());

        let result = engine.ask("You are an expert.", "   ").await;

        assert!(matches!(result, Err(LlmError::InvalidRequest(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_instruction_is_rejected_without_a_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = engine_with(Ok("unused".to_string()), calls.clone());

        let result = engine.ask("", "a real question").await;

        assert!(matches!(result, Err(LlmError::InvalidRequest(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

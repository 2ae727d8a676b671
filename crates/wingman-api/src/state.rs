//! Application state wiring the engine, catalog, and session registry.
//!
//! Constructed once at startup and passed explicitly to both front-ends --
//! there is no ambient global client or history. `AppState::with_provider`
//! exists so tests can inject a stub completion backend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use wingman_core::chat::{ChatEngine, Session};
use wingman_core::llm::BoxLlmProvider;
use wingman_core::persona::PersonaCatalog;
use wingman_infra::config::{load_app_config, resolve_data_dir};
use wingman_infra::llm::OpenAiCompatibleProvider;
use wingman_infra::secret::{API_KEY_VAR, EnvSecretStore};
use wingman_types::config::AppConfig;

/// Handle to one live session, locked for the duration of a round trip.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Shared application state used by both the CLI and the HTTP surface.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub catalog: Arc<PersonaCatalog>,
    /// Live browser sessions, keyed by session id. Nothing is persisted.
    pub sessions: Arc<DashMap<Uuid, SessionHandle>>,
}

impl AppState {
    /// Initialize from the environment: config file, credential, Groq provider.
    ///
    /// A missing `GROQ_API_KEY` fails here, before any interaction.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_app_config(&data_dir).await;

        let api_key = EnvSecretStore::new().require(API_KEY_VAR)?;
        let provider = OpenAiCompatibleProvider::groq(api_key, &config.model);

        Ok(Self::with_provider(BoxLlmProvider::new(provider), config))
    }

    /// Assemble state around an already-built provider.
    pub fn with_provider(provider: BoxLlmProvider, config: AppConfig) -> Self {
        Self {
            engine: Arc::new(ChatEngine::new(provider, config)),
            catalog: Arc::new(PersonaCatalog::new()),
            sessions: Arc::new(DashMap::new()),
        }
    }
}

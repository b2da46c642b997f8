//! Shared LLM client and completion abstraction
//!
//! Provides a common interface for OpenAI API interactions, behind a trait so
//! request handling can be tested against a fake provider.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Environment variable for the analysis model (defaults to gpt-4-turbo if not set)
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for text analysis
const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Sampling temperature: deterministic completions
const TEMPERATURE: f64 = 0.0;

/// Output-length budget for one completion
const MAX_COMPLETION_TOKENS: u64 = 256;

/// Error type for provider completions
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The provider call itself failed (network, auth, quota)
    #[error("Completion request failed: {0}")]
    RequestFailed(String),
}

/// A provider of raw text completions
///
/// One call produces the text of the top candidate completion for the given
/// prompt. Implementations must be usable from concurrent requests without
/// synchronization.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// OpenAI-backed completion provider
pub struct LlmClient {
    client: openai::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key);

        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "LLM client initialized");

        Ok(Self { client, model })
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let start_time = std::time::Instant::now();

        let agent = self
            .client
            .agent(&self.model)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_COMPLETION_TOKENS)
            .build();

        match agent.prompt(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt.len(),
                    "OpenAI API call completed successfully"
                );
                Ok(text)
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt.len(),
                    error = %e,
                    "OpenAI API call failed"
                );
                Err(CompletionError::RequestFailed(e.to_string()))
            }
        }
    }
}

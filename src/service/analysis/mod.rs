//! Text analysis service using LLM
//!
//! Transforms one input text into one structured score via a single external
//! model call. A pure pass-through adapter with validation: no retry, no
//! caching, no rate limiting.

use std::sync::Arc;

use crate::model::TextAnalysis;
use crate::service::analysis::prompts::build_analysis_prompt;
use crate::service::analysis::reply::parse_reply;
use crate::service::llm::CompletionProvider;

pub mod error;
pub mod prompts;
pub mod reply;

pub use error::AnalysisError;

/// Service for scoring emotionality, factuality and argumentative fallacies
pub struct AnalysisService {
    provider: Arc<dyn CompletionProvider>,
}

impl AnalysisService {
    /// Creates a new analysis service
    ///
    /// Uses a shared completion provider passed from startup.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Analyze one text: exactly one provider call per invocation
    pub async fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError> {
        let prompt = build_analysis_prompt(text);

        let raw = self.provider.complete(&prompt).await?;

        tracing::info!(reply = %raw, "LLM raw reply");

        parse_reply(&raw).inspect_err(|e| {
            if let AnalysisError::MalformedReply { raw } = e {
                tracing::error!(reply = %raw, "Invalid JSON from LLM");
            }
        })
    }
}

//! Error taxonomy for the analysis pipeline

use crate::service::llm::CompletionError;

/// Failures distinguishable to the caller of [`AnalysisService::analyze`]
///
/// No variant is retried or silently recovered; each maps to exactly one
/// HTTP-level outcome at the API boundary.
///
/// [`AnalysisService::analyze`]: crate::service::AnalysisService::analyze
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The provider responded, but its text is not valid JSON. Carries the
    /// offending raw text so callers can diagnose prompt or model drift.
    #[error("Invalid response from LLM: {raw}")]
    MalformedReply { raw: String },

    /// A reply field is present but cannot be coerced to its expected type
    #[error("Uncoercible reply field: {0}")]
    Coercion(String),

    /// The provider call itself failed (network, auth, quota)
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

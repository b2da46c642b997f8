//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::service::{AnalysisService, LlmClient};

/// Environment variable holding the OpenAI API credential
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state containing all services and shared resources
///
/// The provider client and credential are constructed exactly once at startup
/// and injected into the request-handling path.
pub struct AppState {
    /// Text analysis service
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. LLM client initialization (requires OPENAI_API_KEY)
    /// 2. Analysis service construction
    pub fn new() -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        let llm_client = LlmClient::new(&api_key)
            .map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;

        let analysis_service = Arc::new(AnalysisService::new(Arc::new(llm_client)));

        Ok(Self { analysis_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

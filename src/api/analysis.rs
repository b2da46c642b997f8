//! REST API endpoint for text analysis

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::service::AnalysisService;

/// Request body for text analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The text to analyze (any length, including empty)
    pub text: String,
}

/// Structured analysis score
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Emotionality: -5 (neutral, analytical) to +5 (strongly emotional)
    pub emotion: i64,
    /// Factuality: -5 (evidence-based) to +5 (speculative, conspiratorial)
    pub factuality: i64,
    /// Detected argumentative fallacies, or the no-fallacy sentinel
    pub notes: String,
}

/// Analyze a text for emotionality, factuality and argumentative fallacies
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed successfully", body = AnalyzeResponse),
        (status = 502, description = "Upstream model returned an unparseable reply"),
        (status = 500, description = "Internal server error")
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let analysis = service.analyze(&request.text).await?;

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        emotion: analysis.emotion,
        factuality: analysis.factuality,
        notes: analysis.notes,
    }))
}

/// OpenAPI documentation for the analysis API
#[derive(OpenApi)]
#[openapi(
    paths(analyze, crate::api::health::liveness),
    components(schemas(AnalyzeRequest, AnalyzeResponse, crate::api::health::HealthStatus)),
    tags(
        (name = "analysis", description = "Text analysis endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}

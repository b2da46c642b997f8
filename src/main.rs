use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // Fail fast before the listener binds: a missing or invalid API key must
    // never result in a serving process.
    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize application");
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    let analysis_service = web::Data::from(state.analysis_service);

    tracing::info!("Starting textlens server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            // Wide-open CORS for testing; restrict to specific origins in production
            .wrap(Cors::permissive())
            .app_data(analysis_service.clone())
            .configure(api::analysis::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

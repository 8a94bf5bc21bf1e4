//! Seismic K HTTP server

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seismic_k::prelude::*;

/// Application state: the injected site-response lookup.
struct AppState {
    provider: Arc<dyn SiteResponseProvider + Send + Sync>,
}

impl AppState {
    fn new() -> Self {
        Self {
            provider: Arc::new(FixedSiteResponse::reference()),
        }
    }
}

/// Build the API router
fn create_router() -> Router {
    let state = AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/seismic-k", post(seismic_k_handler))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Evaluate one set of seismic inputs
async fn seismic_k_handler(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<SeismicInputs>,
) -> Result<Json<Report>, ApiError> {
    tracing::info!(
        "Evaluating K values: fault={}, location={}, direction={}, type={}, H={}",
        inputs.fault_name,
        inputs.location,
        inputs.direction,
        inputs.structure_type.code(),
        inputs.h
    );

    let report = evaluate(&inputs, state.provider.as_ref())?;
    Ok(Json(report))
}

/// API errors
#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Seismic(#[from] SeismicError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Seismic(err) = self;
        let status = match err {
            SeismicError::InvalidInput(_)
            | SeismicError::Domain(_)
            | SeismicError::Computation(_) => StatusCode::BAD_REQUEST,
            SeismicError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": err.to_string()
        }));

        (status, body).into_response()
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seismic_k=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Seismic K Service");

    let app = create_router();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8087".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Listening on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/seismic-k");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

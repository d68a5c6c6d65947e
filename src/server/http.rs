//! HTTP routes and handlers

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cluster::CommunityReport;
use crate::error::AnalysisError;
use crate::inspect::ProteinSummary;
use crate::prediction::PredictionReport;
use crate::service::{CentralityView, NetworkAnalyzer, NetworkView};

/// Create the router with all routes.
pub fn create_router(analyzer: NetworkAnalyzer) -> Router {
    let origins: Vec<HeaderValue> = analyzer
        .config()
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/analysis/:metric", get(analysis))
        .route("/clustering", get(clustering))
        .route("/predictions", get(predictions))
        .route("/protein/:name", get(protein))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(analyzer)
}

// =============================================================================
// Errors
// =============================================================================

/// Failure of a request, rendered as `{"detail": ...}`
#[derive(Debug)]
pub enum ApiError {
    Analysis(AnalysisError),
    Internal(String),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Analysis(err @ AnalysisError::InvalidMetric(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Analysis(err @ AnalysisError::ProteinNotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Internal(message) => {
                log::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Run a CPU-bound analysis on the blocking pool
async fn run_blocking<T, F>(analyzer: NetworkAnalyzer, job: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&NetworkAnalyzer) -> Result<T, AnalysisError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || job(&analyzer))
        .await
        .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))?
        .map_err(ApiError::from)
}

// =============================================================================
// Handlers
// =============================================================================

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Protein Interaction Network Analyzer API" }))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn network(State(analyzer): State<NetworkAnalyzer>) -> Result<Json<NetworkView>, ApiError> {
    let view = run_blocking(analyzer, |a| Ok(a.network())).await?;
    Ok(Json(view))
}

async fn analysis(
    State(analyzer): State<NetworkAnalyzer>,
    Path(metric): Path<String>,
) -> Result<Json<CentralityView>, ApiError> {
    let view = run_blocking(analyzer, move |a| a.centrality(&metric)).await?;
    Ok(Json(view))
}

async fn clustering(
    State(analyzer): State<NetworkAnalyzer>,
) -> Result<Json<CommunityReport>, ApiError> {
    let report = run_blocking(analyzer, |a| Ok(a.communities())).await?;
    Ok(Json(report))
}

async fn predictions(
    State(analyzer): State<NetworkAnalyzer>,
) -> Result<Json<PredictionReport>, ApiError> {
    let report = run_blocking(analyzer, |a| Ok(a.predictions())).await?;
    Ok(Json(report))
}

async fn protein(
    State(analyzer): State<NetworkAnalyzer>,
    Path(name): Path<String>,
) -> Result<Json<ProteinSummary>, ApiError> {
    let summary = run_blocking(analyzer, move |a| a.protein(&name)).await?;
    Ok(Json(summary))
}

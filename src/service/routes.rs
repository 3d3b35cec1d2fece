//! Axum routes for the topology service.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, HeaderName, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::diagram::{TopologyDiagram, TopologyExport};
use crate::error::TopologyError;
use crate::svg::SVG_MEDIA_TYPE;
use crate::types::RawCircuitRecord;
use crate::DEFAULT_POLICY_VERSION;

use super::middleware::{metrics_middleware, record_diagram_metrics, record_rejection};
use super::state::ServiceState;

/// Header carrying the graph fingerprint on diagram responses.
pub const FINGERPRINT_HEADER: &str = "x-topology-fingerprint";

/// File name offered for download.
const DIAGRAM_FILE_NAME: &str = "network_diagram.svg";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Laid-out topology plus the configuration that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyResponse {
    /// Hash of the classification policy.
    pub policy_hash: String,
    /// Graph, positions and fingerprints.
    #[serde(flatten)]
    pub topology: TopologyExport,
}

/// Service health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub policy_version: String,
    pub policy_hash: String,
    pub layout_hash: String,
}

/// Simple liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
}

/// Structured error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
    /// Additional error details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response with code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<TopologyError> for ErrorResponse {
    fn from(err: TopologyError) -> Self {
        let index = err.record_index();
        ErrorResponse::new(err.code(), err.to_string()).with_details(format!("record {}", index))
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let code = match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => "MALFORMED_RECORD",
            _ => "INVALID_REQUEST",
        };
        ErrorResponse::new(code, "Request body is not a list of circuit records")
            .with_details(rejection.body_text())
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        tracing::warn!(
            code = %self.code,
            error = %self.error,
            details = ?self.details,
            "Request error"
        );
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

fn generate(state: &ServiceState, records: &[RawCircuitRecord]) -> Result<TopologyDiagram, ErrorResponse> {
    let start = Instant::now();
    let diagram = state.generator.generate_raw(records).map_err(|e| {
        record_rejection(e.code(), e.record_index());
        ErrorResponse::from(e)
    })?;

    record_diagram_metrics(
        records.len(),
        diagram.graph.node_count(),
        diagram.graph.edge_count(),
        start.elapsed().as_millis() as u64,
    );
    Ok(diagram)
}

/// Build and lay out a topology, returning it as JSON.
async fn topology_handler(
    State(state): State<Arc<ServiceState>>,
    payload: Result<Json<Vec<RawCircuitRecord>>, JsonRejection>,
) -> Result<Json<TopologyResponse>, ErrorResponse> {
    let Json(records) = payload?;
    let diagram = generate(&state, &records)?;
    Ok(Json(TopologyResponse {
        policy_hash: state.policy_hash(),
        topology: diagram.export(),
    }))
}

/// Build, lay out and render a topology, returning the SVG document.
async fn diagram_handler(
    State(state): State<Arc<ServiceState>>,
    payload: Result<Json<Vec<RawCircuitRecord>>, JsonRejection>,
) -> Result<Response, ErrorResponse> {
    let Json(records) = payload?;
    let diagram = generate(&state, &records)?;
    let headers = [
        (header::CONTENT_TYPE, SVG_MEDIA_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", DIAGRAM_FILE_NAME),
        ),
        (HeaderName::from_static(FINGERPRINT_HEADER), diagram.graph.fingerprint()),
    ];
    Ok((headers, diagram.to_svg()).into_response())
}

/// Health check endpoint.
async fn health_handler(State(state): State<Arc<ServiceState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        policy_version: DEFAULT_POLICY_VERSION.to_string(),
        policy_hash: state.policy_hash(),
        layout_hash: state.layout_hash(),
    })
}

/// Liveness probe endpoint.
async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The service has no external dependencies, so it is ready once it runs.
async fn readiness_handler() -> Json<ReadinessResponse> {
    Json(ReadinessResponse { ready: true })
}

// ============================================================================
// Router Construction
// ============================================================================

/// Create the Axum router for the topology service.
pub fn create_router(state: ServiceState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Topology generation
        .route("/api/topology", post(topology_handler))
        .route("/api/diagram", post(diagram_handler))
        .route("/generate-diagram", post(diagram_handler))
        // Health checks
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state)
}

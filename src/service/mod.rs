//! Topology REST Service
//!
//! Exposes the topology generator over HTTP. Stateless: every request
//! builds, lays out and renders its own graph.
//!
//! ## Endpoints
//!
//! - `POST /api/topology` - Records in, laid-out topology JSON out
//! - `POST /api/diagram` - Records in, SVG diagram out
//! - `POST /generate-diagram` - Alias of `/api/diagram`
//! - `GET /health` - Service health and configuration hashes
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::{metrics_middleware, record_diagram_metrics, record_rejection};
pub use routes::{create_router, ErrorResponse, TopologyResponse, FINGERPRINT_HEADER};
pub use state::ServiceState;

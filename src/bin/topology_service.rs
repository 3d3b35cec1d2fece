//! Topology Service Binary
//!
//! Serves the topology generator over HTTP. Every request builds its own
//! graph; the process holds configuration only.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `PORT`: Service port (default: 8000)
//! - `HOST`: Service host (default: 0.0.0.0)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: json)
//! - `TOPOLOGY_DATACENTER_MARKERS`: comma-separated building markers
//! - `TOPOLOGY_SHARED_NETWORK_MARKERS`: comma-separated product markers
//!
//! ## Usage
//!
//! ```bash
//! LOG_FORMAT=pretty cargo run --bin topology_service --features service
//! ```

use std::net::SocketAddr;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, Instrument};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use circuit_topology::service::{create_router, ServiceState};

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
struct ServiceConfig {
    host: String,
    port: u16,
    log_format: LogFormat,
}

impl ServiceConfig {
    fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!("ignoring invalid PORT {:?}, using 8000", raw);
                8000
            }),
            Err(_) => 8000,
        };
        let log_format = match std::env::var("LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            log_format,
        }
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "topology_service=info,circuit_topology=info".into());

    let output = match format {
        LogFormat::Pretty => fmt::layer().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .flatten_event(true)
            .boxed(),
    };

    tracing_subscriber::registry().with(filter).with(output).init();
}

/// Attach a request id to the request span and echo it on the response.
///
/// Per-request metrics are logged by the router's own middleware, inside
/// this span.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let span = info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!(signal = "SIGINT", "Shutting down"),
                    _ = sigterm.recv() => info!(signal = "SIGTERM", "Shutting down"),
                }
                return;
            }
            Err(e) => tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(signal = "SIGINT", "Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_format);

    let state = ServiceState::from_env();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        policy_hash = %state.policy_hash(),
        layout_hash = %state.layout_hash(),
        "Topology configuration loaded"
    );

    let app = create_router(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let addr = config.addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, "Topology Service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Topology Service stopped");
    Ok(())
}

//! Font List Gateway service - main entry point.
//!
//! Assembles the HTTP router, middleware stack, and server lifecycle.

use crate::domain::config::{GatewayConfig, QueryConfig};
use crate::domain::error::{GatewayError, UpstreamError};
use crate::domain::query::{sanitize_limit, sanitize_sort};
use crate::domain::types::{FontListResponse, HealthResponse};
use crate::middleware::{create_cors_layer, TracingLayer};
use crate::ports::outbound::FontCatalogSource;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

/// Font List Gateway service state
pub struct FontGatewayService {
    config: GatewayConfig,
    catalog: Arc<dyn FontCatalogSource>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FontGatewayService {
    /// Create a new gateway service over a font catalog source
    pub fn new(
        config: GatewayConfig,
        catalog: Arc<dyn FontCatalogSource>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            catalog,
            shutdown_tx: None,
        })
    }

    /// Start the HTTP server and run until shutdown or server error
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        info!("Starting Font List Gateway...");

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let router = self.build_router();
        let addr = self.config.http_addr();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(addr = %addr, "Starting HTTP server");

        let server = tokio::spawn(async move { axum::serve(listener, router).await });

        info!("Font List Gateway started successfully");

        tokio::select! {
            _ = &mut shutdown_rx => {
                info!("Received shutdown signal");
            }
            result = server => {
                match result {
                    Ok(Err(e)) => error!(error = %e, "HTTP server error"),
                    Err(e) => error!(error = %e, "HTTP server task failed"),
                    Ok(Ok(())) => {}
                }
            }
        }

        info!("Font List Gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Build the HTTP router with the full middleware stack
    pub fn build_router(&self) -> Router {
        let state = AppState {
            catalog: Arc::clone(&self.catalog),
            query: self.config.query.clone(),
        };

        // CatchPanic sits innermost: it restores the plain response body
        // type that TracingLayer expects from its inner service.
        let middleware = ServiceBuilder::new()
            .layer(create_cors_layer(&self.config.cors))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TracingLayer::new());

        Router::new()
            .route("/", get(list_fonts))
            .route("/health", get(health_check))
            .fallback(endpoint_not_found)
            .layer(middleware)
            .with_state(state)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    catalog: Arc<dyn FontCatalogSource>,
    query: QueryConfig,
}

/// Handle the font list route.
///
/// Raw query values are sanitized, never rejected: a `HashMap` extractor
/// accepts any well-formed query string, including repeated keys.
async fn list_fonts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let limit = sanitize_limit(params.get("limit").map(String::as_str), &state.query);
    let sort = sanitize_sort(params.get("sort").map(String::as_str));

    let catalog = match state.catalog.list_fonts(sort).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "Error fetching fonts");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch fonts",
                    "message": e.to_string(),
                })),
            );
        }
    };

    let Some(families) = catalog.family_names() else {
        error!(error = %UpstreamError::InvalidPayload, "Error fetching fonts");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Invalid response from Google Fonts API",
            })),
        );
    };

    let fonts: Vec<String> = families.into_iter().take(limit).collect();
    let response = FontListResponse {
        count: fonts.len(),
        fonts,
        limit,
        sort_by: sort.to_string(),
    };

    (
        StatusCode::OK,
        Json(serde_json::to_value(&response).unwrap_or_default()),
    )
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

/// Router fallback for any unmatched method or path
async fn endpoint_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Endpoint not found" })),
    )
}

/// Last-resort responder for panicking handlers.
///
/// Logs the payload server-side and answers a generic 500 with no
/// internal detail.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "Unhandled error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal server error" })),
    )
        .into_response()
}

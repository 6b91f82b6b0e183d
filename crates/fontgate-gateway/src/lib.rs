//! Font List Gateway - HTTP proxy for the Google Fonts catalog.
//!
//! This crate provides the gateway's domain logic, outbound port, Google
//! Fonts adapter, middleware, and HTTP service.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    FONT LIST GATEWAY                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌───────────────┐  │
//! │  │   GET /      │   │ GET /health  │   │   fallback    │  │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬────────┘  │
//! │         │                  │                  │            │
//! │  ┌──────┴──────────────────┴──────────────────┴─────────┐ │
//! │  │     Middleware: CORS → CatchPanic → Tracing          │ │
//! │  └──────────────────────┬───────────────────────────────┘ │
//! │                         │                                  │
//! │  ┌──────────────────────┴───────────────────────────────┐ │
//! │  │        FontCatalogSource (outbound port)             │ │
//! │  └──────────────────────┬───────────────────────────────┘ │
//! └─────────────────────────┼──────────────────────────────────┘
//!                           │
//!                           ▼
//!                  Google Fonts web API
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use fontgate_gateway::{FontGatewayService, GatewayConfig, GoogleFontsClient};
//! use std::sync::Arc;
//!
//! let config = GatewayConfig::default();
//! let catalog = Arc::new(GoogleFontsClient::new(config.upstream.clone()));
//! let mut service = FontGatewayService::new(config, catalog)?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod service;

// Re-exports for public API
pub use adapters::GoogleFontsClient;
pub use domain::config::{GatewayConfig, QueryConfig, UpstreamConfig};
pub use domain::error::{GatewayError, UpstreamError};
pub use domain::query::SortOrder;
pub use domain::types::{FontListResponse, HealthResponse, UpstreamCatalog};
pub use ports::FontCatalogSource;
pub use service::FontGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

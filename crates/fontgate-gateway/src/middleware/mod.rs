//! Middleware stack for the Font List Gateway.
//!
//! Layer order: Request → CORS → CatchPanic → Tracing → Handler

pub mod cors;
pub mod tracing;

pub use cors::create_cors_layer;
pub use tracing::TracingLayer;

//! Gateway error types.
//!
//! Two tiers: `GatewayError` for service lifecycle failures, and
//! `UpstreamError` for per-request failures against the font catalog.
//! Client-facing 500 bodies carry the display string only; full errors
//! are logged server-side.

/// Service-level errors (startup and shutdown)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),
}

/// Per-request errors against the upstream font catalog
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Credentials absent from configuration; detected before any network I/O
    #[error("missing required configuration: API_BASE_URL or API_KEY")]
    Credentials,

    /// Upstream answered with a non-success status
    #[error("Google Fonts API error: {status} {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// Connection, timeout, or body decode failure
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// Upstream body decoded but lacked the expected `items` array
    #[error("invalid response from Google Fonts API")]
    InvalidPayload,
}

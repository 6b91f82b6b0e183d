//! Outbound ports for the Font List Gateway.

use crate::domain::error::UpstreamError;
use crate::domain::query::SortOrder;
use crate::domain::types::UpstreamCatalog;
use async_trait::async_trait;

/// Font catalog source trait for testability
///
/// The single outbound seam of the gateway. Production uses the
/// Google Fonts adapter; tests substitute stubs.
#[async_trait]
pub trait FontCatalogSource: Send + Sync {
    /// Fetch the catalog from upstream with the given sort order
    async fn list_fonts(&self, sort: SortOrder) -> Result<UpstreamCatalog, UpstreamError>;
}

//! Wire types for the gateway's HTTP surface and the upstream catalog.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Raw payload returned by the upstream font catalog.
///
/// Only `items` is interpreted; everything else the upstream sends is
/// ignored. `items` stays an untyped value so a missing or malformed
/// field can be distinguished from an empty catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamCatalog {
    /// Font item records, expected to be a JSON array
    #[serde(default)]
    pub items: serde_json::Value,
}

impl UpstreamCatalog {
    /// Extract the family name of each well-formed item, in upstream order.
    ///
    /// Returns `None` when `items` is missing or not an array. Items
    /// without a string `family` field are skipped.
    pub fn family_names(&self) -> Option<Vec<String>> {
        let items = self.items.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.get("family").and_then(|f| f.as_str()))
                .map(String::from)
                .collect(),
        )
    }
}

/// Response body for the font list route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontListResponse {
    /// Family names, truncated to `limit`, upstream order preserved
    pub fonts: Vec<String>,
    /// Number of families returned
    pub count: usize,
    /// Sanitized limit that was applied
    pub limit: usize,
    /// Sanitized sort order that was forwarded upstream
    pub sort_by: String,
}

/// Response body for the health route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK"
    pub status: String,
    /// RFC 3339 UTC timestamp of the check
    pub timestamp: String,
}

impl HealthResponse {
    /// Health snapshot at the current instant
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

//! Query parameter sanitizers.
//!
//! Raw query strings never produce a client-facing error: anything
//! unusable falls back to the configured defaults.

use crate::domain::config::QueryConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort orders accepted by the upstream font catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most popular families first (upstream default)
    #[default]
    Popularity,
    /// Alphabetical by family name
    Alpha,
    /// Most recently added first
    Date,
    /// Trending families first
    Trending,
}

impl SortOrder {
    /// Wire representation sent to the upstream API
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity",
            SortOrder::Alpha => "alpha",
            SortOrder::Date => "date",
            SortOrder::Trending => "trending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw string did not name a sort order
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(SortOrder::Popularity),
            "alpha" => Ok(SortOrder::Alpha),
            "date" => Ok(SortOrder::Date),
            "trending" => Ok(SortOrder::Trending),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// Sanitize a raw `limit` query value.
///
/// Parse failures, non-positive values, and values above `max_limit` all
/// fall back to `default_limit`.
pub fn sanitize_limit(raw: Option<&str>, bounds: &QueryConfig) -> usize {
    let Some(raw) = raw else {
        return bounds.default_limit;
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 && n <= bounds.max_limit as i64 => n as usize,
        _ => bounds.default_limit,
    }
}

/// Sanitize a raw `sort` query value.
///
/// Anything outside the enum (including absent) maps to `Popularity`.
pub fn sanitize_sort(raw: Option<&str>) -> SortOrder {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

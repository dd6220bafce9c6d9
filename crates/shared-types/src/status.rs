//! Per-user ingestion status rows as returned by the sync-status and
//! user-vitals endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status value the pipeline reports for a column that exists.
pub const STATUS_AVAILABLE: &str = "Available";
/// Status value the pipeline reports for a column with no data.
pub const STATUS_MISSING: &str = "Missing";

/// One monitored user for one date. Beyond the identifier, the row is a map
/// of column name to status value — the column set differs between the
/// sync-status and vitals endpoints and is carried in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    pub user_id: String,
    #[serde(flatten)]
    pub statuses: BTreeMap<String, String>,
}

impl StatusRow {
    /// Value of a status column, empty when the backend omitted it.
    pub fn status(&self, column: &str) -> &str {
        self.statuses.get(column).map(String::as_str).unwrap_or("")
    }

    /// Every monitored column reports "Available".
    pub fn fully_available(&self) -> bool {
        !self.statuses.is_empty()
            && self.statuses.values().all(|v| v == STATUS_AVAILABLE)
    }

    /// At least one monitored column reports "Missing".
    pub fn has_missing(&self) -> bool {
        self.statuses.values().any(|v| v == STATUS_MISSING)
    }
}

/// Envelope for `GET /api/sync-status` and `GET /api/user-vitals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPageResponse {
    pub date: String,
    pub data: Vec<StatusRow>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
}

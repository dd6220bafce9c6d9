//! Aggregate ingestion counters from the summary endpoints.

use serde::{Deserialize, Serialize};

/// `GET /api/summary?date` — one day's aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub total_users: u64,
    pub successful_ingestions: u64,
    pub missing_ingestions: u64,
}

/// `GET /api/summary/weekly?date` — counters for the Monday..Sunday week
/// containing the anchor date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub start_date: String,
    pub end_date: String,
    pub total_users: u64,
    pub successful_ingestions: u64,
    pub missing_ingestions: u64,
}

/// `GET /api/summary/monthly?date` — counters for the anchor's month plus
/// the authoritative list of dates that actually have data (used to
/// highlight the calendar in month view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub start_date: String,
    pub end_date: String,
    pub total_users: u64,
    pub successful_ingestions: u64,
    pub missing_ingestions: u64,
    #[serde(default)]
    pub dates_with_data: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_summary_defaults_highlight_list() {
        let json = r#"{
            "start_date": "2026-08-01",
            "end_date": "2026-08-31",
            "total_users": 12,
            "successful_ingestions": 9,
            "missing_ingestions": 3
        }"#;
        let summary: MonthlySummary = serde_json::from_str(json).unwrap();
        assert!(summary.dates_with_data.is_empty());
        assert_eq!(summary.total_users, summary.successful_ingestions + summary.missing_ingestions);
    }
}

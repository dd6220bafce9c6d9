//! Summary endpoints, one per view mode.

use shared_types::{AppError, DailySummary, MonthlySummary, WeeklySummary};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn daily_summary(&self, date: String) -> Result<DailySummary, AppError> {
        self.get_json("/api/summary", &[("date", date)]).await
    }

    pub async fn weekly_summary(&self, date: String) -> Result<WeeklySummary, AppError> {
        self.get_json("/api/summary/weekly", &[("date", date)]).await
    }

    pub async fn monthly_summary(&self, date: String) -> Result<MonthlySummary, AppError> {
        self.get_json("/api/summary/monthly", &[("date", date)]).await
    }
}

//! Sync-status and user-vitals endpoints.

use shared_types::{AppError, StatusPageResponse};

use crate::client::ApiClient;

/// Page size used to pull a full day in one request. Filtering, searching,
/// and paging then happen client-side without further round-trips.
pub const FULL_DAY_PAGE_SIZE: u64 = 1000;

impl ApiClient {
    pub async fn sync_status(
        &self,
        date: String,
        page: u64,
        page_size: u64,
    ) -> Result<StatusPageResponse, AppError> {
        self.status_page("/api/sync-status", date, page, page_size).await
    }

    pub async fn user_vitals(
        &self,
        date: String,
        page: u64,
        page_size: u64,
    ) -> Result<StatusPageResponse, AppError> {
        self.status_page("/api/user-vitals", date, page, page_size).await
    }

    /// Convenience for the dashboard tables: the whole day in one page.
    pub async fn sync_status_full_day(&self, date: String) -> Result<StatusPageResponse, AppError> {
        self.sync_status(date, 1, FULL_DAY_PAGE_SIZE).await
    }

    pub async fn user_vitals_full_day(&self, date: String) -> Result<StatusPageResponse, AppError> {
        self.user_vitals(date, 1, FULL_DAY_PAGE_SIZE).await
    }

    async fn status_page(
        &self,
        path: &str,
        date: String,
        page: u64,
        page_size: u64,
    ) -> Result<StatusPageResponse, AppError> {
        self.get_json(
            path,
            &[
                ("date", date),
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }
}

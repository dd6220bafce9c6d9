//! User settings endpoints.

use shared_types::{AppError, UserSettings};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn get_user_settings(&self) -> Result<UserSettings, AppError> {
        self.get_json("/api/user-settings", &[]).await
    }

    pub async fn save_user_settings(&self, settings: &UserSettings) -> Result<(), AppError> {
        let _: serde_json::Value = self.post_json("/api/user-settings", settings).await?;
        Ok(())
    }
}

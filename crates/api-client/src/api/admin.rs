//! Admin user-management endpoints.

use shared_types::{AdminMutationResponse, AdminUser, AdminUsersResponse, AppError, UpsertUserRequest};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn list_admin_users(&self) -> Result<Vec<AdminUser>, AppError> {
        let response: AdminUsersResponse = self.get_json("/api/admin/users", &[]).await?;
        Ok(response.users)
    }

    pub async fn create_admin_user(&self, user: &UpsertUserRequest) -> Result<(), AppError> {
        let response: AdminMutationResponse = self.post_json("/api/admin/users", user).await?;
        Self::check_mutation(response, "Failed to save user")
    }

    pub async fn update_admin_user(
        &self,
        id: i64,
        user: &UpsertUserRequest,
    ) -> Result<(), AppError> {
        let response: AdminMutationResponse = self
            .put_json(&format!("/api/admin/users/{id}"), user)
            .await?;
        Self::check_mutation(response, "Failed to save user")
    }

    pub async fn delete_admin_user(&self, id: i64) -> Result<(), AppError> {
        let response: AdminMutationResponse =
            self.delete_json(&format!("/api/admin/users/{id}")).await?;
        Self::check_mutation(response, "Failed to delete user")
    }

    /// The admin endpoints report application failures inside a 200 body.
    fn check_mutation(response: AdminMutationResponse, fallback: &str) -> Result<(), AppError> {
        if response.success {
            Ok(())
        } else {
            let message = response.error.unwrap_or_else(|| fallback.to_string());
            Err(AppError::bad_request(friendly_admin_error(message)))
        }
    }
}

/// Map raw database constraint noise onto an operator-readable message.
fn friendly_admin_error(message: String) -> String {
    let lowered = message.to_lowercase();
    if lowered.contains("duplicate entry") || lowered.contains("users.username") {
        "A user with this email already exists.".to_string()
    } else {
        message
    }
}

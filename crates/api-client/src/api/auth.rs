//! Authentication and profile endpoints.

use shared_types::{
    AppError, ChangePasswordRequest, CheckUserRequest, CheckUserResponse, LoginRequest,
    LoginResponse, Profile, ResetPasswordRequest, UpdateProfileRequest,
};

use crate::client::ApiClient;

impl ApiClient {
    /// Exchange credentials for an access token and store it in the injected
    /// session. `remember` selects persistent browser storage.
    pub async fn login(
        &self,
        username: String,
        password: String,
        remember: bool,
    ) -> Result<LoginResponse, AppError> {
        let body = LoginRequest { username, password };
        let response: LoginResponse = self.post_json("/api/auth/login", &body).await?;
        self.session().store(&response.access_token, remember);
        tracing::info!(remember, "login succeeded");
        Ok(response)
    }

    /// Drop the stored token. Purely client-side; the API keeps no session.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Whether any token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.session().token().is_some()
    }

    /// Existence probe used by the password-reset wizard.
    pub async fn check_user(&self, username: String) -> Result<bool, AppError> {
        let body = CheckUserRequest {
            username,
            // The endpoint's shape requires a password field; its value is
            // ignored for existence checks.
            password: "dummy".to_string(),
        };
        let response: CheckUserResponse = self.post_json("/api/auth/check-user", &body).await?;
        Ok(response.exists)
    }

    pub async fn reset_password(
        &self,
        username: String,
        new_password: String,
    ) -> Result<(), AppError> {
        let body = ResetPasswordRequest {
            username,
            new_password,
        };
        let _: serde_json::Value = self.post_json("/api/auth/reset-password", &body).await?;
        Ok(())
    }

    pub async fn get_profile(&self) -> Result<Profile, AppError> {
        self.get_json("/api/auth/profile", &[]).await
    }

    pub async fn update_profile(
        &self,
        nickname: String,
        full_name: String,
    ) -> Result<Profile, AppError> {
        let body = UpdateProfileRequest {
            nickname,
            full_name,
        };
        self.put_json("/api/auth/profile", &body).await
    }

    pub async fn change_password(&self, password: String) -> Result<(), AppError> {
        let body = ChangePasswordRequest { password };
        let _: serde_json::Value = self.put_json("/api/auth/profile/password", &body).await?;
        Ok(())
    }
}

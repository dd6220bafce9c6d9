//! Admin user-management payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A managed account as listed by `GET /api/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUser>,
}

/// Create/update body for `POST /api/admin/users` and
/// `PUT /api/admin/users/{id}`. The username is the account email; the
/// password is only sent on create and may be empty on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[validate(length(min = 1, message = "Full name is required."))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Nickname is required."))]
    pub nickname: String,
}

/// Generic mutation acknowledgement from the admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn request(username: &str) -> UpsertUserRequest {
        UpsertUserRequest {
            username: username.to_string(),
            password: "Sekret99!".to_string(),
            full_name: "Jordan Reyes".to_string(),
            nickname: "JR".to_string(),
        }
    }

    #[test]
    fn valid_email_passes() {
        assert!(request("jordan@example.com").validate().is_ok());
    }

    #[test]
    fn malformed_email_fails() {
        assert!(request("not-an-email").validate().is_err());
        assert!(request("").validate().is_err());
    }

    #[test]
    fn blank_names_fail() {
        let mut req = request("jordan@example.com");
        req.full_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn users_envelope_deserializes() {
        let json = r#"{"users":[{"id":1,"username":"a@b.com","full_name":"A","nickname":"a"}]}"#;
        let resp: AdminUsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.users.len(), 1);
        assert_eq!(resp.users[0].id, 1);
    }
}

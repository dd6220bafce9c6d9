//! Conversions from transport/status failures into [`AppError`].

use reqwest::StatusCode;
use shared_types::{AppError, AppErrorKind};

/// Extension trait turning reqwest transport errors into app errors.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        if self.is_decode() {
            AppError::internal("Invalid data format received from server")
        } else {
            AppError::network("Could not reach the server. Check your connection.")
        }
    }
}

/// Error kind implied by an HTTP status.
pub fn kind_for_status(status: StatusCode) -> AppErrorKind {
    match status {
        StatusCode::BAD_REQUEST => AppErrorKind::BadRequest,
        StatusCode::UNAUTHORIZED => AppErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => AppErrorKind::Forbidden,
        StatusCode::NOT_FOUND => AppErrorKind::NotFound,
        StatusCode::CONFLICT => AppErrorKind::Conflict,
        StatusCode::UNPROCESSABLE_ENTITY => AppErrorKind::ValidationError,
        _ => AppErrorKind::InternalError,
    }
}

/// Pull a human-readable message out of an error body. The backend reports
/// failures as `{"detail": ...}` (FastAPI style) or `{"error": ...}`.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "error", "message"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_maps_to_kind() {
        assert_eq!(kind_for_status(StatusCode::UNAUTHORIZED), AppErrorKind::Unauthorized);
        assert_eq!(kind_for_status(StatusCode::CONFLICT), AppErrorKind::Conflict);
        assert_eq!(
            kind_for_status(StatusCode::INTERNAL_SERVER_ERROR),
            AppErrorKind::InternalError
        );
    }

    #[test]
    fn detail_and_error_bodies_are_parsed() {
        assert_eq!(
            message_from_body(r#"{"detail":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            message_from_body(r#"{"error":"Duplicate entry"}"#).as_deref(),
            Some("Duplicate entry")
        );
        assert_eq!(message_from_body("not json"), None);
        assert_eq!(message_from_body(r#"{"detail":42}"#), None);
    }
}

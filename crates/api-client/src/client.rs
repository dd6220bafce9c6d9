//! HTTP plumbing shared by every endpoint module.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

use crate::error_convert::{kind_for_status, message_from_body, ReqwestErrorExt};
use crate::session::SessionStore;

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Client for the external ETL status API. Cheap to clone; all clones share
/// the same session store and unauthorized hook.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<dyn SessionStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
            on_unauthorized: None,
        }
    }

    /// Register the hook fired after a 401 has cleared the session. The app
    /// installs a redirect to the login route here.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (when present), send, and translate failures.
    /// A 401 clears the injected session and fires the unauthorized hook
    /// before surfacing the error.
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("api returned 401; clearing session");
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(AppError::unauthorized(
                "Your session has expired. Please log in again.",
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = message_from_body(&body).unwrap_or_default();
            tracing::error!(status = %status, %message, "api request failed");
            return Err(AppError {
                kind: kind_for_status(status),
                message,
                field_errors: Default::default(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        response.json::<T>().await.map_err(|e| e.into_app_error())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.http.delete(self.url(path))).await?;
        Self::decode(response).await
    }
}

/// Monotonic issue counter for call sites that spawn fetches by hand.
/// Capture a token with `begin()` before the request and check `is_current`
/// before applying the response — stale responses are simply dropped, so the
/// latest-issued request always wins regardless of resolution order.
#[derive(Default)]
pub struct RequestSequence(AtomicU64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use pretty_assertions::assert_eq;

    #[test]
    fn urls_join_without_double_slashes() {
        let client = ApiClient::new("http://localhost:8000/", Arc::new(MemorySession::new()));
        assert_eq!(
            client.url("/api/sync-status"),
            "http://localhost:8000/api/sync-status"
        );
    }

    #[test]
    fn sequence_tokens_invalidate_older_requests() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}

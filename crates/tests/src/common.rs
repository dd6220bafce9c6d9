//! In-process mock of the external ETL status API.
//!
//! Each test spins up an axum router on an ephemeral port and points an
//! [`ApiClient`] with an in-memory session at it, so the full HTTP path
//! (bearer attachment, status mapping, 401 handling) is exercised.

use std::sync::{Arc, Mutex};

use api_client::{ApiClient, MemorySession, SessionStore};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post, put};
use axum::Router;
use serde_json::{json, Value};

pub const TEST_EMAIL: &str = "test@gmail.com";
pub const TEST_PASSWORD: &str = "testpassword";
pub const TEST_TOKEN: &str = "token-abc123";

/// Mutable backend state shared across a test's requests.
#[derive(Clone, Default)]
pub struct MockState {
    pub settings: Arc<Mutex<Value>>,
    pub users: Arc<Mutex<Vec<Value>>>,
}

/// Start the mock API and return a client wired to it, along with the
/// session store and the shared state for assertions.
pub async fn test_client() -> (ApiClient, Arc<MemorySession>, MockState) {
    let state = MockState {
        settings: Arc::new(Mutex::new(json!({
            "user_count_logic": "raw_files",
            "custom_user_count": null,
            "theme": "light"
        }))),
        users: Arc::new(Mutex::new(vec![json!({
            "id": 1,
            "username": "admin@example.com",
            "full_name": "Admin One",
            "nickname": "A1"
        })])),
    };

    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/check-user", post(check_user))
        .route("/api/auth/reset-password", post(reset_password))
        .route("/api/auth/profile", get(profile).put(update_profile))
        .route("/api/auth/profile/password", put(change_password))
        .route("/api/sync-status", get(sync_status))
        .route("/api/user-vitals", get(user_vitals))
        .route("/api/summary", get(summary))
        .route("/api/summary/weekly", get(weekly_summary))
        .route("/api/summary/monthly", get(monthly_summary))
        .route("/api/user-settings", get(get_settings).post(save_settings))
        .route("/api/admin/users", get(list_users).post(create_user))
        .route(
            "/api/admin/users/{id}",
            put(update_user).delete(delete_user),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock api");
    });

    let session = Arc::new(MemorySession::new());
    let client = ApiClient::new(
        format!("http://{addr}"),
        Arc::clone(&session) as Arc<dyn SessionStore>,
    );
    (client, session, state)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Invalid or expired token"})),
    )
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        (StatusCode::OK, Json(json!({"access_token": TEST_TOKEN})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        )
    }
}

async fn check_user(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"exists": body["username"] == TEST_EMAIL}))
}

async fn reset_password(Json(body): Json<Value>) -> impl IntoResponse {
    if body["new_password"] == TEST_PASSWORD {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "detail": "New password cannot be the same as the current password."
            })),
        )
    } else {
        (StatusCode::OK, Json(json!({"message": "Password reset"})))
    }
}

async fn profile(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({
        "username": TEST_EMAIL,
        "nickname": "Tester",
        "full_name": "Test User"
    }))
    .into_response()
}

async fn update_profile(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({
        "username": TEST_EMAIL,
        "nickname": body["nickname"],
        "full_name": body["full_name"]
    }))
    .into_response()
}

async fn change_password(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    if body["password"] == TEST_PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "detail": "New password cannot be the same as the current password"
            })),
        )
            .into_response();
    }
    Json(json!({"message": "Password updated"})).into_response()
}

/// Ten users; three of them are missing at least one silver table.
async fn sync_status(
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    let date = param(&params, "date").unwrap_or_else(|| "2026-08-07".to_string());

    let mut rows = Vec::new();
    for i in 0..10 {
        let degraded = i >= 7;
        rows.push(json!({
            "user_id": format!("user-{i:02}"),
            "bronze": "Available",
            "silver_rrbucket": if degraded { "Missing" } else { "Available" },
            "silver_vitalsbaseline": "Available",
            "silver_vitalsswt": if i == 9 { "Missing" } else { "Available" },
        }));
    }

    Json(json!({
        "date": date,
        "data": rows,
        "columns": ["bronze", "silver_rrbucket", "silver_vitalsbaseline", "silver_vitalsswt"],
        "total_users": 10,
        "total_pages": 1,
        "page": 1,
        "page_size": 1000
    }))
    .into_response()
}

async fn user_vitals(
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    let date = param(&params, "date").unwrap_or_default();
    Json(json!({
        "date": date,
        "data": [
            {
                "user_id": "user-00",
                "STEPS": "Available",
                "HEART_RATE": "Missing"
            }
        ],
        "columns": ["STEPS", "HEART_RATE"],
        "total_users": 1,
        "total_pages": 1,
        "page": 1,
        "page_size": 1000
    }))
    .into_response()
}

async fn summary(headers: HeaderMap, Query(params): Query<Vec<(String, String)>>) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    let date = param(&params, "date").unwrap_or_default();
    Json(json!({
        "date": date,
        "total_users": 10,
        "successful_ingestions": 7,
        "missing_ingestions": 3
    }))
    .into_response()
}

async fn weekly_summary(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({
        "start_date": "2026-08-03",
        "end_date": "2026-08-09",
        "total_users": 10,
        "successful_ingestions": 52,
        "missing_ingestions": 18
    }))
    .into_response()
}

async fn monthly_summary(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    Json(json!({
        "start_date": "2026-08-01",
        "end_date": "2026-08-31",
        "total_users": 10,
        "successful_ingestions": 180,
        "missing_ingestions": 40,
        "dates_with_data": ["2026-08-01", "2026-08-02", "2026-08-05"]
    }))
    .into_response()
}

async fn get_settings(headers: HeaderMap, State(state): State<MockState>) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    let settings = state.settings.lock().expect("settings lock").clone();
    Json(settings).into_response()
}

async fn save_settings(
    headers: HeaderMap,
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return unauthorized().into_response();
    }
    *state.settings.lock().expect("settings lock") = body;
    Json(json!({"message": "Settings saved"})).into_response()
}

async fn list_users(State(state): State<MockState>) -> Json<Value> {
    let users = state.users.lock().expect("users lock").clone();
    Json(json!({ "users": users }))
}

async fn create_user(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    let mut users = state.users.lock().expect("users lock");
    if users.iter().any(|u| u["username"] == body["username"]) {
        return Json(json!({
            "success": false,
            "error": format!("Duplicate entry '{}' for key 'users.username'", body["username"])
        }));
    }
    let id = users.iter().filter_map(|u| u["id"].as_i64()).max().unwrap_or(0) + 1;
    users.push(json!({
        "id": id,
        "username": body["username"],
        "full_name": body["full_name"],
        "nickname": body["nickname"]
    }));
    Json(json!({"success": true}))
}

async fn update_user(
    Path(id): Path<i64>,
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut users = state.users.lock().expect("users lock");
    match users.iter_mut().find(|u| u["id"] == id) {
        Some(user) => {
            user["username"] = body["username"].clone();
            user["full_name"] = body["full_name"].clone();
            user["nickname"] = body["nickname"].clone();
            Json(json!({"success": true}))
        }
        None => Json(json!({"success": false, "error": "User not found"})),
    }
}

async fn delete_user(Path(id): Path<i64>, State(state): State<MockState>) -> Json<Value> {
    let mut users = state.users.lock().expect("users lock");
    let before = users.len();
    users.retain(|u| u["id"] != id);
    if users.len() < before {
        Json(json!({"success": true}))
    } else {
        Json(json!({"success": false, "error": "User not found"}))
    }
}

fn param(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

use pretty_assertions::assert_eq;

use crate::common;

async fn logged_in_client() -> api_client::ApiClient {
    let (client, _session, _state) = common::test_client().await;
    client
        .login(common::TEST_EMAIL.to_string(), common::TEST_PASSWORD.to_string(), false)
        .await
        .expect("login");
    client
}

#[tokio::test]
async fn full_day_sync_status_parses_rows_and_columns() {
    let client = logged_in_client().await;

    let response = client
        .sync_status_full_day("2026-08-07".to_string())
        .await
        .expect("sync status");

    assert_eq!(response.date, "2026-08-07");
    assert_eq!(response.data.len(), 10);
    assert_eq!(response.columns.len(), 4);
    assert_eq!(response.page_size, 1000);

    // The flattened status columns land in the per-row map.
    let first = &response.data[0];
    assert_eq!(first.user_id, "user-00");
    assert_eq!(first.status("bronze"), "Available");
}

#[tokio::test]
async fn degraded_rows_are_detectable_for_the_missing_filter() {
    let client = logged_in_client().await;

    let response = client
        .sync_status_full_day("2026-08-07".to_string())
        .await
        .expect("sync status");

    let missing: Vec<_> = response.data.iter().filter(|row| row.has_missing()).collect();
    let healthy: Vec<_> = response.data.iter().filter(|row| row.fully_available()).collect();

    assert_eq!(missing.len(), 3);
    assert_eq!(healthy.len(), 7);
    assert!(missing.iter().all(|row| row.user_id.starts_with("user-0")));
}

#[tokio::test]
async fn vitals_rows_use_the_vitals_column_set() {
    let client = logged_in_client().await;

    let response = client
        .user_vitals_full_day("2026-08-07".to_string())
        .await
        .expect("vitals");

    assert_eq!(response.columns, vec!["STEPS", "HEART_RATE"]);
    assert_eq!(response.data[0].status("HEART_RATE"), "Missing");
    assert!(response.data[0].has_missing());
}

#[tokio::test]
async fn status_endpoints_require_a_token() {
    let (client, _session, _state) = common::test_client().await;

    let err = client
        .sync_status_full_day("2026-08-07".to_string())
        .await
        .expect_err("unauthenticated");
    assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
}

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
async fn daily_totals_add_up() {
    let client = logged_in_client().await;

    let summary = client
        .daily_summary("2026-08-07".to_string())
        .await
        .expect("daily summary");

    assert_eq!(summary.date, "2026-08-07");
    assert_eq!(
        summary.total_users,
        summary.successful_ingestions + summary.missing_ingestions
    );
}

#[tokio::test]
async fn weekly_summary_spans_monday_to_sunday() {
    let client = logged_in_client().await;

    let summary = client
        .weekly_summary("2026-08-07".to_string())
        .await
        .expect("weekly summary");

    assert_eq!(summary.start_date, "2026-08-03");
    assert_eq!(summary.end_date, "2026-08-09");
}

#[tokio::test]
async fn monthly_summary_carries_the_highlight_dates() {
    let client = logged_in_client().await;

    let summary = client
        .monthly_summary("2026-08-15".to_string())
        .await
        .expect("monthly summary");

    assert_eq!(summary.start_date, "2026-08-01");
    assert_eq!(summary.dates_with_data.len(), 3);
    assert!(summary
        .dates_with_data
        .iter()
        .all(|date| date.starts_with("2026-08-")));
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use api_client::SessionStore;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn login_stores_token_in_injected_session() {
    let (client, session, _state) = common::test_client().await;

    let response = client
        .login(common::TEST_EMAIL.to_string(), common::TEST_PASSWORD.to_string(), true)
        .await
        .expect("login should succeed");

    assert_eq!(response.access_token, common::TEST_TOKEN);
    assert_eq!(session.token().as_deref(), Some(common::TEST_TOKEN));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn failed_login_surfaces_detail_and_stores_nothing() {
    let (client, session, _state) = common::test_client().await;

    let err = client
        .login(common::TEST_EMAIL.to_string(), "wrong".to_string(), false)
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(session.token(), None);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn profile_fetch_carries_the_bearer_token() {
    let (client, _session, _state) = common::test_client().await;

    // Unauthenticated first: the protected endpoint rejects the call.
    let err = client.get_profile().await.expect_err("no token yet");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    client
        .login(common::TEST_EMAIL.to_string(), common::TEST_PASSWORD.to_string(), false)
        .await
        .expect("login");

    let profile = client.get_profile().await.expect("profile with token");
    assert_eq!(profile.username, common::TEST_EMAIL);
    assert_eq!(profile.nickname, "Tester");
}

#[tokio::test]
async fn a_401_clears_the_session_and_fires_the_hook() {
    let (client, session, _state) = common::test_client().await;
    let fired = Arc::new(AtomicBool::new(false));
    let fired_flag = Arc::clone(&fired);
    let client = client.with_unauthorized_hook(move || {
        fired_flag.store(true, Ordering::SeqCst);
    });

    // A stale token the mock API no longer accepts.
    session.store("expired-token", true);

    let err = client.get_profile().await.expect_err("stale token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(session.token(), None, "session must be cleared");
    assert!(fired.load(Ordering::SeqCst), "unauthorized hook must fire");
}

#[tokio::test]
async fn check_user_reports_existence() {
    let (client, _session, _state) = common::test_client().await;

    assert!(client.check_user(common::TEST_EMAIL.to_string()).await.expect("known"));
    assert!(!client.check_user("nobody@example.com".to_string()).await.expect("unknown"));
}

#[tokio::test]
async fn resetting_to_the_same_password_is_rejected_with_detail() {
    let (client, _session, _state) = common::test_client().await;

    let err = client
        .reset_password(common::TEST_EMAIL.to_string(), common::TEST_PASSWORD.to_string())
        .await
        .expect_err("same password");

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(
        err.message,
        "New password cannot be the same as the current password."
    );

    client
        .reset_password(common::TEST_EMAIL.to_string(), "Fresh-Passw0rd!".to_string())
        .await
        .expect("different password resets fine");
}

#[tokio::test]
async fn logout_drops_the_stored_token() {
    let (client, session, _state) = common::test_client().await;

    client
        .login(common::TEST_EMAIL.to_string(), common::TEST_PASSWORD.to_string(), true)
        .await
        .expect("login");
    assert!(session.token().is_some());

    client.logout();
    assert_eq!(session.token(), None);
    assert!(!client.is_authenticated());
}

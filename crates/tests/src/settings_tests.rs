use pretty_assertions::assert_eq;
use shared_types::{UserCountLogic, UserSettings};

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
async fn settings_default_to_raw_files_and_light_theme() {
    let client = logged_in_client().await;

    let settings = client.get_user_settings().await.expect("settings");
    assert_eq!(settings.user_count_logic, UserCountLogic::RawFiles);
    assert_eq!(settings.custom_user_count, None);
    assert_eq!(settings.theme, "light");
}

#[tokio::test]
async fn saved_settings_round_trip() {
    let client = logged_in_client().await;

    let payload = UserSettings {
        user_count_logic: UserCountLogic::CustomInput,
        custom_user_count: Some(250),
        theme: "light".to_string(),
    };
    payload.validate().expect("payload is valid");

    client.save_user_settings(&payload).await.expect("save");
    let reloaded = client.get_user_settings().await.expect("reload");

    assert_eq!(reloaded, payload);
}

#[tokio::test]
async fn settings_require_a_token() {
    let (client, _session, _state) = common::test_client().await;

    let err = client.get_user_settings().await.expect_err("unauthenticated");
    assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
}

use pretty_assertions::assert_eq;
use shared_types::UpsertUserRequest;

use crate::common;

fn new_user(username: &str) -> UpsertUserRequest {
    UpsertUserRequest {
        username: username.to_string(),
        password: "Sekret99!".to_string(),
        full_name: "Jordan Reyes".to_string(),
        nickname: "JR".to_string(),
    }
}

#[tokio::test]
async fn created_users_show_up_in_the_list() {
    let (client, _session, _state) = common::test_client().await;

    client
        .create_admin_user(&new_user("jordan@example.com"))
        .await
        .expect("create");

    let users = client.list_admin_users().await.expect("list");
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.username == "jordan@example.com"));
}

#[tokio::test]
async fn duplicate_emails_get_a_friendly_error() {
    let (client, _session, _state) = common::test_client().await;

    client
        .create_admin_user(&new_user("jordan@example.com"))
        .await
        .expect("first create");

    let err = client
        .create_admin_user(&new_user("jordan@example.com"))
        .await
        .expect_err("second create");

    assert_eq!(err.message, "A user with this email already exists.");
}

#[tokio::test]
async fn updates_replace_the_stored_fields() {
    let (client, _session, _state) = common::test_client().await;

    let mut update = new_user("admin@example.com");
    update.full_name = "Admin Renamed".to_string();
    client.update_admin_user(1, &update).await.expect("update");

    let users = client.list_admin_users().await.expect("list");
    assert_eq!(users[0].full_name, "Admin Renamed");
}

#[tokio::test]
async fn deleting_removes_the_user() {
    let (client, _session, _state) = common::test_client().await;

    client.delete_admin_user(1).await.expect("delete");
    let users = client.list_admin_users().await.expect("list");
    assert!(users.is_empty());

    let err = client.delete_admin_user(1).await.expect_err("already gone");
    assert_eq!(err.message, "User not found");
}

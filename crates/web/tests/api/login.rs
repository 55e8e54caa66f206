use uuid::Uuid;

use crate::helpers::spawn_app;

#[tokio::test]
async fn login_with_seeded_credentials_returns_a_bearer_token() {
    let app = spawn_app().await;

    let response = app
        .post_login(&app.test_user.username, &app.test_user.password)
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!("bearer", body["token_type"]);
}

#[tokio::test]
async fn login_with_unknown_username_is_unauthorized() {
    let app = spawn_app().await;

    let response = app.post_login("bad", "bad").await;

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = spawn_app().await;

    let response = app
        .post_login(&app.test_user.username, &Uuid::new_v4().to_string())
        .await;

    assert_eq!(401, response.status().as_u16());
}

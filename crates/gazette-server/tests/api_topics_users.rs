mod common;

use axum::http::StatusCode;
use common::{read_json, request, setup_app};
use gazette_content::topics::Topic;
use tower::ServiceExt;

#[tokio::test]
async fn list_topics_returns_all() {
    let (app, _pool, _db) = setup_app();

    let response = app.oneshot(request("GET", "/api/topics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let topics: Vec<Topic> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0].slug, "coding");
    assert!(!topics[0].description.is_empty());
}

#[tokio::test]
async fn list_users_returns_profiles() {
    let (app, _pool, _db) = setup_app();

    let response = app.oneshot(request("GET", "/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let users = body["users"].as_array().expect("users array");

    assert_eq!(users.len(), 3);
    for user in users {
        for field in ["username", "name", "avatar_url"] {
            assert!(user.get(field).is_some(), "missing field {field}");
        }
    }
    assert_eq!(users[0]["username"], "alice_m");
}

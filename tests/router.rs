mod common;

use axum::http::{Method, StatusCode};
use common::{failing_app, json, memory_app};
use serde_json::json;

#[tokio::test]
async fn test_version_reports_build() {
    let (app, _store) = memory_app();

    let (status, body) = app.send(Method::GET, "/version", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), json!({"sha1": "deadbeef", "version": "1.2.3"}));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (app, _store) = memory_app();

    let (status, body) = app.send(Method::GET, "/nothing/here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"404 page not found");
}

#[tokio::test]
async fn test_unsupported_method_is_not_found() {
    let (app, store) = failing_app();

    for (method, uri) in [
        (Method::PATCH, "/namedTagLists?bucket=red"),
        (Method::POST, "/version"),
        (Method::PUT, "/posts"),
    ] {
        let (status, body) = app.send(method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, b"404 page not found");
    }
    assert!(store.calls.lock().is_empty());
}

#[tokio::test]
async fn test_same_path_dispatches_on_method() {
    let (app, _store) = memory_app();

    let (get_status, _) = app.send(Method::GET, "/namedTagLists?bucket=b", None).await;
    let (delete_status, _) = app.send(Method::DELETE, "/namedTagLists?bucket=b", None).await;

    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(delete_status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_get_and_delete_posts() {
    let (app, _store) = memory_app();

    let (status, body) = app.send(Method::GET, "/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), json!([]));

    let post = json!({"imageUri": "https://images.example.com/windy.jpg", "tags": ["#windy", "#tdd"]});
    let (status, body) = app
        .send(Method::POST, "/posts", Some(&post.to_string()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json(&body),
        json!({"id": "id-1", "imageUri": "https://images.example.com/windy.jpg", "tags": ["#windy", "#tdd"]})
    );

    let (_, body) = app.send(Method::GET, "/posts", None).await;
    assert_eq!(json(&body).as_array().map(Vec::len), Some(1));

    let (status, _) = app.send(Method::DELETE, "/posts", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.send(Method::GET, "/posts", None).await;
    assert_eq!(json(&body), json!([]));
}

#[tokio::test]
async fn test_post_with_malformed_body_is_bad_request() {
    let (app, store) = failing_app();

    let (status, _) = app.send(Method::POST, "/posts", Some("[1, 2")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.calls.lock().is_empty());
}

#[tokio::test]
async fn test_posts_storage_failure_is_logged() {
    let (app, _store) = failing_app();

    let (status, body) = app.send(Method::GET, "/posts", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    assert_eq!(app.logged_errors(), vec!["there was an error".to_string()]);
}

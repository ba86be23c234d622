mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cakeshop_auth::verify_token;
use common::{ADMIN_EMAIL, ADMIN_PASSWORD, setup_test_app, test_jwt_config};
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = setup_test_app().await;

    let (status, body) = app.register("a@mail.com", "password1", "cheesecake").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "registered");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = setup_test_app().await;
    app.register("a@mail.com", "password1", "cheesecake").await;

    let (status, body) = app.register("a@mail.com", "password2", "napoleon").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "user with same login already exists");
}

#[tokio::test]
async fn test_register_validation_messages_in_order() {
    let app = setup_test_app().await;

    let cases = [
        ("", "password1", "cheesecake", "The email field is required!"),
        (
            "not-an-email",
            "password1",
            "cheesecake",
            "The email field should be a valid email address!",
        ),
        ("a@mail.com", "short", "cheesecake", "Password at least 8 symbols"),
        ("a@mail.com", "password1", "", "Favorite cake should not be empty"),
        (
            "a@mail.com",
            "password1",
            "cheese cake 2",
            "Favorite cake should be only alphabetic",
        ),
        // several failures at once report the first rule only
        ("", "short", "", "The email field is required!"),
    ];

    for (email, password, cake, expected) in cases {
        let (status, body) = app.register(email, password, cake).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", expected);
        assert_eq!(body, expected);
    }

    assert_eq!(app.state.store.len(), 1);
}

#[tokio::test]
async fn test_register_missing_fields_are_validated() {
    let app = setup_test_app().await;

    let (status, body) = app
        .send(
            "POST",
            "/user/register",
            None,
            Some(json!({ "email": "a@mail.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "Password at least 8 symbols");
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = setup_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/user/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let (status, body) = app.send_raw(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "could not read params");
}

#[tokio::test]
async fn test_login_returns_token_for_subject() {
    let app = setup_test_app().await;
    app.register("a@mail.com", "password1", "cheesecake").await;

    let (status, token) = app.login("a@mail.com", "password1").await;

    assert_eq!(status, StatusCode::OK);
    let claims = verify_token(&token, &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, "a@mail.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = setup_test_app().await;
    app.register("a@mail.com", "password1", "cheesecake").await;

    let (status, body) = app.login("a@mail.com", "password2").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "invalid login params");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = setup_test_app().await;

    let (status, body) = app.login("ghost@mail.com", "password1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "invalid login params");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = setup_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/user/jwt")
        .body(Body::from("email=a@mail.com"))
        .unwrap();
    let (status, body) = app.send_raw(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "could not read params");
}

#[tokio::test]
async fn test_bootstrap_admin_can_log_in() {
    let app = setup_test_app().await;

    let (status, _) = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);

    let admin = app.state.store.get(ADMIN_EMAIL).unwrap();
    assert_eq!(admin.favorite_cake, "AdminCake");
    assert_eq!(admin.role, cakeshop_models::Role::Admin);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_single_winner() {
    use tower::ServiceExt;

    let app = setup_test_app().await;
    let mut handles = Vec::new();

    for i in 0..8 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .method("POST")
                .uri("/user/register")
                .body(Body::from(
                    json!({
                        "email": "race@mail.com",
                        "password": format!("password{}", i),
                        "favorite_cake": "cheesecake"
                    })
                    .to_string(),
                ))
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}

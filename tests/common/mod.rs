#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cakeshop::router::init_router;
use cakeshop::state::{AppState, init_app_state};
use cakeshop_config::{AdminConfig, CorsConfig, JwtConfig, ServerConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@mail.com";
pub const ADMIN_PASSWORD: &str = "adminadmin";
pub const JWT_SECRET: &str = "integration-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(JWT_SECRET, 3600)
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Fresh store with the bootstrap admin, cheap bcrypt cost, and metrics off.
pub async fn setup_test_app() -> TestApp {
    let server_config = ServerConfig {
        bcrypt_cost: 4,
        metrics_enabled: false,
        ..ServerConfig::default()
    };

    let state = init_app_state(
        test_jwt_config(),
        AdminConfig::new(ADMIN_EMAIL, ADMIN_PASSWORD),
        server_config,
        CorsConfig::default(),
    )
    .await
    .unwrap();

    TestApp {
        router: init_router(state.clone(), None),
        state,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        read_response(response).await
    }

    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        read_response(response).await
    }

    pub async fn register(&self, email: &str, password: &str, cake: &str) -> (StatusCode, String) {
        self.send(
            "POST",
            "/user/register",
            None,
            Some(json!({
                "email": email,
                "password": password,
                "favorite_cake": cake
            })),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, String) {
        self.send(
            "POST",
            "/user/jwt",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Registers an account and returns a token for it.
    pub async fn user_token(&self, email: &str) -> String {
        let (status, _) = self.register(email, "password1", "cheesecake").await;
        assert_eq!(status, StatusCode::CREATED);
        self.token(email, "password1").await
    }

    pub async fn admin_token(&self) -> String {
        self.token(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    pub async fn token(&self, email: &str, password: &str) -> String {
        let (status, token) = self.login(email, password).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", token);
        token
    }

    pub async fn ban(&self, admin_token: &str, email: &str, reason: &str) -> (StatusCode, String) {
        self.send(
            "POST",
            "/admin/ban",
            Some(admin_token),
            Some(json!({ "email": email, "reason": reason })),
        )
        .await
    }

    pub async fn unban(&self, admin_token: &str, email: &str) -> (StatusCode, String) {
        self.send(
            "POST",
            "/admin/unban",
            Some(admin_token),
            Some(json!({ "email": email })),
        )
        .await
    }

    pub async fn inspect(&self, admin_token: &str, email: &str) -> (StatusCode, String) {
        self.send(
            "GET",
            &format!("/admin/inspect?email={}", email),
            Some(admin_token),
            None,
        )
        .await
    }
}

async fn read_response(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

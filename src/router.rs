use crate::docs::ApiDoc;
use crate::middleware::{require_admin, require_user};
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::{init_cake_router, init_users_router};
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use cakeshop_observability::{
    PrometheusHandle, logging_middleware, metrics_middleware, render_metrics,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full route table.
///
/// `/metrics` and the request metrics layer are only mounted when a
/// Prometheus handle is given.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/user",
            init_auth_router().merge(
                init_users_router()
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_user)),
            ),
        )
        .merge(
            init_cake_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_user)),
        )
        .nest(
            "/admin",
            init_admin_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .with_state(state.clone());

    if let Some(handle) = metrics {
        router = router
            .route(
                "/metrics",
                get(move || {
                    let handle = handle.clone();
                    async move { render_metrics(&handle) }
                }),
            )
            .layer(middleware::from_fn(metrics_middleware));
    }

    router
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Wraps each request in an `http_request` span carrying a fresh request id,
/// so events logged by handlers and services inherit it.
///
/// The closing event is `info` for success, `warn` for client errors and
/// `error` for server errors.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = info_span!(
        "http_request",
        request_id = %uuid::Uuid::new_v4(),
        method = %req.method(),
        path = %path
    );

    async move {
        let start = Instant::now();
        debug!("request started");

        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        if response.status().is_server_error() {
            error!(status, latency_ms, "request failed");
        } else if response.status().is_client_error() {
            warn!(status, latency_ms, "request rejected");
        } else {
            info!(status, latency_ms, "request completed");
        }

        response
    }
    .instrument(span)
    .await
}

/// Installs the global subscriber.
///
/// - Console: compact, filtered by `RUST_LOG`, else `LOG_LEVEL` (default `info`)
/// - File: JSON lines, rotated daily under `log_dir`, `info` and above
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. `None` means the log directory could not be
/// created and only console logging is active.
pub fn init_tracing(log_dir: &str) -> Option<WorkerGuard> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cakeshop={level},cakeshop_store={level},cakeshop_auth={level},tower_http=warn,hyper=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let dir_error = std::fs::create_dir_all(log_dir).err();

    let (file_layer, guard) = if dir_error.is_none() {
        let appender = tracing_appender::rolling::daily(log_dir, "cakeshop.json");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        warn!(log_dir = %log_dir, error = %e, "file logging disabled");
    }

    guard
}

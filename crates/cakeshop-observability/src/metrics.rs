use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::time::{Duration, Instant};
use tracing::{error, info};

pub use metrics_exporter_prometheus::PrometheusHandle;

/// Installs the Prometheus recorder and spawns its upkeep task.
///
/// Returns `None` when disabled or when a recorder is already installed.
/// Must be called from inside a tokio runtime.
pub fn init_metrics(enabled: bool) -> Option<PrometheusHandle> {
    if !enabled {
        return None;
    }

    let builder = match PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
        ],
    ) {
        Ok(builder) => builder,
        Err(e) => {
            error!(error = %e, "failed to configure metric buckets");
            return None;
        }
    };

    let handle = match builder.install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "failed to install Prometheus recorder");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    info!("Prometheus metrics enabled at /metrics");
    Some(handle)
}

pub fn render_metrics(handle: &PrometheusHandle) -> String {
    handle.render()
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

// Business metrics helpers

pub fn track_user_registered() {
    counter!("users_registered_total").increment(1);
}

pub fn track_token_issued() {
    counter!("tokens_issued_total").increment(1);
}

/// Failed credential exchange.
pub fn track_token_rejected() {
    counter!("token_requests_rejected_total").increment(1);
}

/// `reason` is one of `unauthorized`, `banned`, `role`.
pub fn track_access_denied(reason: &'static str) {
    counter!("access_denied_total", "reason" => reason).increment(1);
}

/// `action` is `ban` or `unban`.
pub fn track_ban_event(action: &'static str) {
    counter!("ban_events_total", "action" => action).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_none() {
        assert!(init_metrics(false).is_none());
    }

    #[test]
    fn test_tracking_without_recorder_is_noop() {
        track_user_registered();
        track_token_issued();
        track_token_rejected();
        track_access_denied("banned");
        track_ban_event("ban");
    }
}

//! Cakeshop Observability
//!
//! - [`logging`]: subscriber setup (console plus rolling JSON file) and the
//!   per-request logging middleware
//! - [`metrics`]: Prometheus exporter, HTTP metrics middleware, and the
//!   business counters recorded by handlers and the access pipeline
//!
//! Counters are no-ops until [`init_metrics`] installs a recorder, so tests
//! and metric-less deployments can call the `track_*` helpers freely.
//!
//! # Examples
//!
//! ```no_run
//! use cakeshop_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     let _guard = init_tracing("storage/logs");
//!     let _metrics = init_metrics(true);
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, metrics_middleware, render_metrics, track_access_denied,
    track_ban_event, track_token_issued, track_token_rejected, track_user_registered,
};

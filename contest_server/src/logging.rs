//! Structured logging configuration.
//!
//! Installs a `tracing` subscriber. Records emitted by `contest_core`
//! through the `log` facade are forwarded to the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,hyper=warn";

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use contest_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a request the service refused
///
/// Client errors are logged at `warn`, server errors at `error`.
pub fn log_rejected_request(status_code: u16, kind: &str, message: &str) {
    if status_code >= 500 {
        tracing::error!(
            http_status = status_code,
            error_kind = kind,
            "Request failed: {}",
            message
        );
    } else {
        tracing::warn!(
            http_status = status_code,
            error_kind = kind,
            "Request rejected: {}",
            message
        );
    }
}

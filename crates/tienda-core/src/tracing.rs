use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn,sea_orm=warn";

/// Initialize JSON tracing to stdout, filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_DIRECTIVES`]. Repeated calls are ignored, so tests
/// may call it freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}

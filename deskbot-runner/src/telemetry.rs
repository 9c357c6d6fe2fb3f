use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber, honoring `RUST_LOG`.
/// Repeated calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

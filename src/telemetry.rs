use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Verbosity is controlled through the
/// RUST_LOG environment filter; the default level is warn.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

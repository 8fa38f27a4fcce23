use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Call this
/// before [`SystemConfig::from_env`](super::SystemConfig::from_env) so its
/// warnings are emitted.
///
/// ```bash
/// RUST_LOG=debug cargo run                         # Show debug logs
/// RUST_LOG=profile_store::clients=debug cargo run  # Client spans only
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

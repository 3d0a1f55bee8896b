use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ITEM_STORE_LOG=debug`.
pub const LOG_ENV: &str = "ITEM_STORE_LOG";

/// Installs a stderr subscriber so stdout carries only command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

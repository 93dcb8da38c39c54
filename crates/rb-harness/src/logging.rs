use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `RB_LOG=debug`.
pub const LOG_ENV: &str = "RB_LOG";

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// The filter comes from [`LOG_ENV`], falling back to `default` when the
/// variable is unset or malformed. Call once per process.
pub fn init_tracing(default: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

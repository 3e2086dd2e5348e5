use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `equipment_registry=trace`).
pub const ENV_LOG_FILTER: &str = "REGISTRY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber used by the binaries.
///
/// Stdout stays reserved for confirmation lines. Calling this twice is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

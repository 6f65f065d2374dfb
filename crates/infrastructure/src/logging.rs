use ferrous_authority_domain::LoggingConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a subscriber was already installed, which makes repeated calls from
/// tests harmless.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    };

    if installed {
        debug!(level = %config.level, json = config.json, "Logging initialized");
    }
    installed
}

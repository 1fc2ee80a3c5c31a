use tracing_subscriber::{fmt as tfmt, EnvFilter};

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

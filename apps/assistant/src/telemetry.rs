use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs structured logging. `RUST_LOG` wins when set; otherwise only this
/// crate logs, at `config.rust_log`. Safe to call more than once.
pub fn init_tracing(config: &Config) {
    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = result {
        debug!("Tracing subscriber already installed: {e}");
    }
}

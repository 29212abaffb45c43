//! Logging system initialization
//!
//! Sets up a tracing `fmt` subscriber on stderr. The level defaults to INFO and
//! can be overridden through `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();

    // A subscriber may already be installed (tests); keep the existing one
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::info!("Disk Watch v{} started", env!("CARGO_PKG_VERSION"));
    }
}

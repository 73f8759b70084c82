use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output on stderr.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=shkit=debug` or `RUST_LOG=shkit=trace`.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

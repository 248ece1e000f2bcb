use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// `default_directive`.
pub fn init_instrumentation(default_directive: &str) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
            )
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {e}");
        }
    });
}

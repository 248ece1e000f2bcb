use tracing::debug;

/// Installs the ring provider for rustls. Safe to call more than once.
pub fn init_crypto() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

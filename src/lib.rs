pub mod config;
pub mod content;
pub mod fetch;
pub mod html;
pub mod logging;
pub mod output;
pub mod render;
pub mod scoring;
pub mod tips;

/// Install the ring crypto provider for rustls. Safe to call more than once.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

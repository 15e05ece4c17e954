//! `env_logger`-based logging with safe handling of key material

use log::info;
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging bootstrap and helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once per process.
    ///
    /// Levels come from `RUST_LOG`, for example `RUST_LOG=tessera_jwt=debug`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for tests; repeated calls are harmless.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short SHA-256 fingerprint of a secret, safe to log.
    #[must_use]
    pub fn key_fingerprint(secret: &[u8]) -> String {
        let hex_hash = hex::encode(Sha256::digest(secret));
        format!("#{}", &hex_hash[..12])
    }

    /// Log that a token was issued without logging its contents.
    pub fn log_token_issued(secret: &[u8], token_len: usize) {
        info!(
            "Token issued (key: {}, length: {token_len})",
            Self::key_fingerprint(secret)
        );
    }
}

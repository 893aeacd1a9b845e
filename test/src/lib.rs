// Licensed under the Apache-2.0 license

//! Helpers shared by the byte-stream SHA-256 integration tests.

use sha2::Digest;
use sha256_hw_model::{DefaultHwModel, InitParams};
use sha256_stream_api::DIGEST_BYTE_SIZE;
use tracing_subscriber::EnvFilter;

/// Install a log subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Digest computed by the trusted reference implementation.
pub fn reference_digest(data: &[u8]) -> [u8; DIGEST_BYTE_SIZE] {
    sha2::Sha256::digest(data).into()
}

/// A model with default timing, self test already run.
pub fn default_model() -> DefaultHwModel {
    init_tracing();
    sha256_hw_model::new(InitParams::default()).unwrap()
}

/// Bytes `0, 1, 2, ...` wrapping at 256.
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

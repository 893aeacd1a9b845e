// Licensed under the Apache-2.0 license

mod handshake_port;
pub mod prelude;

pub use handshake_port::HandshakePort;

/// Size of the digest burst.
pub const DIGEST_BYTE_SIZE: usize = 32;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The engine is processing a block or emitting a digest
    #[error("engine is busy")]
    Busy,
    /// Busy or output-valid did not change in time
    #[error("timed out after {cycles} cycles")]
    Timeout { cycles: u32 },
    /// Output-valid dropped before all digest bytes were seen
    #[error("output-valid dropped after {received} digest bytes")]
    TruncatedDigest { received: usize },
    /// The engine latched a handshake violation; reset is required
    #[error("engine reported a handshake protocol violation")]
    ProtocolFault,
}

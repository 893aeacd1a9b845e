/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the byte-stream SHA-256 peripheral.

--*/

mod block_buffer;
mod hash_sha256_stream;

pub use block_buffer::{BlockBuffer, WordAssembler};
pub use hash_sha256_stream::{HashSha256Stream, Sha256StreamConfig, BLOCK_TICKS};

/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the SHA-256 block engine used by the emulated
    byte-stream peripheral.

--*/

mod kat;
mod padding;
mod sha256;

pub use kat::{KatError, Sha256Kat};
pub use padding::{pad_final_blocks, FinalBlocks, SHA256_BLOCK_LEN_OFFSET, SHA256_PAD_MARKER};
pub use sha256::{
    block_to_words, digest, expand_schedule, HashState, Sha256, SHA256_BLOCK_BYTE_SIZE,
    SHA256_BLOCK_WORD_SIZE, SHA256_HASH_SIZE, SHA256_SCHEDULE_WORD_SIZE,
};

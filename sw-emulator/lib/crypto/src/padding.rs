/*++

Licensed under the Apache-2.0 license.

File Name:

    padding.rs

Abstract:

    File contains the SHA-256 message padder used at end of message.

--*/

use crate::sha256::SHA256_BLOCK_BYTE_SIZE;

/// Offset of the 64-bit big-endian bit length inside the last block.
pub const SHA256_BLOCK_LEN_OFFSET: usize = 56;

/// Marker byte holding the single `1` bit appended after the message.
pub const SHA256_PAD_MARKER: u8 = 0b1000_0000;

/// The one or two blocks that complete a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalBlocks {
    blocks: [[u8; SHA256_BLOCK_BYTE_SIZE]; 2],
    count: usize,
}

impl FinalBlocks {
    /// Number of blocks (1 or 2).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, idx: usize) -> Option<&[u8; SHA256_BLOCK_BYTE_SIZE]> {
        self.blocks[..self.count].get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; SHA256_BLOCK_BYTE_SIZE]> {
        self.blocks[..self.count].iter()
    }
}

fn set_block_len(bit_len: u64, block: &mut [u8; SHA256_BLOCK_BYTE_SIZE]) {
    block[SHA256_BLOCK_LEN_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
}

/// Pad the trailing partial block of a message.
///
/// # Arguments
///
/// * `partial` - Bytes of the message not yet compressed (0..=63 bytes)
/// * `bit_len` - Total message length in bits, modulo 2^64
///
/// # Panics
///
/// If `partial` holds a whole block; full blocks must be compressed before
/// finalization.
pub fn pad_final_blocks(partial: &[u8], bit_len: u64) -> FinalBlocks {
    assert!(
        partial.len() < SHA256_BLOCK_BYTE_SIZE,
        "partial block holds {} bytes",
        partial.len()
    );

    let mut blocks = [[0u8; SHA256_BLOCK_BYTE_SIZE]; 2];
    blocks[0][..partial.len()].copy_from_slice(partial);
    blocks[0][partial.len()] = SHA256_PAD_MARKER;

    // The length needs 8 free bytes after the marker.
    if partial.len() < SHA256_BLOCK_LEN_OFFSET {
        set_block_len(bit_len, &mut blocks[0]);
        FinalBlocks { blocks, count: 1 }
    } else {
        set_block_len(bit_len, &mut blocks[1]);
        FinalBlocks { blocks, count: 2 }
    }
}

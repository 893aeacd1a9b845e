/*++

Licensed under the Apache-2.0 license.

File Name:

    block_buffer.rs

Abstract:

    File contains the word assembler and the block buffer that collect
    message bytes into 64 byte compression blocks.

--*/

use sha256_emu_crypto::{SHA256_BLOCK_BYTE_SIZE, SHA256_BLOCK_WORD_SIZE};
use zeroize::Zeroize;

/// Packs bytes, most significant first, into 32-bit words.
#[derive(Default, Zeroize)]
pub struct WordAssembler {
    bytes: [u8; 4],
    count: usize,
}

impl WordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a byte. Returns the word once four bytes have been collected.
    pub fn push(&mut self, byte: u8) -> Option<u32> {
        self.bytes[self.count] = byte;
        self.count += 1;
        if self.count < self.bytes.len() {
            return None;
        }
        let word = u32::from_be_bytes(self.bytes);
        self.clear();
        Some(word)
    }

    /// Bytes of the word collected so far.
    pub fn pending(&self) -> &[u8] {
        &self.bytes[..self.count]
    }

    pub fn clear(&mut self) {
        self.zeroize();
    }
}

/// Holds one compression block of 16 words plus the word being assembled.
#[derive(Default, Zeroize)]
pub struct BlockBuffer {
    words: [u32; SHA256_BLOCK_WORD_SIZE],
    word_count: usize,
    assembler: WordAssembler,
}

impl BlockBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message byte. Returns true when the block is full.
    ///
    /// A full block must be drained with [`BlockBuffer::take_block`] before
    /// the next byte is pushed.
    pub fn push_byte(&mut self, byte: u8) -> bool {
        debug_assert!(!self.is_full());
        if let Some(word) = self.assembler.push(byte) {
            self.words[self.word_count] = word;
            self.word_count += 1;
        }
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.word_count == SHA256_BLOCK_WORD_SIZE
    }

    /// Number of message bytes held.
    pub fn len(&self) -> usize {
        self.word_count * 4 + self.assembler.pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the held bytes into `out` and return how many were written.
    fn copy_bytes(&self, out: &mut [u8; SHA256_BLOCK_BYTE_SIZE]) -> usize {
        for (chunk, word) in out.chunks_exact_mut(4).zip(&self.words[..self.word_count]) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        let pending = self.assembler.pending();
        let offset = self.word_count * 4;
        out[offset..offset + pending.len()].copy_from_slice(pending);
        offset + pending.len()
    }

    /// Hand out the full block and empty the buffer.
    pub fn take_block(&mut self) -> [u8; SHA256_BLOCK_BYTE_SIZE] {
        let mut block = [0u8; SHA256_BLOCK_BYTE_SIZE];
        self.copy_bytes(&mut block);
        self.clear();
        block
    }

    /// Hand out the trailing partial block for padding and empty the buffer.
    ///
    /// Returns the bytes in the first `len` positions of the array.
    pub fn take_partial(&mut self) -> ([u8; SHA256_BLOCK_BYTE_SIZE], usize) {
        let mut block = [0u8; SHA256_BLOCK_BYTE_SIZE];
        let len = self.copy_bytes(&mut block);
        self.clear();
        (block, len)
    }

    pub fn clear(&mut self) {
        self.zeroize();
    }
}

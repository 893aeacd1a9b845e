/*++

Licensed under the Apache-2.0 license.

File Name:

    sha256.rs

Abstract:

    File contains the SHA-256 message schedule expansion, the 64 round
    compression function and the running hash state.

--*/

use zeroize::Zeroize;

use crate::padding::pad_final_blocks;

pub const SHA256_BLOCK_BYTE_SIZE: usize = 64;

pub const SHA256_BLOCK_WORD_SIZE: usize = 16;

pub const SHA256_HASH_SIZE: usize = 32;

pub const SHA256_SCHEDULE_WORD_SIZE: usize = 64;

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes.
#[rustfmt::skip]
const K: [u32; SHA256_SCHEDULE_WORD_SIZE] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash value: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes.
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Load a 64 byte block as 16 big-endian words.
pub fn block_to_words(block: &[u8; SHA256_BLOCK_BYTE_SIZE]) -> [u32; SHA256_BLOCK_WORD_SIZE] {
    let mut words = [0u32; SHA256_BLOCK_WORD_SIZE];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Expand a 16 word block into the 64 word message schedule.
///
/// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]` for `t` in `16..64`,
/// all additions modulo 2^32.
pub fn expand_schedule(
    block: &[u32; SHA256_BLOCK_WORD_SIZE],
) -> [u32; SHA256_SCHEDULE_WORD_SIZE] {
    let mut w = [0u32; SHA256_SCHEDULE_WORD_SIZE];
    w[..SHA256_BLOCK_WORD_SIZE].copy_from_slice(block);
    for t in SHA256_BLOCK_WORD_SIZE..SHA256_SCHEDULE_WORD_SIZE {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// The eight 32-bit accumulators carried from block to block.
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
pub struct HashState([u32; 8]);

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// Hash state loaded with the SHA-256 initial value.
    pub const fn new() -> Self {
        Self(IV)
    }

    /// Reload the initial value.
    pub fn reset(&mut self) {
        self.0 = IV;
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Run the 64 rounds of the compression function over `block` and fold
    /// the result back into the state.
    pub fn compress(&mut self, block: &[u8; SHA256_BLOCK_BYTE_SIZE]) {
        let mut w = expand_schedule(&block_to_words(block));

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        for t in 0..SHA256_SCHEDULE_WORD_SIZE {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (acc, v) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *acc = acc.wrapping_add(v);
        }

        w.zeroize();
    }

    /// Serialize the state: word 0 first, each word most significant byte first.
    pub fn digest(&self) -> [u8; SHA256_HASH_SIZE] {
        let mut digest = [0u8; SHA256_HASH_SIZE];
        for (out, word) in digest.chunks_exact_mut(4).zip(self.0) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

/// Block-level SHA-256 engine, as driven by the peripheral.
#[derive(Default)]
pub struct Sha256 {
    state: HashState,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: HashState::new(),
        }
    }

    /// Start a new message.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Absorb one complete (already padded, if final) block.
    pub fn update(&mut self, block: &[u8; SHA256_BLOCK_BYTE_SIZE]) {
        self.state.compress(block);
    }

    /// Copy the current hash value into `out`.
    ///
    /// At most `hash_len()` bytes are written.
    pub fn hash(&self, out: &mut [u8]) {
        let digest = self.state.digest();
        let len = out.len().min(digest.len());
        out[..len].copy_from_slice(&digest[..len]);
    }

    pub fn hash_len(&self) -> usize {
        SHA256_HASH_SIZE
    }

    pub fn state(&self) -> &HashState {
        &self.state
    }

    /// Overwrite the state with zeros. The engine must be reset before reuse.
    pub fn zeroize(&mut self) {
        self.state.zeroize();
    }
}

/// One-shot software digest of `data`.
pub fn digest(data: &[u8]) -> [u8; SHA256_HASH_SIZE] {
    let mut state = HashState::new();
    let mut chunks = data.chunks_exact(SHA256_BLOCK_BYTE_SIZE);
    for chunk in chunks.by_ref() {
        let mut block = [0u8; SHA256_BLOCK_BYTE_SIZE];
        block.copy_from_slice(chunk);
        state.compress(&block);
    }
    let bit_len = (data.len() as u64).wrapping_mul(8);
    for block in pad_final_blocks(chunks.remainder(), bit_len).iter() {
        state.compress(block);
    }
    state.digest()
}

/*++

Licensed under the Apache-2.0 license.

File Name:

    kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for the SHA-256 engine.

--*/

use crate::padding::pad_final_blocks;
use crate::sha256::{Sha256, SHA256_HASH_SIZE};

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum KatError {
    #[error("SHA-256 KAT digest mismatch for the {0} vector")]
    DigestMismatch(&'static str),
}

#[rustfmt::skip]
const EXPECTED_EMPTY: [u32; 8] = [
    0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b, 0x7852b855,
];

#[rustfmt::skip]
const EXPECTED_ABC: [u32; 8] = [
    0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
];

#[derive(Default, Debug)]
pub struct Sha256Kat {}

impl Sha256Kat {
    /// Run the Known Answer Tests through the block engine.
    ///
    /// Test vector source: FIPS 180-2 appendix B.1 and the empty message.
    pub fn execute(&self, sha: &mut Sha256) -> Result<(), KatError> {
        self.kat_vector(sha, b"", &EXPECTED_EMPTY, "empty")?;
        self.kat_vector(sha, b"abc", &EXPECTED_ABC, "abc")?;
        sha.reset();
        Ok(())
    }

    fn kat_vector(
        &self,
        sha: &mut Sha256,
        data: &[u8],
        expected: &[u32; 8],
        name: &'static str,
    ) -> Result<(), KatError> {
        sha.reset();
        for block in pad_final_blocks(data, data.len() as u64 * 8).iter() {
            sha.update(block);
        }

        let mut digest = [0u8; SHA256_HASH_SIZE];
        sha.hash(&mut digest);

        let matches = digest
            .chunks_exact(4)
            .zip(expected)
            .all(|(bytes, word)| *bytes == word.to_be_bytes());
        if !matches {
            return Err(KatError::DigestMismatch(name));
        }
        Ok(())
    }
}

// Licensed under the Apache-2.0 license

use sha256_hw_model::prelude::*;
use sha256_stream_test::{counting_bytes, default_model, reference_digest};

#[test]
fn test_empty_message() {
    let mut model = default_model();
    let digest = model.digest(b"").unwrap();
    assert_eq!(digest, reference_digest(b""));
    assert_eq!(
        hex::encode(digest),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_abc() {
    let mut model = default_model();
    let digest = model.digest(b"abc").unwrap();
    assert_eq!(digest, reference_digest(b"abc"));
    assert_eq!(
        hex::encode(digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_two_block_nist_vector() {
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    let mut model = default_model();
    assert_eq!(
        hex::encode(model.digest(msg).unwrap()),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_56_bytes_spills_padding() {
    let msg = counting_bytes(56);
    let mut model = default_model();
    assert_eq!(model.digest(&msg).unwrap(), reference_digest(&msg));
}

#[test]
fn test_64_bytes_needs_padding_block() {
    let msg = counting_bytes(64);
    let mut model = default_model();
    assert_eq!(model.digest(&msg).unwrap(), reference_digest(&msg));
}

#[test]
fn test_block_boundary_lengths() {
    let mut model = default_model();
    for len in [0, 1, 3, 4, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1000] {
        let msg = counting_bytes(len);
        let digest = model.digest(&msg).unwrap();
        assert_eq!(digest.len(), DIGEST_BYTE_SIZE);
        assert_eq!(digest, reference_digest(&msg), "length {len}");
    }
}

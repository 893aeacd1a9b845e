// Licensed under the Apache-2.0 license

use sha256_hw_model::prelude::*;
use sha256_stream_test::{default_model, reference_digest};

#[test]
fn test_back_to_back_messages() {
    let messages: [&[u8]; 5] = [b"hello", b"world", b"sha256", b"cocotb", b"verification"];

    let mut model = default_model();
    for msg in messages {
        let digest = model.digest(msg).unwrap();
        assert_eq!(digest, reference_digest(msg), "message {msg:?}");

        // Minimal gap between messages.
        model.wait_for_one_cycle();
        model.wait_for_one_cycle();
    }
    assert_eq!(model.engine().messages_completed(), messages.len() as u64);
}

#[test]
fn test_no_gap_between_messages() {
    let mut model = default_model();
    let first = vec![0x11u8; 100];
    let second = b"abc";
    assert_eq!(model.digest(&first).unwrap(), reference_digest(&first));
    assert_eq!(model.digest(second).unwrap(), reference_digest(second));
    assert_eq!(model.digest(b"").unwrap(), reference_digest(b""));
}

#[test]
fn test_new_message_starts_from_iv() {
    let mut model = default_model();
    // A long message leaves nothing behind for the next one.
    let long = vec![0xa5u8; 1000];
    model.digest(&long).unwrap();
    assert_eq!(model.engine().message_bit_len(), 0);
    assert_eq!(model.digest(b"abc").unwrap(), reference_digest(b"abc"));
}

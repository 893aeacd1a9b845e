// Licensed under the Apache-2.0 license

use sha256_hw_model::prelude::*;
use sha256_stream_test::{counting_bytes, default_model, reference_digest};
use tock_registers::interfaces::Readable;

#[test]
fn test_reset_when_idle_is_harmless() {
    let mut model = default_model();
    model.assert_reset();
    model.assert_reset();
    assert_eq!(model.digest(b"abc").unwrap(), reference_digest(b"abc"));
}

#[test]
fn test_reset_mid_message() {
    let mut model = default_model();
    model.push_bytes(&counting_bytes(100)).unwrap();
    model.assert_reset();
    assert_eq!(model.engine().message_bit_len(), 0);
    assert_eq!(model.digest(b"abc").unwrap(), reference_digest(b"abc"));
}

#[test]
fn test_reset_while_processing_block() {
    let mut model = default_model();
    model.push_bytes(&counting_bytes(64)).unwrap();
    assert!(model.engine().is_busy());
    model.assert_reset();
    assert!(!model.engine().is_busy());
    assert_eq!(model.digest(b"").unwrap(), reference_digest(b""));
}

#[test]
fn test_reset_while_finalizing() {
    let mut model = default_model();
    model.push_bytes(&counting_bytes(60)).unwrap();
    model.finish().unwrap();
    model.assert_reset();
    assert_eq!(model.engine().state_name(), "idle");
    let msg = counting_bytes(60);
    assert_eq!(model.digest(&msg).unwrap(), reference_digest(&msg));
}

#[test]
fn test_reset_mid_burst() {
    let mut model = default_model();
    model.push_bytes(b"discarded").unwrap();
    model.finish().unwrap();
    model
        .step_until(1000, |m| m.outputs().is_set(PinsOut::VALID))
        .unwrap();
    for _ in 0..5 {
        model.wait_for_one_cycle();
    }
    model.assert_reset();
    assert_eq!(model.sample_outputs(), 0);
    assert_eq!(model.digest(b"kept").unwrap(), reference_digest(b"kept"));
}

#[test]
fn test_reset_clears_fault() {
    let mut model = default_model();
    model.push_bytes(&counting_bytes(64)).unwrap();
    assert_eq!(model.try_push_byte(1), Err(ApiError::Busy));
    model.drive_inputs(sha256_emu_types::pins_in_byte(1));
    model.wait_for_one_cycle();
    assert!(model.engine().fault());

    model.assert_reset();
    assert!(!model.engine().fault());
    assert_eq!(model.digest(b"abc").unwrap(), reference_digest(b"abc"));
}

#[test]
fn test_reset_matches_power_up() {
    let msg = counting_bytes(200);

    let mut fresh = default_model();
    let expected = fresh.digest(&msg).unwrap();

    let mut reused = default_model();
    reused.push_bytes(&counting_bytes(77)).unwrap();
    reused.assert_reset();
    assert_eq!(reused.digest(&msg).unwrap(), expected);
    assert_eq!(expected, reference_digest(&msg));
}

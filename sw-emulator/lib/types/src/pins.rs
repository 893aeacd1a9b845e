// Licensed under the Apache-2.0 license

use tock_registers::interfaces::Readable;
use tock_registers::register_bitfields;
use tock_registers::registers::InMemoryRegister;

register_bitfields! [
    u32,

    /// Signals driven by the sender, sampled on every rising edge.
    pub PinsIn [
        DATA OFFSET(0) NUMBITS(8) [],
        VALID OFFSET(8) NUMBITS(1) [],
        END OFFSET(9) NUMBITS(1) [],
        RESET OFFSET(10) NUMBITS(1) [],
    ],

    /// Signals driven by the engine, updated on every rising edge.
    pub PinsOut [
        DATA OFFSET(0) NUMBITS(8) [],
        VALID OFFSET(8) NUMBITS(1) [],
        BUSY OFFSET(9) NUMBITS(1) [],
        FAULT OFFSET(10) NUMBITS(1) [],
    ],
];

/// Latched view of a pin bank.
pub type PinsInReg = InMemoryRegister<u32, PinsIn::Register>;

pub type PinsOutReg = InMemoryRegister<u32, PinsOut::Register>;

/// Pin value presenting `byte` with input-valid asserted.
pub fn pins_in_byte(byte: u8) -> u32 {
    (PinsIn::DATA.val(byte.into()) + PinsIn::VALID::SET).value
}

/// Pin value asserting the end-of-message terminator.
pub fn pins_in_end() -> u32 {
    PinsIn::END::SET.value
}

/// Pin value asserting reset.
pub fn pins_in_reset() -> u32 {
    PinsIn::RESET::SET.value
}

/// Pin value with every input deasserted.
pub const PINS_IN_IDLE: u32 = 0;

/// Load a raw pin value into a register so fields can be decoded.
pub fn decode_pins_out(raw: u32) -> PinsOutReg {
    PinsOutReg::new(raw)
}

/// Data byte carried by a raw output pin value.
pub fn pins_out_data(raw: u32) -> u8 {
    decode_pins_out(raw).read(PinsOut::DATA) as u8
}

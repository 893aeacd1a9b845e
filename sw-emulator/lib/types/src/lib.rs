// Licensed under the Apache-2.0 license

mod pins;

pub use pins::{
    decode_pins_out, pins_in_byte, pins_in_end, pins_in_reset, pins_out_data, PinsIn, PinsInReg,
    PinsOut, PinsOutReg, PINS_IN_IDLE,
};

// Licensed under the Apache-2.0 license

use sha256_emu_types::{
    pins_in_byte, pins_in_end, pins_in_reset, PinsOut, PinsOutReg, PINS_IN_IDLE,
};
use tock_registers::interfaces::Readable;
use tracing::debug;

use crate::{ApiError, DIGEST_BYTE_SIZE};

/// Access to the pins of a byte-stream SHA-256 engine.
///
/// Implementors provide pin access and a way to advance the clock; the
/// handshake itself is implemented by the provided methods.
pub trait HandshakePort {
    /// Cycles to wait for busy to clear or for the digest before giving up.
    const MAX_WAIT_CYCLES: u32;

    /// Drive the input pins. The value is sampled on the next clock edge.
    fn drive_inputs(&mut self, pins: u32);

    /// Read the output pins as of the most recent clock edge.
    fn sample_outputs(&mut self) -> u32;

    /// Advance the clock by one rising edge.
    fn wait_for_one_cycle(&mut self);

    fn outputs(&mut self) -> PinsOutReg {
        PinsOutReg::new(self.sample_outputs())
    }

    /// Pulse reset for one edge, discarding any message in flight.
    fn assert_reset(&mut self) {
        self.drive_inputs(pins_in_reset());
        self.wait_for_one_cycle();
        self.drive_inputs(PINS_IN_IDLE);
    }

    /// Hold the inputs idle until busy deasserts.
    fn wait_until_ready(&mut self) -> Result<(), ApiError> {
        let mut timeout_cycles = Self::MAX_WAIT_CYCLES;
        while self.outputs().is_set(PinsOut::BUSY) {
            if timeout_cycles == 0 {
                return Err(ApiError::Timeout {
                    cycles: Self::MAX_WAIT_CYCLES,
                });
            }
            self.drive_inputs(PINS_IN_IDLE);
            self.wait_for_one_cycle();
            timeout_cycles -= 1;
        }
        Ok(())
    }

    /// Present one byte if the engine can take it this cycle.
    ///
    /// Returns `Err(ApiError::Busy)` without touching the pins while busy.
    fn try_push_byte(&mut self, byte: u8) -> Result<(), ApiError> {
        let outputs = self.outputs();
        if outputs.is_set(PinsOut::FAULT) {
            return Err(ApiError::ProtocolFault);
        }
        if outputs.is_set(PinsOut::BUSY) {
            return Err(ApiError::Busy);
        }
        self.drive_inputs(pins_in_byte(byte));
        self.wait_for_one_cycle();
        self.drive_inputs(PINS_IN_IDLE);
        Ok(())
    }

    /// Present one byte, waiting out backpressure.
    fn push_byte(&mut self, byte: u8) -> Result<(), ApiError> {
        match self.try_push_byte(byte) {
            Err(ApiError::Busy) => {
                self.wait_until_ready()?;
                self.try_push_byte(byte)
            }
            res => res,
        }
    }

    fn push_bytes(&mut self, data: &[u8]) -> Result<(), ApiError> {
        for &byte in data {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Signal end of message. The engine stays busy until the digest is out.
    fn finish(&mut self) -> Result<(), ApiError> {
        self.wait_until_ready()?;
        if self.outputs().is_set(PinsOut::FAULT) {
            return Err(ApiError::ProtocolFault);
        }
        self.drive_inputs(pins_in_end());
        self.wait_for_one_cycle();
        self.drive_inputs(PINS_IN_IDLE);
        Ok(())
    }

    /// Wait for output-valid and collect the 32 byte digest burst.
    fn read_digest(&mut self) -> Result<[u8; DIGEST_BYTE_SIZE], ApiError> {
        let mut timeout_cycles = Self::MAX_WAIT_CYCLES;
        while !self.outputs().is_set(PinsOut::VALID) {
            if timeout_cycles == 0 {
                return Err(ApiError::Timeout {
                    cycles: Self::MAX_WAIT_CYCLES,
                });
            }
            self.wait_for_one_cycle();
            timeout_cycles -= 1;
        }

        let mut digest = [0u8; DIGEST_BYTE_SIZE];
        for (received, byte) in digest.iter_mut().enumerate() {
            let outputs = self.outputs();
            if !outputs.is_set(PinsOut::VALID) {
                return Err(ApiError::TruncatedDigest { received });
            }
            *byte = outputs.read(PinsOut::DATA) as u8;
            self.wait_for_one_cycle();
        }
        Ok(digest)
    }

    /// Hash one complete message.
    fn digest(&mut self, data: &[u8]) -> Result<[u8; DIGEST_BYTE_SIZE], ApiError> {
        debug!(len = data.len(), "hashing message over the handshake port");
        self.push_bytes(data)?;
        self.finish()?;
        self.read_digest()
    }
}

/*++

Licensed under the Apache-2.0 license.

File Name:

    hash_sha256_stream.rs

Abstract:

    File contains the byte-stream SHA-256 peripheral: a handshake controller
    that accepts one message byte per clock edge under a busy/backpressure
    signal and streams the 32 byte digest back one byte per edge.

--*/

use sha256_emu_bus::{ActionHandle, Clock, Peripheral, Timer};
use sha256_emu_crypto::{
    pad_final_blocks, FinalBlocks, KatError, Sha256, Sha256Kat, SHA256_HASH_SIZE,
};
use sha256_emu_types::{PinsIn, PinsInReg, PinsOut, PinsOutReg};
use smlang::statemachine;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use crate::block_buffer::BlockBuffer;

/// The number of clock cycles a block compression keeps the engine busy:
/// one per round plus one to load the schedule.
pub const BLOCK_TICKS: u64 = 65;

/// Peripheral configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sha256StreamConfig {
    /// Cycles each block compression holds busy. Values below 1 behave as 1.
    pub block_ticks: u64,
}

impl Default for Sha256StreamConfig {
    fn default() -> Self {
        Self {
            block_ticks: BLOCK_TICKS,
        }
    }
}

/// Byte-stream SHA-256 Peripheral
pub struct HashSha256Stream {
    /// Input pins as last driven by the sender
    pins_in: PinsInReg,

    config: Sha256StreamConfig,

    /// Handshake state machine
    state_machine: StateMachine<Context>,
}

impl HashSha256Stream {
    /// Create a new instance of the byte-stream SHA-256 engine
    pub fn new(clock: &Clock, config: Sha256StreamConfig) -> Self {
        Self {
            pins_in: PinsInReg::new(0),
            config,
            state_machine: StateMachine::new(Context::new(Timer::new(clock), config)),
        }
    }

    /// Drive the input pins. The value is sampled on the next clock edge.
    pub fn set_pins_in(&mut self, val: u32) {
        self.pins_in.set(val);
    }

    pub fn pins_in(&self) -> u32 {
        self.pins_in.get()
    }

    /// Output pins as of the most recent clock edge.
    pub fn pins_out(&self) -> u32 {
        self.state_machine.context.outputs.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state_machine.context.outputs.is_set(PinsOut::BUSY)
    }

    pub fn fault(&self) -> bool {
        self.state_machine.context.outputs.is_set(PinsOut::FAULT)
    }

    /// Name of the current handshake state.
    pub fn state_name(&self) -> &'static str {
        state_name(self.state_machine.state())
    }

    /// Bits of the in-flight message accepted so far.
    pub fn message_bit_len(&self) -> u64 {
        self.state_machine.context.bit_len
    }

    /// Bytes accepted since power-on or the last reset.
    pub fn bytes_accepted(&self) -> u64 {
        self.state_machine.context.bytes_accepted
    }

    /// Digests emitted since power-on or the last reset.
    pub fn messages_completed(&self) -> u64 {
        self.state_machine.context.messages_completed
    }

    /// Run the known answer tests through the block engine.
    ///
    /// Only allowed while idle; the engine is left reset for a new message.
    pub fn self_test(&mut self) -> Result<(), KatError> {
        debug_assert!(matches!(self.state_machine.state(), States::Idle));
        Sha256Kat::default().execute(&mut self.state_machine.context.sha256)
    }

    fn dispatch(&mut self, event: Events) {
        let from = state_name(self.state_machine.state());
        if self.state_machine.process_event(event).is_err() {
            warn!(state = from, "sha256 stream rejected event");
            return;
        }
        let to = self.state_name();
        if from != to {
            debug!(from, to, "sha256 stream transition");
        }
    }

    fn flag_violation(&mut self, reason: &'static str) {
        warn!(
            state = self.state_name(),
            pins_in = self.pins_in.get(),
            reason,
            "sha256 stream protocol violation"
        );
        self.state_machine
            .context
            .outputs
            .modify(PinsOut::FAULT::SET);
    }

    /// Called by the clock on every rising edge
    fn poll(&mut self) {
        let inputs = PinsInReg::new(self.pins_in.get());

        if inputs.is_set(PinsIn::RESET) {
            self.warm_reset();
            return;
        }

        let valid = inputs.is_set(PinsIn::VALID);
        let end = inputs.is_set(PinsIn::END);

        match self.state_machine.state() {
            States::Idle | States::Receiving => match (valid, end) {
                (true, true) => self.flag_violation("input-valid and end asserted together"),
                (true, false) => {
                    self.state_machine.context.latched_byte = inputs.read(PinsIn::DATA) as u8;
                    self.dispatch(Events::ByteIn);
                    if self.state_machine.context.block.is_full() {
                        self.dispatch(Events::BlockFull);
                    }
                }
                (false, true) => self.dispatch(Events::EndOfMessage),
                // Stall; the message stays open.
                (false, false) => {}
            },
            States::ProcessingBlock => {
                if valid || end {
                    self.flag_violation("input presented while busy");
                }
                let ctx = &mut self.state_machine.context;
                if ctx.timer.fired(&mut ctx.op_complete_action) {
                    self.dispatch(Events::TimerExpired);
                }
            }
            States::Finalizing => {
                if valid || end {
                    self.flag_violation("input presented while busy");
                }
                let ctx = &mut self.state_machine.context;
                if ctx.timer.fired(&mut ctx.op_complete_action) {
                    if ctx.final_block_pending().is_ok() {
                        self.dispatch(Events::TimerExpired);
                    } else {
                        self.dispatch(Events::DigestReady);
                    }
                }
            }
            States::Emitting => {
                if valid || end {
                    self.flag_violation("input presented while busy");
                }
                if self.state_machine.context.out_index < SHA256_HASH_SIZE {
                    self.dispatch(Events::Tick);
                } else {
                    self.dispatch(Events::BurstComplete);
                }
            }
        }
    }

    /// Return to the idle state, discarding any in-flight message
    fn warm_reset(&mut self) {
        debug!(state = self.state_name(), "sha256 stream reset");
        let timer = self.state_machine.context.timer.clone();
        self.state_machine.context.zeroize();
        self.state_machine = StateMachine::new(Context::new(timer, self.config));
    }
}

impl Peripheral for HashSha256Stream {
    fn poll(&mut self) {
        HashSha256Stream::poll(self);
    }

    fn warm_reset(&mut self) {
        HashSha256Stream::warm_reset(self);
    }
}

fn state_name(state: &States) -> &'static str {
    match state {
        States::Idle => "idle",
        States::Receiving => "receiving",
        States::ProcessingBlock => "processing-block",
        States::Finalizing => "finalizing",
        States::Emitting => "emitting",
    }
}

statemachine! {
    transitions: {
        *Idle + ByteIn / accept_byte = Receiving,
        Idle + EndOfMessage / finalize = Finalizing,
        Receiving + ByteIn / accept_byte = Receiving,
        Receiving + BlockFull / compress_block = ProcessingBlock,
        Receiving + EndOfMessage / finalize = Finalizing,
        ProcessingBlock + TimerExpired / release_busy = Receiving,
        // A message whose padding spills over needs a second final block.
        Finalizing + TimerExpired [final_block_pending] / compress_final_block = Finalizing,
        Finalizing + DigestReady / start_emitting = Emitting,
        Emitting + Tick / emit_byte = Emitting,
        Emitting + BurstComplete / end_burst = Idle,
    }
}

struct Context {
    /// Byte sampled from the data pins on the current edge
    latched_byte: u8,

    /// Output pins
    outputs: PinsOutReg,

    /// Partial word and block of the in-flight message
    block: BlockBuffer,

    /// Message length in bits, modulo 2^64
    bit_len: u64,

    /// SHA256 engine
    sha256: Sha256,

    /// Padded final blocks and the index of the next one to compress
    final_blocks: Option<FinalBlocks>,
    next_final: usize,

    /// Digest being serialized and the index of the next byte to drive
    digest: [u8; SHA256_HASH_SIZE],
    out_index: usize,

    /// Timer
    timer: Timer,

    /// Action handle for the operation completion
    op_complete_action: Option<ActionHandle>,

    block_ticks: u64,

    bytes_accepted: u64,
    messages_completed: u64,
}

impl Context {
    fn new(timer: Timer, config: Sha256StreamConfig) -> Self {
        Context {
            latched_byte: 0,
            outputs: PinsOutReg::new(0),
            block: BlockBuffer::new(),
            bit_len: 0,
            sha256: Sha256::new(),
            final_blocks: None,
            next_final: 0,
            digest: [0; SHA256_HASH_SIZE],
            out_index: 0,
            timer,
            op_complete_action: None,
            block_ticks: config.block_ticks,
            bytes_accepted: 0,
            messages_completed: 0,
        }
    }

    fn set_busy(&mut self) {
        self.outputs.modify(PinsOut::BUSY::SET);
    }

    fn schedule_completion(&mut self) {
        // Schedule a future call to poll() to complete the operation.
        self.op_complete_action = Some(self.timer.schedule_poll_in(self.block_ticks));
    }

    fn compress_next_final(&mut self) {
        if let Some(block) = self
            .final_blocks
            .as_ref()
            .and_then(|blocks| blocks.get(self.next_final))
        {
            self.sha256.update(block);
            self.next_final += 1;
            self.schedule_completion();
        }
    }

    /// Clear everything that belongs to one message.
    fn clear_message(&mut self) {
        self.block.clear();
        self.bit_len = 0;
        self.sha256.reset();
        self.final_blocks = None;
        self.next_final = 0;
        self.digest.zeroize();
        self.out_index = 0;
        self.op_complete_action = None;
    }

    fn zeroize(&mut self) {
        self.clear_message();
        self.sha256.zeroize();
        self.latched_byte = 0;
        self.outputs.set(0);
    }
}

impl StateMachineContext for Context {
    fn final_block_pending(&mut self) -> Result<(), ()> {
        match &self.final_blocks {
            Some(blocks) if self.next_final < blocks.len() => Ok(()),
            _ => Err(()),
        }
    }

    fn accept_byte(&mut self) {
        let byte = self.latched_byte;
        self.block.push_byte(byte);
        self.bit_len = self.bit_len.wrapping_add(8);
        self.bytes_accepted += 1;
        trace!(byte, bit_len = self.bit_len, "sha256 stream accepted byte");
    }

    fn compress_block(&mut self) {
        let block = self.block.take_block();
        self.sha256.update(&block);
        self.set_busy();
        self.schedule_completion();
    }

    fn release_busy(&mut self) {
        self.outputs.modify(PinsOut::BUSY::CLEAR);
    }

    fn finalize(&mut self) {
        let (partial, len) = self.block.take_partial();
        self.final_blocks = Some(pad_final_blocks(&partial[..len], self.bit_len));
        self.next_final = 0;
        self.set_busy();
        self.compress_next_final();
        debug!(
            bit_len = self.bit_len,
            final_blocks = self.final_blocks.as_ref().map_or(0, FinalBlocks::len),
            "sha256 stream finalizing"
        );
    }

    fn compress_final_block(&mut self) {
        self.compress_next_final();
    }

    fn start_emitting(&mut self) {
        self.sha256.hash(&mut self.digest);
        self.final_blocks = None;
        self.out_index = 0;
        self.emit_byte();
    }

    fn emit_byte(&mut self) {
        let byte = self.digest[self.out_index];
        self.outputs
            .modify(PinsOut::DATA.val(byte.into()) + PinsOut::VALID::SET);
        self.out_index += 1;
    }

    fn end_burst(&mut self) {
        self.outputs
            .modify(PinsOut::DATA.val(0) + PinsOut::VALID::CLEAR + PinsOut::BUSY::CLEAR);
        self.messages_completed += 1;
        debug!(
            messages_completed = self.messages_completed,
            "sha256 stream digest emitted"
        );
        self.clear_message();
    }
}

// Licensed under the Apache-2.0 license

use sha256_emu_bus::Clock;
use sha256_emu_periph::HashSha256Stream;
use sha256_stream_api::HandshakePort;
use tracing::info;

use crate::{InitParams, ModelError};

/// Software model of the byte-stream engine, clocked one edge at a time.
pub struct ModelEmulated {
    clock: Clock,
    engine: HashSha256Stream,
}

impl ModelEmulated {
    pub fn new(params: InitParams) -> Result<Self, ModelError> {
        let clock = Clock::new();
        let mut engine = HashSha256Stream::new(&clock, params.config);
        if params.run_kat {
            engine.self_test()?;
            info!("sha256 stream self test passed");
        }
        Ok(Self { clock, engine })
    }

    /// Edges elapsed since the model was created.
    pub fn cycle_count(&self) -> u64 {
        self.clock.now()
    }

    pub fn step(&mut self) {
        self.clock
            .increment_and_process_timer_actions(1, &mut self.engine);
    }

    /// Step until `predicate` holds, for at most `max_cycles` edges.
    pub fn step_until(
        &mut self,
        max_cycles: u64,
        mut predicate: impl FnMut(&mut Self) -> bool,
    ) -> Result<(), ModelError> {
        for _ in 0..max_cycles {
            if predicate(self) {
                return Ok(());
            }
            self.step();
        }
        if predicate(self) {
            Ok(())
        } else {
            Err(ModelError::Timeout(max_cycles))
        }
    }

    pub fn engine(&self) -> &HashSha256Stream {
        &self.engine
    }
}

impl HandshakePort for ModelEmulated {
    const MAX_WAIT_CYCLES: u32 = 400000;

    fn drive_inputs(&mut self, pins: u32) {
        self.engine.set_pins_in(pins);
    }

    fn sample_outputs(&mut self) -> u32 {
        self.engine.pins_out()
    }

    fn wait_for_one_cycle(&mut self) {
        self.step();
    }
}

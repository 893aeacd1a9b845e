/*++

Licensed under the Apache-2.0 license.

File Name:

    clock.rs

Abstract:

    File contains the emulated clock and the timers peripherals use to
    schedule work a fixed number of cycles in the future.

--*/

use std::cell::Cell;
use std::rc::Rc;

use crate::Peripheral;

struct ClockImpl {
    now: Cell<u64>,
    next_action_id: Cell<u64>,
}

/// Emulated clock. Every increment is one rising edge.
pub struct Clock {
    clock: Rc<ClockImpl>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a clock whose cycle counter starts at zero.
    pub fn new() -> Self {
        Self {
            clock: Rc::new(ClockImpl {
                now: Cell::new(0),
                next_action_id: Cell::new(0),
            }),
        }
    }

    /// Number of edges elapsed since the clock was created.
    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Advance the clock by `delta` edges, polling `periph` on every edge.
    ///
    /// Returns the new value of the cycle counter.
    pub fn increment_and_process_timer_actions(
        &self,
        delta: u64,
        periph: &mut impl Peripheral,
    ) -> u64 {
        for _ in 0..delta {
            self.clock.now.set(self.clock.now.get() + 1);
            periph.poll();
        }
        self.now()
    }
}

/// Opaque handle to a scheduled poll. Consumed by [`Timer::fired`].
#[derive(Debug, Eq, PartialEq)]
pub struct ActionHandle {
    id: u64,
    due: u64,
}

impl ActionHandle {
    /// Cycle at which the action fires.
    pub fn due(&self) -> u64 {
        self.due
    }
}

/// A timer bound to a [`Clock`].
#[derive(Clone)]
pub struct Timer {
    clock: Rc<ClockImpl>,
}

impl Timer {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clock.clone(),
        }
    }

    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Schedule the action to fire `ticks` edges from now.
    pub fn schedule_poll_in(&self, ticks: u64) -> ActionHandle {
        let id = self.clock.next_action_id.get();
        self.clock.next_action_id.set(id.wrapping_add(1));
        ActionHandle {
            id,
            due: self.now().saturating_add(ticks),
        }
    }

    /// Returns true (and clears `action`) if the scheduled action is due.
    pub fn fired(&self, action: &mut Option<ActionHandle>) -> bool {
        match action {
            Some(handle) if handle.due <= self.now() => {
                *action = None;
                true
            }
            _ => false,
        }
    }
}

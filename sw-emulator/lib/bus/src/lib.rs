/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the clocking primitives shared by emulated
    peripherals.

--*/

mod clock;

pub use clock::{ActionHandle, Clock, Timer};

/// A device driven by the emulated clock.
pub trait Peripheral {
    /// Called once per rising edge of the clock.
    fn poll(&mut self);

    /// Return the device to its power-on state.
    fn warm_reset(&mut self) {}
}

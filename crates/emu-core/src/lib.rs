//! Core traits and types shared by the emulated chips.
//!
//! A CPU owns exactly one bus and drives it one instruction at a time. The
//! bus decides what lives at each address.

mod bus;
mod cpu;
mod observable;
mod ticks;

pub use bus::{Bus, BusError, SimpleBus};
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use ticks::Ticks;

//! CPU core trait.

/// A CPU core.
///
/// The CPU owns its bus and advances one whole instruction per `step()`.
/// Nothing is left half-executed between calls, so a driver can stop at any
/// step boundary simply by not calling `step()` again.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Error returned when an instruction cannot complete.
    type Error;

    /// Execute exactly one instruction.
    ///
    /// Returns the number of clock cycles the instruction took.
    fn step(&mut self) -> Result<u32, Self::Error>;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Reset the CPU to its initial register state.
    fn reset(&mut self);
}

//! Errors returned by the CPU and memory bus.

use emu_core::BusError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A write targeted ROM. The bus is unchanged.
    #[error("write to read-only address ${address:04X}")]
    WriteToReadOnlyRegion { address: u16 },

    /// A ROM image larger than the ROM region. Nothing was copied.
    #[error("ROM image is {size} bytes, capacity is {capacity} bytes")]
    RomTooLarge { size: usize, capacity: usize },

    /// The opcode fetched from `pc` has no implementation.
    ///
    /// PC has already moved past the opcode byte; nothing else changed.
    #[error("unimplemented opcode ${opcode:02X} at ${pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
}

impl From<BusError> for Error {
    fn from(err: BusError) -> Self {
        match err {
            BusError::ReadOnly { address } => Self::WriteToReadOnlyRegion { address },
        }
    }
}

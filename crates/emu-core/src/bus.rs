//! Memory bus interface.

use thiserror::Error;

/// Failure reported by a bus write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// The address belongs to a write-protected region. Nothing was stored.
    #[error("write to read-only address ${address:04X}")]
    ReadOnly { address: u16 },
}

/// Memory bus interface.
///
/// CPUs access memory through this trait. The bus handles address decoding
/// and routing to the appropriate region.
///
/// Reads never fail: addresses with nothing behind them return the open-bus
/// value. Writes fail only when the target region is write-protected.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8) -> Result<(), BusError>;
}

/// Flat 64 KiB RAM bus.
///
/// Every address is writable and nothing is mirrored. Used by test harnesses
/// that need to place code and data anywhere in the address space.
pub struct SimpleBus {
    ram: Box<[u8; 0x10000]>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
        }
    }

    /// Copy `data` into RAM starting at `address`, wrapping at $FFFF.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        let mut addr = address;
        for &byte in data {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Read a byte without going through the `Bus` trait.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) -> Result<(), BusError> {
        self.ram[address as usize] = value;
        Ok(())
    }
}

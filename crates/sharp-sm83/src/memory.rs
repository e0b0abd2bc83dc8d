//! DMG memory bus.
//!
//! Layout:
//! - $0000-$7FFF: ROM (writes rejected)
//! - $8000-$9FFF: Video RAM
//! - $C000-$DFFF: Work RAM
//! - $E000-$FDFF: Echo of $C000-$DDFF
//! - $FF80-$FFFE: High RAM
//! - $FFFF: Interrupt enable register
//!
//! Everything else is open bus: reads return $FF, writes are dropped.

use emu_core::{Bus, BusError, Observable, Value};
use log::debug;

use crate::error::{Error, Result};

pub const ROM_SIZE: usize = 0x8000;
pub const VRAM_SIZE: usize = 0x2000;
pub const WRAM_SIZE: usize = 0x2000;
pub const HRAM_SIZE: usize = 0x7F;

/// Value read from addresses with nothing behind them.
pub const OPEN_BUS: u8 = 0xFF;

const ECHO_OFFSET: u16 = 0x2000;

/// Where an address lands, with the offset into the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Rom(u16),
    Vram(u16),
    /// Work RAM, reached directly or through the echo range.
    Wram(u16),
    Hram(u16),
    InterruptEnable,
    Unmapped,
}

/// Address decoder and storage for the regions the CPU can reach.
pub struct MemoryBus {
    rom: Box<[u8; ROM_SIZE]>,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
}

impl MemoryBus {
    /// Create a bus with every region zero-filled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rom: Box::new([0; ROM_SIZE]),
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
        }
    }

    /// Resolve an address to its region. Total over the 16-bit space.
    #[must_use]
    pub const fn decode(address: u16) -> Region {
        match address {
            0x0000..=0x7FFF => Region::Rom(address),
            0x8000..=0x9FFF => Region::Vram(address - 0x8000),
            0xC000..=0xDFFF => Region::Wram(address - 0xC000),
            0xE000..=0xFDFF => Region::Wram(address - ECHO_OFFSET - 0xC000),
            0xFF80..=0xFFFE => Region::Hram(address - 0xFF80),
            0xFFFF => Region::InterruptEnable,
            _ => Region::Unmapped,
        }
    }

    /// Read a byte without a mutable borrow.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        match Self::decode(address) {
            Region::Rom(offset) => self.rom[offset as usize],
            Region::Vram(offset) => self.vram[offset as usize],
            Region::Wram(offset) => self.wram[offset as usize],
            Region::Hram(offset) => self.hram[offset as usize],
            Region::InterruptEnable => self.ie,
            Region::Unmapped => OPEN_BUS,
        }
    }

    /// Copy a raw ROM image to $0000.
    ///
    /// Bytes past the end of `data` keep whatever they held before.
    pub fn load_rom(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: data.len(),
                capacity: ROM_SIZE,
            });
        }
        self.rom[..data.len()].copy_from_slice(data);
        debug!("loaded {} byte ROM image", data.len());
        Ok(())
    }

    /// ROM contents.
    #[must_use]
    pub fn rom(&self) -> &[u8] {
        &self.rom[..]
    }

    /// Interrupt enable register ($FFFF).
    #[must_use]
    pub const fn ie(&self) -> u8 {
        self.ie
    }

    pub fn set_ie(&mut self, value: u8) {
        self.ie = value;
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MemoryBus {
    fn read(&mut self, address: u16) -> u8 {
        self.peek(address)
    }

    fn write(&mut self, address: u16, value: u8) -> std::result::Result<(), BusError> {
        match Self::decode(address) {
            Region::Rom(_) => return Err(BusError::ReadOnly { address }),
            Region::Vram(offset) => self.vram[offset as usize] = value,
            Region::Wram(offset) => self.wram[offset as usize] = value,
            Region::Hram(offset) => self.hram[offset as usize] = value,
            Region::InterruptEnable => self.ie = value,
            Region::Unmapped => {
                debug!("discarded write ${value:02X} to unmapped ${address:04X}");
            }
        }
        Ok(())
    }
}

/// Fixed query paths. Individual cells are reachable as `mem.XXXX` (hex).
const BUS_QUERY_PATHS: &[&str] = &["ie"];

impl Observable for MemoryBus {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(hex) = path.strip_prefix("mem.") {
            let address = u16::from_str_radix(hex, 16).ok()?;
            return Some(self.peek(address).into());
        }
        match path {
            "ie" => Some(self.ie.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        BUS_QUERY_PATHS
    }
}

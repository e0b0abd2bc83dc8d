//! Sharp SM83 CPU core with the DMG memory bus.
//!
//! Each call to `step()` executes exactly one instruction and returns its
//! cost in T-states.

mod alu;
mod config;
mod cpu;
mod decode;
mod error;
mod flags;
mod memory;
mod registers;

pub use config::{BootState, Sm83Config};
pub use cpu::Sm83;
pub use decode::{Instruction, OPCODE_TABLE, Reg8, Reg16, StackReg, decode};
pub use error::{Error, Result};
pub use flags::{CF, FLAG_MASK, HF, NF, ZF};
pub use memory::{HRAM_SIZE, MemoryBus, OPEN_BUS, ROM_SIZE, Region, VRAM_SIZE, WRAM_SIZE};
pub use registers::Registers;

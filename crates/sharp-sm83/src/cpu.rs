//! SM83 CPU core with per-instruction execution.

mod execute;

use emu_core::{Bus, Cpu, Observable, Ticks, Value};
use log::{debug, trace};

use crate::config::Sm83Config;
use crate::decode::OPCODE_TABLE;
use crate::error::{Error, Result};
use crate::flags::{CF, HF, NF, ZF};
use crate::memory::MemoryBus;
use crate::registers::Registers;

/// Sharp SM83 CPU.
///
/// The CPU owns its bus. Each `step()` fetches, decodes and executes one
/// complete instruction and reports how many T-states it took.
pub struct Sm83<B: Bus = MemoryBus> {
    regs: Registers,
    bus: B,
    config: Sm83Config,
    /// Last opcode fetched.
    opcode: u8,
    /// Total T-states elapsed since creation or reset.
    total_ticks: Ticks,
}

impl Sm83<MemoryBus> {
    /// Create a CPU in the DMG post-boot state with a zero-filled bus.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bus(MemoryBus::new())
    }

    /// Copy a raw ROM image into the bus at $0000.
    pub fn load_rom(&mut self, data: &[u8]) -> Result<()> {
        self.bus.load_rom(data)
    }
}

impl Default for Sm83<MemoryBus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Sm83<B> {
    /// Create a CPU in the DMG post-boot state that owns `bus`.
    pub fn with_bus(bus: B) -> Self {
        Self::with_config(bus, Sm83Config::default())
    }

    pub fn with_config(bus: B, config: Sm83Config) -> Self {
        Self {
            regs: config.boot_state.registers(),
            bus,
            config,
            opcode: 0,
            total_ticks: Ticks::ZERO,
        }
    }

    #[must_use]
    pub const fn regs(&self) -> &Registers {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    #[must_use]
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give up the CPU and return its bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Total T-states elapsed since creation or the last reset.
    #[must_use]
    pub const fn total_ticks(&self) -> Ticks {
        self.total_ticks
    }

    /// Set the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.set_pc(value);
    }

    /// Set the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.regs.set_sp(value);
    }

    /// Read the byte at PC and advance PC.
    fn fetch8(&mut self) -> u8 {
        let pc = self.regs.pc();
        let value = self.bus.read(pc);
        self.regs.set_pc(pc.wrapping_add(1));
        value
    }

    /// Read a little-endian word at PC and advance PC past it.
    fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word: high byte to SP-1, low byte to SP-2.
    ///
    /// Either both bytes land and SP moves, or the bus and SP are left as
    /// they were.
    fn push16(&mut self, value: u16) -> Result<()> {
        let sp = self.regs.sp().wrapping_sub(2);
        let high_addr = sp.wrapping_add(1);
        let [lo, hi] = value.to_le_bytes();

        let previous = self.bus.read(high_addr);
        self.bus.write(high_addr, hi)?;
        if let Err(err) = self.bus.write(sp, lo) {
            // Roll back the high byte
            self.bus.write(high_addr, previous)?;
            return Err(err.into());
        }

        self.regs.set_sp(sp);
        Ok(())
    }

    /// Pop a word: low byte from SP, high byte from SP+1.
    fn pop16(&mut self) -> u16 {
        let sp = self.regs.sp();
        let lo = self.bus.read(sp);
        let hi = self.bus.read(sp.wrapping_add(1));
        self.regs.set_sp(sp.wrapping_add(2));
        u16::from_le_bytes([lo, hi])
    }
}

impl<B: Bus> Cpu for Sm83<B> {
    type Registers = Registers;
    type Error = Error;

    fn step(&mut self) -> Result<u32> {
        let pc = self.regs.pc();
        let opcode = self.fetch8();
        self.opcode = opcode;

        let Some(instruction) = OPCODE_TABLE[opcode as usize] else {
            debug!("unimplemented opcode ${opcode:02X} at ${pc:04X}");
            return Err(Error::UnimplementedOpcode { opcode, pc });
        };

        if let Err(err) = self.execute(instruction) {
            debug!("${pc:04X} {instruction} failed: {err}");
            return Err(err);
        }

        let cycles = instruction.cycles();
        self.total_ticks += cycles;
        trace!(
            "${pc:04X} {opcode:02X} {instruction} ({}B) {cycles}T",
            instruction.encoded_len()
        );
        Ok(cycles)
    }

    fn pc(&self) -> u16 {
        self.regs.pc()
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn reset(&mut self) {
        self.regs = self.config.boot_state.registers();
        self.opcode = 0;
        self.total_ticks = Ticks::ZERO;
    }
}

/// All query paths supported by the SM83.
const SM83_QUERY_PATHS: &[&str] = &[
    // Registers
    "a", "f", "b", "c", "d", "e", "h", "l",
    // Register pairs
    "af", "bc", "de", "hl",
    "sp", "pc",
    // Flags (individual)
    "flags.z", "flags.n", "flags.h", "flags.c",
    // CPU state
    "ticks", "opcode",
];

impl<B: Bus> Observable for Sm83<B> {
    fn query(&self, path: &str) -> Option<Value> {
        let r = &self.regs;
        match path {
            "a" => Some(r.a().into()),
            "f" => Some(r.f().into()),
            "b" => Some(r.b().into()),
            "c" => Some(r.c().into()),
            "d" => Some(r.d().into()),
            "e" => Some(r.e().into()),
            "h" => Some(r.h().into()),
            "l" => Some(r.l().into()),

            "af" => Some(r.af().into()),
            "bc" => Some(r.bc().into()),
            "de" => Some(r.de().into()),
            "hl" => Some(r.hl().into()),
            "sp" => Some(r.sp().into()),
            "pc" => Some(r.pc().into()),

            "flags.z" => Some((r.f() & ZF != 0).into()),
            "flags.n" => Some((r.f() & NF != 0).into()),
            "flags.h" => Some((r.f() & HF != 0).into()),
            "flags.c" => Some((r.f() & CF != 0).into()),

            "ticks" => Some(self.total_ticks.get().into()),
            "opcode" => Some(self.opcode.into()),

            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        SM83_QUERY_PATHS
    }
}

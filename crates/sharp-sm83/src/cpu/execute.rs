//! Instruction execution for the SM83.

use emu_core::Bus;

use crate::alu;
use crate::decode::{Instruction, Reg8, Reg16, StackReg};
use crate::error::Result;
use crate::flags::CF;

use super::Sm83;

impl<B: Bus> Sm83<B> {
    /// Execute a decoded instruction. The opcode byte has been consumed.
    pub(super) fn execute(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            Instruction::Nop => {}

            Instruction::LdImm8(r) => {
                let value = self.fetch8();
                self.set_reg8(r, value)?;
            }

            Instruction::Ld(dst, src) => {
                let value = self.reg8(src);
                self.set_reg8(dst, value)?;
            }

            Instruction::LdImm16(rr) => {
                let value = self.fetch16();
                self.set_reg16(rr, value);
            }

            Instruction::Inc(r) => {
                let result = alu::inc8(self.reg8(r));
                self.set_reg8(r, result.value)?;
                self.regs.set_f((self.regs.f() & CF) | result.flags);
            }

            Instruction::Dec(r) => {
                let result = alu::dec8(self.reg8(r));
                self.set_reg8(r, result.value)?;
                self.regs.set_f((self.regs.f() & CF) | result.flags);
            }

            Instruction::Xor(r) => {
                let operand = self.reg8(r);
                self.xor_a(operand);
            }

            Instruction::XorImm8 => {
                let operand = self.fetch8();
                self.xor_a(operand);
            }

            Instruction::Jp => {
                let target = self.fetch16();
                self.regs.set_pc(target);
            }

            // Offset is relative to the address after the operand
            Instruction::Jr => {
                let offset = self.fetch8() as i8;
                let target = self.regs.pc().wrapping_add_signed(i16::from(offset));
                self.regs.set_pc(target);
            }

            Instruction::Call => {
                let target = self.fetch16();
                self.push16(self.regs.pc())?;
                self.regs.set_pc(target);
            }

            Instruction::Ret => {
                let target = self.pop16();
                self.regs.set_pc(target);
            }

            Instruction::Push(rr) => {
                let value = match rr {
                    StackReg::Bc => self.regs.bc(),
                    StackReg::De => self.regs.de(),
                    StackReg::Hl => self.regs.hl(),
                    StackReg::Af => self.regs.af(),
                };
                self.push16(value)?;
            }

            Instruction::Pop(rr) => {
                let value = self.pop16();
                match rr {
                    StackReg::Bc => self.regs.set_bc(value),
                    StackReg::De => self.regs.set_de(value),
                    StackReg::Hl => self.regs.set_hl(value),
                    // set_af drops the low nibble of F
                    StackReg::Af => self.regs.set_af(value),
                }
            }
        }

        Ok(())
    }

    fn xor_a(&mut self, operand: u8) {
        let result = alu::xor8(self.regs.a(), operand);
        self.regs.set_a(result.value);
        self.regs.set_f(result.flags);
    }

    /// Read an 8-bit operand. `(HL)` reads memory.
    fn reg8(&mut self, r: Reg8) -> u8 {
        match r {
            Reg8::B => self.regs.b(),
            Reg8::C => self.regs.c(),
            Reg8::D => self.regs.d(),
            Reg8::E => self.regs.e(),
            Reg8::H => self.regs.h(),
            Reg8::L => self.regs.l(),
            Reg8::IndHl => self.bus.read(self.regs.hl()),
            Reg8::A => self.regs.a(),
        }
    }

    /// Write an 8-bit operand. Only `(HL)` can fail.
    fn set_reg8(&mut self, r: Reg8, value: u8) -> Result<()> {
        match r {
            Reg8::B => self.regs.set_b(value),
            Reg8::C => self.regs.set_c(value),
            Reg8::D => self.regs.set_d(value),
            Reg8::E => self.regs.set_e(value),
            Reg8::H => self.regs.set_h(value),
            Reg8::L => self.regs.set_l(value),
            Reg8::IndHl => self.bus.write(self.regs.hl(), value)?,
            Reg8::A => self.regs.set_a(value),
        }
        Ok(())
    }

    fn set_reg16(&mut self, rr: Reg16, value: u16) {
        match rr {
            Reg16::Bc => self.regs.set_bc(value),
            Reg16::De => self.regs.set_de(value),
            Reg16::Hl => self.regs.set_hl(value),
            Reg16::Sp => self.regs.set_sp(value),
        }
    }
}

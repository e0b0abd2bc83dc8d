//! Opcode decoding.
//!
//! Every opcode maps to an entry in a 256-entry table built at compile time.
//! `None` entries are opcodes the core does not implement.

use std::fmt;

/// 8-bit operand, in encoding order (bits 5-3 or 2-0 of the opcode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address in HL.
    IndHl,
    A,
}

impl Reg8 {
    const fn from_index(index: u8) -> Self {
        match index & 7 {
            0 => Self::B,
            1 => Self::C,
            2 => Self::D,
            3 => Self::E,
            4 => Self::H,
            5 => Self::L,
            6 => Self::IndHl,
            _ => Self::A,
        }
    }

    const fn is_memory(self) -> bool {
        matches!(self, Self::IndHl)
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::H => "H",
            Self::L => "L",
            Self::IndHl => "(HL)",
            Self::A => "A",
        })
    }
}

/// 16-bit register for `LD rr,nn` (00=BC, 01=DE, 10=HL, 11=SP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg16 {
    Bc,
    De,
    Hl,
    Sp,
}

impl Reg16 {
    const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::Sp,
        }
    }
}

/// 16-bit register for PUSH/POP (00=BC, 01=DE, 10=HL, 11=AF).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackReg {
    Bc,
    De,
    Hl,
    Af,
}

impl StackReg {
    const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::Af,
        }
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bc => "BC",
            Self::De => "DE",
            Self::Hl => "HL",
            Self::Sp => "SP",
        })
    }
}

impl fmt::Display for StackReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bc => "BC",
            Self::De => "DE",
            Self::Hl => "HL",
            Self::Af => "AF",
        })
    }
}

/// A decoded instruction. Operand bytes are fetched during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    /// LD r, n
    LdImm8(Reg8),
    /// LD dst, src
    Ld(Reg8, Reg8),
    /// LD rr, nn
    LdImm16(Reg16),
    Inc(Reg8),
    Dec(Reg8),
    /// XOR A, r
    Xor(Reg8),
    /// XOR A, n
    XorImm8,
    /// JP nn
    Jp,
    /// JR e
    Jr,
    /// CALL nn
    Call,
    Ret,
    Push(StackReg),
    Pop(StackReg),
}

impl Instruction {
    /// T-states taken by the instruction.
    #[must_use]
    pub const fn cycles(self) -> u32 {
        match self {
            Self::Nop => 4,
            Self::LdImm8(Reg8::IndHl) => 12,
            Self::LdImm8(_) => 8,
            Self::Ld(dst, src) => {
                if dst.is_memory() || src.is_memory() {
                    8
                } else {
                    4
                }
            }
            Self::LdImm16(_) => 12,
            Self::Inc(Reg8::IndHl) | Self::Dec(Reg8::IndHl) => 12,
            Self::Inc(_) | Self::Dec(_) => 4,
            Self::Xor(Reg8::IndHl) => 8,
            Self::Xor(_) => 4,
            Self::XorImm8 => 8,
            Self::Jp => 16,
            Self::Jr => 12,
            Self::Call => 24,
            Self::Ret => 16,
            Self::Push(_) => 16,
            Self::Pop(_) => 12,
        }
    }

    /// Total encoded length in bytes, opcode included.
    #[must_use]
    pub const fn encoded_len(self) -> u16 {
        match self {
            Self::LdImm8(_) | Self::XorImm8 | Self::Jr => 2,
            Self::LdImm16(_) | Self::Jp | Self::Call => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nop => write!(f, "NOP"),
            Self::LdImm8(r) => write!(f, "LD {r},n"),
            Self::Ld(dst, src) => write!(f, "LD {dst},{src}"),
            Self::LdImm16(rr) => write!(f, "LD {rr},nn"),
            Self::Inc(r) => write!(f, "INC {r}"),
            Self::Dec(r) => write!(f, "DEC {r}"),
            Self::Xor(r) => write!(f, "XOR {r}"),
            Self::XorImm8 => write!(f, "XOR n"),
            Self::Jp => write!(f, "JP nn"),
            Self::Jr => write!(f, "JR e"),
            Self::Call => write!(f, "CALL nn"),
            Self::Ret => write!(f, "RET"),
            Self::Push(rr) => write!(f, "PUSH {rr}"),
            Self::Pop(rr) => write!(f, "POP {rr}"),
        }
    }
}

/// Decode a single opcode.
#[must_use]
pub const fn decode(opcode: u8) -> Option<Instruction> {
    let y = (opcode >> 3) & 7;
    let z = opcode & 7;
    let p = (opcode >> 4) & 3;

    let instruction = match opcode {
        0x00 => Instruction::Nop,

        // LD rr, nn (01=BC, 11=DE, 21=HL, 31=SP)
        0x01 | 0x11 | 0x21 | 0x31 => Instruction::LdImm16(Reg16::from_index(p)),

        // INC r (04=B, 0C=C, 14=D, 1C=E, 24=H, 2C=L, 34=(HL), 3C=A)
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            Instruction::Inc(Reg8::from_index(y))
        }

        // DEC r (05=B, 0D=C, 15=D, 1D=E, 25=H, 2D=L, 35=(HL), 3D=A)
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            Instruction::Dec(Reg8::from_index(y))
        }

        // LD r, n (06=B, 0E=C, 16=D, 1E=E, 26=H, 2E=L, 36=(HL), 3E=A)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            Instruction::LdImm8(Reg8::from_index(y))
        }

        0x18 => Instruction::Jr,

        // HALT sits in the middle of the LD r, r' block
        0x76 => return None,

        // LD r, r'
        0x40..=0x7F => Instruction::Ld(Reg8::from_index(y), Reg8::from_index(z)),

        // XOR r
        0xA8..=0xAF => Instruction::Xor(Reg8::from_index(z)),

        // POP rr (C1=BC, D1=DE, E1=HL, F1=AF)
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Instruction::Pop(StackReg::from_index(p)),

        0xC3 => Instruction::Jp,

        // PUSH rr (C5=BC, D5=DE, E5=HL, F5=AF)
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Instruction::Push(StackReg::from_index(p)),

        0xC9 => Instruction::Ret,
        0xCD => Instruction::Call,
        0xEE => Instruction::XorImm8,

        _ => return None,
    };

    Some(instruction)
}

const fn build_table() -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = decode(opcode as u8);
        opcode += 1;
    }
    table
}

/// Decoded instruction for every opcode.
pub static OPCODE_TABLE: [Option<Instruction>; 256] = build_table();

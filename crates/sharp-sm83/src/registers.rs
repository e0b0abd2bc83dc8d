//! SM83 register set.

use crate::flags::{CF, FLAG_MASK, HF, NF, ZF};

/// SM83 registers.
///
/// Fields are private so the low nibble of F stays zero no matter which
/// path writes it: `set_f`, `set_af` and every flag setter mask it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    a: u8,
    f: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    pc: u16,
}

impl Registers {
    /// Every register zero. Same as `Registers::default()`.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            a: 0,
            f: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            sp: 0,
            pc: 0,
        }
    }

    /// Register values left behind by the DMG boot ROM.
    ///
    /// Lets execution start at the cartridge entry point ($0100) without
    /// running the boot sequence.
    #[must_use]
    pub const fn post_boot() -> Self {
        Self {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }

    #[must_use]
    pub const fn a(&self) -> u8 {
        self.a
    }

    #[must_use]
    pub const fn f(&self) -> u8 {
        self.f
    }

    #[must_use]
    pub const fn b(&self) -> u8 {
        self.b
    }

    #[must_use]
    pub const fn c(&self) -> u8 {
        self.c
    }

    #[must_use]
    pub const fn d(&self) -> u8 {
        self.d
    }

    #[must_use]
    pub const fn e(&self) -> u8 {
        self.e
    }

    #[must_use]
    pub const fn h(&self) -> u8 {
        self.h
    }

    #[must_use]
    pub const fn l(&self) -> u8 {
        self.l
    }

    #[must_use]
    pub const fn sp(&self) -> u16 {
        self.sp
    }

    #[must_use]
    pub const fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Set F. The low nibble is discarded.
    pub fn set_f(&mut self, value: u8) {
        self.f = value & FLAG_MASK;
    }

    pub fn set_b(&mut self, value: u8) {
        self.b = value;
    }

    pub fn set_c(&mut self, value: u8) {
        self.c = value;
    }

    pub fn set_d(&mut self, value: u8) {
        self.d = value;
    }

    pub fn set_e(&mut self, value: u8) {
        self.e = value;
    }

    pub fn set_h(&mut self, value: u8) {
        self.h = value;
    }

    pub fn set_l(&mut self, value: u8) {
        self.l = value;
    }

    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Get AF register pair.
    #[must_use]
    pub const fn af(&self) -> u16 {
        (self.a as u16) << 8 | (self.f & FLAG_MASK) as u16
    }

    /// Get BC register pair.
    #[must_use]
    pub const fn bc(&self) -> u16 {
        (self.b as u16) << 8 | self.c as u16
    }

    /// Get DE register pair.
    #[must_use]
    pub const fn de(&self) -> u16 {
        (self.d as u16) << 8 | self.e as u16
    }

    /// Get HL register pair.
    #[must_use]
    pub const fn hl(&self) -> u16 {
        (self.h as u16) << 8 | self.l as u16
    }

    /// Set AF register pair. The low nibble of F is discarded.
    pub fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.set_f(value as u8);
    }

    /// Set BC register pair.
    pub fn set_bc(&mut self, value: u16) {
        self.b = (value >> 8) as u8;
        self.c = value as u8;
    }

    /// Set DE register pair.
    pub fn set_de(&mut self, value: u16) {
        self.d = (value >> 8) as u8;
        self.e = value as u8;
    }

    /// Set HL register pair.
    pub fn set_hl(&mut self, value: u16) {
        self.h = (value >> 8) as u8;
        self.l = value as u8;
    }

    #[must_use]
    pub const fn flag_z(&self) -> bool {
        self.f & ZF != 0
    }

    #[must_use]
    pub const fn flag_n(&self) -> bool {
        self.f & NF != 0
    }

    #[must_use]
    pub const fn flag_h(&self) -> bool {
        self.f & HF != 0
    }

    #[must_use]
    pub const fn flag_c(&self) -> bool {
        self.f & CF != 0
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.set_flag(ZF, value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.set_flag(NF, value);
    }

    pub fn set_flag_h(&mut self, value: bool) {
        self.set_flag(HF, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.set_flag(CF, value);
    }

    /// Set or clear a single flag bit, leaving the others untouched.
    pub fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.set_f(self.f | flag);
        } else {
            self.set_f(self.f & !flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let regs = Registers::default();
        assert_eq!(regs, Registers::zeroed());
        assert_eq!(regs.af(), 0);
        assert_eq!(regs.bc(), 0);
        assert_eq!(regs.de(), 0);
        assert_eq!(regs.hl(), 0);
        assert_eq!(regs.sp(), 0);
        assert_eq!(regs.pc(), 0);
    }

    #[test]
    fn post_boot_values() {
        let regs = Registers::post_boot();
        assert_eq!(regs.af(), 0x01B0);
        assert_eq!(regs.bc(), 0x0013);
        assert_eq!(regs.de(), 0x00D8);
        assert_eq!(regs.hl(), 0x014D);
        assert_eq!(regs.sp(), 0xFFFE);
        assert_eq!(regs.pc(), 0x0100);
        assert!(regs.flag_z());
        assert!(!regs.flag_n());
        assert!(regs.flag_h());
        assert!(regs.flag_c());
    }

    #[test]
    fn f_low_nibble_always_zero() {
        let mut regs = Registers::default();
        regs.set_f(0xFF);
        assert_eq!(regs.f(), 0xF0);
        regs.set_f(0x0F);
        assert_eq!(regs.f(), 0x00);
        regs.set_af(0x12FF);
        assert_eq!(regs.a(), 0x12);
        assert_eq!(regs.f(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn pairs_split_high_and_low() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0x5678);
        regs.set_hl(0x9ABC);
        assert_eq!((regs.b(), regs.c()), (0x12, 0x34));
        assert_eq!((regs.d(), regs.e()), (0x56, 0x78));
        assert_eq!((regs.h(), regs.l()), (0x9A, 0xBC));

        regs.set_h(0xFF);
        regs.set_l(0x00);
        assert_eq!(regs.hl(), 0xFF00);
    }

    #[test]
    fn each_flag_is_independent() {
        let setters: [(u8, fn(&mut Registers, bool)); 4] = [
            (ZF, Registers::set_flag_z),
            (NF, Registers::set_flag_n),
            (HF, Registers::set_flag_h),
            (CF, Registers::set_flag_c),
        ];

        for (bit, set) in setters {
            let mut regs = Registers::default();
            set(&mut regs, true);
            assert_eq!(regs.f(), bit);

            regs.set_f(0xF0);
            set(&mut regs, false);
            assert_eq!(regs.f(), 0xF0 & !bit);
        }
    }

    #[test]
    fn flag_getters_read_f() {
        let mut regs = Registers::default();
        regs.set_f(ZF | CF);
        assert!(regs.flag_z());
        assert!(!regs.flag_n());
        assert!(!regs.flag_h());
        assert!(regs.flag_c());
    }
}

//! ALU operations for the SM83.
//!
//! Each operation returns the result together with the flags it defines.
//! Flags an instruction leaves unaffected (C for INC/DEC) are merged in by
//! the caller.

use crate::flags::{HF, NF, zero};

/// Result of an ALU operation with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

/// Increment byte. Defines Z, N and H.
#[must_use]
pub fn inc8(a: u8) -> AluResult {
    let result = a.wrapping_add(1);

    let mut flags = zero(result);
    // Carry out of bit 3
    if a & 0x0F == 0x0F {
        flags |= HF;
    }

    AluResult { value: result, flags }
}

/// Decrement byte. Defines Z, N and H.
#[must_use]
pub fn dec8(a: u8) -> AluResult {
    let result = a.wrapping_sub(1);

    let mut flags = NF | zero(result);
    // Borrow into bit 4
    if a & 0x0F == 0x00 {
        flags |= HF;
    }

    AluResult { value: result, flags }
}

/// XOR operation. Defines all four flags; only Z can be set.
#[must_use]
pub fn xor8(a: u8, b: u8) -> AluResult {
    let result = a ^ b;
    AluResult {
        value: result,
        flags: zero(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ZF;

    #[test]
    fn inc_wraps_to_zero_with_half_carry() {
        assert_eq!(inc8(0xFF), AluResult { value: 0x00, flags: ZF | HF });
    }

    #[test]
    fn inc_half_carry_only_on_nibble_overflow() {
        assert_eq!(inc8(0x0F).flags, HF);
        assert_eq!(inc8(0x10).flags, 0);
        assert_eq!(inc8(0x7F), AluResult { value: 0x80, flags: HF });
    }

    #[test]
    fn dec_sets_subtract() {
        assert_eq!(dec8(0x01), AluResult { value: 0x00, flags: ZF | NF });
        assert_eq!(dec8(0x42), AluResult { value: 0x41, flags: NF });
    }

    #[test]
    fn dec_borrows_from_bit_four() {
        assert_eq!(dec8(0x10), AluResult { value: 0x0F, flags: NF | HF });
        assert_eq!(dec8(0x00), AluResult { value: 0xFF, flags: NF | HF });
    }

    #[test]
    fn xor_clears_everything_but_zero() {
        assert_eq!(xor8(0x5A, 0x5A), AluResult { value: 0, flags: ZF });
        assert_eq!(xor8(0xF0, 0x0F), AluResult { value: 0xFF, flags: 0 });
    }
}

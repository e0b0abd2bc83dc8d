//! CPU configuration.

use crate::registers::Registers;

/// Register state the CPU starts in, and returns to on reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    /// State left by the DMG boot ROM: PC=$0100, SP=$FFFE, AF=$01B0,
    /// BC=$0013, DE=$00D8, HL=$014D.
    #[default]
    Dmg,
    /// Every register zero, PC=$0000.
    Zeroed,
}

impl BootState {
    #[must_use]
    pub const fn registers(self) -> Registers {
        match self {
            Self::Dmg => Registers::post_boot(),
            Self::Zeroed => Registers::zeroed(),
        }
    }
}

/// Configuration for creating an SM83.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sm83Config {
    pub boot_state: BootState,
}

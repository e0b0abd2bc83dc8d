//! Property tests for the register file, the bus and instruction timing.

use emu_core::{Bus, BusError, Cpu};
use proptest::prelude::*;
use sharp_sm83::{Instruction, MemoryBus, OPCODE_TABLE, OPEN_BUS, Registers, Sm83};

fn unmapped_address() -> impl Strategy<Value = u16> {
    prop_oneof![0xA000u16..=0xBFFF, 0xFE00u16..=0xFF7F]
}

proptest! {
    #[test]
    fn f_low_nibble_forced_to_zero(v in any::<u8>()) {
        let mut regs = Registers::default();
        regs.set_f(v);
        prop_assert_eq!(regs.f(), v & 0xF0);
    }

    #[test]
    fn af_combines_a_and_masked_f(a in any::<u8>(), f in any::<u8>()) {
        let mut regs = Registers::default();
        regs.set_a(a);
        regs.set_f(f);
        prop_assert_eq!(regs.af(), (u16::from(a) << 8) | u16::from(f & 0xF0));
    }

    #[test]
    fn set_af_masks_flags(v in any::<u16>()) {
        let mut regs = Registers::default();
        regs.set_af(v);
        prop_assert_eq!(regs.af(), v & 0xFFF0);
        prop_assert_eq!(regs.f() & 0x0F, 0);
    }

    #[test]
    fn pairs_round_trip(v in any::<u16>()) {
        let [lo, hi] = v.to_le_bytes();
        let mut regs = Registers::default();

        regs.set_bc(v);
        prop_assert_eq!(regs.bc(), v);
        prop_assert_eq!((regs.b(), regs.c()), (hi, lo));

        regs.set_de(v);
        prop_assert_eq!(regs.de(), v);
        prop_assert_eq!((regs.d(), regs.e()), (hi, lo));

        regs.set_hl(v);
        prop_assert_eq!(regs.hl(), v);
        prop_assert_eq!((regs.h(), regs.l()), (hi, lo));
    }

    #[test]
    fn flag_setters_touch_one_bit(f in any::<u8>(), which in 0usize..4, value in any::<bool>()) {
        let mut regs = Registers::default();
        regs.set_f(f);
        let before = regs.f();

        let bit = [0x80u8, 0x40, 0x20, 0x10][which];
        match which {
            0 => regs.set_flag_z(value),
            1 => regs.set_flag_n(value),
            2 => regs.set_flag_h(value),
            _ => regs.set_flag_c(value),
        }

        prop_assert_eq!(regs.f() & !bit, before & !bit);
        prop_assert_eq!(regs.f() & bit != 0, value);
        prop_assert_eq!(regs.f() & 0x0F, 0);
    }

    #[test]
    fn echo_mirrors_wram(address in 0xE000u16..=0xFDFF, x in any::<u8>()) {
        let mut bus = MemoryBus::new();
        bus.write(address, x).unwrap();
        prop_assert_eq!(bus.read(address), x);
        prop_assert_eq!(bus.read(address), bus.read(address - 0x2000));
    }

    #[test]
    fn wram_writes_show_through_echo(address in 0xC000u16..=0xDDFF, x in any::<u8>()) {
        let mut bus = MemoryBus::new();
        bus.write(address, x).unwrap();
        prop_assert_eq!(bus.read(address + 0x2000), x);
    }

    #[test]
    fn rom_writes_rejected(
        rom in proptest::collection::vec(any::<u8>(), 0..512),
        address in 0u16..=0x7FFF,
        x in any::<u8>(),
    ) {
        let mut bus = MemoryBus::new();
        bus.load_rom(&rom).unwrap();
        let before = bus.read(address);
        prop_assert_eq!(bus.write(address, x), Err(BusError::ReadOnly { address }));
        prop_assert_eq!(bus.read(address), before);
    }

    #[test]
    fn unmapped_is_open_bus(address in unmapped_address(), x in any::<u8>()) {
        let mut bus = MemoryBus::new();
        prop_assert_eq!(bus.read(address), OPEN_BUS);
        prop_assert_eq!(bus.write(address, x), Ok(()));
        prop_assert_eq!(bus.read(address), OPEN_BUS);
    }

    #[test]
    fn step_reports_table_cycles_and_length(opcode in any::<u8>(), operands in any::<[u8; 2]>()) {
        let mut cpu = Sm83::new();
        cpu.load_rom(&[opcode, operands[0], operands[1]]).unwrap();
        cpu.set_pc(0x0000);
        cpu.regs_mut().set_hl(0xC000);
        cpu.set_sp(0xDFF0);

        match (OPCODE_TABLE[opcode as usize], cpu.step()) {
            (Some(instruction), Ok(cycles)) => {
                prop_assert_eq!(cycles, instruction.cycles());
                if !matches!(
                    instruction,
                    Instruction::Jp | Instruction::Jr | Instruction::Call | Instruction::Ret
                ) {
                    prop_assert_eq!(cpu.pc(), instruction.encoded_len());
                }
            }
            (None, Err(_)) => prop_assert_eq!(cpu.pc(), 0x0001),
            (entry, result) => prop_assert!(false, "{:?} gave {:?}", entry, result),
        }
    }

    #[test]
    fn identical_state_gives_identical_results(program in proptest::collection::vec(any::<u8>(), 1..64)) {
        let run = |program: &[u8]| {
            let mut cpu = Sm83::new();
            cpu.load_rom(program).unwrap();
            cpu.set_pc(0x0000);
            let results: Vec<_> = (0..16).map(|_| cpu.step()).collect();
            (results, cpu.registers())
        };
        prop_assert_eq!(run(&program), run(&program));
    }
}

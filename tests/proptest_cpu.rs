//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check that instruction semantics hold across
//! all operand and register combinations.

use core6502::{Cpu, FlatMemory, MemoryBus, Mnemonic, Status, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::with_reset(memory)
}

/// Opcodes whose only PC effect is to step past their operand bytes.
fn straight_line_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.implemented
                && !matches!(
                    m.mnemonic,
                    Mnemonic::Bcc
                        | Mnemonic::Bcs
                        | Mnemonic::Beq
                        | Mnemonic::Bmi
                        | Mnemonic::Bne
                        | Mnemonic::Bpl
                        | Mnemonic::Bvc
                        | Mnemonic::Bvs
                        | Mnemonic::Jmp
                        | Mnemonic::Jsr
                        | Mnemonic::Rts
                        | Mnemonic::Rti
                        | Mnemonic::Brk
                )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

fn reference_adc(a: u8, value: u8, carry: bool) -> (u8, bool, bool) {
    let signed = a as i8 as i16 + value as i8 as i16 + carry as i16;
    let unsigned = a as u16 + value as u16 + carry as u16;
    (unsigned as u8, unsigned > 0xFF, !(-128..=127).contains(&signed))
}

proptest! {
    /// Property: straight-line instructions advance PC by their size
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(straight_line_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];
        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, operand1);
        cpu.memory_mut().write(0x8002, operand2);

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.registers().pc,
            0x8000 + metadata.size_bytes as u16,
            "opcode 0x{:02X} ({})",
            opcode,
            metadata.mnemonic
        );
    }

    /// Property: N and Z follow the loaded value
    #[test]
    fn prop_lda_sets_n_and_z(value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xA9);
        cpu.memory_mut().write(0x8001, value);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().status.n, value & 0x80 != 0);
        prop_assert_eq!(cpu.registers().status.z, value == 0);
    }

    /// Property: ADC matches signed and unsigned reference arithmetic
    #[test]
    fn prop_adc_matches_reference(a in 0u8..=255u8, value in 0u8..=255u8, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x69);
        cpu.memory_mut().write(0x8001, value);
        cpu.registers_mut().a = a;
        cpu.registers_mut().status.c = carry;

        cpu.step().unwrap();

        let (result, carry_out, overflow) = reference_adc(a, value, carry);
        let registers = cpu.registers();
        prop_assert_eq!(registers.a, result);
        prop_assert_eq!(registers.status.c, carry_out);
        prop_assert_eq!(registers.status.v, overflow);
        prop_assert_eq!(registers.status.z, result == 0);
        prop_assert_eq!(registers.status.n, result & 0x80 != 0);
    }

    /// Property: SBC is ADC of the operand's complement
    #[test]
    fn prop_sbc_is_adc_of_complement(a in 0u8..=255u8, value in 0u8..=255u8, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE9);
        cpu.memory_mut().write(0x8001, value);
        cpu.registers_mut().a = a;
        cpu.registers_mut().status.c = carry;

        cpu.step().unwrap();

        let (result, carry_out, overflow) = reference_adc(a, !value, carry);
        prop_assert_eq!(cpu.registers().a, result);
        prop_assert_eq!(cpu.registers().status.c, carry_out);
        prop_assert_eq!(cpu.registers().status.v, overflow);
    }

    /// Property: CMP sets C, Z and N from the unsigned comparison and leaves A
    #[test]
    fn prop_cmp_flags(a in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xC9);
        cpu.memory_mut().write(0x8001, value);
        cpu.registers_mut().a = a;

        cpu.step().unwrap();

        let status = cpu.registers().status;
        prop_assert_eq!(status.c, a >= value);
        prop_assert_eq!(status.z, a == value);
        prop_assert_eq!(status.n, a < value);
        prop_assert_eq!(cpu.registers().a, a);
    }

    /// Property: PHP then PLP restores every flag and sets B
    #[test]
    fn prop_php_plp_round_trip(byte in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x08);
        cpu.memory_mut().write(0x8001, 0x28);
        cpu.registers_mut().status = Status::from_byte(byte);

        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().status.to_byte(), byte | Status::UNUSED | Status::BREAK);
        prop_assert_eq!(cpu.registers().sp, 0xFD);
    }

    /// Property: pushes and pulls stay in page 1 for any starting SP
    #[test]
    fn prop_stack_round_trip_any_sp(sp in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x48); // PHA
        cpu.memory_mut().write(0x8001, 0x68); // PLA
        cpu.registers_mut().sp = sp;
        cpu.registers_mut().a = value;

        cpu.step().unwrap();
        prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), value);
        prop_assert_eq!(cpu.registers().sp, sp.wrapping_sub(1));

        cpu.registers_mut().a = !value;
        cpu.step().unwrap();
        prop_assert_eq!(cpu.registers().a, value);
        prop_assert_eq!(cpu.registers().sp, sp);
    }

    /// Property: JSR then RTS returns to the byte after the JSR
    #[test]
    fn prop_jsr_rts_round_trip(target in 0x0200u16..0x7F00) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x20);
        cpu.memory_mut().write(0x8001, (target & 0xFF) as u8);
        cpu.memory_mut().write(0x8002, (target >> 8) as u8);
        cpu.memory_mut().write(target, 0x60);

        cpu.step().unwrap();
        prop_assert_eq!(cpu.registers().pc, target);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.registers().pc, 0x8003);
        prop_assert_eq!(cpu.registers().sp, 0xFD);
    }
}

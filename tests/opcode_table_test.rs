//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete and accurate, and that
//! the bound instruction table agrees with it.

use std::collections::HashSet;

use core6502::{AddressingMode, FlatMemory, InstructionTable, Mnemonic, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(
        OPCODE_TABLE.len(),
        256,
        "Opcode table must have exactly 256 entries"
    );

    let documented = OPCODE_TABLE.iter().filter(|m| m.implemented).count();
    assert_eq!(documented, 151, "NMOS 6502 has 151 documented opcodes");
}

#[test]
fn test_illegal_opcodes_marked() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(
            metadata.mnemonic == Mnemonic::Illegal,
            !metadata.implemented,
            "Opcode 0x{:02X} illegal marker disagrees with implemented flag",
            opcode
        );
        if !metadata.implemented {
            assert_eq!(metadata.size_bytes, 1, "Opcode 0x{:02X}", opcode);
            assert_eq!(metadata.mnemonic.as_str(), "???");
        }
    }
}

#[test]
fn test_size_matches_addressing_mode() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        let expected_size = match metadata.addressing_mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        };

        assert_eq!(
            metadata.size_bytes, expected_size,
            "Opcode 0x{:02X} ({}) size mismatch: mode {:?} expects {} bytes, got {}",
            opcode, metadata.mnemonic, metadata.addressing_mode, expected_size, metadata.size_bytes
        );
    }
}

#[test]
fn test_known_opcodes() {
    let brk = &OPCODE_TABLE[0x00];
    assert_eq!(brk.mnemonic, Mnemonic::Brk);
    assert_eq!(brk.size_bytes, 1);

    let lda_imm = &OPCODE_TABLE[0xA9];
    assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
    assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);

    let nop = &OPCODE_TABLE[0xEA];
    assert_eq!(nop.mnemonic, Mnemonic::Nop);
    assert_eq!(nop.size_bytes, 1);

    let jmp = &OPCODE_TABLE[0x4C];
    assert_eq!(jmp.mnemonic, Mnemonic::Jmp);
    assert_eq!(jmp.addressing_mode, AddressingMode::Absolute);

    let jmp_ind = &OPCODE_TABLE[0x6C];
    assert_eq!(jmp_ind.mnemonic, Mnemonic::Jmp);
    assert_eq!(jmp_ind.addressing_mode, AddressingMode::Indirect);

    let asl_acc = &OPCODE_TABLE[0x0A];
    assert_eq!(asl_acc.mnemonic, Mnemonic::Asl);
    assert_eq!(asl_acc.addressing_mode, AddressingMode::Accumulator);

    let ldx_zpy = &OPCODE_TABLE[0xB6];
    assert_eq!(ldx_zpy.mnemonic, Mnemonic::Ldx);
    assert_eq!(ldx_zpy.addressing_mode, AddressingMode::ZeroPageY);

    let sta_indy = &OPCODE_TABLE[0x91];
    assert_eq!(sta_indy.mnemonic, Mnemonic::Sta);
    assert_eq!(sta_indy.addressing_mode, AddressingMode::IndirectY);
}

#[test]
fn test_every_addressing_mode_used() {
    let modes: HashSet<AddressingMode> = OPCODE_TABLE
        .iter()
        .filter(|m| m.implemented)
        .map(|m| m.addressing_mode)
        .collect();

    assert_eq!(modes.len(), 13);
}

#[test]
fn test_instruction_variety() {
    let mnemonics: HashSet<Mnemonic> = OPCODE_TABLE
        .iter()
        .filter(|m| m.implemented)
        .map(|m| m.mnemonic)
        .collect();

    assert_eq!(
        mnemonics.len(),
        56,
        "Should have the 56 official 6502 instructions (found {})",
        mnemonics.len()
    );
}

#[test]
fn test_instruction_table_binds_every_documented_opcode() {
    let table: InstructionTable<FlatMemory> = InstructionTable::new();

    for (opcode, instruction) in table.iter().enumerate() {
        let metadata = &OPCODE_TABLE[opcode];
        assert_eq!(
            instruction.is_implemented(),
            metadata.implemented,
            "Opcode 0x{:02X} ({})",
            opcode,
            metadata.mnemonic
        );
        assert_eq!(instruction.metadata(), metadata);
        if metadata.implemented {
            assert_eq!(instruction.mnemonic(), Some(metadata.mnemonic));
        } else {
            assert_eq!(instruction.mnemonic(), None);
        }
    }
}

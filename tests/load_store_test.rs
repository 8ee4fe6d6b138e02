//! Tests for LDA, LDX, LDY, STA, STX and STY.

use core6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::with_reset(memory)
}

fn load_program(cpu: &mut Cpu<FlatMemory>, program: &[u8]) {
    for (offset, byte) in program.iter().enumerate() {
        cpu.memory_mut().write(0x8000 + offset as u16, *byte);
    }
}

#[test]
fn test_lda_immediate_sets_flags() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xA9, 0x00, 0xA9, 0x80]);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().a, 0x00);
    assert!(cpu.registers().status.z);
    assert!(!cpu.registers().status.n);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().a, 0x80);
    assert!(!cpu.registers().status.z);
    assert!(cpu.registers().status.n);
    assert_eq!(cpu.registers().pc, 0x8004);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xB9, 0xFF, 0x20]); // LDA $20FF,Y
    cpu.registers_mut().y = 0x01;
    cpu.memory_mut().write(0x2100, 0x33);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x33);
}

#[test]
fn test_lda_indexed_indirect_wraps_pointer() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xA1, 0xFF]); // LDA ($FF,X)
    cpu.registers_mut().x = 0x00;
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x30);
    cpu.memory_mut().write(0x3000, 0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x99);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xB6, 0x10]); // LDX $10,Y
    cpu.registers_mut().y = 0x05;
    cpu.memory_mut().write(0x0015, 0x7E);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().x, 0x7E);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0xBC, 0x00, 0x40]); // LDY $4000,X
    cpu.registers_mut().x = 0x10;
    cpu.memory_mut().write(0x4010, 0xF0);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().y, 0xF0);
    assert!(cpu.registers().status.n);
}

#[test]
fn test_sta_absolute_leaves_flags() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x8D, 0x00, 0x02]); // STA $0200
    cpu.registers_mut().a = 0x00;
    let before = cpu.registers().status;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0200), 0x00);
    assert_eq!(cpu.registers().status, before);
}

#[test]
fn test_sta_indirect_indexed() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x91, 0x80]); // STA ($80),Y
    cpu.memory_mut().write(0x0080, 0xF0);
    cpu.memory_mut().write(0x0081, 0x10);
    cpu.registers_mut().y = 0x20;
    cpu.registers_mut().a = 0x5C;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1110), 0x5C);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x96, 0xFF]); // STX $FF,Y
    cpu.registers_mut().y = 0x02;
    cpu.registers_mut().x = 0x11;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001), 0x11);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();
    load_program(&mut cpu, &[0x94, 0x40]); // STY $40,X
    cpu.registers_mut().x = 0x01;
    cpu.registers_mut().y = 0x22;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0041), 0x22);
}

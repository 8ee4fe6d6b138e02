//! # Stack and Interrupt Protocol
//!
//! The hardware stack occupies page 1 (`0x0100-0x01FF`). SP is an offset into
//! that page pointing at the next free slot:
//!
//! - push writes to `0x0100 + SP`, then decrements SP
//! - pull increments SP, then reads from `0x0100 + SP`
//!
//! SP wraps within the page in both directions, so a push at `SP = 0x00`
//! lands on `0x0100` and leaves `SP = 0xFF`.
//!
//! Words are pushed high byte first so they sit little-endian in memory and
//! pull back low byte first.
//!
//! Pushes made on behalf of an instruction go through [`push_reported`] so
//! the active [`Hooks`] see every stack write.
//!
//! Entering an interrupt (BRK, IRQ or NMI) pushes the return address and the
//! status byte, sets I and jumps through a vector. The three differ only in
//! the vector, the return address and whether the pushed status has B set.

use log::debug;

use crate::hooks::{Hooks, NoHooks};
use crate::{MemoryBus, Registers, Status};

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Pushes one byte.
pub fn push<M: MemoryBus>(registers: &mut Registers, memory: &mut M, value: u8) {
    memory.write(registers.stack_address(), value);
    registers.sp = registers.sp.wrapping_sub(1);
}

/// Pulls one byte.
pub fn pull<M: MemoryBus>(registers: &mut Registers, memory: &M) -> u8 {
    registers.sp = registers.sp.wrapping_add(1);
    memory.read(registers.stack_address())
}

/// Pushes a word, high byte first.
pub fn push_word<M: MemoryBus>(registers: &mut Registers, memory: &mut M, value: u16) {
    push(registers, memory, (value >> 8) as u8);
    push(registers, memory, (value & 0xFF) as u8);
}

/// Pulls a word, low byte first.
pub fn pull_word<M: MemoryBus>(registers: &mut Registers, memory: &M) -> u16 {
    let low = pull(registers, memory) as u16;
    let high = pull(registers, memory) as u16;
    (high << 8) | low
}

/// Pushes one byte and reports the write to `hooks`.
pub(crate) fn push_reported<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    hooks: &mut dyn Hooks,
    value: u8,
) {
    let address = registers.stack_address();
    push(registers, memory, value);
    hooks.stack_write(address, value);
}

/// Pushes a word, high byte first, reporting both writes.
pub(crate) fn push_word_reported<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    hooks: &mut dyn Hooks,
    value: u16,
) {
    push_reported(registers, memory, hooks, (value >> 8) as u8);
    push_reported(registers, memory, hooks, (value & 0xFF) as u8);
}

/// Enters a hardware interrupt through `vector`.
///
/// The current PC is pushed unchanged (the interrupted instruction has already
/// completed) and the pushed status has B clear. Masking is the caller's
/// concern; this always takes the interrupt.
///
/// # Examples
///
/// ```
/// use core6502::stack::interrupt;
/// use core6502::{FlatMemory, MemoryBus, Registers, NMI_VECTOR};
///
/// let mut registers = Registers { pc: 0x1234, ..Registers::default() };
/// let mut memory = FlatMemory::new();
/// memory.write_vector(NMI_VECTOR, 0x9000);
///
/// interrupt(&mut registers, &mut memory, NMI_VECTOR);
///
/// assert_eq!(registers.pc, 0x9000);
/// assert!(registers.status.i);
/// assert_eq!(memory.read(0x01FF), 0x12);
/// assert_eq!(memory.read(0x01FE), 0x34);
/// assert_eq!(memory.read(0x01FD), 0b0010_0000); // B clear
/// ```
pub fn interrupt<M: MemoryBus>(registers: &mut Registers, memory: &mut M, vector: u16) {
    let return_address = registers.pc;
    enter_interrupt(registers, memory, &mut NoHooks, vector, return_address, false);
}

/// Shared entry sequence for BRK and hardware interrupts.
///
/// The vector is read before anything is pushed, so a stack that overlaps the
/// vector (only possible with unusual memory maps) cannot change the target.
pub(crate) fn enter_interrupt<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    hooks: &mut dyn Hooks,
    vector: u16,
    return_address: u16,
    break_flag: bool,
) {
    let target = memory.read_vector(vector);

    push_word_reported(registers, memory, hooks, return_address);
    let pushed = Status {
        b: break_flag,
        ..registers.status
    };
    push_reported(registers, memory, hooks, pushed.to_byte());

    registers.status.i = true;
    registers.pc = target;

    debug!(
        "interrupt via ${:04X}: return ${:04X}, handler ${:04X}",
        vector, return_address, target
    );
}

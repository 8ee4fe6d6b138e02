//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute and indirect)
//! - JSR / RTS: Jump to Subroutine and Return
//! - BRK / RTI: Software interrupt and Return from Interrupt
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (the return address minus one),
//! and RTS adds one to the address it pulls. BRK pushes the address two bytes
//! past the opcode, so the byte after BRK is skipped on return.

use crate::execution::ExecutionContext;
use crate::stack::{enter_interrupt, pull, pull_word, push_word_reported};
use crate::{AddressingMode, ExecutionError, MemoryBus, Status, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
pub(crate) fn jmp<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let target = mode
        .resolve(cx)
        .target()
        .ok_or(ExecutionError::NoTarget(mode))?;
    cx.registers.pc = target;
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// After the operand is consumed PC points at the next instruction; JSR
/// pushes PC - 1 (high byte first) and jumps.
pub(crate) fn jsr<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let target = mode
        .resolve(cx)
        .target()
        .ok_or(ExecutionError::NoTarget(mode))?;
    let return_address = cx.registers.pc.wrapping_sub(1);
    push_word_reported(cx.registers, cx.memory, cx.hooks, return_address);
    cx.registers.pc = target;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let address = pull_word(cx.registers, cx.memory);
    cx.registers.pc = address.wrapping_add(1);
    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Pushes PC + 1 and the status byte with B set, sets I and loads PC from the
/// IRQ vector at 0xFFFE.
///
/// Flags affected: I (B only in the pushed copy)
pub(crate) fn brk<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    // PC already points one past the opcode; skip the padding byte too.
    let return_address = cx.registers.pc.wrapping_add(1);
    enter_interrupt(
        cx.registers,
        cx.memory,
        cx.hooks,
        IRQ_VECTOR,
        return_address,
        true,
    );
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then PC. Unlike RTS the pulled address is used as is.
pub(crate) fn rti<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let status = pull(cx.registers, cx.memory);
    cx.registers.status = Status::from_byte(status);
    cx.registers.pc = pull_word(cx.registers, cx.memory);
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn nop<M: MemoryBus>(
    _cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    Ok(())
}

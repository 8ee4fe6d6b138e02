//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer except TXS sets N and Z from the copied value.

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn tax<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.x = cx.registers.a;
    cx.registers.status.set_nz(cx.registers.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn tay<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.y = cx.registers.a;
    cx.registers.status.set_nz(cx.registers.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn txa<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.a = cx.registers.x;
    cx.registers.status.set_nz(cx.registers.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn tya<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.a = cx.registers.y;
    cx.registers.status.set_nz(cx.registers.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn tsx<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.x = cx.registers.sp;
    cx.registers.status.set_nz(cx.registers.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Flags affected: None
pub(crate) fn txs<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.sp = cx.registers.x;
    Ok(())
}

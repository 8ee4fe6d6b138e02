//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set N and Z from the loaded value. Stores affect no flags.

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn lda<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.a = value;
    cx.registers.status.set_nz(value);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.x = value;
    cx.registers.status.set_nz(value);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.y = value;
    cx.registers.status.set_nz(value);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cx.registers.a;
    mode.resolve(cx).write(cx, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cx.registers.x;
    mode.resolve(cx).write(cx, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cx.registers.y;
    mode.resolve(cx).write(cx, value)
}

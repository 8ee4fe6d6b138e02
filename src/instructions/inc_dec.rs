//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Memory read-modify-write
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap at 8 bits and set N and Z from the result.

use super::read_modify_write;
use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |_, value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |_, value| value.wrapping_sub(1))
}

pub(crate) fn inx<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.x = cx.registers.x.wrapping_add(1);
    cx.registers.status.set_nz(cx.registers.x);
    Ok(())
}

pub(crate) fn iny<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.y = cx.registers.y.wrapping_add(1);
    cx.registers.status.set_nz(cx.registers.y);
    Ok(())
}

pub(crate) fn dex<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.x = cx.registers.x.wrapping_sub(1);
    cx.registers.status.set_nz(cx.registers.x);
    Ok(())
}

pub(crate) fn dey<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.y = cx.registers.y.wrapping_sub(1);
    cx.registers.status.set_nz(cx.registers.y);
    Ok(())
}

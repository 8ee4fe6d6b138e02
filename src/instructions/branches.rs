//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Branch on Carry Clear / Set
//! - BEQ, BNE: Branch on Zero Set / Clear
//! - BMI, BPL: Branch on Negative Set / Clear
//! - BVC, BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The offset is always consumed; when the branch is taken it is added to the
//! PC of the following instruction, wrapping around the 16-bit address space.
//! No flags are affected.

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

fn branch_if<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
    condition: bool,
) -> Result<(), ExecutionError> {
    let offset = mode.resolve(cx).read(cx)? as i8;
    if condition {
        cx.registers.pc = cx.registers.pc.wrapping_add_signed(offset as i16);
    }
    Ok(())
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn bcc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = !cx.registers.status.c;
    branch_if(cx, mode, taken)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn bcs<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = cx.registers.status.c;
    branch_if(cx, mode, taken)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn beq<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = cx.registers.status.z;
    branch_if(cx, mode, taken)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn bne<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = !cx.registers.status.z;
    branch_if(cx, mode, taken)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn bmi<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = cx.registers.status.n;
    branch_if(cx, mode, taken)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn bpl<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = !cx.registers.status.n;
    branch_if(cx, mode, taken)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn bvc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = !cx.registers.status.v;
    branch_if(cx, mode, taken)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn bvs<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let taken = cx.registers.status.v;
    branch_if(cx, mode, taken)
}

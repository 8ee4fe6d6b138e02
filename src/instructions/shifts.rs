//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory. The bit shifted out lands in
//! the carry flag; N and Z follow the result.

use super::read_modify_write;
use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn asl<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |status, value| {
        status.c = value & 0x80 != 0;
        value << 1
    })
}

/// Executes the LSR (Logical Shift Right) instruction. N is always cleared.
pub(crate) fn lsr<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |status, value| {
        status.c = value & 0x01 != 0;
        value >> 1
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0, bit 7 leaves into carry.
pub(crate) fn rol<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |status, value| {
        let carry_in = status.c as u8;
        status.c = value & 0x80 != 0;
        (value << 1) | carry_in
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7, bit 0 leaves into carry.
pub(crate) fn ror<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cx, mode, |status, value| {
        let carry_in = (status.c as u8) << 7;
        status.c = value & 0x01 != 0;
        (value >> 1) | carry_in
    })
}

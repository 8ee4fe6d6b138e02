//! # Flag Instructions
//!
//! This module implements status flag manipulation instructions:
//! - CLC / SEC: Clear / Set Carry Flag
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLV: Clear Overflow Flag
//!
//! All use implicit addressing and touch exactly one flag.

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus};

pub(crate) fn clc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.c = false;
    Ok(())
}

pub(crate) fn sec<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.c = true;
    Ok(())
}

pub(crate) fn cli<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.i = false;
    Ok(())
}

pub(crate) fn sei<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.i = true;
    Ok(())
}

/// Clears D. Arithmetic is binary either way.
pub(crate) fn cld<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.d = false;
    Ok(())
}

/// Sets D. Arithmetic is binary either way.
pub(crate) fn sed<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.d = true;
    Ok(())
}

pub(crate) fn clv<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cx.registers.status.v = false;
    Ok(())
}

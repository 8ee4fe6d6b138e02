//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push / Pull Accumulator
//! - PHP / PLP: Push / Pull Processor Status
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward; see
//! [`crate::stack`] for the push and pull primitives.

use crate::execution::ExecutionContext;
use crate::stack::{pull, push_reported};
use crate::{AddressingMode, ExecutionError, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn pha<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cx.registers.a;
    push_reported(cx.registers, cx.memory, cx.hooks, value);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B set. The live B flag is unchanged.
pub(crate) fn php<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let status = Status {
        b: true,
        ..cx.registers.status
    };
    push_reported(cx.registers, cx.memory, cx.hooks, status.to_byte());
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: N, Z
pub(crate) fn pla<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = pull(cx.registers, cx.memory);
    cx.registers.a = value;
    cx.registers.status.set_nz(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag, B included, is loaded from the pulled byte.
pub(crate) fn plp<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    _mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = pull(cx.registers, cx.memory);
    cx.registers.status = Status::from_byte(value);
    Ok(())
}

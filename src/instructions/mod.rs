//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes the execution context and the
//! addressing mode it was decoded with. The function resolves its operand through the mode,
//! so an instruction never knows which concrete layout sits behind the memory bus.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus, Status};

/// Resolves `mode` once, then reads, transforms and writes back the same location.
///
/// `op` receives the status flags (for carry in/out) and the current value and
/// returns the new value. N and Z are set from the returned value.
pub(crate) fn read_modify_write<M, F>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
    op: F,
) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: FnOnce(&mut Status, u8) -> u8,
{
    let operand = mode.resolve(cx);
    let value = operand.read(cx)?;
    let result = op(&mut cx.registers.status, value);
    cx.registers.status.set_nz(result);
    operand.write(cx, result)
}

//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Decimal mode is not modelled: ADC and SBC always use binary arithmetic
//! regardless of the D flag.

use crate::execution::ExecutionContext;
use crate::{AddressingMode, ExecutionError, MemoryBus, Registers};

/// Adds `value` and the carry flag to the accumulator, updating N, V, Z and C.
///
/// The sum is formed in 16 bits so the carry out is bit 8. Overflow is set
/// when both inputs share a sign that the truncated result does not.
fn add_with_carry(registers: &mut Registers, value: u8) {
    let a = registers.a;
    let sum = a as u16 + value as u16 + registers.status.c as u16;
    let result = sum as u8;

    registers.status.c = sum > 0xFF;
    registers.status.v = (!(a ^ value) & (a ^ result) & 0x80) != 0;
    registers.status.set_nz(result);
    registers.a = result;
}

/// Sets C, Z and N from an unsigned comparison of `register` with `value`.
///
/// N reports `register < value`, the complement of C unless the two are equal.
fn compare(registers: &mut Registers, register: u8, value: u8) {
    registers.status.c = register >= value;
    registers.status.z = register == value;
    registers.status.n = register < value;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: N, V, Z, C
pub(crate) fn adc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    add_with_carry(cx.registers, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtraction is addition of the operand's one's complement: with carry set
/// this is `A - M`, with carry clear `A - M - 1`. Carry out means "no borrow".
///
/// Flags affected: N, V, Z, C
pub(crate) fn sbc<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    add_with_carry(cx.registers, value ^ 0xFF);
    Ok(())
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn and<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.a &= value;
    cx.registers.status.set_nz(cx.registers.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn ora<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.a |= value;
    cx.registers.status.set_nz(cx.registers.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn eor<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    cx.registers.a ^= value;
    cx.registers.status.set_nz(cx.registers.a);
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected: N, Z, C. The accumulator is not modified.
pub(crate) fn cmp<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    let a = cx.registers.a;
    compare(cx.registers, a, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    let x = cx.registers.x;
    compare(cx.registers, x, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    let y = cx.registers.y;
    compare(cx.registers, y, value);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z comes from `A & M`; N and V are copied from bits 7 and 6 of the operand
/// itself, not of the AND result.
pub(crate) fn bit<M: MemoryBus>(
    cx: &mut ExecutionContext<'_, M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = mode.resolve(cx).read(cx)?;
    let a = cx.registers.a;
    let status = &mut cx.registers.status;
    status.z = a & value == 0;
    status.n = value & 0x80 != 0;
    status.v = value & 0x40 != 0;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registers_with(a: u8, carry: bool) -> Registers {
        let mut registers = Registers {
            a,
            ..Registers::default()
        };
        registers.status.c = carry;
        registers
    }

    #[test]
    fn test_add_with_carry_wraps_to_zero() {
        let mut registers = registers_with(0xFF, false);
        add_with_carry(&mut registers, 0x01);

        assert_eq!(registers.a, 0x00);
        assert!(registers.status.c);
        assert!(registers.status.z);
        assert!(!registers.status.n);
        assert!(!registers.status.v);
    }

    #[test]
    fn test_add_with_carry_negative_overflow() {
        let mut registers = registers_with(0x80, false);
        add_with_carry(&mut registers, 0x80);

        assert_eq!(registers.a, 0x00);
        assert!(registers.status.c);
        assert!(registers.status.v);
    }

    #[test]
    fn test_add_with_carry_positive_overflow() {
        let mut registers = registers_with(0x50, false);
        add_with_carry(&mut registers, 0x50);

        assert_eq!(registers.a, 0xA0);
        assert!(!registers.status.c);
        assert!(registers.status.v);
        assert!(registers.status.n);
    }

    #[test]
    fn test_add_with_carry_uses_carry_in() {
        let mut registers = registers_with(0x10, true);
        add_with_carry(&mut registers, 0x05);
        assert_eq!(registers.a, 0x16);
    }

    #[test]
    fn test_compare_flags() {
        let mut registers = Registers::default();

        compare(&mut registers, 0x40, 0x40);
        assert!(registers.status.c && registers.status.z && !registers.status.n);

        compare(&mut registers, 0x40, 0x41);
        assert!(!registers.status.c && !registers.status.z && registers.status.n);

        compare(&mut registers, 0x41, 0x40);
        assert!(registers.status.c && !registers.status.z && !registers.status.n);
    }
}

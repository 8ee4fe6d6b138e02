//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 and the
//! [`Operand`] handle each of them resolves to.
//!
//! Resolving a mode consumes the operand bytes that follow the opcode (advancing
//! PC once per byte), computes the effective location and returns an `Operand`
//! bound to it. Instructions then `read` and/or `write` through the operand. A
//! read-modify-write instruction resolves once and applies both accesses to the
//! same location.
//!
//! Operands live for exactly one instruction. They are plain `Copy` values that
//! hold an address, never a borrow, and must not be kept past the instruction
//! that resolved them.

use std::fmt;

use crate::execution::ExecutionContext;
use crate::{ExecutionError, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Consumes this mode's operand bytes and returns the resolved operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{AddressingMode, ExecutionContext, FlatMemory, Location, MemoryBus, NoHooks, Registers};
    ///
    /// let mut registers = Registers { pc: 0x0600, x: 0xFF, ..Registers::default() };
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0600, 0x80);
    ///
    /// let mut hooks = NoHooks;
    /// let mut cx = ExecutionContext::new(&mut registers, &mut memory, &mut hooks);
    /// let operand = AddressingMode::ZeroPageX.resolve(&mut cx);
    ///
    /// // 0x80 + 0xFF wraps inside the zero page
    /// assert_eq!(operand.location(), Location::Memory(0x007F));
    /// assert_eq!(registers.pc, 0x0601);
    /// ```
    pub fn resolve<M: MemoryBus>(self, cx: &mut ExecutionContext<'_, M>) -> Operand {
        let location = match self {
            AddressingMode::Implicit => Location::None,
            AddressingMode::Accumulator => Location::Accumulator,
            AddressingMode::Immediate | AddressingMode::Relative => {
                Location::Literal(cx.fetch_byte())
            }
            AddressingMode::ZeroPage => Location::Memory(cx.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let base = cx.fetch_byte();
                Location::Memory(base.wrapping_add(cx.registers.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = cx.fetch_byte();
                Location::Memory(base.wrapping_add(cx.registers.y) as u16)
            }
            AddressingMode::Absolute => Location::Memory(cx.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = cx.fetch_word();
                Location::Memory(base.wrapping_add(cx.registers.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = cx.fetch_word();
                Location::Memory(base.wrapping_add(cx.registers.y as u16))
            }
            AddressingMode::Indirect => {
                let pointer = cx.fetch_word();
                Location::Target(read_indirect_word(cx.memory, pointer))
            }
            AddressingMode::IndirectX => {
                let pointer = cx.fetch_byte().wrapping_add(cx.registers.x);
                Location::Memory(read_zero_page_word(cx.memory, pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = cx.fetch_byte();
                let base = read_zero_page_word(cx.memory, pointer);
                Location::Memory(base.wrapping_add(cx.registers.y as u16))
            }
        };

        Operand {
            mode: self,
            location,
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressingMode::Implicit => "implied",
            AddressingMode::Accumulator => "accumulator",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zero page",
            AddressingMode::ZeroPageX => "zero page,X",
            AddressingMode::ZeroPageY => "zero page,Y",
            AddressingMode::Relative => "relative",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteX => "absolute,X",
            AddressingMode::AbsoluteY => "absolute,Y",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndirectX => "(indirect,X)",
            AddressingMode::IndirectY => "(indirect),Y",
        };
        f.write_str(name)
    }
}

/// Reads a pointer stored in the zero page. The high byte wraps to 0x00 when the
/// pointer sits at 0xFF.
fn read_zero_page_word<M: MemoryBus>(memory: &M, pointer: u8) -> u16 {
    let low = memory.read(pointer as u16) as u16;
    let high = memory.read(pointer.wrapping_add(1) as u16) as u16;
    (high << 8) | low
}

/// Reads the JMP ($nnnn) target. NMOS parts never carry into the pointer's
/// high byte, so ($10FF) reads $10FF and $1000.
fn read_indirect_word<M: MemoryBus>(memory: &M, pointer: u16) -> u16 {
    let low = memory.read(pointer) as u16;
    let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
    let high = memory.read(high_addr) as u16;
    (high << 8) | low
}

/// The location an operand is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Implied operand: nothing to read or write.
    None,
    /// The accumulator register.
    Accumulator,
    /// A literal byte taken from the instruction stream (immediate or relative).
    Literal(u8),
    /// A 16-bit jump target read through an indirect pointer.
    Target(u16),
    /// An effective memory address.
    Memory(u16),
}

/// A resolved operand handle.
///
/// Memory and accumulator operands support both `read` and `write`. Literal
/// operands are read-only, and the indirect JMP target is only available
/// through [`Operand::target`]. Every successful access notifies the
/// context's hooks after the access completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    mode: AddressingMode,
    location: Location,
}

impl Operand {
    /// The addressing mode that produced this operand.
    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Where this operand points.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The effective memory address, if the operand is bound to memory.
    pub fn address(&self) -> Option<u16> {
        match self.location {
            Location::Memory(addr) => Some(addr),
            _ => None,
        }
    }

    /// The address a JMP or JSR through this operand lands on.
    pub fn target(&self) -> Option<u16> {
        match self.location {
            Location::Memory(addr) | Location::Target(addr) => Some(addr),
            _ => None,
        }
    }

    /// Reads the operand's byte.
    pub fn read<M: MemoryBus>(&self, cx: &mut ExecutionContext<'_, M>) -> Result<u8, ExecutionError> {
        let value = match self.location {
            Location::Accumulator => cx.registers.a,
            Location::Literal(value) => value,
            Location::Memory(addr) => cx.memory.read(addr),
            Location::None | Location::Target(_) => {
                return Err(ExecutionError::UnreadableOperand(self.mode))
            }
        };

        cx.hooks.operand_read(self.location, value);
        Ok(value)
    }

    /// Writes a byte back to the operand's location.
    pub fn write<M: MemoryBus>(
        &self,
        cx: &mut ExecutionContext<'_, M>,
        value: u8,
    ) -> Result<(), ExecutionError> {
        match self.location {
            Location::Accumulator => cx.registers.a = value,
            Location::Memory(addr) => cx.memory.write(addr, value),
            Location::None | Location::Literal(_) | Location::Target(_) => {
                return Err(ExecutionError::ReadOnlyOperand(self.mode))
            }
        }

        cx.hooks.operand_write(self.location, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, NoHooks, Registers};

    fn resolve_at(
        mode: AddressingMode,
        registers: &mut Registers,
        memory: &mut FlatMemory,
    ) -> Operand {
        let mut hooks = NoHooks;
        let mut cx = ExecutionContext::new(registers, memory, &mut hooks);
        mode.resolve(&mut cx)
    }

    fn setup(operand_bytes: &[u8]) -> (Registers, FlatMemory) {
        let registers = Registers {
            pc: 0x8000,
            ..Registers::default()
        };
        let mut memory = FlatMemory::new();
        for (i, byte) in operand_bytes.iter().enumerate() {
            memory.write(0x8000 + i as u16, *byte);
        }
        (registers, memory)
    }

    #[test]
    fn test_operand_sizes_match_pc_advance() {
        let modes = [
            AddressingMode::Implicit,
            AddressingMode::Accumulator,
            AddressingMode::Immediate,
            AddressingMode::ZeroPage,
            AddressingMode::ZeroPageX,
            AddressingMode::ZeroPageY,
            AddressingMode::Relative,
            AddressingMode::Absolute,
            AddressingMode::AbsoluteX,
            AddressingMode::AbsoluteY,
            AddressingMode::Indirect,
            AddressingMode::IndirectX,
            AddressingMode::IndirectY,
        ];

        for mode in modes {
            let (mut registers, mut memory) = setup(&[0x10, 0x20]);
            resolve_at(mode, &mut registers, &mut memory);
            assert_eq!(
                registers.pc,
                0x8000 + mode.operand_bytes() as u16,
                "PC advance for {}",
                mode
            );
        }
    }

    #[test]
    fn test_implied_and_accumulator() {
        let (mut registers, mut memory) = setup(&[]);

        let operand = resolve_at(AddressingMode::Implicit, &mut registers, &mut memory);
        assert_eq!(operand.location(), Location::None);

        let operand = resolve_at(AddressingMode::Accumulator, &mut registers, &mut memory);
        assert_eq!(operand.location(), Location::Accumulator);
    }

    #[test]
    fn test_immediate_is_literal() {
        let (mut registers, mut memory) = setup(&[0x42]);
        let operand = resolve_at(AddressingMode::Immediate, &mut registers, &mut memory);
        assert_eq!(operand.location(), Location::Literal(0x42));
        assert_eq!(operand.address(), None);
    }

    #[test]
    fn test_zero_page_indexed_wraps() {
        let (mut registers, mut memory) = setup(&[0x80]);
        registers.x = 0xFF;
        let operand = resolve_at(AddressingMode::ZeroPageX, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x007F));

        let (mut registers, mut memory) = setup(&[0xF0]);
        registers.y = 0x20;
        let operand = resolve_at(AddressingMode::ZeroPageY, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x0010));
    }

    #[test]
    fn test_absolute_indexed_crosses_page() {
        let (mut registers, mut memory) = setup(&[0xF0, 0x12]);
        registers.x = 0x20;
        let operand = resolve_at(AddressingMode::AbsoluteX, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x1310));

        let (mut registers, mut memory) = setup(&[0xFF, 0xFF]);
        registers.y = 0x02;
        let operand = resolve_at(AddressingMode::AbsoluteY, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x0001));
    }

    #[test]
    fn test_indirect_reads_target_word() {
        let (mut registers, mut memory) = setup(&[0x00, 0x30]);
        memory.write(0x3000, 0x34);
        memory.write(0x3001, 0x12);
        let operand = resolve_at(AddressingMode::Indirect, &mut registers, &mut memory);
        assert_eq!(operand.location(), Location::Target(0x1234));
        assert_eq!(operand.target(), Some(0x1234));
        assert_eq!(operand.address(), None);
    }

    #[test]
    fn test_indirect_page_wrap_quirk() {
        let (mut registers, mut memory) = setup(&[0xFF, 0x30]);
        memory.write(0x30FF, 0x34);
        memory.write(0x3000, 0x12);
        memory.write(0x3100, 0x99);
        let operand = resolve_at(AddressingMode::Indirect, &mut registers, &mut memory);
        assert_eq!(operand.target(), Some(0x1234));
    }

    #[test]
    fn test_indexed_indirect() {
        let (mut registers, mut memory) = setup(&[0x40]);
        registers.x = 0x05;
        memory.write(0x0045, 0x00);
        memory.write(0x0046, 0x20);
        let operand = resolve_at(AddressingMode::IndirectX, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x2000));
    }

    #[test]
    fn test_indexed_indirect_pointer_stays_in_zero_page() {
        let (mut registers, mut memory) = setup(&[0xFE]);
        registers.x = 0x01;
        memory.write(0x00FF, 0x78);
        memory.write(0x0000, 0x56);
        memory.write(0x0100, 0xAA);
        let operand = resolve_at(AddressingMode::IndirectX, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x5678));
    }

    #[test]
    fn test_indirect_indexed() {
        let (mut registers, mut memory) = setup(&[0x40]);
        registers.y = 0x10;
        memory.write(0x0040, 0xF8);
        memory.write(0x0041, 0x20);
        let operand = resolve_at(AddressingMode::IndirectY, &mut registers, &mut memory);
        assert_eq!(operand.address(), Some(0x2108));
    }

    #[test]
    fn test_literal_write_is_rejected() {
        let (mut registers, mut memory) = setup(&[0x42]);
        let mut hooks = NoHooks;
        let mut cx = ExecutionContext::new(&mut registers, &mut memory, &mut hooks);
        let operand = AddressingMode::Immediate.resolve(&mut cx);
        assert_eq!(
            operand.write(&mut cx, 0x00),
            Err(ExecutionError::ReadOnlyOperand(AddressingMode::Immediate))
        );
    }

    #[test]
    fn test_implied_read_is_rejected() {
        let (mut registers, mut memory) = setup(&[]);
        let mut hooks = NoHooks;
        let mut cx = ExecutionContext::new(&mut registers, &mut memory, &mut hooks);
        let operand = AddressingMode::Implicit.resolve(&mut cx);
        assert_eq!(
            operand.read(&mut cx),
            Err(ExecutionError::UnreadableOperand(AddressingMode::Implicit))
        );
    }

    #[test]
    fn test_accumulator_read_write() {
        let (mut registers, mut memory) = setup(&[]);
        registers.a = 0x11;
        let mut hooks = NoHooks;
        let mut cx = ExecutionContext::new(&mut registers, &mut memory, &mut hooks);
        let operand = AddressingMode::Accumulator.resolve(&mut cx);
        assert_eq!(operand.read(&mut cx), Ok(0x11));
        operand.write(&mut cx, 0x22).unwrap();
        assert_eq!(registers.a, 0x22);
    }
}

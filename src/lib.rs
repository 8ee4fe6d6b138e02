//! # 6502 Instruction Interpreter
//!
//! An instruction-level interpreter for the NMOS 6502 instruction set. It
//! executes machine code one instruction at a time against a register file and
//! a 64 KiB address space, and is meant as the CPU core of a larger emulator
//! or as a test harness for 6502 programs.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{loader, Cpu, FlatMemory, RunConfig};
//!
//! let program = "
//!     A9 01      // LDA #$01
//!     8D 00 02   // STA $0200
//!     00         // BRK
//! ";
//!
//! let mut memory = FlatMemory::new();
//! loader::load_hex_image(&mut memory, 0x0600, program).unwrap();
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.registers_mut().pc = 0x0600;
//! cpu.run(&RunConfig::default()).unwrap();
//!
//! assert_eq!(cpu.registers().a, 0x01);
//! assert_eq!(cpu.registers().pc, 0x0605);
//! ```
//!
//! ## Architecture
//!
//! - **State is explicit**: one [`Registers`] value and one [`MemoryBus`] per
//!   execution, passed in through an [`ExecutionContext`]. Nothing is global.
//! - **Table-driven decode**: [`OPCODE_TABLE`] holds the static metadata of all
//!   256 opcodes; [`InstructionTable`] binds each documented opcode to its
//!   handler and everything else to an unimplemented sentinel.
//! - **Operands**: an [`AddressingMode`] resolves to an [`Operand`] which the
//!   instruction reads and/or writes, so each instruction is written once for
//!   every mode it supports.
//! - **Observers**: [`Hooks`] see every fetch, decode, execute and operand
//!   access without being able to change the result.
//!
//! Timing is not modelled: there are no cycle counts and ADC/SBC ignore
//! decimal mode.
//!
//! ## Modules
//!
//! - `registers` - register file and status byte encoding
//! - `memory` - MemoryBus trait, flat memory and vector addresses
//! - `addressing` - addressing modes and operand handles
//! - `opcodes` - opcode metadata and the instruction table
//! - `execution` - fetch-decode-execute loop and run configuration
//! - `stack` - stack primitives and interrupt entry
//! - `cpu` - convenience wrapper owning registers, memory and table
//! - `hooks` - execution observers
//! - `loader` - hex program images
//! - `devices` - memory maps built from RAM, ROM and mirrored devices

use thiserror::Error;

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod execution;
pub mod hooks;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod stack;

// Instruction semantics, reached only through the instruction table
mod instructions;

pub use addressing::{AddressingMode, Location, Operand};
pub use cpu::Cpu;
pub use devices::{Device, DeviceError, MappedMemory, MirroredDevice, RamDevice, RomDevice};
pub use execution::{run, step, ExecutionContext, RunConfig, RunState, RunSummary};
pub use hooks::{Hooks, LogHooks, NoHooks, TraceEntry, TraceRecorder};
pub use loader::LoadError;
pub use memory::{FlatMemory, MemoryBus, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use opcodes::{Handler, Instruction, InstructionTable, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, Status};

/// Errors that stop execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched opcode is not a documented instruction.
    #[error("unimplemented opcode ${opcode:02X} at ${address:04X}")]
    UnimplementedOpcode { opcode: u8, address: u16 },

    /// An instruction read an operand that carries no value.
    #[error("{0} operand cannot be read")]
    UnreadableOperand(AddressingMode),

    /// An instruction wrote to an immediate, relative or implied operand.
    #[error("{0} operand is read-only")]
    ReadOnlyOperand(AddressingMode),

    /// A jump was decoded with a mode that yields no target address.
    #[error("{0} operand has no jump target")]
    NoTarget(AddressingMode),
}

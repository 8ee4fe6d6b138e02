//! # Execution Engine
//!
//! The fetch-decode-execute loop.
//!
//! Each step fetches the byte at PC (advancing PC), decodes it through the
//! [`InstructionTable`] and executes the bound instruction against one
//! [`ExecutionContext`]: exclusive access to one register file, one memory and
//! the observer hooks. Nothing here holds global state, so two runs from the
//! same registers and memory always produce the same result.
//!
//! ## Halting
//!
//! The engine has two states, running and halted. [`run`] counts every BRK it
//! decodes. The first `max_breaks` of them execute normally (they push state and
//! jump through the IRQ vector, letting programs use BRK as a soft trap). The
//! next one is not executed: the engine halts and leaves PC pointing at it.
//!
//! Decoding an unofficial opcode is fatal and surfaces as
//! [`ExecutionError::UnimplementedOpcode`].

use log::{debug, error, info, trace};

use crate::hooks::Hooks;
use crate::opcodes::{Instruction, InstructionTable, Mnemonic};
use crate::{ExecutionError, MemoryBus, Registers};

/// Exclusive access to the state one instruction executes against.
///
/// Instructions, addressing modes and operands all work through a context; it
/// is rebuilt for every step and never outlives it.
pub struct ExecutionContext<'a, M: MemoryBus> {
    /// Register file being mutated.
    pub registers: &'a mut Registers,

    /// Memory being read and written.
    pub memory: &'a mut M,

    pub(crate) hooks: &'a mut dyn Hooks,
}

impl<'a, M: MemoryBus> ExecutionContext<'a, M> {
    pub fn new(registers: &'a mut Registers, memory: &'a mut M, hooks: &'a mut dyn Hooks) -> Self {
        Self {
            registers,
            memory,
            hooks,
        }
    }

    /// Reads the byte at PC and advances PC.
    pub fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC past it.
    pub fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    fn fetch_opcode(&mut self) -> u8 {
        self.hooks.pre_fetch(self.registers);
        let opcode = self.fetch_byte();
        self.hooks.post_fetch(self.registers, opcode);
        opcode
    }

    fn decode<'t>(&mut self, table: &'t InstructionTable<M>, opcode: u8) -> &'t Instruction<M> {
        self.hooks.pre_decode(opcode);
        let instruction = table.get(opcode);
        self.hooks.post_decode(opcode, instruction.metadata());
        instruction
    }

    fn execute(&mut self, instruction: &Instruction<M>, address: u16) -> Result<(), ExecutionError> {
        let (metadata, handler) = match instruction {
            Instruction::Bound { metadata, handler } => (metadata, handler),
            Instruction::Unimplemented { opcode } => {
                error!("unimplemented opcode ${:02X} at ${:04X}", opcode, address);
                return Err(ExecutionError::UnimplementedOpcode {
                    opcode: *opcode,
                    address,
                });
            }
        };

        self.hooks.pre_execute(self.registers, metadata);
        handler(self, metadata.addressing_mode)?;
        self.hooks.post_execute(self.registers, metadata);

        trace!("${:04X} {} -> {}", address, metadata.mnemonic, self.registers);
        Ok(())
    }
}

/// Settings for [`run`].
///
/// # Examples
///
/// ```
/// use core6502::RunConfig;
///
/// assert_eq!(RunConfig::default().max_breaks, 0);
/// assert_eq!(RunConfig::default().with_max_breaks(3).max_breaks, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Number of BRK instructions executed before the next one halts the run.
    pub max_breaks: u32,
}

impl RunConfig {
    pub fn with_max_breaks(mut self, max_breaks: u32) -> Self {
        self.max_breaks = max_breaks;
        self
    }
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Halted,
}

/// What a completed [`run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Instructions executed, including soft breaks.
    pub instructions: u64,

    /// BRK instructions that were executed rather than halting.
    pub soft_breaks: u32,

    /// Address of the BRK that halted the run (PC is left here).
    pub halted_at: u16,
}

/// Executes exactly one instruction.
///
/// BRK is executed like any other instruction; the break-count rule only
/// applies to [`run`]. Returns the opcode that was executed.
///
/// # Examples
///
/// ```
/// use core6502::{step, FlatMemory, InstructionTable, MemoryBus, NoHooks, Registers};
///
/// let mut registers = Registers { pc: 0x0600, ..Registers::default() };
/// let mut memory = FlatMemory::new();
/// memory.write(0x0600, 0xA9); // LDA #$42
/// memory.write(0x0601, 0x42);
/// let table = InstructionTable::new();
///
/// let opcode = step(&mut registers, &mut memory, &table, &mut NoHooks).unwrap();
/// assert_eq!(opcode, 0xA9);
/// assert_eq!(registers.a, 0x42);
/// assert_eq!(registers.pc, 0x0602);
/// ```
pub fn step<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    table: &InstructionTable<M>,
    hooks: &mut dyn Hooks,
) -> Result<u8, ExecutionError> {
    let mut cx = ExecutionContext::new(registers, memory, hooks);
    let address = cx.registers.pc;
    let opcode = cx.fetch_opcode();
    let instruction = cx.decode(table, opcode);
    cx.execute(instruction, address)?;
    Ok(opcode)
}

/// Runs until a BRK exceeds `config.max_breaks` or an instruction fails.
///
/// # Examples
///
/// ```
/// use core6502::{run, FlatMemory, InstructionTable, MemoryBus, NoHooks, Registers, RunConfig};
///
/// let mut registers = Registers { pc: 0x0600, ..Registers::default() };
/// let mut memory = FlatMemory::new();
/// memory.write(0x0600, 0xE8); // INX
/// memory.write(0x0601, 0x00); // BRK
/// let table = InstructionTable::new();
///
/// let summary = run(&mut registers, &mut memory, &table, &mut NoHooks, &RunConfig::default()).unwrap();
/// assert_eq!(registers.x, 1);
/// assert_eq!(registers.pc, 0x0601);
/// assert_eq!(summary.instructions, 1);
/// ```
pub fn run<M: MemoryBus>(
    registers: &mut Registers,
    memory: &mut M,
    table: &InstructionTable<M>,
    hooks: &mut dyn Hooks,
    config: &RunConfig,
) -> Result<RunSummary, ExecutionError> {
    let mut summary = RunSummary::default();
    let mut breaks: u32 = 0;

    loop {
        let mut cx = ExecutionContext::new(&mut *registers, &mut *memory, &mut *hooks);
        let address = cx.registers.pc;
        let opcode = cx.fetch_opcode();
        let instruction = cx.decode(table, opcode);

        if instruction.mnemonic() == Some(Mnemonic::Brk) {
            breaks = breaks.saturating_add(1);
            if breaks > config.max_breaks {
                cx.registers.pc = address;
                summary.halted_at = address;
                info!(
                    "halted on BRK at ${:04X} after {} instructions",
                    address, summary.instructions
                );
                return Ok(summary);
            }

            summary.soft_breaks += 1;
            debug!(
                "soft break {} of {} at ${:04X}",
                breaks, config.max_breaks, address
            );
        }

        cx.execute(instruction, address)?;
        summary.instructions += 1;
    }
}

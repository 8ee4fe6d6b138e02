//! # Execution Hooks
//!
//! Observer callbacks invoked around every phase of an instruction: before and
//! after fetch, decode and execute, plus after each operand read and write and
//! each byte an instruction pushes onto the stack.
//!
//! Hooks observe only. They receive shared views of the registers and never
//! the memory, so they cannot change what the program computes. Every method
//! has an empty default body; implement just the ones you need.
//!
//! Three implementations ship with the crate:
//!
//! - [`NoHooks`]: does nothing
//! - [`LogHooks`]: forwards each event to `log` at trace level
//! - [`TraceRecorder`]: records one [`TraceEntry`] per executed instruction

use log::trace;

use crate::addressing::Location;
use crate::opcodes::OpcodeMetadata;
use crate::Registers;

/// Per-instruction observer.
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, Hooks, MemoryBus, OpcodeMetadata, Registers};
///
/// #[derive(Default)]
/// struct Counter(u32);
///
/// impl Hooks for Counter {
///     fn post_execute(&mut self, _registers: &Registers, _metadata: &OpcodeMetadata) {
///         self.0 += 1;
///     }
/// }
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0xEA); // NOP
/// memory.write(0x0001, 0xEA); // NOP
///
/// let mut cpu = Cpu::new(memory);
/// let mut counter = Counter::default();
/// cpu.step_with_hooks(&mut counter).unwrap();
/// cpu.step_with_hooks(&mut counter).unwrap();
/// assert_eq!(counter.0, 2);
/// ```
pub trait Hooks {
    /// Called before the opcode byte is read. PC points at it.
    fn pre_fetch(&mut self, _registers: &Registers) {}

    /// Called after the opcode byte is read. PC has advanced past it.
    fn post_fetch(&mut self, _registers: &Registers, _opcode: u8) {}

    fn pre_decode(&mut self, _opcode: u8) {}

    /// Called with the table entry the opcode decoded to. Unimplemented
    /// opcodes report [`OpcodeMetadata::ILLEGAL`].
    fn post_decode(&mut self, _opcode: u8, _metadata: &OpcodeMetadata) {}

    fn pre_execute(&mut self, _registers: &Registers, _metadata: &OpcodeMetadata) {}

    fn post_execute(&mut self, _registers: &Registers, _metadata: &OpcodeMetadata) {}

    /// Called after an operand read with the value that was read.
    fn operand_read(&mut self, _location: Location, _value: u8) {}

    /// Called after an operand write with the value that was written.
    fn operand_write(&mut self, _location: Location, _value: u8) {}

    /// Called after an instruction pushes `value` to `address` in page 1.
    fn stack_write(&mut self, _address: u16, _value: u8) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl Hooks for NoHooks {}

/// Hooks that log every event at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHooks;

impl Hooks for LogHooks {
    fn pre_fetch(&mut self, registers: &Registers) {
        trace!("fetch ${:04X}", registers.pc);
    }

    fn post_decode(&mut self, opcode: u8, metadata: &OpcodeMetadata) {
        trace!(
            "decode ${:02X} -> {} {}",
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );
    }

    fn post_execute(&mut self, registers: &Registers, metadata: &OpcodeMetadata) {
        trace!("{} done: {}", metadata.mnemonic, registers);
    }

    fn operand_read(&mut self, location: Location, value: u8) {
        trace!("read {:?} = ${:02X}", location, value);
    }

    fn operand_write(&mut self, location: Location, value: u8) {
        trace!("write {:?} = ${:02X}", location, value);
    }

    fn stack_write(&mut self, address: u16, value: u8) {
        trace!("push ${:04X} = ${:02X}", address, value);
    }
}

/// One executed instruction as seen by [`TraceRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub opcode: u8,
    pub metadata: OpcodeMetadata,
    /// Registers just before execution (PC already past the opcode).
    pub before: Registers,
    pub after: Registers,
    pub reads: Vec<(Location, u8)>,
    /// Operand writes and stack pushes, in the order they happened.
    pub writes: Vec<(Location, u8)>,
}

/// Records a [`TraceEntry`] for every instruction that completes.
///
/// Two runs of the same program from the same state produce equal traces.
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, Location, MemoryBus, TraceRecorder};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0xA9); // LDA #$07
/// memory.write(0x0001, 0x07);
///
/// let mut cpu = Cpu::new(memory);
/// let mut recorder = TraceRecorder::new();
/// cpu.step_with_hooks(&mut recorder).unwrap();
///
/// let entry = &recorder.entries()[0];
/// assert_eq!(entry.opcode, 0xA9);
/// assert_eq!(entry.reads, vec![(Location::Literal(0x07), 0x07)]);
/// assert_eq!(entry.after.a, 0x07);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
    pending: Option<TraceEntry>,
    opcode: u8,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed instructions, oldest first.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending = None;
    }
}

impl Hooks for TraceRecorder {
    fn post_fetch(&mut self, _registers: &Registers, opcode: u8) {
        self.opcode = opcode;
    }

    fn pre_execute(&mut self, registers: &Registers, metadata: &OpcodeMetadata) {
        self.pending = Some(TraceEntry {
            opcode: self.opcode,
            metadata: *metadata,
            before: *registers,
            after: *registers,
            reads: Vec::new(),
            writes: Vec::new(),
        });
    }

    fn post_execute(&mut self, registers: &Registers, _metadata: &OpcodeMetadata) {
        if let Some(mut entry) = self.pending.take() {
            entry.after = *registers;
            self.entries.push(entry);
        }
    }

    fn operand_read(&mut self, location: Location, value: u8) {
        if let Some(entry) = self.pending.as_mut() {
            entry.reads.push((location, value));
        }
    }

    fn operand_write(&mut self, location: Location, value: u8) {
        if let Some(entry) = self.pending.as_mut() {
            entry.writes.push((location, value));
        }
    }

    fn stack_write(&mut self, address: u16, value: u8) {
        self.operand_write(Location::Memory(address), value);
    }
}

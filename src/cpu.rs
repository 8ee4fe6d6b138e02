//! # CPU
//!
//! [`Cpu`] bundles one register file, one memory and a decoded
//! [`InstructionTable`] so callers do not have to thread all three through
//! [`step`](crate::step) and [`run`](crate::run) themselves.
//!
//! ## CPU State
//!
//! - **Registers**: A, X, Y, PC, SP and the status flags (see [`Registers`])
//! - **Memory**: any [`MemoryBus`] implementation, owned by the CPU
//! - **Run state**: running, or halted after a [`run`](Cpu::run) stopped on BRK
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction
//! - `run()`: execute until BRK exceeds the configured break count
//! - `irq()` / `nmi()`: enter a hardware interrupt between instructions

use log::debug;

use crate::execution::{self, RunConfig, RunState, RunSummary};
use crate::hooks::{Hooks, NoHooks};
use crate::opcodes::InstructionTable;
use crate::stack;
use crate::{ExecutionError, MemoryBus, Registers, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// 6502 CPU owning its memory.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, MemoryBus, RunConfig};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector -> 0x8000
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$2A
/// memory.write(0x8001, 0x2A);
/// memory.write(0x8002, 0x00); // BRK
///
/// let mut cpu = Cpu::with_reset(memory);
/// let summary = cpu.run(&RunConfig::default()).unwrap();
///
/// assert_eq!(cpu.registers().a, 0x2A);
/// assert_eq!(summary.halted_at, 0x8002);
/// assert!(cpu.is_halted());
/// ```
pub struct Cpu<M: MemoryBus> {
    registers: Registers,
    memory: M,
    table: InstructionTable<M>,
    state: RunState,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with default registers (PC = 0, SP = 0xFF, flags clear).
    ///
    /// No reset sequence is run; set PC through [`Cpu::registers_mut`] or use
    /// [`Cpu::with_reset`].
    pub fn new(memory: M) -> Self {
        Self::with_registers(Registers::default(), memory)
    }

    /// Creates a CPU starting from the given register file.
    pub fn with_registers(registers: Registers, memory: M) -> Self {
        Self {
            registers,
            memory,
            table: InstructionTable::new(),
            state: RunState::Running,
        }
    }

    /// Creates a CPU and runs the reset sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = Cpu::with_reset(mem);
    /// assert_eq!(cpu.registers().pc, 0x8000);
    /// assert_eq!(cpu.registers().sp, 0xFD);
    /// assert!(cpu.registers().status.i);
    /// ```
    pub fn with_reset(memory: M) -> Self {
        let mut cpu = Self::new(memory);
        cpu.reset();
        cpu
    }

    /// Runs the reset sequence.
    ///
    /// A, X and Y are zeroed, SP is set to 0xFD, I is set with every other
    /// flag clear and PC is loaded from the reset vector at 0xFFFC/0xFFFD.
    pub fn reset(&mut self) {
        let pc = self.memory.read_vector(RESET_VECTOR);
        self.registers = Registers {
            pc,
            sp: 0xFD,
            ..Registers::default()
        };
        self.registers.status.i = true;
        self.state = RunState::Running;
        debug!("reset: PC=${:04X}", pc);
    }

    /// Executes one instruction.
    ///
    /// Returns the opcode that was executed.
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        self.step_with_hooks(&mut NoHooks)
    }

    pub fn step_with_hooks(&mut self, hooks: &mut dyn Hooks) -> Result<u8, ExecutionError> {
        self.state = RunState::Running;
        execution::step(&mut self.registers, &mut self.memory, &self.table, hooks)
    }

    /// Runs until a BRK exceeds `config.max_breaks`.
    ///
    /// On success the CPU is halted with PC on the final BRK. On error the CPU
    /// is halted too, with PC past the failing opcode.
    pub fn run(&mut self, config: &RunConfig) -> Result<RunSummary, ExecutionError> {
        self.run_with_hooks(&mut NoHooks, config)
    }

    pub fn run_with_hooks(
        &mut self,
        hooks: &mut dyn Hooks,
        config: &RunConfig,
    ) -> Result<RunSummary, ExecutionError> {
        self.state = RunState::Running;
        let result = execution::run(
            &mut self.registers,
            &mut self.memory,
            &self.table,
            hooks,
            config,
        );
        self.state = RunState::Halted;
        result
    }

    /// Requests a maskable interrupt.
    ///
    /// Returns `false` without touching any state when I is set.
    pub fn irq(&mut self) -> bool {
        if self.registers.status.i {
            return false;
        }
        stack::interrupt(&mut self.registers, &mut self.memory, IRQ_VECTOR);
        self.state = RunState::Running;
        true
    }

    /// Triggers a non-maskable interrupt. Always taken.
    pub fn nmi(&mut self) {
        stack::interrupt(&mut self.registers, &mut self.memory, NMI_VECTOR);
        self.state = RunState::Running;
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn table(&self) -> &InstructionTable<M> {
        &self.table
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn reset_to(start: u16) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_vector(RESET_VECTOR, start);
        Cpu::with_reset(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = reset_to(0x8000);
        let registers = cpu.registers();

        assert_eq!(registers.pc, 0x8000);
        assert_eq!(registers.sp, 0xFD);
        assert_eq!(registers.a, 0x00);
        assert_eq!(registers.x, 0x00);
        assert_eq!(registers.y, 0x00);

        assert!(registers.status.i);
        assert!(!registers.status.n);
        assert!(!registers.status.v);
        assert!(!registers.status.b);
        assert!(!registers.status.d);
        assert!(!registers.status.z);
        assert!(!registers.status.c);
        assert_eq!(cpu.state(), RunState::Running);
    }

    #[test]
    fn test_new_uses_default_registers() {
        let cpu = Cpu::new(FlatMemory::new());
        assert_eq!(*cpu.registers(), Registers::default());
    }

    #[test]
    fn test_step_unimplemented() {
        let mut cpu = reset_to(0x8000);
        cpu.memory_mut().write(0x8000, 0x02);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnimplementedOpcode {
                opcode: 0x02,
                address: 0x8000
            })
        );
        assert_eq!(cpu.registers().pc, 0x8001);
    }

    #[test]
    fn test_run_halts_on_brk() {
        let mut cpu = reset_to(0x8000);
        for addr in 0x8000..0x8004 {
            cpu.memory_mut().write(addr, 0xEA);
        }
        cpu.memory_mut().write(0x8004, 0x00);

        let summary = cpu.run(&RunConfig::default()).unwrap();
        assert_eq!(summary.instructions, 4);
        assert_eq!(summary.halted_at, 0x8004);
        assert_eq!(cpu.registers().pc, 0x8004);
        assert!(cpu.is_halted());

        cpu.step().unwrap();
        assert_eq!(cpu.state(), RunState::Running);
    }

    #[test]
    fn test_run_halts_on_unimplemented_opcode() {
        let mut cpu = reset_to(0x8000);
        cpu.memory_mut().write(0x8000, 0xEA);
        cpu.memory_mut().write(0x8001, 0x02);

        let result = cpu.run(&RunConfig::default());

        assert_eq!(
            result,
            Err(ExecutionError::UnimplementedOpcode {
                opcode: 0x02,
                address: 0x8001
            })
        );
        assert_eq!(cpu.state(), RunState::Halted);
        assert_eq!(cpu.registers().pc, 0x8002);
    }

    #[test]
    fn test_irq_respects_interrupt_disable() {
        let mut cpu = reset_to(0x8000);
        cpu.memory_mut().write_vector(IRQ_VECTOR, 0x9000);

        assert!(!cpu.irq());
        assert_eq!(cpu.registers().pc, 0x8000);

        cpu.registers_mut().status.i = false;
        assert!(cpu.irq());
        assert_eq!(cpu.registers().pc, 0x9000);
        assert!(cpu.registers().status.i);
    }

    #[test]
    fn test_nmi_ignores_interrupt_disable() {
        let mut cpu = reset_to(0x8000);
        cpu.memory_mut().write_vector(NMI_VECTOR, 0xA000);

        cpu.nmi();
        assert_eq!(cpu.registers().pc, 0xA000);
        assert_eq!(cpu.registers().sp, 0xFA);
    }
}

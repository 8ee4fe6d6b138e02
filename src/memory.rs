//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the interpreter from
//! specific memory implementations. The interpreter only ever asks for a byte at
//! a 16-bit address or stores one there, so any layout works behind it:
//!
//! - Flat 64KB RAM (`FlatMemory`)
//! - Device maps with mirrored windows (`MappedMemory`, see the `devices` module)
//! - ROM/RAM splits
//!
//! ## Vectors
//!
//! The top six bytes of the address space hold three little-endian pointers used
//! by the interrupt protocol: NMI at `0xFFFA`, RESET at `0xFFFC` and IRQ/BRK at
//! `0xFFFE`. `MemoryBus::read_vector` and `MemoryBus::write_vector` access them.

/// Address of the non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ vector, shared with BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Memory bus trait for the interpreter to read/write bytes.
///
/// Both operations are total over the 16-bit address space: an implementation
/// decides how each address maps onto its storage (including mirroring), but it
/// must always resolve the same address to the same cell.
///
/// # Examples
///
/// ```
/// use core6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use core6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address (the `peek` operation).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address (the `poke` operation).
    fn write(&mut self, addr: u16, value: u8);

    /// Reads the little-endian pointer stored at `vector` and `vector + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus, RESET_VECTOR};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// assert_eq!(mem.read_vector(RESET_VECTOR), 0x8000);
    /// ```
    fn read_vector(&self, vector: u16) -> u16 {
        let low = self.read(vector) as u16;
        let high = self.read(vector.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Stores `target` as a little-endian pointer at `vector` and `vector + 1`.
    fn write_vector(&mut self, vector: u16, target: u16) {
        self.write(vector, (target & 0xFF) as u8);
        self.write(vector.wrapping_add(1), (target >> 8) as u8);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array initialized
/// to zero.
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = Cpu::with_reset(memory);
/// assert_eq!(cpu.registers().pc, 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

//! Memory-mapped device support.
//!
//! The interpreter only sees a [`MemoryBus`]. This module builds one out of
//! smaller pieces so a program can run against a realistic memory layout:
//!
//! - **Device trait**: a block of cells addressed by offset (0 to size-1)
//! - **MappedMemory**: routes each address to the device whose range holds it
//! - **Device implementations**: RAM, ROM and a mirroring wrapper
//! - **nes**: the NES CPU address map assembled from the above
//!
//! # Example
//!
//! ```rust
//! use core6502::{Cpu, MappedMemory, MemoryBus, MirroredDevice, RamDevice, RomDevice};
//!
//! let mut memory = MappedMemory::new();
//!
//! // 2KB RAM repeated four times over 0x0000-0x1FFF
//! let ram = MirroredDevice::new(Box::new(RamDevice::new(0x0800)), 0x2000).unwrap();
//! memory.add_device(0x0000, Box::new(ram)).unwrap();
//!
//! // 16KB ROM at 0xC000-0xFFFF, reset vector pointing at 0xC000
//! let mut rom = vec![0xEA; 0x4000];
//! rom[0x3FFC] = 0x00;
//! rom[0x3FFD] = 0xC0;
//! memory.add_device(0xC000, Box::new(RomDevice::new(rom))).unwrap();
//!
//! memory.write(0x0010, 0x42);
//! assert_eq!(memory.read(0x0810), 0x42);
//!
//! let cpu = Cpu::with_reset(memory);
//! assert_eq!(cpu.registers().pc, 0xC000);
//! ```

use log::trace;
use thiserror::Error;

use crate::MemoryBus;

pub mod mirror;
pub mod nes;
pub mod ram;
pub mod rom;

pub use mirror::MirroredDevice;
pub use ram::RamDevice;
pub use rom::RomDevice;

/// A memory-mapped block of cells.
///
/// The mapper passes offsets relative to the device's base address, so the
/// same device works wherever it is mapped. Offsets are always below
/// [`Device::size`].
///
/// # Examples
///
/// ```rust
/// use core6502::Device;
///
/// struct SimpleRam {
///     data: Vec<u8>,
/// }
///
/// impl Device for SimpleRam {
///     fn read(&self, offset: u16) -> u8 {
///         self.data[offset as usize]
///     }
///
///     fn write(&mut self, offset: u16, value: u8) {
///         self.data[offset as usize] = value;
///     }
///
///     fn size(&self) -> u16 {
///         self.data.len() as u16
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte at `offset`.
    fn read(&self, offset: u16) -> u8;

    /// Writes the byte at `offset`.
    fn write(&mut self, offset: u16, value: u8);

    /// Number of addresses the device occupies.
    fn size(&self) -> u16;
}

/// Errors raised while building a memory map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The new device's range intersects one already mapped.
    #[error(
        "device at ${new_base:04X} ({new_size} bytes) overlaps device at ${existing_base:04X} ({existing_size} bytes)"
    )]
    Overlap {
        new_base: u16,
        new_size: u16,
        existing_base: u16,
        existing_size: u16,
    },

    /// The device would extend past 0xFFFF.
    #[error("device at ${base:04X} ({size} bytes) runs past the end of the address space")]
    OutOfRange { base: u16, size: u16 },

    /// A mirror was asked to repeat a device with no cells.
    #[error("cannot mirror an empty device")]
    EmptyMirror,

    /// Bytes loaded into a device do not fit.
    #[error("{len} bytes at offset {offset} do not fit in a {size}-byte device")]
    ImageTooLarge { offset: u16, len: usize, size: u16 },
}

struct DeviceMapping {
    base: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Exclusive end of the mapped range, as a 17-bit value.
    fn end(&self) -> u32 {
        self.base as u32 + self.device.size() as u32
    }

    fn offset_of(&self, addr: u16) -> Option<u16> {
        let addr32 = addr as u32;
        (addr32 >= self.base as u32 && addr32 < self.end()).then(|| addr - self.base)
    }
}

/// Memory assembled from devices at fixed base addresses.
///
/// Reads from unmapped addresses return the floating-bus value (0xFF unless
/// changed with [`MappedMemory::with_unmapped_value`]); writes to them are
/// dropped. Both are logged at trace level.
///
/// # Examples
///
/// ```rust
/// use core6502::{MappedMemory, RamDevice, MemoryBus};
///
/// let mut memory = MappedMemory::new();
/// memory.add_device(0x0000, Box::new(RamDevice::new(16384))).unwrap();
///
/// memory.write(0x1234, 0x42);
/// assert_eq!(memory.read(0x1234), 0x42);
/// assert_eq!(memory.read(0x8000), 0xFF);
/// ```
pub struct MappedMemory {
    devices: Vec<DeviceMapping>,
    unmapped_value: u8,
}

impl MappedMemory {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            unmapped_value: 0xFF,
        }
    }

    /// Sets the value returned for reads that hit no device.
    pub fn with_unmapped_value(mut self, value: u8) -> Self {
        self.unmapped_value = value;
        self
    }

    /// Maps `device` at `base`.
    ///
    /// The device covers `base..base + device.size()`. Fails if that range
    /// leaves the address space or intersects an existing device.
    ///
    /// ```rust
    /// use core6502::{DeviceError, MappedMemory, RamDevice};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.add_device(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();
    ///
    /// let result = memory.add_device(0x1000, Box::new(RamDevice::new(1024)));
    /// assert!(matches!(result, Err(DeviceError::Overlap { .. })));
    /// ```
    pub fn add_device(&mut self, base: u16, device: Box<dyn Device>) -> Result<(), DeviceError> {
        let mapping = DeviceMapping { base, device };
        let size = mapping.device.size();

        if mapping.end() > 0x1_0000 {
            return Err(DeviceError::OutOfRange { base, size });
        }

        if let Some(existing) = self
            .devices
            .iter()
            .find(|existing| (base as u32) < existing.end() && mapping.end() > existing.base as u32)
        {
            return Err(DeviceError::Overlap {
                new_base: base,
                new_size: size,
                existing_base: existing.base,
                existing_size: existing.device.size(),
            });
        }

        self.devices.push(mapping);
        Ok(())
    }

    /// Index of the mapping holding `addr` and the offset within it.
    fn locate(&self, addr: u16) -> Option<(usize, u16)> {
        self.devices
            .iter()
            .enumerate()
            .find_map(|(index, mapping)| mapping.offset_of(addr).map(|offset| (index, offset)))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, addr: u16) -> u8 {
        match self.locate(addr) {
            Some((index, offset)) => self.devices[index].device.read(offset),
            None => {
                trace!("read from unmapped ${:04X}", addr);
                self.unmapped_value
            }
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match self.locate(addr) {
            Some((index, offset)) => self.devices[index].device.write(offset, value),
            None => trace!("dropped write ${:02X} to unmapped ${:04X}", value, addr),
        }
    }
}

//! NES CPU address map.
//!
//! | Range           | Contents                                    |
//! |-----------------|---------------------------------------------|
//! | `$0000-$1FFF`   | 2KB internal RAM, mirrored four times       |
//! | `$2000-$3FFF`   | 8 PPU registers, mirrored every 8 bytes     |
//! | `$4000-$4017`   | APU and I/O registers                       |
//! | `$4018-$401F`   | APU test-mode registers                     |
//! | `$4020-$FFFF`   | Cartridge space                             |
//!
//! Registers are plain storage cells here; no PPU or APU behaviour is
//! attached. The cartridge region is RAM by default so programs and vectors
//! can be loaded straight into it.

use super::{Device, DeviceError, MappedMemory, MirroredDevice, RamDevice};

pub const RAM_BASE: u16 = 0x0000;
pub const RAM_SIZE: u16 = 0x0800;
pub const RAM_WINDOW: u16 = 0x2000;

pub const PPU_BASE: u16 = 0x2000;
pub const PPU_REGISTERS: u16 = 0x0008;
pub const PPU_WINDOW: u16 = 0x2000;

pub const APU_BASE: u16 = 0x4000;
pub const APU_SIZE: u16 = 0x0018;

pub const APU_TEST_BASE: u16 = 0x4018;
pub const APU_TEST_SIZE: u16 = 0x0008;

pub const CARTRIDGE_BASE: u16 = 0x4020;
pub const CARTRIDGE_SIZE: u16 = 0xBFE0;

/// Builds the NES CPU map with RAM in cartridge space.
///
/// # Examples
///
/// ```rust
/// use core6502::devices::nes::cpu_memory_map;
/// use core6502::MemoryBus;
///
/// let mut memory = cpu_memory_map().unwrap();
///
/// memory.write(0x0000, 0x42);
/// assert_eq!(memory.read(0x0800), 0x42);
/// assert_eq!(memory.read(0x1000), 0x42);
/// assert_eq!(memory.read(0x1800), 0x42);
///
/// memory.write(0x2001, 0x1E);
/// assert_eq!(memory.read(0x3FF9), 0x1E);
/// ```
pub fn cpu_memory_map() -> Result<MappedMemory, DeviceError> {
    cpu_memory_map_with_cartridge(Box::new(RamDevice::new(CARTRIDGE_SIZE)))
}

/// Builds the NES CPU map with `cartridge` mapped at `$4020`.
///
/// A cartridge smaller than the full region leaves the rest unmapped.
pub fn cpu_memory_map_with_cartridge(
    cartridge: Box<dyn Device>,
) -> Result<MappedMemory, DeviceError> {
    let mut memory = MappedMemory::new();

    let ram = MirroredDevice::new(Box::new(RamDevice::new(RAM_SIZE)), RAM_WINDOW)?;
    memory.add_device(RAM_BASE, Box::new(ram))?;

    let ppu = MirroredDevice::new(Box::new(RamDevice::new(PPU_REGISTERS)), PPU_WINDOW)?;
    memory.add_device(PPU_BASE, Box::new(ppu))?;

    memory.add_device(APU_BASE, Box::new(RamDevice::new(APU_SIZE)))?;
    memory.add_device(APU_TEST_BASE, Box::new(RamDevice::new(APU_TEST_SIZE)))?;
    memory.add_device(CARTRIDGE_BASE, cartridge)?;

    Ok(memory)
}

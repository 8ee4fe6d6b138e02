//! ROM device implementation.

use log::trace;

use super::Device;

/// Read-only storage. Writes are dropped.
///
/// # Examples
///
/// ```rust
/// use core6502::{RomDevice, Device};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
/// assert_eq!(rom.read(0), 0xEA);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Wraps `data` as ROM. Anything past 0xFFFF bytes is unreachable.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        trace!("ignored ROM write ${:02X} at offset {:#06X}", value, offset);
    }

    fn size(&self) -> u16 {
        self.data.len().min(u16::MAX as usize) as u16
    }
}

//! RAM device implementation.

use super::{Device, DeviceError};

/// Readable and writable storage, zeroed on creation.
///
/// # Examples
///
/// ```rust
/// use core6502::{RamDevice, Device};
///
/// let mut ram = RamDevice::new(1024);
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    pub fn new(size: u16) -> Self {
        Self {
            data: vec![0; size as usize],
        }
    }

    /// Copies `bytes` into the device starting at `offset`.
    ///
    /// ```rust
    /// use core6502::{RamDevice, Device};
    ///
    /// let mut ram = RamDevice::new(1024);
    /// ram.load(0x100, &[0x01, 0x02, 0x03]).unwrap();
    /// assert_eq!(ram.read(0x102), 0x03);
    ///
    /// assert!(ram.load(0x3FF, &[0x01, 0x02]).is_err());
    /// ```
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<(), DeviceError> {
        let start = offset as usize;
        let size = self.data.len() as u16;
        let target = self
            .data
            .get_mut(start..start + bytes.len())
            .ok_or(DeviceError::ImageTooLarge {
                offset,
                len: bytes.len(),
                size,
            })?;
        target.copy_from_slice(bytes);
        Ok(())
    }
}

impl Device for RamDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.data[offset as usize] = value;
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}

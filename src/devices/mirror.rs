//! Address mirroring.
//!
//! Many 6502 systems decode only the low address lines for small chips, so the
//! same cells answer at several addresses. [`MirroredDevice`] reproduces that:
//! it occupies a window larger than the device it wraps and folds every offset
//! back into the device with `offset % inner.size()`.

use super::{Device, DeviceError};

/// Repeats a device across a larger window.
///
/// # Examples
///
/// ```rust
/// use core6502::{Device, MirroredDevice, RamDevice};
///
/// // 2KB of RAM seen four times across 8KB
/// let mut ram = MirroredDevice::new(Box::new(RamDevice::new(0x0800)), 0x2000).unwrap();
/// ram.write(0x0001, 0x77);
///
/// assert_eq!(ram.size(), 0x2000);
/// assert_eq!(ram.read(0x0801), 0x77);
/// assert_eq!(ram.read(0x1801), 0x77);
/// ```
pub struct MirroredDevice {
    inner: Box<dyn Device>,
    window: u16,
}

impl MirroredDevice {
    /// Mirrors `inner` across `window` addresses.
    ///
    /// `window` need not be a multiple of the inner size; the last repetition
    /// is then partial.
    pub fn new(inner: Box<dyn Device>, window: u16) -> Result<Self, DeviceError> {
        if inner.size() == 0 {
            return Err(DeviceError::EmptyMirror);
        }
        Ok(Self { inner, window })
    }

    fn fold(&self, offset: u16) -> u16 {
        offset % self.inner.size()
    }
}

impl Device for MirroredDevice {
    fn read(&self, offset: u16) -> u8 {
        self.inner.read(self.fold(offset))
    }

    fn write(&mut self, offset: u16, value: u8) {
        let folded = self.fold(offset);
        self.inner.write(folded, value);
    }

    fn size(&self) -> u16 {
        self.window
    }
}

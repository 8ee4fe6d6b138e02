//! # Register File
//!
//! The 6502 register file is pure state: an accumulator, two index registers,
//! a 16-bit program counter, an 8-bit stack pointer and seven status flags.
//!
//! The flags are kept as individual booleans in [`Status`] so instructions can
//! address them directly. They are packed into (and unpacked from) the single
//! status byte only when the byte is pushed to or pulled from the stack:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V - B D I Z C
//! ```
//!
//! Bit 5 is not backed by a flag. It always reads as 1.

use std::fmt;

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use core6502::Status;
///
/// let status = Status::from_byte(0b1100_0011);
/// assert!(status.n && status.v && status.z && status.c);
/// assert_eq!(status.to_byte(), 0b1110_0011); // bit 5 forced on
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    /// Negative (bit 7 of the last result).
    pub n: bool,
    /// Signed overflow.
    pub v: bool,
    /// Break. Only meaningful in a pushed status byte.
    pub b: bool,
    /// Decimal mode. Stored but does not change arithmetic.
    pub d: bool,
    /// Interrupt disable.
    pub i: bool,
    /// Zero.
    pub z: bool,
    /// Carry.
    pub c: bool,
}

impl Status {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;

    /// Packs the flags into a status byte. Bit 5 is always set.
    pub fn to_byte(self) -> u8 {
        let mut byte = Self::UNUSED;

        if self.n {
            byte |= Self::NEGATIVE;
        }
        if self.v {
            byte |= Self::OVERFLOW;
        }
        if self.b {
            byte |= Self::BREAK;
        }
        if self.d {
            byte |= Self::DECIMAL;
        }
        if self.i {
            byte |= Self::INTERRUPT;
        }
        if self.z {
            byte |= Self::ZERO;
        }
        if self.c {
            byte |= Self::CARRY;
        }

        byte
    }

    /// Unpacks a status byte. Bit 5 is ignored; B is loaded like every other flag.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            n: byte & Self::NEGATIVE != 0,
            v: byte & Self::OVERFLOW != 0,
            b: byte & Self::BREAK != 0,
            d: byte & Self::DECIMAL != 0,
            i: byte & Self::INTERRUPT != 0,
            z: byte & Self::ZERO != 0,
            c: byte & Self::CARRY != 0,
        }
    }

    /// Sets N and Z from an 8-bit result.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.n = value & 0x80 != 0;
        self.z = value == 0;
    }
}

/// The 6502 register file.
///
/// `Registers::default()` is the state the interpreter starts from when no
/// reset sequence is run: every register zeroed, all flags clear and the stack
/// pointer at the top of page 1.
///
/// # Examples
///
/// ```
/// use core6502::Registers;
///
/// let mut registers = Registers::default();
/// registers.pc = 0x0600;
/// registers.a = 0x42;
///
/// assert_eq!(registers.sp, 0xFF);
/// assert_eq!(registers.stack_address(), 0x01FF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Program counter: address of the next byte to fetch.
    pub pc: u16,
    /// Stack pointer: offset of the next free slot in page 1.
    pub sp: u8,
    /// Status flags.
    pub status: Status,
}

impl Registers {
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0x0000,
            sp: 0xFF,
            status: Status {
                n: false,
                v: false,
                b: false,
                d: false,
                i: false,
                z: false,
                c: false,
            },
        }
    }

    /// Absolute address the stack pointer refers to (`0x0100 + SP`).
    pub fn stack_address(&self) -> u16 {
        0x0100 | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A=${:02X} X=${:02X} Y=${:02X} PC=${:04X} SP=${:02X} NV-BDIZC={:08b}",
            self.a,
            self.x,
            self.y,
            self.pc,
            self.sp,
            self.status.to_byte()
        )
    }
}

//! # Opcode Table
//!
//! The 256-entry opcode metadata table and the instruction table built from it.
//!
//! [`OPCODE_TABLE`] is the single source of truth for decoding: for every opcode
//! byte it records the mnemonic and addressing mode. The 151 documented NMOS
//! opcodes are filled in; the 105 undocumented ones carry
//! [`Mnemonic::Illegal`].
//!
//! [`InstructionTable`] binds each documented entry to the function that
//! implements its mnemonic, once, when the table is constructed. Undocumented
//! entries become [`Instruction::Unimplemented`], which the execution engine
//! turns into [`ExecutionError::UnimplementedOpcode`].

use std::fmt;

use crate::addressing::AddressingMode;
use crate::execution::ExecutionContext;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::{ExecutionError, MemoryBus};

/// Instruction mnemonics of the NMOS 6502, plus a marker for undocumented opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode.
    Illegal,
}

impl Mnemonic {
    /// Three-letter assembler name, "???" for undocumented opcodes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Illegal => "???",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the opcode is documented and executable.
    pub implemented: bool,
}

impl OpcodeMetadata {
    /// Entry used for every undocumented opcode.
    pub const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
        mnemonic: Mnemonic::Illegal,
        addressing_mode: AddressingMode::Implicit,
        size_bytes: 1,
        implemented: false,
    };
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata::ILLEGAL;

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        implemented: true,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use core6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic.as_str(), "???");
/// assert!(!illegal.implemented);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op(Mnemonic::Brk, AddressingMode::Implicit), // 0x00
    op(Mnemonic::Ora, AddressingMode::IndirectX), // 0x01
    ILLEGAL, // 0x02
    ILLEGAL, // 0x03
    ILLEGAL, // 0x04
    op(Mnemonic::Ora, AddressingMode::ZeroPage), // 0x05
    op(Mnemonic::Asl, AddressingMode::ZeroPage), // 0x06
    ILLEGAL, // 0x07
    op(Mnemonic::Php, AddressingMode::Implicit), // 0x08
    op(Mnemonic::Ora, AddressingMode::Immediate), // 0x09
    op(Mnemonic::Asl, AddressingMode::Accumulator), // 0x0A
    ILLEGAL, // 0x0B
    ILLEGAL, // 0x0C
    op(Mnemonic::Ora, AddressingMode::Absolute), // 0x0D
    op(Mnemonic::Asl, AddressingMode::Absolute), // 0x0E
    ILLEGAL, // 0x0F
    op(Mnemonic::Bpl, AddressingMode::Relative), // 0x10
    op(Mnemonic::Ora, AddressingMode::IndirectY), // 0x11
    ILLEGAL, // 0x12
    ILLEGAL, // 0x13
    ILLEGAL, // 0x14
    op(Mnemonic::Ora, AddressingMode::ZeroPageX), // 0x15
    op(Mnemonic::Asl, AddressingMode::ZeroPageX), // 0x16
    ILLEGAL, // 0x17
    op(Mnemonic::Clc, AddressingMode::Implicit), // 0x18
    op(Mnemonic::Ora, AddressingMode::AbsoluteY), // 0x19
    ILLEGAL, // 0x1A
    ILLEGAL, // 0x1B
    ILLEGAL, // 0x1C
    op(Mnemonic::Ora, AddressingMode::AbsoluteX), // 0x1D
    op(Mnemonic::Asl, AddressingMode::AbsoluteX), // 0x1E
    ILLEGAL, // 0x1F
    op(Mnemonic::Jsr, AddressingMode::Absolute), // 0x20
    op(Mnemonic::And, AddressingMode::IndirectX), // 0x21
    ILLEGAL, // 0x22
    ILLEGAL, // 0x23
    op(Mnemonic::Bit, AddressingMode::ZeroPage), // 0x24
    op(Mnemonic::And, AddressingMode::ZeroPage), // 0x25
    op(Mnemonic::Rol, AddressingMode::ZeroPage), // 0x26
    ILLEGAL, // 0x27
    op(Mnemonic::Plp, AddressingMode::Implicit), // 0x28
    op(Mnemonic::And, AddressingMode::Immediate), // 0x29
    op(Mnemonic::Rol, AddressingMode::Accumulator), // 0x2A
    ILLEGAL, // 0x2B
    op(Mnemonic::Bit, AddressingMode::Absolute), // 0x2C
    op(Mnemonic::And, AddressingMode::Absolute), // 0x2D
    op(Mnemonic::Rol, AddressingMode::Absolute), // 0x2E
    ILLEGAL, // 0x2F
    op(Mnemonic::Bmi, AddressingMode::Relative), // 0x30
    op(Mnemonic::And, AddressingMode::IndirectY), // 0x31
    ILLEGAL, // 0x32
    ILLEGAL, // 0x33
    ILLEGAL, // 0x34
    op(Mnemonic::And, AddressingMode::ZeroPageX), // 0x35
    op(Mnemonic::Rol, AddressingMode::ZeroPageX), // 0x36
    ILLEGAL, // 0x37
    op(Mnemonic::Sec, AddressingMode::Implicit), // 0x38
    op(Mnemonic::And, AddressingMode::AbsoluteY), // 0x39
    ILLEGAL, // 0x3A
    ILLEGAL, // 0x3B
    ILLEGAL, // 0x3C
    op(Mnemonic::And, AddressingMode::AbsoluteX), // 0x3D
    op(Mnemonic::Rol, AddressingMode::AbsoluteX), // 0x3E
    ILLEGAL, // 0x3F
    op(Mnemonic::Rti, AddressingMode::Implicit), // 0x40
    op(Mnemonic::Eor, AddressingMode::IndirectX), // 0x41
    ILLEGAL, // 0x42
    ILLEGAL, // 0x43
    ILLEGAL, // 0x44
    op(Mnemonic::Eor, AddressingMode::ZeroPage), // 0x45
    op(Mnemonic::Lsr, AddressingMode::ZeroPage), // 0x46
    ILLEGAL, // 0x47
    op(Mnemonic::Pha, AddressingMode::Implicit), // 0x48
    op(Mnemonic::Eor, AddressingMode::Immediate), // 0x49
    op(Mnemonic::Lsr, AddressingMode::Accumulator), // 0x4A
    ILLEGAL, // 0x4B
    op(Mnemonic::Jmp, AddressingMode::Absolute), // 0x4C
    op(Mnemonic::Eor, AddressingMode::Absolute), // 0x4D
    op(Mnemonic::Lsr, AddressingMode::Absolute), // 0x4E
    ILLEGAL, // 0x4F
    op(Mnemonic::Bvc, AddressingMode::Relative), // 0x50
    op(Mnemonic::Eor, AddressingMode::IndirectY), // 0x51
    ILLEGAL, // 0x52
    ILLEGAL, // 0x53
    ILLEGAL, // 0x54
    op(Mnemonic::Eor, AddressingMode::ZeroPageX), // 0x55
    op(Mnemonic::Lsr, AddressingMode::ZeroPageX), // 0x56
    ILLEGAL, // 0x57
    op(Mnemonic::Cli, AddressingMode::Implicit), // 0x58
    op(Mnemonic::Eor, AddressingMode::AbsoluteY), // 0x59
    ILLEGAL, // 0x5A
    ILLEGAL, // 0x5B
    ILLEGAL, // 0x5C
    op(Mnemonic::Eor, AddressingMode::AbsoluteX), // 0x5D
    op(Mnemonic::Lsr, AddressingMode::AbsoluteX), // 0x5E
    ILLEGAL, // 0x5F
    op(Mnemonic::Rts, AddressingMode::Implicit), // 0x60
    op(Mnemonic::Adc, AddressingMode::IndirectX), // 0x61
    ILLEGAL, // 0x62
    ILLEGAL, // 0x63
    ILLEGAL, // 0x64
    op(Mnemonic::Adc, AddressingMode::ZeroPage), // 0x65
    op(Mnemonic::Ror, AddressingMode::ZeroPage), // 0x66
    ILLEGAL, // 0x67
    op(Mnemonic::Pla, AddressingMode::Implicit), // 0x68
    op(Mnemonic::Adc, AddressingMode::Immediate), // 0x69
    op(Mnemonic::Ror, AddressingMode::Accumulator), // 0x6A
    ILLEGAL, // 0x6B
    op(Mnemonic::Jmp, AddressingMode::Indirect), // 0x6C
    op(Mnemonic::Adc, AddressingMode::Absolute), // 0x6D
    op(Mnemonic::Ror, AddressingMode::Absolute), // 0x6E
    ILLEGAL, // 0x6F
    op(Mnemonic::Bvs, AddressingMode::Relative), // 0x70
    op(Mnemonic::Adc, AddressingMode::IndirectY), // 0x71
    ILLEGAL, // 0x72
    ILLEGAL, // 0x73
    ILLEGAL, // 0x74
    op(Mnemonic::Adc, AddressingMode::ZeroPageX), // 0x75
    op(Mnemonic::Ror, AddressingMode::ZeroPageX), // 0x76
    ILLEGAL, // 0x77
    op(Mnemonic::Sei, AddressingMode::Implicit), // 0x78
    op(Mnemonic::Adc, AddressingMode::AbsoluteY), // 0x79
    ILLEGAL, // 0x7A
    ILLEGAL, // 0x7B
    ILLEGAL, // 0x7C
    op(Mnemonic::Adc, AddressingMode::AbsoluteX), // 0x7D
    op(Mnemonic::Ror, AddressingMode::AbsoluteX), // 0x7E
    ILLEGAL, // 0x7F
    ILLEGAL, // 0x80
    op(Mnemonic::Sta, AddressingMode::IndirectX), // 0x81
    ILLEGAL, // 0x82
    ILLEGAL, // 0x83
    op(Mnemonic::Sty, AddressingMode::ZeroPage), // 0x84
    op(Mnemonic::Sta, AddressingMode::ZeroPage), // 0x85
    op(Mnemonic::Stx, AddressingMode::ZeroPage), // 0x86
    ILLEGAL, // 0x87
    op(Mnemonic::Dey, AddressingMode::Implicit), // 0x88
    ILLEGAL, // 0x89
    op(Mnemonic::Txa, AddressingMode::Implicit), // 0x8A
    ILLEGAL, // 0x8B
    op(Mnemonic::Sty, AddressingMode::Absolute), // 0x8C
    op(Mnemonic::Sta, AddressingMode::Absolute), // 0x8D
    op(Mnemonic::Stx, AddressingMode::Absolute), // 0x8E
    ILLEGAL, // 0x8F
    op(Mnemonic::Bcc, AddressingMode::Relative), // 0x90
    op(Mnemonic::Sta, AddressingMode::IndirectY), // 0x91
    ILLEGAL, // 0x92
    ILLEGAL, // 0x93
    op(Mnemonic::Sty, AddressingMode::ZeroPageX), // 0x94
    op(Mnemonic::Sta, AddressingMode::ZeroPageX), // 0x95
    op(Mnemonic::Stx, AddressingMode::ZeroPageY), // 0x96
    ILLEGAL, // 0x97
    op(Mnemonic::Tya, AddressingMode::Implicit), // 0x98
    op(Mnemonic::Sta, AddressingMode::AbsoluteY), // 0x99
    op(Mnemonic::Txs, AddressingMode::Implicit), // 0x9A
    ILLEGAL, // 0x9B
    ILLEGAL, // 0x9C
    op(Mnemonic::Sta, AddressingMode::AbsoluteX), // 0x9D
    ILLEGAL, // 0x9E
    ILLEGAL, // 0x9F
    op(Mnemonic::Ldy, AddressingMode::Immediate), // 0xA0
    op(Mnemonic::Lda, AddressingMode::IndirectX), // 0xA1
    op(Mnemonic::Ldx, AddressingMode::Immediate), // 0xA2
    ILLEGAL, // 0xA3
    op(Mnemonic::Ldy, AddressingMode::ZeroPage), // 0xA4
    op(Mnemonic::Lda, AddressingMode::ZeroPage), // 0xA5
    op(Mnemonic::Ldx, AddressingMode::ZeroPage), // 0xA6
    ILLEGAL, // 0xA7
    op(Mnemonic::Tay, AddressingMode::Implicit), // 0xA8
    op(Mnemonic::Lda, AddressingMode::Immediate), // 0xA9
    op(Mnemonic::Tax, AddressingMode::Implicit), // 0xAA
    ILLEGAL, // 0xAB
    op(Mnemonic::Ldy, AddressingMode::Absolute), // 0xAC
    op(Mnemonic::Lda, AddressingMode::Absolute), // 0xAD
    op(Mnemonic::Ldx, AddressingMode::Absolute), // 0xAE
    ILLEGAL, // 0xAF
    op(Mnemonic::Bcs, AddressingMode::Relative), // 0xB0
    op(Mnemonic::Lda, AddressingMode::IndirectY), // 0xB1
    ILLEGAL, // 0xB2
    ILLEGAL, // 0xB3
    op(Mnemonic::Ldy, AddressingMode::ZeroPageX), // 0xB4
    op(Mnemonic::Lda, AddressingMode::ZeroPageX), // 0xB5
    op(Mnemonic::Ldx, AddressingMode::ZeroPageY), // 0xB6
    ILLEGAL, // 0xB7
    op(Mnemonic::Clv, AddressingMode::Implicit), // 0xB8
    op(Mnemonic::Lda, AddressingMode::AbsoluteY), // 0xB9
    op(Mnemonic::Tsx, AddressingMode::Implicit), // 0xBA
    ILLEGAL, // 0xBB
    op(Mnemonic::Ldy, AddressingMode::AbsoluteX), // 0xBC
    op(Mnemonic::Lda, AddressingMode::AbsoluteX), // 0xBD
    op(Mnemonic::Ldx, AddressingMode::AbsoluteY), // 0xBE
    ILLEGAL, // 0xBF
    op(Mnemonic::Cpy, AddressingMode::Immediate), // 0xC0
    op(Mnemonic::Cmp, AddressingMode::IndirectX), // 0xC1
    ILLEGAL, // 0xC2
    ILLEGAL, // 0xC3
    op(Mnemonic::Cpy, AddressingMode::ZeroPage), // 0xC4
    op(Mnemonic::Cmp, AddressingMode::ZeroPage), // 0xC5
    op(Mnemonic::Dec, AddressingMode::ZeroPage), // 0xC6
    ILLEGAL, // 0xC7
    op(Mnemonic::Iny, AddressingMode::Implicit), // 0xC8
    op(Mnemonic::Cmp, AddressingMode::Immediate), // 0xC9
    op(Mnemonic::Dex, AddressingMode::Implicit), // 0xCA
    ILLEGAL, // 0xCB
    op(Mnemonic::Cpy, AddressingMode::Absolute), // 0xCC
    op(Mnemonic::Cmp, AddressingMode::Absolute), // 0xCD
    op(Mnemonic::Dec, AddressingMode::Absolute), // 0xCE
    ILLEGAL, // 0xCF
    op(Mnemonic::Bne, AddressingMode::Relative), // 0xD0
    op(Mnemonic::Cmp, AddressingMode::IndirectY), // 0xD1
    ILLEGAL, // 0xD2
    ILLEGAL, // 0xD3
    ILLEGAL, // 0xD4
    op(Mnemonic::Cmp, AddressingMode::ZeroPageX), // 0xD5
    op(Mnemonic::Dec, AddressingMode::ZeroPageX), // 0xD6
    ILLEGAL, // 0xD7
    op(Mnemonic::Cld, AddressingMode::Implicit), // 0xD8
    op(Mnemonic::Cmp, AddressingMode::AbsoluteY), // 0xD9
    ILLEGAL, // 0xDA
    ILLEGAL, // 0xDB
    ILLEGAL, // 0xDC
    op(Mnemonic::Cmp, AddressingMode::AbsoluteX), // 0xDD
    op(Mnemonic::Dec, AddressingMode::AbsoluteX), // 0xDE
    ILLEGAL, // 0xDF
    op(Mnemonic::Cpx, AddressingMode::Immediate), // 0xE0
    op(Mnemonic::Sbc, AddressingMode::IndirectX), // 0xE1
    ILLEGAL, // 0xE2
    ILLEGAL, // 0xE3
    op(Mnemonic::Cpx, AddressingMode::ZeroPage), // 0xE4
    op(Mnemonic::Sbc, AddressingMode::ZeroPage), // 0xE5
    op(Mnemonic::Inc, AddressingMode::ZeroPage), // 0xE6
    ILLEGAL, // 0xE7
    op(Mnemonic::Inx, AddressingMode::Implicit), // 0xE8
    op(Mnemonic::Sbc, AddressingMode::Immediate), // 0xE9
    op(Mnemonic::Nop, AddressingMode::Implicit), // 0xEA
    ILLEGAL, // 0xEB
    op(Mnemonic::Cpx, AddressingMode::Absolute), // 0xEC
    op(Mnemonic::Sbc, AddressingMode::Absolute), // 0xED
    op(Mnemonic::Inc, AddressingMode::Absolute), // 0xEE
    ILLEGAL, // 0xEF
    op(Mnemonic::Beq, AddressingMode::Relative), // 0xF0
    op(Mnemonic::Sbc, AddressingMode::IndirectY), // 0xF1
    ILLEGAL, // 0xF2
    ILLEGAL, // 0xF3
    ILLEGAL, // 0xF4
    op(Mnemonic::Sbc, AddressingMode::ZeroPageX), // 0xF5
    op(Mnemonic::Inc, AddressingMode::ZeroPageX), // 0xF6
    ILLEGAL, // 0xF7
    op(Mnemonic::Sed, AddressingMode::Implicit), // 0xF8
    op(Mnemonic::Sbc, AddressingMode::AbsoluteY), // 0xF9
    ILLEGAL, // 0xFA
    ILLEGAL, // 0xFB
    ILLEGAL, // 0xFC
    op(Mnemonic::Sbc, AddressingMode::AbsoluteX), // 0xFD
    op(Mnemonic::Inc, AddressingMode::AbsoluteX), // 0xFE
    ILLEGAL, // 0xFF
];

/// Signature shared by every instruction implementation.
pub type Handler<M> =
    fn(&mut ExecutionContext<'_, M>, AddressingMode) -> Result<(), ExecutionError>;

/// One slot of the instruction table.
pub enum Instruction<M: MemoryBus> {
    /// A documented opcode bound to its implementation.
    Bound {
        metadata: OpcodeMetadata,
        handler: Handler<M>,
    },
    /// An undocumented opcode. Executing it is an error.
    Unimplemented { opcode: u8 },
}

impl<M: MemoryBus> Instruction<M> {
    fn bind(opcode: u8) -> Self {
        let metadata = OPCODE_TABLE[opcode as usize];
        match handler_for::<M>(metadata.mnemonic) {
            Some(handler) => Instruction::Bound { metadata, handler },
            None => Instruction::Unimplemented { opcode },
        }
    }

    /// Static metadata for this slot.
    pub fn metadata(&self) -> &OpcodeMetadata {
        match self {
            Instruction::Bound { metadata, .. } => metadata,
            Instruction::Unimplemented { opcode } => &OPCODE_TABLE[*opcode as usize],
        }
    }

    /// The bound mnemonic, or `None` for the unimplemented sentinel.
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        match self {
            Instruction::Bound { metadata, .. } => Some(metadata.mnemonic),
            Instruction::Unimplemented { .. } => None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, Instruction::Bound { .. })
    }
}

impl<M: MemoryBus> Clone for Instruction<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MemoryBus> Copy for Instruction<M> {}

impl<M: MemoryBus> fmt::Debug for Instruction<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Bound { metadata, .. } => f
                .debug_struct("Bound")
                .field("mnemonic", &metadata.mnemonic)
                .field("addressing_mode", &metadata.addressing_mode)
                .finish(),
            Instruction::Unimplemented { opcode } => f
                .debug_struct("Unimplemented")
                .field("opcode", opcode)
                .finish(),
        }
    }
}

/// The 256 decoded instructions, bound to a memory type.
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, InstructionTable, Mnemonic};
///
/// let table: InstructionTable<FlatMemory> = InstructionTable::new();
/// assert_eq!(table.get(0xEA).mnemonic(), Some(Mnemonic::Nop));
/// assert!(!table.get(0xFF).is_implemented());
/// ```
pub struct InstructionTable<M: MemoryBus> {
    slots: [Instruction<M>; 256],
}

impl<M: MemoryBus> InstructionTable<M> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|opcode| Instruction::bind(opcode as u8)),
        }
    }

    /// The instruction bound to `opcode`.
    pub fn get(&self, opcode: u8) -> &Instruction<M> {
        &self.slots[opcode as usize]
    }

    /// Iterates over all 256 slots in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction<M>> {
        self.slots.iter()
    }
}

impl<M: MemoryBus> Default for InstructionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_for<M: MemoryBus>(mnemonic: Mnemonic) -> Option<Handler<M>> {
    let handler: Handler<M> = match mnemonic {
        Mnemonic::Adc => alu::adc,
        Mnemonic::And => alu::and,
        Mnemonic::Bit => alu::bit,
        Mnemonic::Cmp => alu::cmp,
        Mnemonic::Cpx => alu::cpx,
        Mnemonic::Cpy => alu::cpy,
        Mnemonic::Eor => alu::eor,
        Mnemonic::Ora => alu::ora,
        Mnemonic::Sbc => alu::sbc,
        Mnemonic::Bcc => branches::bcc,
        Mnemonic::Bcs => branches::bcs,
        Mnemonic::Beq => branches::beq,
        Mnemonic::Bmi => branches::bmi,
        Mnemonic::Bne => branches::bne,
        Mnemonic::Bpl => branches::bpl,
        Mnemonic::Bvc => branches::bvc,
        Mnemonic::Bvs => branches::bvs,
        Mnemonic::Brk => control::brk,
        Mnemonic::Jmp => control::jmp,
        Mnemonic::Jsr => control::jsr,
        Mnemonic::Nop => control::nop,
        Mnemonic::Rti => control::rti,
        Mnemonic::Rts => control::rts,
        Mnemonic::Clc => flags::clc,
        Mnemonic::Cld => flags::cld,
        Mnemonic::Cli => flags::cli,
        Mnemonic::Clv => flags::clv,
        Mnemonic::Sec => flags::sec,
        Mnemonic::Sed => flags::sed,
        Mnemonic::Sei => flags::sei,
        Mnemonic::Dec => inc_dec::dec,
        Mnemonic::Dex => inc_dec::dex,
        Mnemonic::Dey => inc_dec::dey,
        Mnemonic::Inc => inc_dec::inc,
        Mnemonic::Inx => inc_dec::inx,
        Mnemonic::Iny => inc_dec::iny,
        Mnemonic::Lda => load_store::lda,
        Mnemonic::Ldx => load_store::ldx,
        Mnemonic::Ldy => load_store::ldy,
        Mnemonic::Sta => load_store::sta,
        Mnemonic::Stx => load_store::stx,
        Mnemonic::Sty => load_store::sty,
        Mnemonic::Asl => shifts::asl,
        Mnemonic::Lsr => shifts::lsr,
        Mnemonic::Rol => shifts::rol,
        Mnemonic::Ror => shifts::ror,
        Mnemonic::Pha => stack::pha,
        Mnemonic::Php => stack::php,
        Mnemonic::Pla => stack::pla,
        Mnemonic::Plp => stack::plp,
        Mnemonic::Tax => transfer::tax,
        Mnemonic::Tay => transfer::tay,
        Mnemonic::Tsx => transfer::tsx,
        Mnemonic::Txa => transfer::txa,
        Mnemonic::Txs => transfer::txs,
        Mnemonic::Tya => transfer::tya,
        Mnemonic::Illegal => return None,
    };
    Some(handler)
}

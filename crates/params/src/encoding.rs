//! Instruction-field encodings.
//!
//! Branch type, instruction class, load/store size, and functional unit are
//! carried through the pipeline as small binary fields. Their widths are not
//! knobs: each is `ceil(log2(variant count))` of the enum below.

use std::fmt;

use crate::common::bits::ceil_log2;

/// A closed set of values carried in a fixed-width hardware field.
pub trait FieldEncoding: Copy + fmt::Debug + 'static {
    /// Every variant in encoding order.
    const ALL: &'static [Self];

    /// Binary code of this variant.
    fn code(self) -> u64;

    /// Field width needed to hold every code.
    fn field_bits() -> u64 {
        ceil_log2(Self::ALL.len() as u64)
    }

    /// Decodes a field value.
    fn from_code(code: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

/// Control-transfer kind recorded for each predicted branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchType {
    /// Return
    Return = 0,
    /// Direct or indirect call
    Call = 1,
    /// Direct or indirect jump
    Jump = 2,
    /// Conditional branch
    CondBranch = 3,
}

impl FieldEncoding for BranchType {
    const ALL: &'static [Self] = &[Self::Return, Self::Call, Self::Jump, Self::CondBranch];

    fn code(self) -> u64 {
        self as u64
    }
}

/// Instruction class used to steer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstType {
    /// Loads and stores
    Memory = 0,
    /// Branches and jumps
    Control = 1,
    /// Single-cycle integer
    Simple = 2,
    /// Multiply and divide
    Complex = 3,
    /// Floating point
    Fp = 4,
}

impl FieldEncoding for InstType {
    const ALL: &'static [Self] = &[
        Self::Memory,
        Self::Control,
        Self::Simple,
        Self::Complex,
        Self::Fp,
    ];

    fn code(self) -> u64 {
        self as u64
    }
}

/// Access size of a load or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LdStSize {
    /// 1 byte
    Byte = 0,
    /// 2 bytes
    HalfWord = 1,
    /// 4 bytes
    Word = 2,
    /// 8 bytes
    DoubleWord = 3,
}

impl LdStSize {
    /// Access size in bytes.
    pub const fn bytes(self) -> u64 {
        1 << (self as u64)
    }
}

impl FieldEncoding for LdStSize {
    const ALL: &'static [Self] = &[Self::Byte, Self::HalfWord, Self::Word, Self::DoubleWord];

    fn code(self) -> u64 {
        self as u64
    }
}

/// Functional unit an instruction is issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalUnit {
    /// Simple ALU
    Simple = 0,
    /// Multiply/divide ALU
    Complex = 1,
    /// Branch/jump unit
    Control = 2,
    /// Load/store address generator
    Agen = 3,
}

impl FieldEncoding for FunctionalUnit {
    const ALL: &'static [Self] = &[Self::Simple, Self::Complex, Self::Control, Self::Agen];

    fn code(self) -> u64 {
        self as u64
    }
}

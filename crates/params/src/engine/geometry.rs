//! Cache address decomposition.
//!
//! An address is split, from most to least significant, into tag, index
//! (selects the line), offset (selects the instruction or word in the line),
//! and byte offset (selects the byte in the instruction or word).

use crate::common::bits::{low_mask, remaining_width};
use crate::common::error::Violation;

/// Bit widths of the four address fields of a direct-mapped cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressSplit {
    /// Tag bits
    pub tag: u64,
    /// Line index bits
    pub index: u64,
    /// Word/instruction offset bits
    pub offset: u64,
    /// Byte offset bits
    pub byte_offset: u64,
}

impl AddressSplit {
    /// Splits a `total`-bit address, giving the tag whatever the other fields leave.
    ///
    /// The fields of a returned split always add up to `total`.
    ///
    /// # Errors
    ///
    /// [`Violation::NonPositiveWidth`] when no bits remain for the tag.
    pub(crate) fn carve(
        tag_name: &'static str,
        total: u64,
        index: u64,
        offset: u64,
        byte_offset: u64,
    ) -> Result<Self, Violation> {
        let used = index
            .checked_add(offset)
            .and_then(|v| v.checked_add(byte_offset))
            .ok_or(Violation::Overflow { name: tag_name })?;
        let tag = remaining_width(tag_name, total, used)?;
        Ok(Self {
            tag,
            index,
            offset,
            byte_offset,
        })
    }

    /// Sum of all four fields.
    pub const fn total(&self) -> u64 {
        self.tag + self.index + self.offset + self.byte_offset
    }

    /// Width of a line (block) address: tag plus index.
    pub const fn block_addr_bits(&self) -> u64 {
        self.tag + self.index
    }

    /// Bits below the index: offset plus byte offset.
    pub const fn line_offset_bits(&self) -> u64 {
        self.offset + self.byte_offset
    }

    /// Tag field of `addr`.
    pub const fn tag_of(&self, addr: u64) -> u64 {
        shr(addr, self.index + self.line_offset_bits()) & low_mask(self.tag)
    }

    /// Line index of `addr`.
    pub const fn index_of(&self, addr: u64) -> u64 {
        shr(addr, self.line_offset_bits()) & low_mask(self.index)
    }

    /// Instruction or word offset of `addr` within its line.
    pub const fn offset_of(&self, addr: u64) -> u64 {
        shr(addr, self.byte_offset) & low_mask(self.offset)
    }

    /// Byte offset of `addr` within its instruction or word.
    pub const fn byte_of(&self, addr: u64) -> u64 {
        addr & low_mask(self.byte_offset)
    }

    /// Line (block) address of `addr`: the address with the line offset dropped.
    pub const fn block_of(&self, addr: u64) -> u64 {
        shr(addr, self.line_offset_bits()) & low_mask(self.block_addr_bits())
    }
}

const fn shr(value: u64, amount: u64) -> u64 {
    if amount >= 64 { 0 } else { value >> amount }
}

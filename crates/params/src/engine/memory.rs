//! Memory subsystem geometry.
//!
//! Resolves the selected [`MemorySubsystem`] once. A scratchpad defines only
//! its two RAMs; caches define only the instruction and data cache geometry,
//! each with an address split that must cover the full address width.

use crate::common::bits::{exact_div, mul, positive, power_of_two, shl};
use crate::common::error::Result;
use crate::config::{CacheParams, DCacheParams, ICacheParams, MemorySubsystem, RamParams};

use super::geometry::AddressSplit;
use super::pipeline::{Isa, Widths};
use super::table::ParamTable;

/// One scratchpad RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ram {
    /// Bits per entry
    pub width: u64,
    /// `log2(width)`
    pub width_log: u64,
    /// Entries
    pub depth: u64,
    /// `log2(depth)`
    pub depth_log: u64,
}

impl Ram {
    fn derive(t: &mut ParamTable, names: [&'static str; 4], p: &RamParams) -> Result<Self> {
        let [width_name, width_log_name, depth_name, depth_log_name] = names;
        let (width, width_log) =
            t.define_sized(width_name, width_log_name, power_of_two(width_name, p.width)?)?;
        let (depth, depth_log) =
            t.define_sized(depth_name, depth_log_name, power_of_two(depth_name, p.depth)?)?;
        Ok(Self {
            width,
            width_log,
            depth,
            depth_log,
        })
    }
}

/// Scratchpad instruction and data RAMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchPad {
    /// Instruction RAM
    pub inst_ram: Ram,
    /// Data RAM
    pub data_ram: Ram,
}

/// Instruction cache geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ICache {
    /// Lines in the cache
    pub num_lines: u64,
    /// Instructions per line for each fetch lane
    pub insts_per_lane: u64,
    /// Instructions per line
    pub insts_in_line: u64,
    /// `log2(insts_in_line)`
    pub insts_in_line_log: u64,
    /// Line size in bits
    pub bits_in_line: u64,
    /// Line size in bytes
    pub bytes_in_line: u64,
    /// `log2(bytes_in_line)`
    pub bytes_in_line_log: u64,
    /// PC address split
    pub split: AddressSplit,
    /// PC request packet width
    pub pc_pkt_bits: u64,
    /// Instruction response packet width
    pub inst_pkt_bits: u64,
}

impl ICache {
    fn derive(p: &ICacheParams, widths: &Widths, isa: &Isa, t: &mut ParamTable) -> Result<Self> {
        let byte_offset = t.define("icache_inst_byte_offset_log", isa.inst_byte_offset)?;

        // A line holds at least `insts_per_lane` instructions for every fetch lane.
        let insts_per_lane = t.define(
            "icache_insts_per_lane",
            power_of_two("icache_insts_per_lane", p.insts_per_lane)?,
        )?;
        let (insts_in_line, insts_in_line_log) = t.define_sized(
            "icache_insts_in_line",
            "icache_insts_in_line_log",
            shl("icache_insts_in_line", insts_per_lane, widths.fetch_log)?,
        )?;
        let bits_in_line = t.define(
            "icache_bits_in_line",
            mul("icache_bits_in_line", insts_in_line, isa.instruction_bits)?,
        )?;
        let bytes_in_line = t.define(
            "icache_bytes_in_line",
            exact_div("icache_bits_in_line", bits_in_line, "bits_per_byte", 8)?,
        )?;
        let bytes_in_line_log =
            t.define("icache_bytes_in_line_log", insts_in_line_log + byte_offset)?;

        let (num_lines, num_lines_log) = t.define_sized(
            "icache_num_lines",
            "icache_num_lines_log",
            power_of_two("icache_num_lines", p.num_lines)?,
        )?;
        let offset = t.define("icache_offset_bits", insts_in_line_log)?;
        let index = t.define("icache_index_bits", num_lines_log)?;
        let split = AddressSplit::carve(
            "icache_tag_bits",
            isa.pc_bits,
            index,
            offset,
            byte_offset,
        )?;
        let _ = t.define("icache_tag_bits", split.tag)?;
        let _ = t.define("icache_block_addr_bits", split.block_addr_bits())?;

        let pc_pkt_bits = t.define(
            "icache_pc_pkt_bits",
            positive("icache_pc_pkt_bits", p.pc_pkt_bits)?,
        )?;
        let inst_pkt_bits = t.define(
            "icache_inst_pkt_bits",
            positive("icache_inst_pkt_bits", p.inst_pkt_bits)?,
        )?;

        Ok(Self {
            num_lines,
            insts_per_lane,
            insts_in_line,
            insts_in_line_log,
            bits_in_line,
            bytes_in_line,
            bytes_in_line_log,
            split,
            pc_pkt_bits,
            inst_pkt_bits,
        })
    }

    /// Cache size in bytes.
    pub const fn capacity_bytes(&self) -> u64 {
        self.num_lines * self.bytes_in_line
    }
}

/// Data cache geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DCache {
    /// Data words per line
    pub words_in_line: u64,
    /// `log2(words_in_line)`
    pub words_in_line_log: u64,
    /// Line size in bits
    pub bits_in_line: u64,
    /// Line size in bytes
    pub bytes_in_line: u64,
    /// `log2(bytes_in_line)`
    pub bytes_in_line_log: u64,
    /// Lines in the cache
    pub num_lines: u64,
    /// Virtual address split
    pub split: AddressSplit,
    /// Store address width (word granularity)
    pub st_addr_bits: u64,
    /// Store buffer entries
    pub store_buffer_size: u64,
    /// `log2(store_buffer_size)`
    pub store_buffer_log: u64,
    /// Load address packet width
    pub ld_addr_pkt_bits: u64,
    /// Load data packet width
    pub ld_data_pkt_bits: u64,
    /// Store packet width
    pub st_pkt_bits: u64,
}

impl DCache {
    fn derive(p: &DCacheParams, isa: &Isa, t: &mut ParamTable) -> Result<Self> {
        let byte_offset = t.define("dcache_word_byte_offset_log", isa.data_byte_offset)?;
        let (words_in_line, words_in_line_log) = t.define_sized(
            "dcache_words_in_line",
            "dcache_words_in_line_log",
            power_of_two("dcache_words_in_line", p.words_in_line)?,
        )?;
        let bits_in_line = t.define(
            "dcache_bits_in_line",
            mul("dcache_bits_in_line", words_in_line, isa.data_bits)?,
        )?;
        let bytes_in_line = t.define(
            "dcache_bytes_in_line",
            mul("dcache_bytes_in_line", words_in_line, isa.data_bytes)?,
        )?;
        let bytes_in_line_log =
            t.define("dcache_bytes_in_line_log", words_in_line_log + byte_offset)?;

        let (num_lines, num_lines_log) = t.define_sized(
            "dcache_num_lines",
            "dcache_num_lines_log",
            power_of_two("dcache_num_lines", p.num_lines)?,
        )?;
        let offset = t.define("dcache_offset_bits", words_in_line_log)?;
        let index = t.define("dcache_index_bits", num_lines_log)?;
        let split = AddressSplit::carve(
            "dcache_tag_bits",
            isa.virt_addr_bits,
            index,
            offset,
            byte_offset,
        )?;
        let _ = t.define("dcache_tag_bits", split.tag)?;
        let _ = t.define("dcache_block_addr_bits", split.block_addr_bits())?;
        let st_addr_bits = t.define("dcache_st_addr_bits", isa.virt_addr_bits - byte_offset)?;

        let (store_buffer_size, store_buffer_log) = t.define_sized(
            "dcache_store_buffer_size",
            "dcache_store_buffer_log",
            power_of_two("dcache_store_buffer_size", p.store_buffer_size)?,
        )?;
        let ld_addr_pkt_bits = t.define(
            "dcache_ld_addr_pkt_bits",
            positive("dcache_ld_addr_pkt_bits", p.ld_addr_pkt_bits)?,
        )?;
        let ld_data_pkt_bits = t.define(
            "dcache_ld_data_pkt_bits",
            positive("dcache_ld_data_pkt_bits", p.ld_data_pkt_bits)?,
        )?;
        let st_pkt_bits = t.define(
            "dcache_st_pkt_bits",
            positive("dcache_st_pkt_bits", p.st_pkt_bits)?,
        )?;

        Ok(Self {
            words_in_line,
            words_in_line_log,
            bits_in_line,
            bytes_in_line,
            bytes_in_line_log,
            num_lines,
            split,
            st_addr_bits,
            store_buffer_size,
            store_buffer_log,
            ld_addr_pkt_bits,
            ld_data_pkt_bits,
            st_pkt_bits,
        })
    }

    /// Cache size in bytes.
    pub const fn capacity_bytes(&self) -> u64 {
        self.num_lines * self.bytes_in_line
    }
}

/// Resolved memory subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryGeometry {
    /// Flat RAMs.
    ScratchPad(ScratchPad),
    /// Instruction and data caches.
    Caches {
        /// Instruction cache
        icache: ICache,
        /// Data cache
        dcache: DCache,
    },
}

impl MemoryGeometry {
    pub(crate) fn derive(
        mode: &MemorySubsystem,
        widths: &Widths,
        isa: &Isa,
        t: &mut ParamTable,
    ) -> Result<Self> {
        let geometry = match mode {
            MemorySubsystem::ScratchPad(sp) => Self::ScratchPad(ScratchPad {
                inst_ram: Ram::derive(
                    t,
                    [
                        "debug_inst_ram_width",
                        "debug_inst_ram_width_log",
                        "debug_inst_ram_depth",
                        "debug_inst_ram_log",
                    ],
                    &sp.inst_ram,
                )?,
                data_ram: Ram::derive(
                    t,
                    [
                        "debug_data_ram_width",
                        "debug_data_ram_width_log",
                        "debug_data_ram_depth",
                        "debug_data_ram_log",
                    ],
                    &sp.data_ram,
                )?,
            }),
            MemorySubsystem::Caches(CacheParams { icache, dcache }) => Self::Caches {
                icache: ICache::derive(icache, widths, isa, t)?,
                dcache: DCache::derive(dcache, isa, t)?,
            },
        };
        tracing::debug!(mode = mode.name(), "derived memory geometry");
        Ok(geometry)
    }

    /// Instruction cache, when caches are selected.
    pub const fn icache(&self) -> Option<&ICache> {
        match self {
            Self::Caches { icache, .. } => Some(icache),
            Self::ScratchPad(_) => None,
        }
    }

    /// Data cache, when caches are selected.
    pub const fn dcache(&self) -> Option<&DCache> {
        match self {
            Self::Caches { dcache, .. } => Some(dcache),
            Self::ScratchPad(_) => None,
        }
    }

    /// Scratchpad RAMs, when the scratchpad is selected.
    pub const fn scratch_pad(&self) -> Option<&ScratchPad> {
        match self {
            Self::ScratchPad(sp) => Some(sp),
            Self::Caches { .. } => None,
        }
    }
}

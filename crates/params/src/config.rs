//! Primary parameters for the AnyCore core.
//!
//! This module defines every externally chosen knob. It provides:
//! 1. **Defaults:** The baseline core (1-wide fetch, 3 issue lanes, 192-entry active list).
//! 2. **Structures:** One section per hardware area: widths, queues, predictor,
//!    partitions, rename, ISA, execution lanes, physical, and feature flags.
//! 3. **Memory Mode:** Scratchpad or instruction/data caches, chosen once as an enum.
//!
//! Parameters are supplied as JSON (every field optional) or built in code from
//! `PrimaryParams::default()`. Nothing here is validated; that happens in
//! [`Configuration::build`](crate::engine::Configuration::build).

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::common::error::{ConfigError, Result};

/// Default primary parameter values.
///
/// These reproduce the baseline core the RTL ships with.
mod defaults {
    pub const FETCH_WIDTH: u64 = 1;
    pub const DISPATCH_WIDTH: u64 = 1;
    pub const ISSUE_WIDTH: u64 = 3;
    pub const COMMIT_WIDTH: u64 = 1;

    /// Instruction queue entries; must exceed twice the fetch width.
    pub const INST_QUEUE_SIZE: u64 = 32;
    pub const ACTIVE_LIST_SIZE: u64 = 192;
    pub const ISSUE_QUEUE_SIZE: u64 = 64;
    pub const LSQ_SIZE: u64 = 64;
    pub const RAS_SIZE: u64 = 16;
    pub const CTI_QUEUE_SIZE: u64 = 32;
    /// Issue queue entries handled by one select tree block.
    pub const SELECT_BLOCK_SIZE: u64 = 8;

    /// BTB entries per fetch lane; total BTB size scales with fetch lanes.
    pub const BTB_ENTRIES_PER_LANE: u64 = 1024;
    pub const COUNTER_ENTRIES_PER_LANE: u64 = 1024;
    /// Saturating direction counter width.
    pub const PREDICTION_COUNTER_BITS: u64 = 2;
    pub const LD_VIOLATION_PRED_SIZE: u64 = 256;

    pub const STRUCT_PARTS: u64 = 4;
    pub const ISSUE_QUEUE_PARTS: u64 = 4;
    pub const ACTIVE_LIST_PARTS: u64 = 6;
    pub const REGISTER_FILE_PARTS: u64 = 8;
    pub const FREE_LIST_PARTS: u64 = 6;
    pub const LSQ_PARTS: u64 = 4;

    pub const ARCH_REGS: u64 = 64;
    /// Rename map entries restored per cycle after a flush.
    pub const REPAIR_PACKETS: u64 = 1;

    pub const PC_BITS: u64 = 64;
    pub const INSTRUCTION_BITS: u64 = 32;
    pub const DATA_BITS: u64 = 64;
    pub const VIRT_ADDR_BITS: u64 = 64;

    /// Lanes 0 and 1 are the memory and control pipes; lane 2 is the first ALU lane.
    pub const SIMPLE_LANES: u64 = 0b0100;
    pub const COMPLEX_LANES: u64 = 0b0100;
    pub const FP_LANES: u64 = 0b0100;

    pub const SIMPLE_LATENCY: u64 = 1;
    pub const COMPLEX_LATENCY: u64 = 20;
    pub const CONTROL_LATENCY: u64 = 1;
    pub const AGEN_LATENCY: u64 = 2;

    pub const ICACHE_NUM_LINES: u64 = 64;
    /// Instructions per line for each fetch lane.
    pub const ICACHE_INSTS_PER_LANE: u64 = 4;
    pub const DCACHE_WORDS_IN_LINE: u64 = 2;
    pub const DCACHE_NUM_LINES: u64 = 128;
    pub const DCACHE_STORE_BUFFER_SIZE: u64 = 8;
    /// Width of every cache request/response packet field.
    pub const CACHE_PKT_BITS: u64 = 8;

    pub const INST_RAM_WIDTH: u64 = 32;
    pub const DATA_RAM_WIDTH: u64 = 64;
    pub const RAM_DEPTH: u64 = 256;

    pub const SRAM_DATA_WIDTH: u64 = 8;
    pub const REG_DATA_WIDTH: u64 = 8;
    /// 10 ns clock.
    pub const CLOCK_PERIOD_PS: u64 = 10_000;
}

/// Root of all primary parameters.
///
/// # Examples
///
/// Starting from the defaults:
///
/// ```
/// use anycore_params::PrimaryParams;
///
/// let params = PrimaryParams::default();
/// assert_eq!(params.widths.issue_width, 3);
/// assert_eq!(params.queues.active_list_size, 192);
/// ```
///
/// Overriding a few knobs from JSON; everything else keeps its default:
///
/// ```
/// use anycore_params::config::{MemorySubsystem, PrimaryParams};
///
/// let json = r#"{
///     "widths": { "fetch_width": 2, "issue_width": 4 },
///     "queues": { "active_list_size": 128 },
///     "memory": { "ScratchPad": {} }
/// }"#;
///
/// let params = PrimaryParams::from_json_str(json).unwrap();
/// assert_eq!(params.widths.fetch_width, 2);
/// assert_eq!(params.widths.commit_width, 1);
/// assert_eq!(params.queues.active_list_size, 128);
/// assert!(matches!(params.memory, MemorySubsystem::ScratchPad(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimaryParams {
    /// Per-stage superscalar widths
    pub widths: WidthParams,
    /// Queue and table depths
    pub queues: QueueParams,
    /// Branch and load-violation predictor tables
    pub predictor: PredictorParams,
    /// Partition counts of reconfigurable structures
    pub partitions: PartitionParams,
    /// Architectural registers and rename repair
    pub rename: RenameParams,
    /// Instruction, data, and address widths
    pub isa: IsaParams,
    /// Execution lane capabilities and latencies
    pub execution: ExecutionParams,
    /// Memory subsystem mode
    pub memory: MemorySubsystem,
    /// Physical design parameters
    pub physical: PhysicalParams,
    /// Optional microarchitectural behaviours
    pub features: FeatureParams,
}

impl PrimaryParams {
    /// Parses primary parameters from a JSON document.
    ///
    /// Missing sections and fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses primary parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not valid parameters.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded primary parameter file");
        Self::from_json_str(&text)
    }
}

/// Superscalar width of each pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidthParams {
    /// Instructions fetched per cycle
    pub fetch_width: u64,
    /// Instructions renamed and dispatched per cycle
    pub dispatch_width: u64,
    /// Issue lanes (execution pipes)
    pub issue_width: u64,
    /// Instructions retired per cycle
    pub commit_width: u64,
}

impl Default for WidthParams {
    fn default() -> Self {
        Self {
            fetch_width: defaults::FETCH_WIDTH,
            dispatch_width: defaults::DISPATCH_WIDTH,
            issue_width: defaults::ISSUE_WIDTH,
            commit_width: defaults::COMMIT_WIDTH,
        }
    }
}

/// Queue and table depths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueParams {
    /// Decoded instruction queue entries
    pub inst_queue_size: u64,
    /// Active list (reorder buffer) entries
    ///
    /// Physical register tags are `ceil(log2(active_list_size)) + 1` bits and
    /// must address `active_list_size + arch_regs` registers. With 64
    /// architectural registers this rules out active lists of 32 entries or fewer.
    pub active_list_size: u64,
    /// Issue queue entries
    pub issue_queue_size: u64,
    /// Load-store queue entries
    pub lsq_size: u64,
    /// Return address stack entries
    pub ras_size: u64,
    /// Control-transfer instruction queue entries
    pub cti_queue_size: u64,
    /// Issue queue entries per select block
    pub select_block_size: u64,
}

impl Default for QueueParams {
    fn default() -> Self {
        Self {
            inst_queue_size: defaults::INST_QUEUE_SIZE,
            active_list_size: defaults::ACTIVE_LIST_SIZE,
            issue_queue_size: defaults::ISSUE_QUEUE_SIZE,
            lsq_size: defaults::LSQ_SIZE,
            ras_size: defaults::RAS_SIZE,
            cti_queue_size: defaults::CTI_QUEUE_SIZE,
            select_block_size: defaults::SELECT_BLOCK_SIZE,
        }
    }
}

/// Branch prediction tables and the optional load-violation predictor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictorParams {
    /// BTB entries per fetch lane
    pub btb_entries_per_lane: u64,
    /// Direction counter table entries per fetch lane
    pub counter_entries_per_lane: u64,
    /// Bits per direction counter
    pub prediction_counter_bits: u64,
    /// Load-violation predictor; `null` in JSON removes it
    pub load_violation: Option<LoadViolationParams>,
}

impl Default for PredictorParams {
    fn default() -> Self {
        Self {
            btb_entries_per_lane: defaults::BTB_ENTRIES_PER_LANE,
            counter_entries_per_lane: defaults::COUNTER_ENTRIES_PER_LANE,
            prediction_counter_bits: defaults::PREDICTION_COUNTER_BITS,
            load_violation: Some(LoadViolationParams::default()),
        }
    }
}

/// Load-violation predictor table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadViolationParams {
    /// Table entries
    pub size: u64,
    /// Periodically clear the table
    pub periodic_flush: bool,
}

impl Default for LoadViolationParams {
    fn default() -> Self {
        Self {
            size: defaults::LD_VIOLATION_PRED_SIZE,
            periodic_flush: false,
        }
    }
}

/// Partition counts for reconfigurable structures.
///
/// Each count must evenly divide the structure it splits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartitionParams {
    /// Generic partition count; must divide every partitioned structure
    pub struct_parts: u64,
    /// Issue queue partitions
    pub issue_queue: u64,
    /// Active list partitions
    pub active_list: u64,
    /// Physical register file RAM partitions
    pub register_file: u64,
    /// Free list partitions
    pub free_list: u64,
    /// Load-store queue partitions
    pub lsq: u64,
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            struct_parts: defaults::STRUCT_PARTS,
            issue_queue: defaults::ISSUE_QUEUE_PARTS,
            active_list: defaults::ACTIVE_LIST_PARTS,
            register_file: defaults::REGISTER_FILE_PARTS,
            free_list: defaults::FREE_LIST_PARTS,
            lsq: defaults::LSQ_PARTS,
        }
    }
}

/// Architectural register count and rename-map repair bandwidth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenameParams {
    /// Architectural registers (integer and floating point)
    pub arch_regs: u64,
    /// Rename map entries repaired per cycle
    pub repair_packets: u64,
}

impl Default for RenameParams {
    fn default() -> Self {
        Self {
            arch_regs: defaults::ARCH_REGS,
            repair_packets: defaults::REPAIR_PACKETS,
        }
    }
}

/// Instruction, data, and address widths in bits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsaParams {
    /// Program counter width
    pub pc_bits: u64,
    /// Instruction width
    pub instruction_bits: u64,
    /// Data word width
    pub data_bits: u64,
    /// Virtual address width used by the data cache
    pub virt_addr_bits: u64,
}

impl Default for IsaParams {
    fn default() -> Self {
        Self {
            pc_bits: defaults::PC_BITS,
            instruction_bits: defaults::INSTRUCTION_BITS,
            data_bits: defaults::DATA_BITS,
            virt_addr_bits: defaults::VIRT_ADDR_BITS,
        }
    }
}

/// Which issue lanes accept which instruction classes, and unit latencies.
///
/// Lane vectors are bit masks over issue lanes. Bits 0 and 1 are the memory
/// and control lanes and must stay clear.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionParams {
    /// Lanes with a simple ALU
    pub simple_lanes: u64,
    /// Lanes with a complex (multiply/divide) ALU
    pub complex_lanes: u64,
    /// Lanes with a floating-point unit
    pub fp_lanes: u64,
    /// Functional unit latencies in cycles
    pub latency: LatencyParams,
    /// Single-cycle pipe has a simple ALU
    pub pipe_has_simple: bool,
    /// Single-cycle pipe has a complex ALU
    pub pipe_has_complex: bool,
    /// Single-cycle pipe has an FPU
    pub pipe_has_fp: bool,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            simple_lanes: defaults::SIMPLE_LANES,
            complex_lanes: defaults::COMPLEX_LANES,
            fp_lanes: defaults::FP_LANES,
            latency: LatencyParams::default(),
            pipe_has_simple: true,
            pipe_has_complex: true,
            pipe_has_fp: true,
        }
    }
}

/// Functional unit latencies in cycles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyParams {
    /// Simple ALU
    pub simple: u64,
    /// Multiply/divide ALU
    pub complex: u64,
    /// Branch/jump unit
    pub control: u64,
    /// Load/store address generation
    pub agen: u64,
}

impl Default for LatencyParams {
    fn default() -> Self {
        Self {
            simple: defaults::SIMPLE_LATENCY,
            complex: defaults::COMPLEX_LATENCY,
            control: defaults::CONTROL_LATENCY,
            agen: defaults::AGEN_LATENCY,
        }
    }
}

/// Memory subsystem attached to the core.
///
/// Exactly one mode is active; each carries only its own parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum MemorySubsystem {
    /// Flat instruction and data RAMs with no caching.
    #[serde(alias = "scratch_pad")]
    ScratchPad(ScratchPadParams),
    /// Instruction and data caches.
    #[serde(alias = "caches")]
    Caches(CacheParams),
}

impl Default for MemorySubsystem {
    fn default() -> Self {
        Self::Caches(CacheParams::default())
    }
}

impl MemorySubsystem {
    /// Short mode name used in logs and dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ScratchPad(_) => "scratch-pad",
            Self::Caches(_) => "caches",
        }
    }
}

/// Scratchpad RAM dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScratchPadParams {
    /// Instruction RAM
    pub inst_ram: RamParams,
    /// Data RAM
    pub data_ram: RamParams,
}

impl Default for ScratchPadParams {
    fn default() -> Self {
        Self {
            inst_ram: RamParams {
                width: defaults::INST_RAM_WIDTH,
                depth: defaults::RAM_DEPTH,
            },
            data_ram: RamParams {
                width: defaults::DATA_RAM_WIDTH,
                depth: defaults::RAM_DEPTH,
            },
        }
    }
}

/// Width (bits per entry) and depth (entries) of one RAM.
///
/// Both fields are required when a RAM is given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RamParams {
    /// Bits per entry
    pub width: u64,
    /// Number of entries
    pub depth: u64,
}

/// Instruction and data cache parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheParams {
    /// Instruction cache
    pub icache: ICacheParams,
    /// Data cache
    pub dcache: DCacheParams,
}

/// Instruction cache geometry knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ICacheParams {
    /// Lines in the cache
    pub num_lines: u64,
    /// Instructions per line for each fetch lane
    pub insts_per_lane: u64,
    /// PC request packet width
    pub pc_pkt_bits: u64,
    /// Instruction response packet width
    pub inst_pkt_bits: u64,
}

impl Default for ICacheParams {
    fn default() -> Self {
        Self {
            num_lines: defaults::ICACHE_NUM_LINES,
            insts_per_lane: defaults::ICACHE_INSTS_PER_LANE,
            pc_pkt_bits: defaults::CACHE_PKT_BITS,
            inst_pkt_bits: defaults::CACHE_PKT_BITS,
        }
    }
}

/// Data cache geometry knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DCacheParams {
    /// Data words per line
    pub words_in_line: u64,
    /// Lines in the cache
    pub num_lines: u64,
    /// Store buffer entries
    pub store_buffer_size: u64,
    /// Load address packet width
    pub ld_addr_pkt_bits: u64,
    /// Load data packet width
    pub ld_data_pkt_bits: u64,
    /// Store packet width
    pub st_pkt_bits: u64,
}

impl Default for DCacheParams {
    fn default() -> Self {
        Self {
            words_in_line: defaults::DCACHE_WORDS_IN_LINE,
            num_lines: defaults::DCACHE_NUM_LINES,
            store_buffer_size: defaults::DCACHE_STORE_BUFFER_SIZE,
            ld_addr_pkt_bits: defaults::CACHE_PKT_BITS,
            ld_data_pkt_bits: defaults::CACHE_PKT_BITS,
            st_pkt_bits: defaults::CACHE_PKT_BITS,
        }
    }
}

/// Physical design parameters carried through for downstream tooling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalParams {
    /// SRAM macro data width
    pub sram_data_width: u64,
    /// Chip register interface data width
    pub reg_data_width: u64,
    /// Target clock period in picoseconds
    pub clock_period_ps: u64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            sram_data_width: defaults::SRAM_DATA_WIDTH,
            reg_data_width: defaults::REG_DATA_WIDTH,
            clock_period_ps: defaults::CLOCK_PERIOD_PS,
        }
    }
}

/// Optional microarchitectural behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureParams {
    /// Hold predicted-violating loads at issue
    pub ld_stall_at_issue: bool,
    /// Two-deep load replay
    pub replay_two_deep: bool,
    /// Use vendor arithmetic components for synthesis
    pub use_designware: bool,
    /// Clock-gate pipeline registers
    pub pipereg_clock_gate: bool,
    /// Performance monitor counters
    pub perf_mon: bool,
}

impl Default for FeatureParams {
    fn default() -> Self {
        Self {
            ld_stall_at_issue: true,
            replay_two_deep: true,
            use_designware: true,
            pipereg_clock_gate: false,
            perf_mon: false,
        }
    }
}

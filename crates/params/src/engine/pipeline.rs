//! Core pipeline geometry.
//!
//! Derives the sizes seen by fetch, rename, dispatch, issue, and commit:
//! 1. **Widths:** Per-stage widths and their select-signal widths.
//! 2. **Rename:** Architectural registers, rename map, and repair cycles.
//! 3. **Queues:** Instruction queue, active list, issue queue, LSQ, RAS, free
//!    list, and the physical register file.
//! 4. **Predictor:** BTB and counter tables scaled by fetch lanes, plus the
//!    optional load-violation predictor.
//! 5. **Partitions:** Per-partition depths of reconfigurable structures.
//! 6. **ISA and Execution:** Byte offsets, lane vectors, and unit latencies.
//!
//! Sections are derived in the order listed; each only reads sections before it.

use crate::common::bits::{
    add, at_least, at_most, ceil_log2, exact_div, mul, positive, power_of_two, shl,
};
use crate::common::error::{Result, Violation};
use crate::config::{
    ExecutionParams, IsaParams, PartitionParams, PredictorParams, PrimaryParams, QueueParams,
    RenameParams, WidthParams,
};
use crate::encoding::{BranchType, FieldEncoding, FunctionalUnit, InstType, LdStSize};

use super::table::ParamTable;

/// Lanes 0 and 1 are the memory and control pipes; at least one ALU lane follows.
const MIN_ISSUE_WIDTH: u64 = 3;

/// Lane vectors are `u64` masks.
const MAX_ISSUE_WIDTH: u64 = 64;

/// Bits 0 and 1 of a lane vector: the memory and control lanes.
const RESERVED_LANES: u64 = 0b11;

/// Per-stage widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widths {
    /// Fetch lanes
    pub fetch: u64,
    /// `ceil(log2(fetch))`
    pub fetch_log: u64,
    /// Dispatch lanes
    pub dispatch: u64,
    /// `ceil(log2(dispatch))`
    pub dispatch_log: u64,
    /// Issue lanes
    pub issue: u64,
    /// `ceil(log2(issue))`
    pub issue_log: u64,
    /// Commit lanes
    pub commit: u64,
    /// `ceil(log2(commit))`
    pub commit_log: u64,
}

impl Widths {
    fn derive(p: &WidthParams, t: &mut ParamTable) -> Result<Self> {
        let (fetch, fetch_log) = t.define_sized(
            "fetch_width",
            "fetch_width_log",
            positive("fetch_width", p.fetch_width)?,
        )?;
        let (dispatch, dispatch_log) = t.define_sized(
            "dispatch_width",
            "dispatch_width_log",
            positive("dispatch_width", p.dispatch_width)?,
        )?;
        let issue = at_least("issue_width", p.issue_width, MIN_ISSUE_WIDTH)?;
        let (issue, issue_log) = t.define_sized(
            "issue_width",
            "issue_width_log",
            at_most("issue_width", issue, MAX_ISSUE_WIDTH)?,
        )?;
        let (commit, commit_log) = t.define_sized(
            "commit_width",
            "commit_width_log",
            positive("commit_width", p.commit_width)?,
        )?;
        for (names, width) in [
            (FETCH_WIDE, fetch),
            (DISPATCH_WIDE, dispatch),
            (ISSUE_WIDE, issue),
            (COMMIT_WIDE, commit),
        ] {
            define_wide_flags(t, names, width)?;
        }
        Ok(Self {
            fetch,
            fetch_log,
            dispatch,
            dispatch_log,
            issue,
            issue_log,
            commit,
            commit_log,
        })
    }
}

/// Per-stage lane enables: entry `i` is set when the stage is at least `i + 2` wide.
const FETCH_WIDE: &[&str] = &[
    "fetch_two_wide",
    "fetch_three_wide",
    "fetch_four_wide",
    "fetch_five_wide",
    "fetch_six_wide",
    "fetch_seven_wide",
    "fetch_eight_wide",
];
const DISPATCH_WIDE: &[&str] = &[
    "dispatch_two_wide",
    "dispatch_three_wide",
    "dispatch_four_wide",
    "dispatch_five_wide",
    "dispatch_six_wide",
    "dispatch_seven_wide",
    "dispatch_eight_wide",
];
const ISSUE_WIDE: &[&str] = &[
    "issue_two_wide",
    "issue_three_wide",
    "issue_four_wide",
    "issue_five_wide",
    "issue_six_wide",
    "issue_seven_wide",
    "issue_eight_wide",
];
const COMMIT_WIDE: &[&str] = &["commit_two_wide", "commit_three_wide", "commit_four_wide"];

fn define_wide_flags(t: &mut ParamTable, names: &[&'static str], width: u64) -> Result<()> {
    for (lanes, name) in (2..).zip(names) {
        let _ = t.define_flag(*name, width >= lanes)?;
    }
    Ok(())
}

/// Architectural registers and rename map repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rename {
    /// Architectural registers
    pub arch_regs: u64,
    /// Rename map entries restored per cycle
    pub repair_packets: u64,
    /// Cycles to restore the whole rename map
    pub repair_cycles: u64,
    /// Rename map table entries (one per architectural register)
    pub rmt_size: u64,
    /// `ceil(log2(rmt_size))`
    pub rmt_log: u64,
}

impl Rename {
    fn derive(p: &RenameParams, t: &mut ParamTable) -> Result<Self> {
        let arch_regs = t.define("arch_regs", positive("arch_regs", p.arch_regs)?)?;
        let repair_packets = t.define(
            "repair_packets",
            positive("repair_packets", p.repair_packets)?,
        )?;
        let repair_cycles = t.define(
            "repair_cycles",
            exact_div("arch_regs", arch_regs, "repair_packets", repair_packets)?,
        )?;
        let (rmt_size, rmt_log) = t.define_sized("rmt_size", "rmt_log", arch_regs)?;
        Ok(Self {
            arch_regs,
            repair_packets,
            repair_cycles,
            rmt_size,
            rmt_log,
        })
    }
}

/// Queue, list, and register file depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Queues {
    /// Instruction queue entries
    pub inst_queue_size: u64,
    /// `ceil(log2(inst_queue_size))`
    pub inst_queue_log: u64,
    /// Active list entries
    pub active_list_size: u64,
    /// `ceil(log2(active_list_size))`
    pub active_list_log: u64,
    /// Issue queue entries
    pub issue_queue_size: u64,
    /// `ceil(log2(issue_queue_size))`
    pub issue_queue_log: u64,
    /// Entries per select block
    pub select_block_size: u64,
    /// Select blocks in the issue queue
    pub select_blocks: u64,
    /// Load-store queue entries
    pub lsq_size: u64,
    /// `ceil(log2(lsq_size))`
    pub lsq_log: u64,
    /// Return address stack entries
    pub ras_size: u64,
    /// `log2(ras_size)`
    pub ras_log: u64,
    /// Control-transfer queue entries
    pub cti_queue_size: u64,
    /// `ceil(log2(cti_queue_size))`
    pub cti_queue_log: u64,
    /// Free list entries; one per in-flight destination
    pub free_list_size: u64,
    /// `ceil(log2(free_list_size))`
    pub free_list_log: u64,
    /// Physical registers: active list plus architectural state
    pub physical_table_size: u64,
    /// Physical register tag width, one bit wider than an active list index
    pub physical_table_log: u64,
}

impl Queues {
    fn derive(
        p: &QueueParams,
        widths: &Widths,
        rename: &Rename,
        t: &mut ParamTable,
    ) -> Result<Self> {
        let min_inst_queue = add(
            "inst_queue_size",
            mul("inst_queue_size", widths.fetch, 2)?,
            1,
        )?;
        let (inst_queue_size, inst_queue_log) = t.define_sized(
            "inst_queue_size",
            "inst_queue_log",
            at_least("inst_queue_size", p.inst_queue_size, min_inst_queue)?,
        )?;
        let (active_list_size, active_list_log) = t.define_sized(
            "active_list_size",
            "active_list_log",
            positive("active_list_size", p.active_list_size)?,
        )?;
        let (issue_queue_size, issue_queue_log) = t.define_sized(
            "issue_queue_size",
            "issue_queue_log",
            positive("issue_queue_size", p.issue_queue_size)?,
        )?;
        let select_block_size = t.define(
            "select_block_size",
            positive("select_block_size", p.select_block_size)?,
        )?;
        let select_blocks = t.define(
            "select_blocks",
            exact_div(
                "issue_queue_size",
                issue_queue_size,
                "select_block_size",
                select_block_size,
            )?,
        )?;
        let (lsq_size, lsq_log) =
            t.define_sized("lsq_size", "lsq_log", positive("lsq_size", p.lsq_size)?)?;
        let (ras_size, ras_log) =
            t.define_sized("ras_size", "ras_log", power_of_two("ras_size", p.ras_size)?)?;
        let (cti_queue_size, cti_queue_log) = t.define_sized(
            "cti_queue_size",
            "cti_queue_log",
            positive("cti_queue_size", p.cti_queue_size)?,
        )?;
        let (free_list_size, free_list_log) =
            t.define_sized("free_list_size", "free_list_log", active_list_size)?;

        let physical_table_size = t.define(
            "physical_table_size",
            add("physical_table_size", active_list_size, rename.arch_regs)?,
        )?;
        let physical_table_log = active_list_log + 1;
        let needed = ceil_log2(physical_table_size);
        if physical_table_log < needed {
            return Err(Violation::TooNarrow {
                name: "physical_table_log",
                bits: physical_table_log,
                sized: "physical_table_size",
                needed,
            }
            .into());
        }
        let physical_table_log = t.define("physical_table_log", physical_table_log)?;

        Ok(Self {
            inst_queue_size,
            inst_queue_log,
            active_list_size,
            active_list_log,
            issue_queue_size,
            issue_queue_log,
            select_block_size,
            select_blocks,
            lsq_size,
            lsq_log,
            ras_size,
            ras_log,
            cti_queue_size,
            cti_queue_log,
            free_list_size,
            free_list_log,
            physical_table_size,
            physical_table_log,
        })
    }
}

/// Load-violation predictor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadViolationPredictor {
    /// Entries
    pub size: u64,
    /// `log2(size)`
    pub log: u64,
    /// Periodic flush enabled
    pub periodic_flush: bool,
}

/// Branch predictor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predictor {
    /// BTB entries per fetch lane
    pub btb_entries_per_lane: u64,
    /// Total BTB entries across fetch lanes
    pub btb_size: u64,
    /// `log2(btb_size)`
    pub btb_log: u64,
    /// Counter table entries per fetch lane
    pub counter_entries_per_lane: u64,
    /// Total counter table entries
    pub counter_table_size: u64,
    /// `log2(counter_table_size)`
    pub counter_table_log: u64,
    /// Bits per direction counter
    pub prediction_counter_bits: u64,
    /// Present when the load-violation predictor is configured
    pub load_violation: Option<LoadViolationPredictor>,
}

impl Predictor {
    fn derive(p: &PredictorParams, widths: &Widths, t: &mut ParamTable) -> Result<Self> {
        // Lanes are rounded up to a power of two so each lane owns an equal bank.
        let (btb_entries_per_lane, btb_size, btb_log) = lane_scaled_table(
            t,
            ["btb_entries_per_lane", "btb_size", "btb_log"],
            p.btb_entries_per_lane,
            widths.fetch_log,
        )?;
        let (counter_entries_per_lane, counter_table_size, counter_table_log) = lane_scaled_table(
            t,
            [
                "counter_entries_per_lane",
                "counter_table_size",
                "counter_table_log",
            ],
            p.counter_entries_per_lane,
            widths.fetch_log,
        )?;
        let prediction_counter_bits = t.define(
            "prediction_counter_bits",
            positive("prediction_counter_bits", p.prediction_counter_bits)?,
        )?;

        let load_violation = match &p.load_violation {
            Some(lv) => {
                let (size, log) = t.define_sized(
                    "ld_violation_pred_size",
                    "ld_violation_pred_log",
                    power_of_two("ld_violation_pred_size", lv.size)?,
                )?;
                let periodic_flush =
                    t.define_flag("ld_violation_pred_periodic_flush", lv.periodic_flush)?;
                Some(LoadViolationPredictor {
                    size,
                    log,
                    periodic_flush,
                })
            }
            None => None,
        };

        Ok(Self {
            btb_entries_per_lane,
            btb_size,
            btb_log,
            counter_entries_per_lane,
            counter_table_size,
            counter_table_log,
            prediction_counter_bits,
            load_violation,
        })
    }
}

/// Defines a per-lane table size, its total over `2^fetch_log` lanes, and the total's log.
fn lane_scaled_table(
    t: &mut ParamTable,
    [per_lane_name, size_name, log_name]: [&'static str; 3],
    per_lane: u64,
    fetch_log: u64,
) -> Result<(u64, u64, u64)> {
    let per_lane = t.define(per_lane_name, power_of_two(per_lane_name, per_lane)?)?;
    let size = t.define(size_name, shl(size_name, per_lane, fetch_log)?)?;
    let log = t.define(log_name, ceil_log2(per_lane) + fetch_log)?;
    Ok((per_lane, size, log))
}

/// One partitioned structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Partition count
    pub parts: u64,
    /// `ceil(log2(parts))`
    pub parts_log: u64,
    /// Entries per partition
    pub depth: u64,
}

impl Partition {
    fn derive(
        t: &mut ParamTable,
        [parts_name, log_name, depth_name]: [&'static str; 3],
        parent_name: &'static str,
        parent: u64,
        parts: u64,
    ) -> Result<Self> {
        let (parts, parts_log) =
            t.define_sized(parts_name, log_name, positive(parts_name, parts)?)?;
        let depth = t.define(depth_name, exact_div(parent_name, parent, parts_name, parts)?)?;
        Ok(Self {
            parts,
            parts_log,
            depth,
        })
    }
}

/// Partitioning of the reconfigurable structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitions {
    /// Generic partition count
    pub struct_parts: u64,
    /// `ceil(log2(struct_parts))`
    pub struct_parts_log: u64,
    /// Issue queue
    pub issue_queue: Partition,
    /// Active list
    pub active_list: Partition,
    /// Physical register file
    pub register_file: Partition,
    /// Free list
    pub free_list: Partition,
    /// Load-store queue
    pub lsq: Partition,
}

impl Partitions {
    fn derive(p: &PartitionParams, queues: &Queues, t: &mut ParamTable) -> Result<Self> {
        let (struct_parts, struct_parts_log) = t.define_sized(
            "struct_parts",
            "struct_parts_log",
            positive("struct_parts", p.struct_parts)?,
        )?;
        for (parent_name, parent) in [
            ("issue_queue_size", queues.issue_queue_size),
            ("active_list_size", queues.active_list_size),
            ("physical_table_size", queues.physical_table_size),
            ("free_list_size", queues.free_list_size),
            ("lsq_size", queues.lsq_size),
        ] {
            let _ = exact_div(parent_name, parent, "struct_parts", struct_parts)?;
        }
        let issue_queue = Partition::derive(
            t,
            [
                "issue_queue_parts",
                "issue_queue_parts_log",
                "issue_queue_part_depth",
            ],
            "issue_queue_size",
            queues.issue_queue_size,
            p.issue_queue,
        )?;
        let active_list = Partition::derive(
            t,
            [
                "active_list_parts",
                "active_list_parts_log",
                "active_list_part_depth",
            ],
            "active_list_size",
            queues.active_list_size,
            p.active_list,
        )?;
        let register_file = Partition::derive(
            t,
            [
                "register_file_parts",
                "register_file_parts_log",
                "register_file_part_depth",
            ],
            "physical_table_size",
            queues.physical_table_size,
            p.register_file,
        )?;
        let free_list = Partition::derive(
            t,
            [
                "free_list_parts",
                "free_list_parts_log",
                "free_list_part_depth",
            ],
            "free_list_size",
            queues.free_list_size,
            p.free_list,
        )?;
        let lsq = Partition::derive(
            t,
            ["lsq_parts", "lsq_parts_log", "lsq_part_depth"],
            "lsq_size",
            queues.lsq_size,
            p.lsq,
        )?;
        Ok(Self {
            struct_parts,
            struct_parts_log,
            issue_queue,
            active_list,
            register_file,
            free_list,
            lsq,
        })
    }
}

/// Instruction, data, and address widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isa {
    /// Program counter bits
    pub pc_bits: u64,
    /// Instruction bits
    pub instruction_bits: u64,
    /// Instruction bytes
    pub instruction_bytes: u64,
    /// `log2(instruction_bytes)`
    pub inst_byte_offset: u64,
    /// Data word bits
    pub data_bits: u64,
    /// Data word bytes
    pub data_bytes: u64,
    /// `log2(data_bytes)`
    pub data_byte_offset: u64,
    /// Virtual address bits
    pub virt_addr_bits: u64,
}

impl Isa {
    fn derive(p: &IsaParams, t: &mut ParamTable) -> Result<Self> {
        let pc_bits = t.define(
            "pc_bits",
            at_most("pc_bits", positive("pc_bits", p.pc_bits)?, 64)?,
        )?;
        let instruction_bits = t.define(
            "instruction_bits",
            positive("instruction_bits", p.instruction_bits)?,
        )?;
        let instruction_bytes = power_of_two(
            "instruction_bytes",
            exact_div("instruction_bits", instruction_bits, "bits_per_byte", 8)?,
        )?;
        let (instruction_bytes, inst_byte_offset) =
            t.define_sized("instruction_bytes", "inst_byte_offset", instruction_bytes)?;

        // A data word must hold the widest load/store.
        let widest = LdStSize::DoubleWord.bytes() * 8;
        let data_bits = t.define("data_bits", at_least("data_bits", p.data_bits, widest)?)?;
        let data_bytes = power_of_two(
            "data_bytes",
            exact_div("data_bits", data_bits, "bits_per_byte", 8)?,
        )?;
        let (data_bytes, data_byte_offset) =
            t.define_sized("data_bytes", "data_byte_offset", data_bytes)?;

        let virt_addr_bits = t.define(
            "virt_addr_bits",
            at_most(
                "virt_addr_bits",
                positive("virt_addr_bits", p.virt_addr_bits)?,
                64,
            )?,
        )?;

        Ok(Self {
            pc_bits,
            instruction_bits,
            instruction_bytes,
            inst_byte_offset,
            data_bits,
            data_bytes,
            data_byte_offset,
            virt_addr_bits,
        })
    }
}

/// The issue lanes that can execute one instruction class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSet {
    /// Bit `i` set when lane `i` has the unit
    pub mask: u64,
    /// Lanes in the set
    pub count: u64,
}

impl LaneSet {
    fn derive(
        t: &mut ParamTable,
        [name, count_name]: [&'static str; 2],
        mask: u64,
        issue_width: u64,
    ) -> Result<Self> {
        let lane_error = |reason| Violation::LaneVector { name, mask, reason };
        if mask == 0 {
            return Err(lane_error("selects no lanes").into());
        }
        if mask & RESERVED_LANES != 0 {
            return Err(lane_error("uses lane 0 or 1, reserved for memory and control").into());
        }
        if issue_width < MAX_ISSUE_WIDTH && mask >> issue_width != 0 {
            return Err(lane_error("names a lane at or beyond issue_width").into());
        }
        let mask = t.define(name, mask)?;
        let count = t.define(count_name, u64::from(mask.count_ones()))?;
        Ok(Self { mask, count })
    }

    /// Lane numbers in the set, ascending.
    pub fn lanes(&self) -> impl Iterator<Item = u64> + '_ {
        (0..64).filter(move |lane| self.mask >> lane & 1 == 1)
    }

    /// Whether `lane` is in the set.
    pub const fn contains(&self, lane: u64) -> bool {
        lane < 64 && self.mask >> lane & 1 == 1
    }
}

/// Execution lanes and functional unit latencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// Lanes with a simple ALU
    pub simple: LaneSet,
    /// Lanes with a complex ALU
    pub complex: LaneSet,
    /// Lanes with an FPU
    pub fp: LaneSet,
    /// Units in the single-cycle pipe outside the lane vectors
    pub single_cycle_pipe: PipeUnits,
    latencies: [u64; 4],
}

/// Units present in the single-cycle execution pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeUnits {
    /// Simple ALU
    pub simple: bool,
    /// Complex ALU
    pub complex: bool,
    /// FPU
    pub fp: bool,
}

impl Execution {
    fn derive(p: &ExecutionParams, widths: &Widths, t: &mut ParamTable) -> Result<Self> {
        let simple = LaneSet::derive(
            t,
            ["simple_lanes", "simple_lane_count"],
            p.simple_lanes,
            widths.issue,
        )?;
        let complex = LaneSet::derive(
            t,
            ["complex_lanes", "complex_lane_count"],
            p.complex_lanes,
            widths.issue,
        )?;
        let fp = LaneSet::derive(t, ["fp_lanes", "fp_lane_count"], p.fp_lanes, widths.issue)?;

        let l = &p.latency;
        let mut latencies = [0; 4];
        for (fu, name, value) in [
            (FunctionalUnit::Simple, "fu_simple_latency", l.simple),
            (FunctionalUnit::Complex, "fu_complex_latency", l.complex),
            (FunctionalUnit::Control, "fu_control_latency", l.control),
            (FunctionalUnit::Agen, "fu_agen_latency", l.agen),
        ] {
            latencies[fu.code() as usize] = t.define(name, positive(name, value)?)?;
        }

        let single_cycle_pipe = PipeUnits {
            simple: t.define_flag("pipe_has_simple", p.pipe_has_simple)?,
            complex: t.define_flag("pipe_has_complex", p.pipe_has_complex)?,
            fp: t.define_flag("pipe_has_fp", p.pipe_has_fp)?,
        };

        Ok(Self {
            simple,
            complex,
            fp,
            single_cycle_pipe,
            latencies,
        })
    }

    /// Latency in cycles of `unit`.
    pub const fn latency(&self, unit: FunctionalUnit) -> u64 {
        self.latencies[unit as usize]
    }
}

/// Widths of the encoded instruction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingWidths {
    /// [`BranchType`] field bits
    pub branch_type_log: u64,
    /// [`InstType`] field bits
    pub inst_types_log: u64,
    /// [`LdStSize`] field bits
    pub ldst_types_log: u64,
    /// [`FunctionalUnit`] field bits
    pub fu_types_log: u64,
}

impl EncodingWidths {
    fn derive(t: &mut ParamTable) -> Result<Self> {
        Ok(Self {
            branch_type_log: t.define("branch_type_log", BranchType::field_bits())?,
            inst_types_log: t.define("inst_types_log", InstType::field_bits())?,
            ldst_types_log: t.define("ldst_types_log", LdStSize::field_bits())?,
            fu_types_log: t.define("fu_types_log", FunctionalUnit::field_bits())?,
        })
    }
}

/// Everything the core pipeline is sized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineGeometry {
    /// Stage widths
    pub widths: Widths,
    /// Rename and repair
    pub rename: Rename,
    /// Queue depths
    pub queues: Queues,
    /// Predictor tables
    pub predictor: Predictor,
    /// Structure partitions
    pub partitions: Partitions,
    /// ISA widths
    pub isa: Isa,
    /// Execution lanes
    pub execution: Execution,
    /// Encoded field widths
    pub encodings: EncodingWidths,
}

impl PipelineGeometry {
    pub(crate) fn derive(params: &PrimaryParams, t: &mut ParamTable) -> Result<Self> {
        let widths = Widths::derive(&params.widths, t)?;
        let rename = Rename::derive(&params.rename, t)?;
        let queues = Queues::derive(&params.queues, &widths, &rename, t)?;
        let predictor = Predictor::derive(&params.predictor, &widths, t)?;
        let partitions = Partitions::derive(&params.partitions, &queues, t)?;
        let isa = Isa::derive(&params.isa, t)?;
        let execution = Execution::derive(&params.execution, &widths, t)?;
        let encodings = EncodingWidths::derive(t)?;

        tracing::debug!(
            fetch = widths.fetch,
            issue = widths.issue,
            active_list = queues.active_list_size,
            physical_regs = queues.physical_table_size,
            btb = predictor.btb_size,
            "derived pipeline geometry"
        );

        Ok(Self {
            widths,
            rename,
            queues,
            predictor,
            partitions,
            isa,
            execution,
            encodings,
        })
    }
}

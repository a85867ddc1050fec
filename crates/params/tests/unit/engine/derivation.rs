//! # Derivation Tests
//!
//! Tests that known primary parameter sets derive the expected values.

use anycore_params::encoding::FunctionalUnit;
use anycore_params::engine::MemoryGeometry;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{baseline, build, with_caches};

/// Every value of the baseline core, in derivation order.
const BASELINE: &[(&str, u64)] = &[
    ("fetch_width", 1),
    ("fetch_width_log", 0),
    ("dispatch_width", 1),
    ("dispatch_width_log", 0),
    ("issue_width", 3),
    ("issue_width_log", 2),
    ("commit_width", 1),
    ("commit_width_log", 0),
    ("fetch_two_wide", 0),
    ("fetch_three_wide", 0),
    ("fetch_four_wide", 0),
    ("fetch_five_wide", 0),
    ("fetch_six_wide", 0),
    ("fetch_seven_wide", 0),
    ("fetch_eight_wide", 0),
    ("dispatch_two_wide", 0),
    ("dispatch_three_wide", 0),
    ("dispatch_four_wide", 0),
    ("dispatch_five_wide", 0),
    ("dispatch_six_wide", 0),
    ("dispatch_seven_wide", 0),
    ("dispatch_eight_wide", 0),
    ("issue_two_wide", 1),
    ("issue_three_wide", 1),
    ("issue_four_wide", 0),
    ("issue_five_wide", 0),
    ("issue_six_wide", 0),
    ("issue_seven_wide", 0),
    ("issue_eight_wide", 0),
    ("commit_two_wide", 0),
    ("commit_three_wide", 0),
    ("commit_four_wide", 0),
    ("arch_regs", 64),
    ("repair_packets", 1),
    ("repair_cycles", 64),
    ("rmt_size", 64),
    ("rmt_log", 6),
    ("inst_queue_size", 32),
    ("inst_queue_log", 5),
    ("active_list_size", 192),
    ("active_list_log", 8),
    ("issue_queue_size", 64),
    ("issue_queue_log", 6),
    ("select_block_size", 8),
    ("select_blocks", 8),
    ("lsq_size", 64),
    ("lsq_log", 6),
    ("ras_size", 16),
    ("ras_log", 4),
    ("cti_queue_size", 32),
    ("cti_queue_log", 5),
    ("free_list_size", 192),
    ("free_list_log", 8),
    ("physical_table_size", 256),
    ("physical_table_log", 9),
    ("btb_entries_per_lane", 1024),
    ("btb_size", 1024),
    ("btb_log", 10),
    ("counter_entries_per_lane", 1024),
    ("counter_table_size", 1024),
    ("counter_table_log", 10),
    ("prediction_counter_bits", 2),
    ("ld_violation_pred_size", 256),
    ("ld_violation_pred_log", 8),
    ("ld_violation_pred_periodic_flush", 0),
    ("struct_parts", 4),
    ("struct_parts_log", 2),
    ("issue_queue_parts", 4),
    ("issue_queue_parts_log", 2),
    ("issue_queue_part_depth", 16),
    ("active_list_parts", 6),
    ("active_list_parts_log", 3),
    ("active_list_part_depth", 32),
    ("register_file_parts", 8),
    ("register_file_parts_log", 3),
    ("register_file_part_depth", 32),
    ("free_list_parts", 6),
    ("free_list_parts_log", 3),
    ("free_list_part_depth", 32),
    ("lsq_parts", 4),
    ("lsq_parts_log", 2),
    ("lsq_part_depth", 16),
    ("pc_bits", 64),
    ("instruction_bits", 32),
    ("instruction_bytes", 4),
    ("inst_byte_offset", 2),
    ("data_bits", 64),
    ("data_bytes", 8),
    ("data_byte_offset", 3),
    ("virt_addr_bits", 64),
    ("simple_lanes", 0b100),
    ("simple_lane_count", 1),
    ("complex_lanes", 0b100),
    ("complex_lane_count", 1),
    ("fp_lanes", 0b100),
    ("fp_lane_count", 1),
    ("fu_simple_latency", 1),
    ("fu_complex_latency", 20),
    ("fu_control_latency", 1),
    ("fu_agen_latency", 2),
    ("pipe_has_simple", 1),
    ("pipe_has_complex", 1),
    ("pipe_has_fp", 1),
    ("branch_type_log", 2),
    ("inst_types_log", 3),
    ("ldst_types_log", 2),
    ("fu_types_log", 2),
    ("icache_inst_byte_offset_log", 2),
    ("icache_insts_per_lane", 4),
    ("icache_insts_in_line", 4),
    ("icache_insts_in_line_log", 2),
    ("icache_bits_in_line", 128),
    ("icache_bytes_in_line", 16),
    ("icache_bytes_in_line_log", 4),
    ("icache_num_lines", 64),
    ("icache_num_lines_log", 6),
    ("icache_offset_bits", 2),
    ("icache_index_bits", 6),
    ("icache_tag_bits", 54),
    ("icache_block_addr_bits", 60),
    ("icache_pc_pkt_bits", 8),
    ("icache_inst_pkt_bits", 8),
    ("dcache_word_byte_offset_log", 3),
    ("dcache_words_in_line", 2),
    ("dcache_words_in_line_log", 1),
    ("dcache_bits_in_line", 128),
    ("dcache_bytes_in_line", 16),
    ("dcache_bytes_in_line_log", 4),
    ("dcache_num_lines", 128),
    ("dcache_num_lines_log", 7),
    ("dcache_offset_bits", 1),
    ("dcache_index_bits", 7),
    ("dcache_tag_bits", 53),
    ("dcache_block_addr_bits", 60),
    ("dcache_st_addr_bits", 61),
    ("dcache_store_buffer_size", 8),
    ("dcache_store_buffer_log", 3),
    ("dcache_ld_addr_pkt_bits", 8),
    ("dcache_ld_data_pkt_bits", 8),
    ("dcache_st_pkt_bits", 8),
    ("sram_data_width", 8),
    ("reg_data_width", 8),
    ("clock_period_ps", 10_000),
    ("ld_stall_at_issue", 1),
    ("replay_two_deep", 1),
    ("use_designware", 1),
    ("pipereg_clock_gate", 0),
    ("perf_mon", 0),
];

#[test]
fn test_baseline_dump() {
    let config = build(&baseline());
    let dump: Vec<_> = config.iter().collect();
    assert_eq!(dump, BASELINE);
}

#[test]
fn test_active_list_and_issue_queue_scenario() {
    let mut params = baseline();
    params.queues.active_list_size = 192;
    params.queues.issue_queue_size = 64;
    params.rename.arch_regs = 64;

    let config = build(&params);
    assert_eq!(config.get("active_list_log").unwrap(), 8);
    assert_eq!(config.get("issue_queue_log").unwrap(), 6);
    assert_eq!(config.get("physical_table_size").unwrap(), 256);
    assert_eq!(config.get("physical_table_log").unwrap(), 9);
}

#[test]
fn test_partition_depths_scenario() {
    let config = build(&baseline());
    let p = &config.pipeline().partitions;
    assert_eq!(p.issue_queue.depth, 16);
    assert_eq!(p.active_list.depth, 32);
    assert_eq!(p.register_file.depth, 32);
    assert_eq!(p.free_list.depth, 32);
    assert_eq!(p.lsq.depth, 16);
}

#[test]
fn test_dcache_line_scenario() {
    let params = with_caches(baseline(), |c| {
        c.dcache.num_lines = 128;
        c.dcache.words_in_line = 2;
    });
    let config = build(&params);
    assert_eq!(config.get("dcache_num_lines_log").unwrap(), 7);
    assert_eq!(config.get("dcache_bytes_in_line").unwrap(), 16);
    assert_eq!(config.get("dcache_bytes_in_line_log").unwrap(), 4);
    let dcache = config.memory().dcache().unwrap();
    assert_eq!(dcache.capacity_bytes(), 2048);
}

#[rstest]
#[case::one_lane(1, 0, 1024, 4, 54)]
#[case::two_lanes(2, 1, 2048, 8, 53)]
#[case::three_lanes_round_up(3, 2, 4096, 16, 52)]
#[case::four_lanes(4, 2, 4096, 16, 52)]
#[case::eight_lanes(8, 3, 8192, 32, 51)]
fn test_fetch_width_scales_predictor_and_icache(
    #[case] fetch_width: u64,
    #[case] fetch_log: u64,
    #[case] btb_size: u64,
    #[case] insts_in_line: u64,
    #[case] icache_tag: u64,
) {
    let mut params = baseline();
    params.widths.fetch_width = fetch_width;

    let config = build(&params);
    assert_eq!(config.get("fetch_width_log").unwrap(), fetch_log);
    assert_eq!(config.get("btb_size").unwrap(), btb_size);
    assert_eq!(config.get("counter_table_size").unwrap(), btb_size);
    assert_eq!(config.get("icache_insts_in_line").unwrap(), insts_in_line);
    assert_eq!(config.get("icache_tag_bits").unwrap(), icache_tag);
}

#[rstest]
#[case(1, 64)]
#[case(4, 16)]
#[case(64, 1)]
fn test_repair_cycles(#[case] repair_packets: u64, #[case] cycles: u64) {
    let mut params = baseline();
    params.rename.repair_packets = repair_packets;
    assert_eq!(build(&params).pipeline().rename.repair_cycles, cycles);
}

#[test]
fn test_lane_vectors() {
    let mut params = baseline();
    params.widths.issue_width = 6;
    params.execution.simple_lanes = 0b11_1100;
    params.execution.complex_lanes = 0b00_1000;
    params.execution.fp_lanes = 0b11_0000;

    let config = build(&params);
    let exec = &config.pipeline().execution;
    assert_eq!(exec.simple.lanes().collect::<Vec<_>>(), [2, 3, 4, 5]);
    assert_eq!(exec.complex.count, 1);
    assert!(exec.complex.contains(3));
    assert!(!exec.complex.contains(2));
    assert_eq!(config.get("fp_lane_count").unwrap(), 2);
}

#[rstest]
#[case::scalar(1, [0, 0, 0, 0, 0, 0, 0])]
#[case::three_wide(3, [1, 1, 0, 0, 0, 0, 0])]
#[case::eight_wide(8, [1, 1, 1, 1, 1, 1, 1])]
#[case::beyond_eight(12, [1, 1, 1, 1, 1, 1, 1])]
fn test_issue_lane_enables(#[case] issue_width: u64, #[case] expected: [u64; 7]) {
    let mut params = baseline();
    params.widths.issue_width = issue_width;
    let config = build(&params);
    let enables = config
        .get_many([
            "issue_two_wide",
            "issue_three_wide",
            "issue_four_wide",
            "issue_five_wide",
            "issue_six_wide",
            "issue_seven_wide",
            "issue_eight_wide",
        ])
        .unwrap();
    let values: Vec<_> = enables.into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_commit_lane_enables_stop_at_four() {
    let mut params = baseline();
    params.widths.commit_width = 4;
    let config = build(&params);
    assert_eq!(config.get("commit_four_wide").unwrap(), 1);
    assert!(!config.contains("commit_five_wide"));
}

#[test]
fn test_single_cycle_pipe_units() {
    let mut params = baseline();
    params.execution.pipe_has_fp = false;
    let config = build(&params);
    let pipe = config.pipeline().execution.single_cycle_pipe;
    assert!(pipe.simple && pipe.complex && !pipe.fp);
    assert_eq!(config.get("pipe_has_fp").unwrap(), 0);
    assert_eq!(config.get("pipe_has_simple").unwrap(), 1);
}

#[test]
fn test_latencies_by_unit() {
    let config = build(&baseline());
    let exec = &config.pipeline().execution;
    assert_eq!(exec.latency(FunctionalUnit::Simple), 1);
    assert_eq!(exec.latency(FunctionalUnit::Complex), 20);
    assert_eq!(exec.latency(FunctionalUnit::Control), 1);
    assert_eq!(exec.latency(FunctionalUnit::Agen), 2);
}

#[test]
fn test_physical_table_log_is_one_wider_than_active_list() {
    let mut params = baseline();
    params.queues.active_list_size = 128;
    params.partitions.active_list = 4;
    params.partitions.free_list = 4;
    let config = build(&params);
    let q = &config.pipeline().queues;
    assert_eq!(q.physical_table_size, 192);
    assert_eq!(q.active_list_log, 7);
    assert_eq!(q.physical_table_log, 8);
}

#[test]
fn test_features_and_physical_pass_through() {
    let mut params = baseline();
    params.features.perf_mon = true;
    params.features.use_designware = false;
    params.physical.clock_period_ps = 2_500;

    let config = build(&params);
    assert_eq!(config.get("perf_mon").unwrap(), 1);
    assert_eq!(config.get("use_designware").unwrap(), 0);
    assert_eq!(config.get("clock_period_ps").unwrap(), 2_500);
}

#[test]
fn test_primary_is_kept() {
    let mut params = baseline();
    params.widths.commit_width = 2;
    let config = build(&params);
    assert_eq!(config.primary(), &params);
    assert!(matches!(config.memory(), MemoryGeometry::Caches { .. }));
}

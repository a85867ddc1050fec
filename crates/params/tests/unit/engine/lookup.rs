//! # Lookup Tests
//!
//! Tests for name lookup, derivation order, and sharing a built configuration.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use anycore_params::{ConfigError, Configuration, PrimaryParams};

use crate::common::{LOG_PAIRS, baseline, build, scratch_pad};

#[test]
fn test_unknown_name() {
    let config = build(&baseline());
    for name in ["", "dcache_tag", "FETCH_WIDTH", "fetch_width "] {
        assert!(
            matches!(config.get(name), Err(ConfigError::UnknownParameter(ref n)) if n == name),
            "{name:?}"
        );
    }
}

#[test]
fn test_disabled_predictor_names_are_unknown() {
    let mut params = baseline();
    params.predictor.load_violation = None;
    let config = build(&params);
    assert!(config.pipeline().predictor.load_violation.is_none());
    for name in [
        "ld_violation_pred_size",
        "ld_violation_pred_log",
        "ld_violation_pred_periodic_flush",
    ] {
        assert!(!config.contains(name));
    }
}

#[test]
fn test_get_matches_typed_fields() {
    let config = build(&baseline());
    let p = config.pipeline();
    assert_eq!(config.get("fetch_width").unwrap(), p.widths.fetch);
    assert_eq!(config.get("issue_width_log").unwrap(), p.widths.issue_log);
    assert_eq!(config.get("rmt_log").unwrap(), p.rename.rmt_log);
    assert_eq!(config.get("select_blocks").unwrap(), p.queues.select_blocks);
    assert_eq!(config.get("btb_log").unwrap(), p.predictor.btb_log);
    assert_eq!(
        config.get("register_file_part_depth").unwrap(),
        p.partitions.register_file.depth
    );
    assert_eq!(config.get("data_byte_offset").unwrap(), p.isa.data_byte_offset);
    assert_eq!(config.get("inst_types_log").unwrap(), p.encodings.inst_types_log);
    let icache = config.memory().icache().unwrap();
    assert_eq!(config.get("icache_bits_in_line").unwrap(), icache.bits_in_line);
}

#[test]
fn test_get_is_repeatable() {
    let config = build(&baseline());
    for (name, value) in config.iter() {
        assert_eq!(config.get(name).unwrap(), value, "{name}");
        assert_eq!(config.get(name).unwrap(), value, "{name} second lookup");
    }
}

#[test]
fn test_names_are_unique() {
    for params in [baseline(), scratch_pad()] {
        let config = build(&params);
        let names: HashSet<_> = config.iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), config.len());
        assert!(!config.is_empty());
    }
}

#[test]
fn test_logs_follow_their_sizes_in_order() {
    let config = build(&baseline());
    let position: Vec<_> = config.iter().map(|(n, _)| n).collect();
    let at = |name: &str| position.iter().position(|n| *n == name);
    for (log, size) in LOG_PAIRS {
        if let (Some(log_at), Some(size_at)) = (at(log), at(size)) {
            assert!(size_at < log_at, "{size} must be derived before {log}");
        }
    }
    assert!(at("active_list_size") < at("physical_table_size"));
    assert!(at("physical_table_size") < at("register_file_part_depth"));
    assert!(at("fetch_width_log") < at("btb_size"));
    assert!(at("inst_byte_offset") < at("icache_tag_bits"));
}

#[test]
fn test_get_many() {
    let config = build(&baseline());
    let values = config
        .get_many(["fetch_width", "active_list_log", "dcache_tag_bits"])
        .unwrap();
    assert_eq!(
        values,
        [("fetch_width", 1), ("active_list_log", 8), ("dcache_tag_bits", 53)]
    );
    assert!(matches!(
        config.get_many(["fetch_width", "nope"]),
        Err(ConfigError::UnknownParameter(n)) if n == "nope"
    ));
}

#[test]
fn test_build_is_deterministic() {
    let a = build(&baseline());
    let b = build(&baseline());
    assert!(a.iter().eq(b.iter()));
    assert_eq!(a.table(), b.table());
    assert_eq!(a.pipeline(), b.pipeline());
}

#[test]
fn test_from_json_str() {
    let config = Configuration::from_json_str(r#"{ "widths": { "fetch_width": 2 } }"#).unwrap();
    assert_eq!(config.get("fetch_width_log").unwrap(), 1);
    assert!(matches!(
        Configuration::from_json_str(r#"{ "queues": { "ras_size": 12 } }"#),
        Err(ConfigError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Configuration>();
    assert_send_sync::<PrimaryParams>();

    let config = Arc::new(build(&baseline()));
    let expected = config.get("physical_table_size").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || config.get("physical_table_size").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    thread::scope(|s| {
        let readers: Vec<_> = (0..4)
            .map(|_| s.spawn(|| config.iter().count()))
            .collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), config.len());
        }
    });
}

//! # Error Tests
//!
//! Tests for error messages and for telling the error kinds apart.

use anycore_params::{ConfigError, PrimaryParams, Violation};

#[test]
fn test_invalid_configuration_display_names_parameter() {
    let err = ConfigError::from(Violation::NotPowerOfTwo {
        name: "icache_num_lines",
        value: 100,
    });
    assert_eq!(
        err.to_string(),
        "invalid configuration: `icache_num_lines` must be a power of two, got 100"
    );
}

#[test]
fn test_unknown_parameter_display() {
    let err = ConfigError::UnknownParameter("dcache_tag".into());
    assert_eq!(err.to_string(), "unknown parameter `dcache_tag`");
    assert!(err.violation().is_none());
}

#[test]
fn test_violation_accessor() {
    let violation = Violation::Redefined { name: "btb_log" };
    let err = ConfigError::from(violation.clone());
    assert_eq!(err.violation(), Some(&violation));
}

#[test]
fn test_parse_error_from_json() {
    let err = PrimaryParams::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse primary parameters"));
}

#[test]
fn test_io_error_keeps_path_and_source() {
    let err = PrimaryParams::from_json_file("/nonexistent/anycore/params.json").unwrap_err();
    match &err {
        ConfigError::Io { path, .. } => {
            assert!(path.ends_with("params.json"));
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("/nonexistent/anycore/params.json"));
}

#[test]
fn test_lane_vector_display_is_binary() {
    let v = Violation::LaneVector {
        name: "fp_lanes",
        mask: 0b101,
        reason: "uses lane 0 or 1, reserved for memory and control",
    };
    assert!(v.to_string().starts_with("lane vector `fp_lanes` (0b101)"));
}

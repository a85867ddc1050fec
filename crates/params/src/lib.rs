//! Structural parameters for the AnyCore superscalar out-of-order core.
//!
//! This crate turns a small set of architectural knobs into every sizing
//! constant the core model needs. It provides:
//! 1. **Primary parameters:** Widths, queue depths, predictor tables, partitions,
//!    execution lanes, and the memory subsystem mode (`PrimaryParams`).
//! 2. **Derivation:** Log widths, per-partition depths, and tag/index/offset
//!    address splits computed once in dependency order (`Configuration::build`).
//! 3. **Lookup:** Name-based access to every primary and derived value
//!    (`Configuration::get`), plus typed section accessors.
//!
//! # Examples
//!
//! ```
//! use anycore_params::{Configuration, PrimaryParams};
//!
//! let config = Configuration::build(&PrimaryParams::default()).unwrap();
//! assert_eq!(config.get("active_list_log").unwrap(), 8);
//! assert_eq!(config.get("physical_table_size").unwrap(), 256);
//! assert!(config.get("no_such_parameter").is_err());
//! ```

/// Shared helpers and error types (bit arithmetic, validation errors).
pub mod common;
/// Primary parameter structures, defaults, and JSON loading.
pub mod config;
/// Instruction-field encodings whose widths are derived from variant counts.
pub mod encoding;
/// Derivation engine and the immutable `Configuration` it produces.
pub mod engine;

/// Error type for building and querying a configuration.
pub use crate::common::error::{ConfigError, Result, Violation};
/// Root primary-parameter type; use `PrimaryParams::default()` or load from JSON.
pub use crate::config::PrimaryParams;
/// Fully derived, immutable configuration.
pub use crate::engine::Configuration;

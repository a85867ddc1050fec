//! Common utilities shared by the parameter sections.
//!
//! This module provides:
//! 1. **Bit Arithmetic:** Ceiling log2, power-of-two and exact-division checks.
//! 2. **Error Handling:** The configuration error type and invariant violations.

/// Bit-width arithmetic and validation helpers.
pub mod bits;

/// Error types for configuration build and lookup.
pub mod error;

pub use bits::ceil_log2;
pub use error::{ConfigError, Result, Violation};

//! Configuration error definitions.
//!
//! This module defines how parameter problems are reported. It provides:
//! 1. **Violations:** One variant per invariant a primary parameter set can break.
//! 2. **Errors:** The top-level error returned by build, lookup, and loading.
//! 3. **Result Alias:** `Result<T>` over `ConfigError`.

use std::path::PathBuf;

/// A single broken invariant, naming the parameter(s) involved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A size that indexes a table or selects a line is not a power of two.
    #[error("`{name}` must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: u64,
    },

    /// A value is below its lower bound.
    #[error("`{name}` must be at least {min}, got {value}")]
    TooSmall {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: u64,
        /// Smallest accepted value.
        min: u64,
    },

    /// A value is above its upper bound.
    #[error("`{name}` must be at most {max}, got {value}")]
    TooLarge {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },

    /// A division that must be exact leaves a remainder (or divides by zero).
    #[error("`{divisor_name}` ({divisor}) does not evenly divide `{name}` ({value})")]
    NotDivisible {
        /// Dividend name.
        name: &'static str,
        /// Dividend value.
        value: u64,
        /// Divisor name.
        divisor_name: &'static str,
        /// Divisor value.
        divisor: u64,
    },

    /// A field computed by subtraction from a total width is zero or negative.
    #[error("`{name}` needs a positive width: {total} total bits, {used} already allocated")]
    NonPositiveWidth {
        /// Name of the field that came out empty.
        name: &'static str,
        /// Total width being split.
        total: u64,
        /// Bits taken by the other fields.
        used: u64,
    },

    /// A tag field cannot address every entry of its structure.
    #[error("`{name}` is {bits} bits but `{sized}` needs {needed}")]
    TooNarrow {
        /// Width parameter name.
        name: &'static str,
        /// Width in bits.
        bits: u64,
        /// Name of the structure it indexes.
        sized: &'static str,
        /// Bits required to index that structure.
        needed: u64,
    },

    /// An execution lane vector is malformed.
    #[error("lane vector `{name}` ({mask:#b}) {reason}")]
    LaneVector {
        /// Lane vector name.
        name: &'static str,
        /// Offending mask.
        mask: u64,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A derived value does not fit in 64 bits.
    #[error("`{name}` overflows 64 bits")]
    Overflow {
        /// Parameter name.
        name: &'static str,
    },

    /// The derivation tried to define the same name twice.
    #[error("`{name}` is derived more than once")]
    Redefined {
        /// Parameter name.
        name: &'static str,
    },
}

/// Errors produced while loading, building, or querying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A primary parameter or derived invariant check failed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] Violation),

    /// A lookup referenced a name the configuration does not define.
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    /// Primary parameters could not be parsed.
    #[error("failed to parse primary parameters: {0}")]
    Parse(#[from] serde_json::Error),

    /// A parameter file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns the violated invariant when this is an `InvalidConfiguration`.
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::InvalidConfiguration(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

//! Insertion-ordered parameter table.
//!
//! The derivation records every value here as it is computed. A name can be
//! defined once; since a value is only ever computed from names already in
//! the table, iteration order is a dependency order of the derivation.

use std::collections::HashMap;

use crate::common::bits::ceil_log2;
use crate::common::error::{ConfigError, Result, Violation};

/// Named parameter values in the order they were derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTable {
    entries: Vec<(&'static str, u64)>,
    index: HashMap<&'static str, usize>,
}

impl ParamTable {
    /// Records `name = value`, returning `value`.
    ///
    /// # Errors
    ///
    /// [`Violation::Redefined`] if `name` is already present.
    pub(crate) fn define(&mut self, name: &'static str, value: u64) -> Result<u64> {
        if self.index.contains_key(name) {
            return Err(Violation::Redefined { name }.into());
        }
        let _ = self.index.insert(name, self.entries.len());
        self.entries.push((name, value));
        Ok(value)
    }

    /// Records a size and its `ceil(log2)` under `log_name`.
    pub(crate) fn define_sized(
        &mut self,
        name: &'static str,
        log_name: &'static str,
        value: u64,
    ) -> Result<(u64, u64)> {
        let value = self.define(name, value)?;
        let log = self.define(log_name, ceil_log2(value))?;
        Ok((value, log))
    }

    /// Records a flag as `0` or `1`.
    pub(crate) fn define_flag(&mut self, name: &'static str, value: bool) -> Result<bool> {
        let _ = self.define(name, u64::from(value))?;
        Ok(value)
    }

    /// Looks up a value by name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownParameter`] if `name` was never defined.
    pub fn get(&self, name: &str) -> Result<u64> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_owned()))
    }

    /// Whether `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of defined parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(name, value)` pairs in derivation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().copied()
    }
}

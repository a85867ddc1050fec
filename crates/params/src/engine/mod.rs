//! Parameter derivation engine.
//!
//! [`Configuration::build`] validates a [`PrimaryParams`] and derives every
//! dependent constant exactly once, in dependency order:
//! 1. **Pipeline:** widths, rename, queues, predictor, partitions, ISA, execution.
//! 2. **Memory:** the selected scratchpad or cache geometry (needs fetch width and ISA).
//! 3. **Physical and Features:** pass-through values and 0/1 flags.
//!
//! Construction is all-or-nothing. The result is immutable and `Send + Sync`,
//! so one value can be shared (e.g. behind an `Arc`) by every consumer.

/// Cache address split.
pub mod geometry;
/// Scratchpad and cache geometry.
pub mod memory;
/// Pipeline structure geometry.
pub mod pipeline;
/// Insertion-ordered name/value table.
pub mod table;

use crate::common::bits::positive;
use crate::common::error::{ConfigError, Result};
use crate::config::{FeatureParams, PhysicalParams, PrimaryParams};

pub use geometry::AddressSplit;
pub use memory::MemoryGeometry;
pub use pipeline::PipelineGeometry;
pub use table::ParamTable;

/// A validated, fully derived core configuration.
///
/// Every primary and derived value is reachable by name through
/// [`get`](Self::get); the typed sections expose the same values as fields.
///
/// # Examples
///
/// ```
/// use anycore_params::{Configuration, PrimaryParams};
///
/// let mut params = PrimaryParams::default();
/// params.queues.active_list_size = 192;
/// params.queues.issue_queue_size = 64;
///
/// let config = Configuration::build(&params).unwrap();
/// assert_eq!(config.get("active_list_log").unwrap(), 8);
/// assert_eq!(config.get("issue_queue_log").unwrap(), 6);
/// assert_eq!(config.get("physical_table_size").unwrap(), 256);
/// assert_eq!(config.get("physical_table_log").unwrap(), 9);
/// assert_eq!(config.pipeline().queues.physical_table_log, 9);
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    primary: PrimaryParams,
    pipeline: PipelineGeometry,
    memory: MemoryGeometry,
    table: ParamTable,
}

impl Configuration {
    /// Validates `params` and derives the full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] naming the first broken
    /// invariant: a size that must be a power of two, a partition or repair
    /// count that does not divide its structure, a non-positive derived width,
    /// or an address split that does not cover its address width.
    pub fn build(params: &PrimaryParams) -> Result<Self> {
        Self::derive(params).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected primary parameters");
        })
    }

    fn derive(params: &PrimaryParams) -> Result<Self> {
        let mut table = ParamTable::default();
        let pipeline = PipelineGeometry::derive(params, &mut table)?;
        let memory =
            MemoryGeometry::derive(&params.memory, &pipeline.widths, &pipeline.isa, &mut table)?;
        define_physical(&params.physical, &mut table)?;
        define_features(params.features, &mut table)?;

        tracing::info!(
            parameters = table.len(),
            memory = params.memory.name(),
            "configuration built"
        );

        Ok(Self {
            primary: params.clone(),
            pipeline,
            memory,
            table,
        })
    }

    /// Parses primary parameters from JSON and builds them.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed input, otherwise as [`build`](Self::build).
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::build(&PrimaryParams::from_json_str(json)?)
    }

    /// Looks up a primary or derived value by name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownParameter`] if the name is not defined, including
    /// names that belong to a memory mode or predictor that is not selected.
    pub fn get(&self, name: &str) -> Result<u64> {
        self.table.get(name)
    }

    /// Whether `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Looks up several names at once, failing on the first unknown one.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownParameter`] for the first undefined name.
    pub fn get_many<'a, I>(&self, names: I) -> Result<Vec<(&'a str, u64)>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    /// All `(name, value)` pairs in derivation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, u64)> + '_ {
        self.table.iter()
    }

    /// Number of defined parameters.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false` for a built configuration.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The primary parameters this configuration was built from.
    pub const fn primary(&self) -> &PrimaryParams {
        &self.primary
    }

    /// Pipeline structure geometry.
    pub const fn pipeline(&self) -> &PipelineGeometry {
        &self.pipeline
    }

    /// Memory subsystem geometry.
    pub const fn memory(&self) -> &MemoryGeometry {
        &self.memory
    }

    /// The underlying name/value table.
    pub const fn table(&self) -> &ParamTable {
        &self.table
    }
}

impl TryFrom<&PrimaryParams> for Configuration {
    type Error = ConfigError;

    fn try_from(params: &PrimaryParams) -> Result<Self> {
        Self::build(params)
    }
}

fn define_physical(p: &PhysicalParams, t: &mut ParamTable) -> Result<()> {
    for (name, value) in [
        ("sram_data_width", p.sram_data_width),
        ("reg_data_width", p.reg_data_width),
        ("clock_period_ps", p.clock_period_ps),
    ] {
        let _ = t.define(name, positive(name, value)?)?;
    }
    Ok(())
}

fn define_features(f: FeatureParams, t: &mut ParamTable) -> Result<()> {
    for (name, on) in [
        ("ld_stall_at_issue", f.ld_stall_at_issue),
        ("replay_two_deep", f.replay_two_deep),
        ("use_designware", f.use_designware),
        ("pipereg_clock_gate", f.pipereg_clock_gate),
        ("perf_mon", f.perf_mon),
    ] {
        let _ = t.define_flag(name, on)?;
    }
    Ok(())
}

// File: crates/whisker-core/src/plugin.rs
// Summary: Chart plugin trait and the explicit registry that maps chart ids to plugins.

use indexmap::IndexMap;
use serde_json::Value;

use crate::boxplot::BoundPolicy;
use crate::category::CategoryOrder;
use crate::error::ChartError;
use crate::option::ChartOption;
use crate::rows::{Row, RowSchema};

/// Knobs every chart build accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildParams {
    pub bound: BoundPolicy,
    pub order: CategoryOrder,
}

impl Default for BuildParams {
    fn default() -> Self { Self { bound: BoundPolicy::iqr(), order: CategoryOrder::Natural } }
}

/// A chart kind turns typed rows into a chart option.
pub trait ChartPlugin: Send + Sync {
    /// Stable identifier, e.g. `"multi_boxplot"`.
    fn id(&self) -> &'static str;
    /// Human readable name.
    fn name(&self) -> &'static str;
    /// Fields this chart reads from raw records.
    fn schema(&self) -> RowSchema;
    fn build(&self, rows: &[Row], params: &BuildParams) -> Result<ChartOption, ChartError>;
}

/// Chart kinds known to the application. Construct once at startup and pass
/// by reference; nothing registers itself.
#[derive(Default)]
pub struct ChartRegistry {
    plugins: IndexMap<&'static str, Box<dyn ChartPlugin>>,
}

impl ChartRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, plugin: Box<dyn ChartPlugin>) -> Result<(), ChartError> {
        let id = plugin.id();
        if self.plugins.contains_key(id) {
            return Err(ChartError::DuplicateChart(id.to_string()));
        }
        tracing::debug!(chart = id, "registered chart plugin");
        self.plugins.insert(id, plugin);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, plugin: impl ChartPlugin + 'static) -> Result<Self, ChartError> {
        self.register(Box::new(plugin))?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Option<&dyn ChartPlugin> {
        self.plugins.get(id).map(|p| p.as_ref())
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> { self.plugins.keys().copied().collect() }

    pub fn len(&self) -> usize { self.plugins.len() }

    pub fn is_empty(&self) -> bool { self.plugins.is_empty() }

    fn require(&self, id: &str) -> Result<&dyn ChartPlugin, ChartError> {
        self.get(id).ok_or_else(|| ChartError::UnknownChart(id.to_string()))
    }

    pub fn build(&self, id: &str, rows: &[Row], params: &BuildParams) -> Result<ChartOption, ChartError> {
        self.require(id)?.build(rows, params)
    }

    /// Decode raw records with the chart's own schema, then build.
    pub fn build_from_json(&self, id: &str, records: &[Value], params: &BuildParams) -> Result<ChartOption, ChartError> {
        let plugin = self.require(id)?;
        let rows = plugin.schema().decode(records)?;
        plugin.build(&rows, params)
    }
}

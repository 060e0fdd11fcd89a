// File: crates/whisker-plugins/src/lib.rs
// Summary: Built-in chart plugins and a helper that registers them on an explicit registry.

pub mod boxplot;
pub mod histogram;

pub use boxplot::BoxPlotChart;
pub use histogram::SpotPriceHistogram;

use whisker_core::{ChartError, ChartRegistry};

/// Register every built-in chart kind.
pub fn register_builtin(registry: &mut ChartRegistry) -> Result<(), ChartError> {
    registry.register(Box::new(BoxPlotChart::multi_boxplot()))?;
    registry.register(Box::new(BoxPlotChart::duid_generation()))?;
    registry.register(Box::new(SpotPriceHistogram::default()))?;
    Ok(())
}

/// A registry holding only the built-in chart kinds.
pub fn builtin_registry() -> Result<ChartRegistry, ChartError> {
    let mut registry = ChartRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}

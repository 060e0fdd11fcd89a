// File: crates/whisker-core/src/grid.rs
// Summary: Grid line and tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick values for a value axis: `count` evenly spaced stops including both ends.
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    linspace(min, max, count.max(2))
}

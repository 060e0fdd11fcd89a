// File: crates/whisker-core/src/axis.rs
// Summary: Category (X) and value (Y) axis models plus the rounded y-axis ceiling.

/// Round `v` up to the next multiple of ten (`42.5 -> 50`, `40 -> 40`).
pub fn nice_ceiling(v: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 for small negatives.
    (v / 10.0).ceil() * 10.0 + 0.0
}

/// Discrete X axis: one slot per category label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryAxis {
    pub label: String,
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, categories: Vec<String>) -> Self {
        Self { label: label.into(), categories }
    }

    /// Center of slot `i` as a fraction of the axis length.
    pub fn slot_center(&self, i: usize) -> f64 {
        let n = self.categories.len().max(1) as f64;
        (i as f64 + 0.5) / n
    }

    /// Width of one slot as a fraction of the axis length.
    pub fn slot_width(&self) -> f64 {
        1.0 / self.categories.len().max(1) as f64
    }
}

/// Continuous Y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Range covering `values`, floored at zero and ceiled to a multiple of ten.
    pub fn covering(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = 0.0f64;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !hi.is_finite() || hi <= lo {
            hi = lo + 10.0;
        }
        let min = if lo < 0.0 { -nice_ceiling(-lo) } else { 0.0 };
        Self::new(label, min, nice_ceiling(hi))
    }

    /// Map a value onto `[0, 1]` along the axis (0 = min).
    pub fn fraction(&self, v: f64) -> f64 {
        let span = (self.max - self.min).max(1e-12);
        (v - self.min) / span
    }
}

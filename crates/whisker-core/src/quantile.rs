// File: crates/whisker-core/src/quantile.rs
// Summary: Numeric sort and R-7 quantile (linear interpolation between closest ranks).

use std::cmp::Ordering;

/// Sort `values` ascending by numeric comparison.
///
/// The sort is stable and never compares lexically; `f64::total_cmp` gives a
/// total order so mixed signs and zeros land where they should.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Return a sorted copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    sort_ascending(&mut out);
    out
}

/// Percentile `p` (in `[0, 1]`) of an ascending sample using the R-7 rule:
/// `H = (n - 1) * p + 1`, interpolate between ranks `floor(H)` and `floor(H) + 1`.
///
/// `sorted` must already be ascending (see [`sort_ascending`]). `p` outside the
/// unit interval is clamped. Returns `None` only for an empty sample.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };

    let rank = (n - 1) as f64 * p + 1.0;
    let h = (rank.floor() as usize).clamp(1, n);
    let v = sorted[h - 1];
    let e = rank - h as f64;
    if e == 0.0 || h >= n {
        Some(v)
    } else {
        let next = sorted[h];
        // Rounding may overshoot the upper rank by an ulp; keep the result inside it.
        Some((v + e * (next - v)).min(next))
    }
}

/// Three quartiles `(q1, median, q3)` of an ascending sample.
pub fn quartiles(sorted: &[f64]) -> Option<(f64, f64, f64)> {
    Some((quantile(sorted, 0.25)?, quantile(sorted, 0.5)?, quantile(sorted, 0.75)?))
}

/// `true` when `values` is ascending under numeric comparison.
pub fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0].total_cmp(&w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_every_quantile() {
        let s = [4.2];
        assert_eq!(quantile(&s, 0.0), Some(4.2));
        assert_eq!(quantile(&s, 0.5), Some(4.2));
        assert_eq!(quantile(&s, 1.0), Some(4.2));
    }

    #[test]
    fn endpoints_are_min_and_max() {
        let s = [1.0, 3.0, 9.0];
        assert_eq!(quantile(&s, 0.0), Some(1.0));
        assert_eq!(quantile(&s, 1.0), Some(9.0));
    }

    #[test]
    fn out_of_range_p_is_clamped() {
        let s = [1.0, 2.0];
        assert_eq!(quantile(&s, -3.0), Some(1.0));
        assert_eq!(quantile(&s, 7.0), Some(2.0));
    }

    #[test]
    fn numeric_not_lexical_sort() {
        let mut v = vec![10.0, 9.0, 100.0, -1.0];
        sort_ascending(&mut v);
        assert_eq!(v, vec![-1.0, 9.0, 10.0, 100.0]);
        assert!(is_ascending(&v));
    }
}

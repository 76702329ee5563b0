//! Scalar statistics over f64 slices: mean, linear-interpolation
//! percentile, Pearson correlation.
//!
//! Degenerate inputs (empty series, zero variance) yield `None` rather
//! than NaN so callers can report "not available".

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Compute percentile using linear interpolation.
///
/// `sorted` must be ascending. `p` is in `[0, 100]`.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Evaluate a percentile curve over `values` at the given percentiles —
/// the shape plotting collaborators consume.
///
/// `values` need not be sorted; sorting happens once here. Empty input
/// yields an empty curve.
pub fn percentile_curve(values: &[f64], percentiles: &[u8]) -> Vec<(u8, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    percentiles
        .iter()
        .map(|&p| (p, percentile(&sorted, p as f64)))
        .collect()
}

/// Pearson correlation coefficient between two equal-length series.
///
/// `None` when the series are shorter than two points, lengths differ, or
/// either series has zero variance (correlation is undefined there).
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 || !var_x.is_finite() || !var_y.is_finite() {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    if r.is_finite() {
        Some(r.clamp(-1.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_percentile_median() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile(&sorted, 50.0) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_percentile_interpolates() {
        // rank = 0.8 * 3 = 2.4 → 3.0 * 0.6 + 4.0 * 0.4 = 3.4
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&sorted, 80.0) - 3.4).abs() < 1e-10);
    }

    #[test]
    fn test_percentile_endpoints() {
        let sorted = vec![2.0, 4.0, 6.0];
        assert_eq!(percentile(&sorted, 0.0), 2.0);
        assert_eq!(percentile(&sorted, 100.0), 6.0);
        assert_eq!(percentile(&[7.0], 90.0), 7.0);
    }

    #[test]
    fn test_percentile_curve_uses_reporting_percentiles() {
        let percentiles = diffgauge_core::config::MetricsConfig::default().effective_percentiles();
        let values = vec![4.0, 1.0, 3.0, 2.0];
        let curve = percentile_curve(&values, &percentiles);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].0, 80);
        assert!((curve[0].1 - 3.4).abs() < 1e-10);
        assert_eq!(curve[1].0, 90);
    }

    #[test]
    fn test_percentile_curve_empty_input() {
        assert!(percentile_curve(&[], &[50, 90]).is_empty());
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![2.0, 4.0, 6.0, 8.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![6.0, 4.0, 2.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_pearson_zero_variance_undefined() {
        let x = vec![5.0, 5.0, 5.0];
        let y = vec![1.0, 2.0, 3.0];
        assert_eq!(pearson(&x, &y), None);
        assert_eq!(pearson(&y, &x), None);
    }

    #[test]
    fn test_pearson_too_short_undefined() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[], &[]), None);
    }
}

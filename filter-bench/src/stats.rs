use serde::Serialize;

/// Summary of per-iteration throughput samples (operations per second).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stddev: f64,
    pub cv_percent: f64,
    pub sample_count: usize,
    pub outliers_removed: usize,
}

/// Summarise throughput samples.
///
/// Samples outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` are dropped first, unless
/// that would leave fewer than two samples.
pub fn compute_stats(samples: &[f64]) -> Stats {
    match samples {
        [] => Stats::default(),
        [only] => Stats {
            mean: *only,
            median: *only,
            min: *only,
            max: *only,
            sample_count: 1,
            ..Stats::default()
        },
        _ => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(|a, b| a.total_cmp(b));

            let kept = without_outliers(&sorted);
            let data: &[f64] = if kept.len() >= 2 { &kept } else { &sorted };

            let n = data.len() as f64;
            let mean = data.iter().sum::<f64>() / n;
            let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            let stddev = variance.sqrt();

            Stats {
                mean,
                median: percentile(data, 50.0),
                min: data[0],
                max: data[data.len() - 1],
                stddev,
                cv_percent: if mean > 0.0 { stddev / mean * 100.0 } else { 0.0 },
                sample_count: data.len(),
                outliers_removed: samples.len() - kept.len(),
            }
        }
    }
}

/// Tukey fence filter over a sorted slice.
fn without_outliers(sorted: &[f64]) -> Vec<f64> {
    let q1 = percentile(sorted, 25.0);
    let q3 = percentile(sorted, 75.0);
    let fence = 1.5 * (q3 - q1);
    sorted
        .iter()
        .copied()
        .filter(|&v| v >= q1 - fence && v <= q3 + fence)
        .collect()
}

/// Linear-interpolated percentile (0-100) of a sorted slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let rank = pct / 100.0 * (len - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let frac = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples() {
        let s = compute_stats(&[]);
        assert_eq!(s.sample_count, 0);
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn test_single_sample() {
        let s = compute_stats(&[42.0]);
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.median, 42.0);
        assert_eq!(s.stddev, 0.0);
        assert_eq!(s.sample_count, 1);
    }

    #[test]
    fn test_basic_stats() {
        let s = compute_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((s.mean - 3.0).abs() < 1e-10);
        assert!((s.median - 3.0).abs() < 1e-10);
        assert!((s.min - 1.0).abs() < 1e-10);
        assert!((s.max - 5.0).abs() < 1e-10);
        // sample variance 2.5
        assert!((s.stddev - 2.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_median_even() {
        let s = compute_stats(&[4.0, 1.0, 3.0, 2.0]);
        assert!((s.median - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_cv_zero_for_constant_values() {
        let s = compute_stats(&[5.0; 6]);
        assert_eq!(s.cv_percent, 0.0);
        assert_eq!(s.stddev, 0.0);
    }

    #[test]
    fn test_outlier_removal() {
        let mut samples = vec![1e6, 1.01e6, 0.99e6, 1.02e6, 0.98e6, 1e6, 1.01e6, 1e6];
        samples.push(5e4); // iteration hit by a scheduler stall
        let s = compute_stats(&samples);
        assert_eq!(s.outliers_removed, 1);
        assert!(s.min > 9e5);
        assert_eq!(s.sample_count, 8);
    }

    #[test]
    fn test_no_outliers_in_uniform_data() {
        let samples: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let s = compute_stats(&samples);
        assert_eq!(s.outliers_removed, 0);
        assert_eq!(s.sample_count, 10);
    }

    #[test]
    fn test_percentile_function() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile(&sorted, 0.0) - 1.0).abs() < 1e-10);
        assert!((percentile(&sorted, 25.0) - 2.0).abs() < 1e-10);
        assert!((percentile(&sorted, 100.0) - 5.0).abs() < 1e-10);
        assert!((percentile(&[0.0, 10.0], 35.0) - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_two_samples() {
        let s = compute_stats(&[3.0, 7.0]);
        assert!((s.mean - 5.0).abs() < 1e-10);
        assert!((s.stddev - 8.0_f64.sqrt()).abs() < 1e-9);
    }
}

//! Outlier Filter — IQR-based removal of implausible salary observations,
//! applied per role or skill cohort before statistics are computed.
//!
//! Cohorts of 10 or fewer pass through untouched: with that little data the
//! filter destroys more signal than it protects.

/// Absolute floor on the lower outlier bound.
const MIN_REASONABLE_SALARY: f64 = 25_000.0;
/// Absolute ceiling on the upper outlier bound.
const MAX_REASONABLE_SALARY: f64 = 400_000.0;
/// Cohorts at or below this size pass through unfiltered.
const FILTER_MIN_COHORT: usize = 10;

/// Linear-interpolation quantile over an ascending-sorted slice.
/// `q` in [0, 1]. Empty input yields NaN-free 0.0 only by caller contract;
/// callers must not pass an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = pos - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Removes IQR outliers from a cohort. Cohorts of size <= 2 are returned
/// unchanged. Bounds are clamped to a reasonable salary band so a tight
/// cluster of bad data cannot narrow them into nonsense.
fn remove_outliers(salaries: &[f64]) -> Vec<f64> {
    if salaries.len() <= 2 {
        return salaries.to_vec();
    }

    let mut sorted = salaries.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    let lower_bound = (q1 - 1.5 * iqr).max(MIN_REASONABLE_SALARY);
    let upper_bound = (q3 + 1.5 * iqr).min(MAX_REASONABLE_SALARY);

    salaries
        .iter()
        .copied()
        .filter(|s| (lower_bound..=upper_bound).contains(s))
        .collect()
}

/// Cohort-level entry point: filter only when the cohort is large enough for
/// the quartiles to mean anything.
pub fn filter_cohort(salaries: &[f64]) -> Vec<f64> {
    if salaries.len() <= FILTER_MIN_COHORT {
        salaries.to_vec()
    } else {
        remove_outliers(salaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_cohort_never_reduced() {
        assert_eq!(filter_cohort(&[]), Vec::<f64>::new());
        assert_eq!(filter_cohort(&[500_000.0]), vec![500_000.0]);
        assert_eq!(filter_cohort(&[500_000.0, 1.0]), vec![500_000.0, 1.0]);
    }

    #[test]
    fn test_small_cohort_passes_through() {
        // 3..=10 samples: below the filter gate, raw values survive even if
        // one looks like an outlier.
        let cohort = vec![50_000.0, 55_000.0, 60_000.0, 900_000.0];
        assert_eq!(filter_cohort(&cohort), cohort);
    }

    #[test]
    fn test_large_cohort_drops_outlier() {
        // Q1 = 52_500, Q3 = 57_500, IQR = 5_000; bounds [45_000, 65_000].
        let cohort = vec![
            50_000.0, 51_000.0, 52_000.0, 53_000.0, 54_000.0, 55_000.0, 56_000.0, 57_000.0,
            58_000.0, 59_000.0, 200_000.0,
        ];
        let filtered = filter_cohort(&cohort);
        assert_eq!(filtered.len(), 10);
        assert!(!filtered.contains(&200_000.0));
    }

    #[test]
    fn test_bounds_clamped_to_salary_band() {
        // A tight high cluster would compute an upper bound above 400k; the
        // clamp still rejects values beyond the band.
        let mut cohort = vec![390_000.0; 11];
        cohort.push(450_000.0);
        let filtered = filter_cohort(&cohort);
        assert!(!filtered.contains(&450_000.0));
        assert_eq!(filtered.len(), 11);
    }

    #[test]
    fn test_lower_clamp_floor() {
        // Low cluster: lower bound never drops below 25_000.
        let mut cohort = vec![26_000.0; 11];
        cohort.push(20_000.0);
        let filtered = filter_cohort(&cohort);
        assert!(!filtered.contains(&20_000.0));
    }

    #[test]
    fn test_filtered_values_within_bounds() {
        let cohort: Vec<f64> = (0..20).map(|i| 60_000.0 + (i as f64) * 1_000.0).collect();
        let mut sorted = cohort.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo = (q1 - 1.5 * iqr).max(25_000.0);
        let hi = (q3 + 1.5 * iqr).min(400_000.0);

        for v in filter_cohort(&cohort) {
            assert!((lo..=hi).contains(&v));
        }
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 1.0), 4.0);
        assert_eq!(quantile(&values, 0.5), 2.5);
        assert_eq!(quantile(&values, 0.25), 1.75);
    }

    #[test]
    fn test_quantile_single_element() {
        assert_eq!(quantile(&[42.0], 0.75), 42.0);
    }
}

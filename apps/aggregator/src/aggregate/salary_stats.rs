//! Cohort salary statistics and the salary analysis collection.

use std::collections::BTreeMap;

use crate::extract::outliers::quantile;
use crate::models::entities::{
    RoleRecord, SalaryAnalysisEntry, SalaryCohortKind, SalaryMetrics, SkillRecord,
};

/// Role cohorts need at least this many filtered observations for metrics.
pub const MIN_ROLE_SAMPLES: usize = 3;
/// Skill cohorts are noisier; they need more.
pub const MIN_SKILL_SAMPLES: usize = 5;
/// The salary analysis collection keeps this many top cohorts per kind.
const TOP_PAID_LIMIT: usize = 20;

/// Computes the metric set for one cohort, or `None` when the sample is too
/// small to be worth persisting. Input is the already outlier-filtered list.
pub fn compute_metrics(filtered: &[f64], min_samples: usize) -> Option<SalaryMetrics> {
    if filtered.len() < min_samples {
        return None;
    }

    let mut sorted = filtered.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();

    Some(SalaryMetrics {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        mean: sum / count as f64,
        median: quantile(&sorted, 0.5),
        p25: quantile(&sorted, 0.25),
        p75: quantile(&sorted, 0.75),
    })
}

/// Builds the salary analysis collection: the top-20 highest-paid roles and
/// top-20 highest-paid skills (by median) among cohorts that met their
/// minimum sample threshold. Ties break by name ascending.
pub fn build_salary_analysis(
    roles: &BTreeMap<String, RoleRecord>,
    skills: &BTreeMap<String, SkillRecord>,
) -> Vec<SalaryAnalysisEntry> {
    let mut role_entries: Vec<SalaryAnalysisEntry> = roles
        .values()
        .filter_map(|r| {
            r.salary_metrics.as_ref().map(|m| SalaryAnalysisEntry {
                kind: SalaryCohortKind::Role,
                name: r.role_name.clone(),
                metrics: m.clone(),
            })
        })
        .collect();
    let mut skill_entries: Vec<SalaryAnalysisEntry> = skills
        .values()
        .filter_map(|s| {
            s.salary_metrics.as_ref().map(|m| SalaryAnalysisEntry {
                kind: SalaryCohortKind::Skill,
                name: s.skill_name.clone(),
                metrics: m.clone(),
            })
        })
        .collect();

    for entries in [&mut role_entries, &mut skill_entries] {
        entries.sort_by(|a, b| {
            b.metrics
                .median
                .total_cmp(&a.metrics.median)
                .then_with(|| a.name.cmp(&b.name))
        });
        entries.truncate(TOP_PAID_LIMIT);
    }

    role_entries.extend(skill_entries);
    role_entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_below_minimum_is_none() {
        assert!(compute_metrics(&[100_000.0, 110_000.0], 3).is_none());
    }

    #[test]
    fn test_metrics_basic_shape() {
        let m = compute_metrics(&[100_000.0, 110_000.0, 120_000.0], 3).unwrap();
        assert_eq!(m.count, 3);
        assert_eq!(m.min, 100_000.0);
        assert_eq!(m.max, 120_000.0);
        assert_eq!(m.mean, 110_000.0);
        assert_eq!(m.median, 110_000.0);
        assert_eq!(m.p25, 105_000.0);
        assert_eq!(m.p75, 115_000.0);
    }

    #[test]
    fn test_metrics_unsorted_input() {
        let m = compute_metrics(&[120_000.0, 100_000.0, 110_000.0], 3).unwrap();
        assert_eq!(m.min, 100_000.0);
        assert_eq!(m.max, 120_000.0);
        assert_eq!(m.median, 110_000.0);
    }

    #[test]
    fn test_salary_analysis_ranks_by_median_desc() {
        let mut roles = BTreeMap::new();
        for (name, median) in [("A Role", 90_000.0), ("B Role", 150_000.0)] {
            let mut role = RoleRecord::new(name);
            role.salary_metrics = compute_metrics(&[median - 1_000.0, median, median + 1_000.0], 3);
            roles.insert(name.to_string(), role);
        }
        let skills = BTreeMap::new();

        let analysis = build_salary_analysis(&roles, &skills);
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].name, "B Role");
        assert_eq!(analysis[1].name, "A Role");
    }

    #[test]
    fn test_salary_analysis_skips_cohorts_without_metrics() {
        let mut roles = BTreeMap::new();
        roles.insert("Thin".to_string(), RoleRecord::new("Thin"));
        let analysis = build_salary_analysis(&roles, &BTreeMap::new());
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_salary_analysis_caps_at_twenty_per_kind() {
        let mut roles = BTreeMap::new();
        for i in 0..25 {
            let name = format!("Role {i:02}");
            let base = 50_000.0 + i as f64 * 1_000.0;
            let mut role = RoleRecord::new(&name);
            role.salary_metrics = compute_metrics(&[base, base, base], 3);
            roles.insert(name, role);
        }
        let analysis = build_salary_analysis(&roles, &BTreeMap::new());
        assert_eq!(analysis.len(), 20);
        // Highest-paid role survives the cap.
        assert_eq!(analysis[0].name, "Role 24");
    }
}

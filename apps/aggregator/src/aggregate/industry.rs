//! Industry rollup: the single summary record describing the run's labeled
//! industry across all of its roles and skills.

use std::collections::BTreeMap;

use crate::extract::outliers::quantile;
use crate::models::entities::{IndustryRecord, RoleRecord, SkillRecord};

const POPULAR_SKILLS_LIMIT: usize = 10;
const POPULAR_ROLES_LIMIT: usize = 5;
const SALARY_RANGES_LIMIT: usize = 5;
const TOP_PAYING_LIMIT: usize = 5;

/// Builds the industry record from the finalized role and skill maps. Roles
/// and skills must already carry their computed salary metrics.
pub fn rollup(
    label: &str,
    roles: &BTreeMap<String, RoleRecord>,
    skills: &BTreeMap<String, SkillRecord>,
) -> IndustryRecord {
    let mut popular_skills: Vec<(&String, u64)> = skills
        .iter()
        .map(|(name, s)| (name, s.job_postings_count))
        .collect();
    popular_skills.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    popular_skills.truncate(POPULAR_SKILLS_LIMIT);

    let mut popular_roles: Vec<(&String, u64)> = roles
        .iter()
        .map(|(name, r)| (name, r.open_positions_count))
        .collect();
    popular_roles.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    popular_roles.truncate(POPULAR_ROLES_LIMIT);

    let (median_salary, average_salary) = pooled_salary(roles);

    let salary_ranges: Vec<String> = roles
        .values()
        .filter_map(|r| r.salary_range.clone())
        .take(SALARY_RANGES_LIMIT)
        .collect();

    let mut paying: Vec<(&String, f64)> = roles
        .iter()
        .filter_map(|(name, r)| r.salary_metrics.as_ref().map(|m| (name, m.median)))
        .collect();
    paying.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    paying.truncate(TOP_PAYING_LIMIT);

    IndustryRecord {
        industry: label.to_string(),
        roles: roles.keys().cloned().collect(),
        skills: skills.keys().cloned().collect(),
        popular_skills: popular_skills.into_iter().map(|(n, _)| n.clone()).collect(),
        popular_roles: popular_roles.into_iter().map(|(n, _)| n.clone()).collect(),
        median_salary,
        average_salary,
        salary_ranges,
        top_paying_roles: paying.into_iter().map(|(n, _)| n.clone()).collect(),
    }
}

/// Pools every salary signal the roles carry: filtered observations, parsed
/// median strings, and computed cohort medians. Returns (median, mean), or
/// `(None, None)` when no role contributed anything numeric.
fn pooled_salary(roles: &BTreeMap<String, RoleRecord>) -> (Option<f64>, Option<f64>) {
    let mut pool: Vec<f64> = Vec::new();
    for role in roles.values() {
        pool.extend(role.salary_observations.iter().copied());
        if let Some(text) = &role.median_salary {
            if let Some(value) = parse_salary_figure(text) {
                pool.push(value);
            }
        }
        if let Some(metrics) = &role.salary_metrics {
            pool.push(metrics.median);
        }
    }
    pool.retain(|v| v.is_finite());
    if pool.is_empty() {
        return (None, None);
    }

    pool.sort_by(|a, b| a.total_cmp(b));
    let mean = pool.iter().sum::<f64>() / pool.len() as f64;
    (Some(quantile(&pool, 0.5)), Some(mean))
}

/// Strips everything but digits and the decimal point from a raw median
/// string ("$105,000" becomes 105000.0).
fn parse_salary_figure(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

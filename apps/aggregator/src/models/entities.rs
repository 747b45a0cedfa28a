//! Aggregate entity records persisted by the sink. All are keyed by natural
//! name and rebuilt from scratch on every run.

use serde::{Deserialize, Serialize};

use crate::models::posting::JobPosting;

/// Derived salary statistics for one role or skill cohort, computed once at
/// the end of the run from the outlier-filtered observation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryMetrics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
}

/// A standardized role. Keyed by `role_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role_name: String,
    pub industries: Vec<String>,
    pub open_positions_count: u64,
    /// Capped at 10 for storage. First 10 by insertion order, not ranked.
    pub top_hiring_companies: Vec<String>,
    pub required_skills: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_metrics: Option<SalaryMetrics>,
    /// Working state for metric computation. Not persisted.
    #[serde(skip)]
    pub salary_observations: Vec<f64>,
}

impl RoleRecord {
    pub fn new(role_name: &str) -> Self {
        Self {
            role_name: role_name.to_string(),
            industries: Vec::new(),
            open_positions_count: 0,
            top_hiring_companies: Vec::new(),
            required_skills: Vec::new(),
            description: String::new(),
            salary_range: None,
            median_salary: None,
            salary_metrics: None,
            salary_observations: Vec::new(),
        }
    }
}

/// A normalized skill. Keyed by `skill_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub skill_name: String,
    pub industries: Vec<String>,
    pub job_postings_count: u64,
    /// Capped at 10 for storage. First 10 by insertion order, not ranked.
    pub related_roles: Vec<String>,
    pub description: String,
    pub learning_resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_metrics: Option<SalaryMetrics>,
    #[serde(skip)]
    pub salary_observations: Vec<f64>,
}

impl SkillRecord {
    pub fn new(skill_name: &str) -> Self {
        Self {
            skill_name: skill_name.to_string(),
            industries: Vec::new(),
            job_postings_count: 0,
            related_roles: Vec::new(),
            description: String::new(),
            learning_resources: Vec::new(),
            salary_metrics: None,
            salary_observations: Vec::new(),
        }
    }
}

/// A hiring company. Keyed by `name`. Enrichment fields come from Glassdoor
/// rows only and stay `None` when the company appears solely on LinkedIn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub industry: String,
    pub job_postings: u64,
    pub roles: Vec<String>,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl CompanyRecord {
    pub fn new(name: &str, industry: &str) -> Self {
        Self {
            name: name.to_string(),
            industry: industry.to_string(),
            job_postings: 0,
            roles: Vec::new(),
            locations: Vec::new(),
            revenue: None,
            size: None,
            company_type: None,
            rating: None,
            website: None,
        }
    }
}

/// Industry-level rollup. Keyed by `industry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryRecord {
    pub industry: String,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    /// Top 10 skills by job_postings_count.
    pub popular_skills: Vec<String>,
    /// Top 5 roles by open_positions_count.
    pub popular_roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_salary: Option<f64>,
    /// Up to 5 representative raw salary range strings.
    pub salary_ranges: Vec<String>,
    /// Top 5 in-industry roles by computed median salary.
    pub top_paying_roles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryCohortKind {
    Role,
    Skill,
}

impl SalaryCohortKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryCohortKind::Role => "role",
            SalaryCohortKind::Skill => "skill",
        }
    }
}

/// One row of the salary analysis collection: the metrics of a role or skill
/// cohort that met the minimum sample threshold. Keyed by kind + name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryAnalysisEntry {
    pub kind: SalaryCohortKind,
    pub name: String,
    pub metrics: SalaryMetrics,
}

/// The complete output of one pipeline run, handed to the sink as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub industry: IndustryRecord,
    pub roles: Vec<RoleRecord>,
    pub skills: Vec<SkillRecord>,
    pub companies: Vec<CompanyRecord>,
    pub job_postings: Vec<JobPosting>,
    pub salary_analysis: Vec<SalaryAnalysisEntry>,
}

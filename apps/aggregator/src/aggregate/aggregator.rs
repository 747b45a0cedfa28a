//! The Aggregator folds per-record facts into cumulative entity maps keyed
//! by natural name, then finalizes them into a [`Snapshot`].
//!
//! Counts and set unions are commutative per key, so source processing order
//! does not change final values — with two documented exceptions:
//! `top_hiring_companies` and `related_roles` are capped at 10 by insertion
//! order, not frequency, so file order decides which 10 survive.

use std::collections::BTreeMap;

use crate::aggregate::industry;
use crate::aggregate::salary_stats::{
    build_salary_analysis, compute_metrics, MIN_ROLE_SAMPLES, MIN_SKILL_SAMPLES,
};
use crate::extract::outliers::filter_cohort;
use crate::extract::PostingFact;
use crate::models::entities::{CompanyRecord, RoleRecord, SkillRecord, Snapshot};
use crate::models::posting::{JobPosting, RawPosting, Source};

/// Storage cap for top_hiring_companies and related_roles.
const STORAGE_CAP: usize = 10;
/// Skills quoted in templated role descriptions.
const DESCRIPTION_SKILLS: usize = 3;

pub struct Aggregator {
    industry_label: String,
    companies: BTreeMap<String, CompanyRecord>,
    roles: BTreeMap<String, RoleRecord>,
    skills: BTreeMap<String, SkillRecord>,
    postings: Vec<JobPosting>,
}

impl Aggregator {
    pub fn new(industry_label: &str) -> Self {
        Self {
            industry_label: industry_label.to_string(),
            companies: BTreeMap::new(),
            roles: BTreeMap::new(),
            skills: BTreeMap::new(),
            postings: Vec::new(),
        }
    }

    pub fn posting_count(&self) -> usize {
        self.postings.len()
    }

    /// Folds one extracted posting into the cumulative maps.
    pub fn fold(&mut self, posting: &RawPosting, fact: &PostingFact) {
        let industry = posting
            .company_industry
            .clone()
            .unwrap_or_else(|| self.industry_label.clone());

        self.fold_company(posting, fact, &industry);
        self.fold_role(posting, fact, &industry);
        self.fold_skills(posting, fact, &industry);

        self.postings.push(JobPosting {
            title: posting.title.clone(),
            company: posting.company.clone(),
            role: fact.role.clone(),
            location: posting.location.clone(),
            description: posting.description.clone(),
            skills_required: fact.skills.clone(),
            url: posting.url.clone(),
            posted_date: posting.posted_date,
            source: posting.source,
            industry,
            salary_range: match posting.source {
                Source::Glassdoor => posting.salary_text.clone(),
                Source::LinkedIn => None,
            },
            median_salary: posting.median_salary_text.clone(),
        });
    }

    fn fold_company(&mut self, posting: &RawPosting, fact: &PostingFact, industry: &str) {
        let company = self
            .companies
            .entry(posting.company.clone())
            .or_insert_with(|| CompanyRecord::new(&posting.company, industry));

        company.job_postings += 1;
        push_unique(&mut company.roles, &fact.role);
        if !posting.location.is_empty() {
            push_unique(&mut company.locations, &posting.location);
        }
        // Enrichment is first-write-wins; later rows never downgrade it.
        or_assign(&mut company.revenue, &posting.company_revenue);
        or_assign(&mut company.size, &posting.company_size);
        or_assign(&mut company.company_type, &posting.company_type);
        or_assign(&mut company.rating, &posting.company_rating);
        or_assign(&mut company.website, &posting.company_website);
    }

    fn fold_role(&mut self, posting: &RawPosting, fact: &PostingFact, industry: &str) {
        let role = self
            .roles
            .entry(fact.role.clone())
            .or_insert_with(|| RoleRecord::new(&fact.role));

        role.open_positions_count += 1;
        push_unique(&mut role.industries, industry);
        push_unique(&mut role.top_hiring_companies, &posting.company);
        for skill in &fact.skills {
            push_unique(&mut role.required_skills, skill);
        }
        if let Some(salary) = fact.salary {
            role.salary_observations.push(salary);
        }
        if posting.source == Source::Glassdoor {
            if posting.salary_text.is_some() {
                role.salary_range = posting.salary_text.clone();
            }
            if posting.median_salary_text.is_some() {
                role.median_salary = posting.median_salary_text.clone();
            }
        }
    }

    fn fold_skills(&mut self, _posting: &RawPosting, fact: &PostingFact, industry: &str) {
        for skill_name in &fact.skills {
            let skill = self
                .skills
                .entry(skill_name.clone())
                .or_insert_with(|| SkillRecord::new(skill_name));

            skill.job_postings_count += 1;
            push_unique(&mut skill.industries, industry);
            push_unique(&mut skill.related_roles, &fact.role);
            if let Some(salary) = fact.salary {
                skill.salary_observations.push(salary);
            }
        }
    }

    /// Key-wise merge of another aggregator (the other source's batch):
    /// counts sum, sets union, observation lists concatenate.
    pub fn merge(&mut self, other: Aggregator) {
        for (name, other_role) in other.roles {
            match self.roles.get_mut(&name) {
                Some(role) => {
                    role.open_positions_count += other_role.open_positions_count;
                    extend_unique(&mut role.industries, &other_role.industries);
                    extend_unique(&mut role.top_hiring_companies, &other_role.top_hiring_companies);
                    extend_unique(&mut role.required_skills, &other_role.required_skills);
                    role.salary_observations
                        .extend(other_role.salary_observations);
                    if other_role.salary_range.is_some() {
                        role.salary_range = other_role.salary_range;
                    }
                    if other_role.median_salary.is_some() {
                        role.median_salary = other_role.median_salary;
                    }
                }
                None => {
                    self.roles.insert(name, other_role);
                }
            }
        }

        for (name, other_skill) in other.skills {
            match self.skills.get_mut(&name) {
                Some(skill) => {
                    skill.job_postings_count += other_skill.job_postings_count;
                    extend_unique(&mut skill.industries, &other_skill.industries);
                    extend_unique(&mut skill.related_roles, &other_skill.related_roles);
                    skill
                        .salary_observations
                        .extend(other_skill.salary_observations);
                }
                None => {
                    self.skills.insert(name, other_skill);
                }
            }
        }

        for (name, other_company) in other.companies {
            match self.companies.get_mut(&name) {
                Some(company) => {
                    company.job_postings += other_company.job_postings;
                    extend_unique(&mut company.roles, &other_company.roles);
                    extend_unique(&mut company.locations, &other_company.locations);
                    or_assign(&mut company.revenue, &other_company.revenue);
                    or_assign(&mut company.size, &other_company.size);
                    or_assign(&mut company.company_type, &other_company.company_type);
                    or_assign(&mut company.rating, &other_company.rating);
                    or_assign(&mut company.website, &other_company.website);
                }
                None => {
                    self.companies.insert(name, other_company);
                }
            }
        }

        self.postings.extend(other.postings);
    }

    /// Finalizes the run: per-cohort outlier filtering, metric computation,
    /// templated descriptions, storage caps, industry rollup, salary
    /// analysis.
    pub fn finish(mut self) -> Snapshot {
        for role in self.roles.values_mut() {
            let filtered = filter_cohort(&role.salary_observations);
            role.salary_metrics = compute_metrics(&filtered, MIN_ROLE_SAMPLES);
            role.salary_observations = filtered;
            role.description = role_description(&role.role_name, &role.required_skills);
            role.top_hiring_companies.truncate(STORAGE_CAP);
        }

        for skill in self.skills.values_mut() {
            let filtered = filter_cohort(&skill.salary_observations);
            skill.salary_metrics = compute_metrics(&filtered, MIN_SKILL_SAMPLES);
            skill.salary_observations = filtered;
            let industry = skill
                .industries
                .first()
                .cloned()
                .unwrap_or_else(|| self.industry_label.clone());
            skill.description = skill_description(&skill.skill_name, &industry);
            skill.related_roles.truncate(STORAGE_CAP);
        }

        let industry = industry::rollup(&self.industry_label, &self.roles, &self.skills);
        let salary_analysis = build_salary_analysis(&self.roles, &self.skills);

        Snapshot {
            industry,
            roles: self.roles.into_values().collect(),
            skills: self.skills.into_values().collect(),
            companies: self.companies.into_values().collect(),
            job_postings: self.postings,
            salary_analysis,
        }
    }
}

fn role_description(role_name: &str, required_skills: &[String]) -> String {
    let top: Vec<&str> = required_skills
        .iter()
        .take(DESCRIPTION_SKILLS)
        .map(String::as_str)
        .collect();
    let skills = if top.is_empty() {
        "technical tasks".to_string()
    } else {
        top.join(", ")
    };
    format!("{role_name}s are responsible for {skills} and other technical tasks.")
}

fn skill_description(skill_name: &str, industry: &str) -> String {
    let mut chars = skill_name.chars();
    let display = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{display} is a technical skill used in {industry}.")
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

fn extend_unique(list: &mut Vec<String>, values: &[String]) {
    for value in values {
        push_unique(list, value);
    }
}

fn or_assign(slot: &mut Option<String>, value: &Option<String>) {
    if slot.is_none() && value.is_some() {
        *slot = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn posting(title: &str, company: &str, source: Source) -> RawPosting {
        RawPosting {
            title: title.to_string(),
            company: company.to_string(),
            location: "Austin, TX".to_string(),
            description: "desc".to_string(),
            url: format!("http://example.com/{company}/{title}"),
            posted_date: Utc::now(),
            source,
            company_industry: None,
            company_revenue: None,
            company_size: None,
            company_type: None,
            company_rating: None,
            company_website: None,
            salary_text: None,
            median_salary_text: None,
        }
    }

    fn fact(role: &str, skills: &[&str], salary: Option<f64>) -> PostingFact {
        PostingFact {
            role: role.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary,
        }
    }

    #[test]
    fn test_counts_increment_per_posting() {
        let mut agg = Aggregator::new("Tech");
        for i in 0..3 {
            agg.fold(
                &posting("SWE", &format!("Co{i}"), Source::LinkedIn),
                &fact("Software Engineer", &["python"], None),
            );
        }
        let snap = agg.finish();
        let role = &snap.roles[0];
        assert_eq!(role.open_positions_count, 3);
        assert_eq!(snap.skills[0].job_postings_count, 3);
        assert_eq!(snap.companies.len(), 3);
    }

    #[test]
    fn test_sets_grow_by_union() {
        let mut agg = Aggregator::new("Tech");
        agg.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &["python", "aws"], None),
        );
        agg.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &["python", "react"], None),
        );
        let snap = agg.finish();
        let role = &snap.roles[0];
        assert_eq!(role.required_skills, vec!["python", "aws", "react"]);
        assert_eq!(role.top_hiring_companies, vec!["Acme"]);
    }

    #[test]
    fn test_storage_cap_keeps_first_ten_by_insertion() {
        let mut agg = Aggregator::new("Tech");
        for i in 0..15 {
            agg.fold(
                &posting("SWE", &format!("Company {i:02}"), Source::LinkedIn),
                &fact("Software Engineer", &[], None),
            );
        }
        let snap = agg.finish();
        let companies = &snap.roles[0].top_hiring_companies;
        assert_eq!(companies.len(), 10);
        // Insertion order, not ranked.
        assert_eq!(companies[0], "Company 00");
        assert_eq!(companies[9], "Company 09");
    }

    #[test]
    fn test_merge_is_commutative_for_counts_and_sets() {
        let build_a = || {
            let mut a = Aggregator::new("Tech");
            a.fold(
                &posting("SWE", "Acme", Source::LinkedIn),
                &fact("Software Engineer", &["python"], Some(100_000.0)),
            );
            a
        };
        let build_b = || {
            let mut b = Aggregator::new("Tech");
            b.fold(
                &posting("SWE II", "Initech", Source::Glassdoor),
                &fact("Software Engineer", &["python", "go"], Some(120_000.0)),
            );
            b
        };

        let mut ab = build_a();
        ab.merge(build_b());
        let mut ba = build_b();
        ba.merge(build_a());

        let snap_ab = ab.finish();
        let snap_ba = ba.finish();

        let role_ab = &snap_ab.roles[0];
        let role_ba = &snap_ba.roles[0];
        assert_eq!(role_ab.open_positions_count, role_ba.open_positions_count);
        let mut skills_ab = role_ab.required_skills.clone();
        let mut skills_ba = role_ba.required_skills.clone();
        skills_ab.sort();
        skills_ba.sort();
        assert_eq!(skills_ab, skills_ba);
        assert_eq!(
            snap_ab.skills[0].job_postings_count,
            snap_ba.skills[0].job_postings_count
        );
    }

    #[test]
    fn test_merge_concatenates_salary_observations() {
        let mut a = Aggregator::new("Tech");
        a.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &[], Some(100_000.0)),
        );
        let mut b = Aggregator::new("Tech");
        for _ in 0..2 {
            b.fold(
                &posting("SWE", "Initech", Source::Glassdoor),
                &fact("Software Engineer", &[], Some(110_000.0)),
            );
        }
        a.merge(b);
        let snap = a.finish();
        let metrics = snap.roles[0].salary_metrics.as_ref().unwrap();
        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.min, 100_000.0);
    }

    #[test]
    fn test_glassdoor_salary_strings_carried_onto_role() {
        let mut agg = Aggregator::new("Tech");
        let mut p = posting("Data Scientist", "Initech", Source::Glassdoor);
        p.salary_text = Some("$90K - $120K".to_string());
        p.median_salary_text = Some("$105,000".to_string());
        agg.fold(&p, &fact("Data Scientist", &[], None));

        let snap = agg.finish();
        let role = &snap.roles[0];
        assert_eq!(role.salary_range.as_deref(), Some("$90K - $120K"));
        assert_eq!(role.median_salary.as_deref(), Some("$105,000"));
    }

    #[test]
    fn test_role_description_uses_top_three_skills() {
        let mut agg = Aggregator::new("Tech");
        agg.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &["python", "aws", "react", "go"], None),
        );
        let snap = agg.finish();
        assert_eq!(
            snap.roles[0].description,
            "Software Engineers are responsible for python, aws, react and other technical tasks."
        );
    }

    #[test]
    fn test_role_description_without_skills() {
        let mut agg = Aggregator::new("Tech");
        agg.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &[], None),
        );
        let snap = agg.finish();
        assert_eq!(
            snap.roles[0].description,
            "Software Engineers are responsible for technical tasks and other technical tasks."
        );
    }

    #[test]
    fn test_company_industry_from_glassdoor_row() {
        let mut agg = Aggregator::new("Tech");
        let mut p = posting("SWE", "Initech", Source::Glassdoor);
        p.company_industry = Some("Fintech".to_string());
        agg.fold(&p, &fact("Software Engineer", &["python"], None));

        let snap = agg.finish();
        assert_eq!(snap.companies[0].industry, "Fintech");
        assert_eq!(snap.roles[0].industries, vec!["Fintech"]);
        assert_eq!(snap.skills[0].industries, vec!["Fintech"]);
    }

    #[test]
    fn test_job_postings_collected() {
        let mut agg = Aggregator::new("Tech");
        agg.fold(
            &posting("SWE", "Acme", Source::LinkedIn),
            &fact("Software Engineer", &["python"], None),
        );
        let snap = agg.finish();
        assert_eq!(snap.job_postings.len(), 1);
        assert_eq!(snap.job_postings[0].role, "Software Engineer");
        assert_eq!(snap.job_postings[0].industry, "Tech");
    }
}

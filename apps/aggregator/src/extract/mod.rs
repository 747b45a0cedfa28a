//! Text-to-structured-signal extraction: titles, skills, salaries.

pub mod outliers;
pub mod salary;
pub mod skills;
pub mod title;
pub mod vocab;

use crate::models::posting::RawPosting;

/// All extraction components, constructed once per run. Each is stateless
/// after construction; the structs only hold compiled patterns.
pub struct Extractors {
    pub title: title::TitleStandardizer,
    pub skills: skills::SkillExtractor,
    pub salary: salary::SalaryNormalizer,
}

impl Default for Extractors {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractors {
    pub fn new() -> Self {
        Self {
            title: title::TitleStandardizer::new(),
            skills: skills::SkillExtractor::new(),
            salary: salary::SalaryNormalizer::new(),
        }
    }

    /// Runs all three extractors over one posting, producing the per-record
    /// fact the aggregator folds.
    pub fn extract(&self, posting: &RawPosting) -> PostingFact {
        PostingFact {
            role: self.title.standardize(&posting.title),
            skills: self.skills.extract(&posting.description),
            salary: posting
                .salary_text
                .as_deref()
                .and_then(|s| self.salary.normalize(s)),
        }
    }
}

/// Structured signal extracted from one raw posting.
#[derive(Debug, Clone)]
pub struct PostingFact {
    pub role: String,
    pub skills: Vec<String>,
    pub salary: Option<f64>,
}

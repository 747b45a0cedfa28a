use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which scrape the row came from. Drives column mapping and enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    LinkedIn,
    Glassdoor,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::LinkedIn => "LinkedIn",
            Source::Glassdoor => "Glassdoor",
        }
    }
}

/// One scraped row after source-specific column mapping, before extraction.
#[derive(Debug, Clone)]
pub struct RawPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub posted_date: DateTime<Utc>,
    pub source: Source,
    /// Glassdoor enrichment; always `None` for LinkedIn rows.
    pub company_industry: Option<String>,
    pub company_revenue: Option<String>,
    pub company_size: Option<String>,
    pub company_type: Option<String>,
    pub company_rating: Option<String>,
    pub company_website: Option<String>,
    /// Raw salary text as scraped (range or single figure).
    pub salary_text: Option<String>,
    /// Raw median salary text (Glassdoor only).
    pub median_salary_text: Option<String>,
}

impl RawPosting {
    /// A posting missing title, company, or description carries no usable
    /// signal and is dropped before extraction.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.company.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

/// A fully-extracted posting as persisted to the JobPostings collection.
/// Natural key: title + company + url.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub url: String,
    pub posted_date: DateTime<Utc>,
    pub source: Source,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_salary: Option<String>,
}

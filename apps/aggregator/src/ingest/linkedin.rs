//! LinkedIn CSV adapter. Static column mapping; salary is present only in
//! some exports, so the column is optional.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::errors::PipelineError;
use crate::ingest::{non_blank, parse_posted_date};
use crate::models::posting::{RawPosting, Source};

#[derive(Debug, Deserialize)]
struct LinkedInRow {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    job_url: String,
    #[serde(default)]
    job_description: String,
    #[serde(default)]
    date_loaded: String,
    #[serde(default)]
    salary: Option<String>,
}

pub fn load(path: &Path) -> Result<Vec<RawPosting>, PipelineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut postings = Vec::new();
    let mut skipped = 0usize;

    for (idx, record) in reader.deserialize::<LinkedInRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!("linkedin row {idx} unreadable, skipping: {e}");
                skipped += 1;
                continue;
            }
        };

        let posting = RawPosting {
            title: row.title.trim().to_string(),
            company: row.company.trim().to_string(),
            location: row.location.trim().to_string(),
            description: row.job_description.trim().to_string(),
            url: row.job_url.trim().to_string(),
            posted_date: parse_posted_date(&row.date_loaded),
            source: Source::LinkedIn,
            company_industry: None,
            company_revenue: None,
            company_size: None,
            company_type: None,
            company_rating: None,
            company_website: None,
            salary_text: non_blank(row.salary),
            median_salary_text: None,
        };

        if posting.is_complete() {
            postings.push(posting);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!("linkedin: skipped {skipped} incomplete or unreadable rows");
    }
    Ok(postings)
}

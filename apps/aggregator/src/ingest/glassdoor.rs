//! Glassdoor CSV adapter. Richer schema than LinkedIn: company enrichment
//! fields and two salary columns (estimated range and median). No posted
//! date in the export, so every row gets ingestion time.

use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::errors::PipelineError;
use crate::ingest::non_blank;
use crate::models::posting::{RawPosting, Source};

#[derive(Debug, Deserialize)]
struct GlassdoorRow {
    #[serde(default)]
    job_title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    job_location: String,
    #[serde(default)]
    job_overview: String,
    #[serde(default)]
    job_application_link: String,
    #[serde(default)]
    company_industry: Option<String>,
    #[serde(default)]
    company_revenue: Option<String>,
    #[serde(default)]
    company_size: Option<String>,
    #[serde(default)]
    company_type: Option<String>,
    #[serde(default)]
    company_rating: Option<String>,
    #[serde(default)]
    company_website: Option<String>,
    #[serde(default)]
    pay_range_glassdoor_est: Option<String>,
    #[serde(default)]
    pay_median_glassdoor: Option<String>,
}

pub fn load(path: &Path) -> Result<Vec<RawPosting>, PipelineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut postings = Vec::new();
    let mut skipped = 0usize;

    for (idx, record) in reader.deserialize::<GlassdoorRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!("glassdoor row {idx} unreadable, skipping: {e}");
                skipped += 1;
                continue;
            }
        };

        let posting = RawPosting {
            title: row.job_title.trim().to_string(),
            company: row.company_name.trim().to_string(),
            location: row.job_location.trim().to_string(),
            description: row.job_overview.trim().to_string(),
            url: row.job_application_link.trim().to_string(),
            posted_date: Utc::now(),
            source: Source::Glassdoor,
            company_industry: non_blank(row.company_industry),
            company_revenue: non_blank(row.company_revenue),
            company_size: non_blank(row.company_size),
            company_type: non_blank(row.company_type),
            company_rating: non_blank(row.company_rating),
            company_website: non_blank(row.company_website),
            salary_text: non_blank(row.pay_range_glassdoor_est),
            median_salary_text: non_blank(row.pay_median_glassdoor),
        };

        if posting.is_complete() {
            postings.push(posting);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!("glassdoor: skipped {skipped} incomplete or unreadable rows");
    }
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "job_title,company_name,job_location,job_overview,job_application_link,\
company_industry,company_revenue,company_size,company_type,company_rating,company_website,\
pay_range_glassdoor_est,pay_median_glassdoor";

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_load_maps_columns_and_enrichment() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             Data Scientist,Initech,Denver,Python and SQL daily,http://apply,\
Information Technology,$1B,5000+,Public,4.1,https://initech.example,\
\"$90K - $120K\",\"$105,000\"\n"
        ));
        let postings = load(file.path()).unwrap();
        assert_eq!(postings.len(), 1);
        let p = &postings[0];
        assert_eq!(p.title, "Data Scientist");
        assert_eq!(p.source, Source::Glassdoor);
        assert_eq!(p.company_industry.as_deref(), Some("Information Technology"));
        assert_eq!(p.company_rating.as_deref(), Some("4.1"));
        assert_eq!(p.salary_text.as_deref(), Some("$90K - $120K"));
        assert_eq!(p.median_salary_text.as_deref(), Some("$105,000"));
    }

    #[test]
    fn test_blank_enrichment_becomes_none() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             Data Scientist,Initech,Denver,overview text,http://apply,,,,,,,,\n"
        ));
        let postings = load(file.path()).unwrap();
        let p = &postings[0];
        assert_eq!(p.company_industry, None);
        assert_eq!(p.salary_text, None);
        assert_eq!(p.median_salary_text, None);
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             ,Initech,Denver,overview,http://a,,,,,,,,\n\
             Data Scientist,Initech,Denver,,http://b,,,,,,,,\n"
        ));
        let postings = load(file.path()).unwrap();
        assert!(postings.is_empty());
    }
}

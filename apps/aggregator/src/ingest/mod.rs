//! Source adapters: per-source CSV column mapping into [`RawPosting`]s.
//!
//! Failure policy follows the pipeline's tolerance for noisy scrape output:
//! a malformed row is skipped with a warning, a missing or corrupt file
//! contributes an empty batch, and only the total absence of usable input is
//! a hard error.

pub mod glassdoor;
pub mod linkedin;

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{error, info};

use crate::errors::PipelineError;
use crate::models::posting::RawPosting;

/// Best-effort `%Y-%m-%d` parse; anything else falls back to ingestion time.
fn parse_posted_date(raw: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
}

/// Empty or whitespace-only CSV cells become `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loads both sources. Either file may fail independently; both failing is
/// fatal because there is nothing left to aggregate.
pub fn load_all(
    linkedin_path: &Path,
    glassdoor_path: &Path,
) -> Result<Vec<RawPosting>, PipelineError> {
    let linkedin = linkedin::load(linkedin_path);
    let glassdoor = glassdoor::load(glassdoor_path);

    if let (Err(li), Err(gd)) = (&linkedin, &glassdoor) {
        return Err(PipelineError::NoUsableInput(format!(
            "linkedin: {li}; glassdoor: {gd}"
        )));
    }

    let mut postings = Vec::new();
    for (label, result) in [("LinkedIn", linkedin), ("Glassdoor", glassdoor)] {
        match result {
            Ok(batch) => {
                info!("{label} contributed {} postings", batch.len());
                postings.extend(batch);
            }
            Err(e) => {
                error!("{label} source failed, continuing without it: {e}");
            }
        }
    }
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_posted_date_valid() {
        let dt = parse_posted_date("2025-03-14");
        assert_eq!(dt.date_naive().to_string(), "2025-03-14");
    }

    #[test]
    fn test_parse_posted_date_garbage_falls_back_to_now() {
        let before = Utc::now();
        let dt = parse_posted_date("yesterday-ish");
        assert!(dt >= before);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" x ".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_both_sources_missing_is_fatal() {
        let result = load_all(
            Path::new("/nonexistent/linkedin.csv"),
            Path::new("/nonexistent/glassdoor.csv"),
        );
        assert!(matches!(result, Err(PipelineError::NoUsableInput(_))));
    }

    #[test]
    fn test_one_source_missing_degrades() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title,company,location,job_url,job_description,date_loaded"
        )
        .unwrap();
        writeln!(
            file,
            "Engineer,Acme,NYC,http://x,Python required,2025-01-01"
        )
        .unwrap();

        let postings = load_all(file.path(), Path::new("/nonexistent/glassdoor.csv")).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].company, "Acme");
    }
}

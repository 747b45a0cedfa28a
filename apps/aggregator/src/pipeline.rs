//! End-to-end run orchestration: ingest, extract, aggregate, export, sink.

use tracing::info;

use crate::aggregate::Aggregator;
use crate::config::Args;
use crate::errors::PipelineError;
use crate::extract::Extractors;
use crate::ingest;
use crate::models::entities::Snapshot;
use crate::models::posting::{RawPosting, Source};
use crate::sink::Sink;

/// Extracts and aggregates a batch of postings into a finished snapshot.
/// Each source is folded into its own accumulator and the two are merged,
/// so adding a source later never reorders existing fold logic.
pub fn build_snapshot(postings: &[RawPosting], industry_label: &str) -> Snapshot {
    let extractors = Extractors::new();

    let mut linkedin = Aggregator::new(industry_label);
    let mut glassdoor = Aggregator::new(industry_label);
    for posting in postings {
        let fact = extractors.extract(posting);
        match posting.source {
            Source::LinkedIn => linkedin.fold(posting, &fact),
            Source::Glassdoor => glassdoor.fold(posting, &fact),
        }
    }

    info!(
        "aggregating {} linkedin + {} glassdoor postings",
        linkedin.posting_count(),
        glassdoor.posting_count()
    );
    linkedin.merge(glassdoor);
    linkedin.finish()
}

/// Runs the whole pipeline. `sink` is `None` on a dry run; export is skipped
/// via the flag, not the sink.
pub async fn run(args: &Args, sink: Option<&dyn Sink>) -> Result<Snapshot, PipelineError> {
    let postings = ingest::load_all(&args.linkedin, &args.glassdoor)?;
    if postings.is_empty() {
        return Err(PipelineError::NoUsableInput(
            "both sources loaded but no complete postings remained".to_string(),
        ));
    }

    let snapshot = build_snapshot(&postings, &args.industry);
    info!(
        "snapshot built: {} roles, {} skills, {} companies, {} postings",
        snapshot.roles.len(),
        snapshot.skills.len(),
        snapshot.companies.len(),
        snapshot.job_postings.len()
    );

    if args.skip_export {
        info!("export skipped by flag");
    } else {
        crate::export::write_all(&args.out_dir, &snapshot)?;
    }

    match sink {
        Some(sink) => sink.replace_all(&snapshot).await?,
        None => info!("dry run: database untouched"),
    }

    Ok(snapshot)
}

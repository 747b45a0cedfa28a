use thiserror::Error;

/// Pipeline-level error type. Per-record problems (malformed rows,
/// unparseable salaries or dates) never surface here; they degrade to
/// skipped records or absent fields. These variants are the failures worth
/// stopping or logging a whole phase for.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Both source files failed to load. There is nothing to aggregate.
    #[error("no usable input: {0}")]
    NoUsableInput(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

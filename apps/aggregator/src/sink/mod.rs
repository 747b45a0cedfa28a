//! Persistence seam. The pipeline finishes with one [`Snapshot`] and hands
//! it to a `Sink`; the default backend is Postgres, and tests swap in
//! `MemorySink` without touching pipeline code.

use async_trait::async_trait;

use crate::errors::PipelineError;
use crate::models::entities::Snapshot;

pub mod memory;
pub mod postgres;

pub use memory::MemorySink;
pub use postgres::PgSink;

/// Atomically replaces all persisted collections with the snapshot's
/// contents. Each run is a full rebuild; partial writes must not survive a
/// failure.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn replace_all(&self, snapshot: &Snapshot) -> Result<(), PipelineError>;
}

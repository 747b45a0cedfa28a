//! In-memory sink for tests and dry runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::PipelineError;
use crate::models::entities::Snapshot;
use crate::sink::Sink;

#[derive(Default)]
pub struct MemorySink {
    stored: Mutex<Option<Snapshot>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Snapshot> {
        self.stored.lock().unwrap().take()
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn replace_all(&self, snapshot: &Snapshot) -> Result<(), PipelineError> {
        *self.stored.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

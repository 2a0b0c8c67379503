use std::sync::Mutex;

use serde::Serialize;

use super::domain::{AuditId, AuditRecord};

/// Storage abstraction so the ingest service can be exercised in isolation.
pub trait AuditRepository: Send + Sync {
    /// Replace the record with the same identity, or append a new one.
    fn upsert(&self, record: AuditRecord) -> Result<AuditRecord, RepositoryError>;
    fn fetch(&self, id: &AuditId) -> Result<Option<AuditRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<AuditRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Insertion-ordered in-memory store. The engine provides no locking beyond
/// the interior mutex; callers serialize ingests for the same identity.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AuditRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<AuditRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl AuditRepository for InMemoryAuditStore {
    fn upsert(&self, record: AuditRecord) -> Result<AuditRecord, RepositoryError> {
        let mut records = self.lock()?;
        match records
            .iter_mut()
            .find(|existing| existing.submission.id == record.submission.id)
        {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(record)
    }

    fn fetch(&self, id: &AuditId) -> Result<Option<AuditRecord>, RepositoryError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|record| &record.submission.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<AuditRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }
}

/// Sanitized per-record summary for API listings.
#[derive(Debug, Clone, Serialize)]
pub struct AuditStatusView {
    pub id: AuditId,
    pub name: String,
    pub status: &'static str,
    pub rating: &'static str,
    pub gross_intensity: f64,
}

impl AuditStatusView {
    pub fn from_record(record: &AuditRecord) -> Self {
        Self {
            id: record.submission.id.clone(),
            name: record.submission.name.clone(),
            status: record.submission.status.label(),
            rating: record.metrics.rating.label(),
            gross_intensity: record.metrics.gross_intensity,
        }
    }
}

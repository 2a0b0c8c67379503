use std::sync::Arc;

use chrono::{Datelike, Local};
use tracing::{debug, info};

use super::classification::classify;
use super::domain::{AuditId, AuditRecord, AuditSubmission, DerivedMetrics};
use super::metrics::derive_intensity;
use super::normalizer::{normalized_energy_kwh, total_annual_cost};
use super::repository::{AuditRepository, RepositoryError};
use super::technical::{review_submission, TechnicalReview};
use super::validation::{validate, ValidationReport};

/// Single-pass ingestion pipeline: validate, derive metrics, classify,
/// commit. Either all three stages complete and the full record joins the
/// store, or nothing is written.
pub struct AuditIngestService<R> {
    repository: Arc<R>,
}

/// Result of one ingestion pass.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// All stages completed; the returned record is what the store now holds.
    Committed(AuditRecord),
    /// Validation failed; the full error map is returned and no commit ran.
    Rejected(ValidationReport),
}

/// Error raised by the ingest service.
#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl<R> AuditIngestService<R>
where
    R: AuditRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Run the full pipeline for one candidate submission.
    pub fn ingest(&self, submission: AuditSubmission) -> Result<IngestOutcome, AuditServiceError> {
        let report = validate(&submission, current_year());
        if !report.is_valid() {
            debug!(
                audit_id = %submission.id.0,
                errors = report.errors.len(),
                "audit submission rejected"
            );
            return Ok(IngestOutcome::Rejected(report));
        }

        let record = compute_record(submission);
        let committed = self.repository.upsert(record)?;
        info!(
            audit_id = %committed.submission.id.0,
            rating = committed.metrics.rating.label(),
            epi = committed.metrics.gross_intensity,
            "audit committed"
        );

        Ok(IngestOutcome::Committed(committed))
    }

    pub fn get(&self, id: &AuditId) -> Result<AuditRecord, AuditServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<AuditRecord>, AuditServiceError> {
        Ok(self.repository.list()?)
    }

    /// Live sub-check status for a form collaborator, without saving.
    pub fn technical_review(&self, submission: &AuditSubmission) -> TechnicalReview {
        review_submission(submission)
    }
}

/// Derive fresh metrics for a validated submission. The engine owns every
/// field of `DerivedMetrics`; any previously displayed values are discarded.
pub(crate) fn compute_record(submission: AuditSubmission) -> AuditRecord {
    let total_kwh = normalized_energy_kwh(&submission.utilities);
    let total_cost = total_annual_cost(&submission.utilities);
    let figures = derive_intensity(
        total_kwh,
        total_cost,
        submission.gross_floor_area,
        submission.exclusions.as_ref(),
    );
    let rating = classify(
        figures.gross_intensity,
        submission.benchmark_intensity.unwrap_or(0.0),
    );

    AuditRecord {
        submission,
        metrics: DerivedMetrics {
            gross_intensity: figures.gross_intensity,
            net_intensity: figures.net_intensity,
            cost_intensity: figures.cost_intensity,
            rating,
        },
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

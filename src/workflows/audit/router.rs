use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AuditId, AuditSubmission};
use super::repository::{AuditRepository, AuditStatusView, RepositoryError};
use super::service::{AuditIngestService, AuditServiceError, IngestOutcome};

/// Router builder exposing HTTP endpoints for ingestion and live review.
pub fn audit_router<R>(service: Arc<AuditIngestService<R>>) -> Router
where
    R: AuditRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/audits",
            get(list_handler::<R>).post(ingest_handler::<R>),
        )
        .route("/api/v1/audits/:audit_id", get(fetch_handler::<R>))
        .route(
            "/api/v1/audits/technical-review",
            post(technical_review_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn ingest_handler<R>(
    State(service): State<Arc<AuditIngestService<R>>>,
    axum::Json(submission): axum::Json<AuditSubmission>,
) -> Response
where
    R: AuditRepository + 'static,
{
    match service.ingest(submission) {
        Ok(IngestOutcome::Committed(record)) => {
            (StatusCode::OK, axum::Json(record)).into_response()
        }
        Ok(IngestOutcome::Rejected(report)) => {
            let payload = json!({ "errors": report.errors });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AuditIngestService<R>>>,
    Path(audit_id): Path<String>,
) -> Response
where
    R: AuditRepository + 'static,
{
    let id = AuditId(audit_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(AuditServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "audit not found", "id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<AuditIngestService<R>>>) -> Response
where
    R: AuditRepository + 'static,
{
    match service.list() {
        Ok(records) => {
            let views: Vec<AuditStatusView> =
                records.iter().map(AuditStatusView::from_record).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Evaluate the technical sub-checks for a candidate submission without
/// committing anything, so forms can show live status while editing.
pub(crate) async fn technical_review_handler<R>(
    State(service): State<Arc<AuditIngestService<R>>>,
    axum::Json(submission): axum::Json<AuditSubmission>,
) -> Response
where
    R: AuditRepository + 'static,
{
    let review = service.technical_review(&submission);
    (StatusCode::OK, axum::Json(review)).into_response()
}

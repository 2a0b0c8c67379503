//! Energy metrics and compliance determination for commercial building
//! audits: unit normalization, intensity indices, tier classification,
//! goal-parameterized technical sub-checks, and the ingestion pipeline
//! that ties them together over an in-memory store.

pub(crate) mod classification;
pub mod domain;
pub(crate) mod metrics;
pub(crate) mod normalizer;
pub mod repository;
pub mod router;
pub mod service;
pub mod technical;
pub mod validation;


pub use classification::classify;
pub use domain::{
    AuditDepth, AuditId, AuditRecord, AuditStatus, AuditSubmission, BuildingClass, ClimateZone,
    ComplianceGoal, ComplianceProfile, ComplianceTier, DerivedMetrics, EfficiencyMeasure,
    ExclusionAreas, FuelType, HvacSystemType, MandatoryChecks, MeasureCategory, MotorClass,
    RemediationAction, TechnicalParameters, UtilityEntry,
};
pub use metrics::{derive_intensity, IntensityFigures};
pub use normalizer::{normalized_energy_kwh, total_annual_cost};
pub use repository::{AuditRepository, AuditStatusView, InMemoryAuditStore, RepositoryError};
pub use router::audit_router;
pub use service::{AuditIngestService, AuditServiceError, IngestOutcome};
pub use technical::{review_submission, CheckStatus, TechnicalReview};
pub use validation::{validate, ValidationReport};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AuditSubmission, BuildingClass};

/// Earliest construction year the form accepts.
const MIN_YEAR_BUILT: i32 = 1800;

/// Plausible benchmark EPI band (kWh/m²/yr) per building class. A supplied
/// benchmark outside its class band is a data-entry error, not a bad rating.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BenchmarkBand {
    min: f64,
    max: f64,
}

const BENCHMARK_BANDS: [(BuildingClass, BenchmarkBand); 7] = [
    (BuildingClass::Office, BenchmarkBand { min: 30.0, max: 950.0 }),
    (BuildingClass::Retail, BenchmarkBand { min: 30.0, max: 1200.0 }),
    (BuildingClass::Hospital, BenchmarkBand { min: 150.0, max: 1900.0 }),
    (BuildingClass::Hotel, BenchmarkBand { min: 45.0, max: 1500.0 }),
    (BuildingClass::School, BenchmarkBand { min: 30.0, max: 800.0 }),
    (BuildingClass::Assembly, BenchmarkBand { min: 30.0, max: 800.0 }),
    (BuildingClass::Industrial, BenchmarkBand { min: 30.0, max: 3000.0 }),
];

fn benchmark_band_for(class: BuildingClass) -> Option<BenchmarkBand> {
    BENCHMARK_BANDS
        .iter()
        .find(|(candidate, _)| *candidate == class)
        .map(|(_, band)| *band)
}

/// Field-keyed validation outcome. An empty error map means the submission
/// is acceptable to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}

/// Check structural and business validity of a candidate submission.
///
/// Every check runs; all failures are collected so the caller can surface
/// them at once. The submission is never mutated.
pub fn validate(submission: &AuditSubmission, current_year: i32) -> ValidationReport {
    let mut report = ValidationReport::default();

    if submission.name.trim().is_empty() {
        report.reject("name", "Project name is required.");
    }

    if submission.gross_floor_area <= 0.0 {
        report.reject("gross_floor_area", "Floor area must be positive.");
    }

    if submission.year_built < MIN_YEAR_BUILT || submission.year_built > current_year + 1 {
        report.reject("year_built", "Invalid year built.");
    }

    if let Some(benchmark) = submission.benchmark_intensity {
        if benchmark != 0.0 {
            if let Some(band) = benchmark_band_for(submission.building_class) {
                if benchmark < band.min || benchmark > band.max {
                    report.reject(
                        "benchmark_intensity",
                        format!(
                            "Benchmark EPI for {} should be between {} and {} kWh/m²/yr.",
                            submission.building_class.label(),
                            band.min,
                            band.max
                        ),
                    );
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::audit::tests::fixtures::{preliminary_submission, CURRENT_YEAR};

    #[test]
    fn well_formed_submission_passes() {
        let submission = preliminary_submission("audit-1");
        let report = validate(&submission, CURRENT_YEAR);
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut submission = preliminary_submission("audit-1");
        submission.name = "   ".to_string();

        let report = validate(&submission, CURRENT_YEAR);
        assert!(!report.is_valid());
        assert!(report.errors.contains_key("name"));
    }

    #[test]
    fn non_positive_floor_area_is_rejected() {
        let mut submission = preliminary_submission("audit-1");
        submission.gross_floor_area = 0.0;

        let report = validate(&submission, CURRENT_YEAR);
        assert!(report.errors.contains_key("gross_floor_area"));
    }

    #[test]
    fn year_built_bounds_allow_next_year_only() {
        let mut submission = preliminary_submission("audit-1");

        submission.year_built = CURRENT_YEAR + 1;
        assert!(validate(&submission, CURRENT_YEAR).is_valid());

        submission.year_built = CURRENT_YEAR + 2;
        assert!(validate(&submission, CURRENT_YEAR)
            .errors
            .contains_key("year_built"));

        submission.year_built = 1799;
        assert!(validate(&submission, CURRENT_YEAR)
            .errors
            .contains_key("year_built"));
    }

    #[test]
    fn benchmark_outside_class_band_names_class_and_band() {
        let mut submission = preliminary_submission("audit-1");
        submission.benchmark_intensity = Some(2_000.0);

        let report = validate(&submission, CURRENT_YEAR);
        let message = report
            .errors
            .get("benchmark_intensity")
            .expect("benchmark error present");
        assert!(message.contains("Business (Daytime)"));
        assert!(message.contains("30"));
        assert!(message.contains("950"));
    }

    #[test]
    fn zero_or_absent_benchmark_skips_the_band_check() {
        let mut submission = preliminary_submission("audit-1");

        submission.benchmark_intensity = None;
        assert!(validate(&submission, CURRENT_YEAR).is_valid());

        submission.benchmark_intensity = Some(0.0);
        assert!(validate(&submission, CURRENT_YEAR).is_valid());
    }

    #[test]
    fn all_failures_are_collected_at_once() {
        let mut submission = preliminary_submission("audit-1");
        submission.name = String::new();
        submission.gross_floor_area = -5.0;
        submission.year_built = 1500;
        submission.benchmark_intensity = Some(5_000.0);

        let report = validate(&submission, CURRENT_YEAR);
        assert_eq!(report.errors.len(), 4);
    }
}

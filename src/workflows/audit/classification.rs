use super::domain::ComplianceTier;

/// Intensity-to-benchmark ratio at or below which a tier is earned.
/// Boundaries are inclusive on the pass side.
const SUPER_RATIO: f64 = 0.60;
const PLUS_RATIO: f64 = 0.80;
const COMPLIANT_RATIO: f64 = 1.00;

/// Map a gross intensity index and an externally supplied benchmark onto the
/// tier scale. A missing or non-positive benchmark cannot classify anything
/// and yields `NotCompliant`. Total and deterministic.
pub fn classify(gross_intensity: f64, benchmark_intensity: f64) -> ComplianceTier {
    if benchmark_intensity <= 0.0 {
        return ComplianceTier::NotCompliant;
    }

    let ratio = gross_intensity / benchmark_intensity;
    if ratio <= SUPER_RATIO {
        ComplianceTier::Super
    } else if ratio <= PLUS_RATIO {
        ComplianceTier::Plus
    } else if ratio <= COMPLIANT_RATIO {
        ComplianceTier::Compliant
    } else {
        ComplianceTier::NotCompliant
    }
}

use super::domain::ExclusionAreas;

/// Square metres per square foot.
pub(crate) const SQFT_TO_SQM: f64 = 0.092903;

/// Intensity figures derived from normalized energy and floor areas.
/// Ratings are layered on separately by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityFigures {
    pub gross_intensity: f64,
    pub net_intensity: f64,
    pub cost_intensity: f64,
}

/// Derive the three intensity indices.
///
/// Any non-positive denominator yields a zero metric instead of a fault:
/// a record with no usable floor area is reportable, just not meaningful.
/// Exclusions are not bounds-checked against gross area; when they swallow
/// it, net intensity clamps to zero.
pub fn derive_intensity(
    total_kwh: f64,
    total_cost: f64,
    gross_area_sqft: f64,
    exclusions: Option<&ExclusionAreas>,
) -> IntensityFigures {
    let gross_area_sqm = gross_area_sqft * SQFT_TO_SQM;
    let gross_intensity = if gross_area_sqm > 0.0 {
        round_to(total_kwh / gross_area_sqm, 1)
    } else {
        0.0
    };

    let net_area_sqft = gross_area_sqft - exclusions.map(ExclusionAreas::total).unwrap_or(0.0);
    let net_area_sqm = net_area_sqft * SQFT_TO_SQM;
    let net_intensity = if net_area_sqm > 0.0 {
        round_to(total_kwh / net_area_sqm, 2)
    } else {
        0.0
    };

    let cost_intensity = if gross_area_sqft > 0.0 {
        round_to(total_cost / gross_area_sqft, 2)
    } else {
        0.0
    };

    IntensityFigures {
        gross_intensity,
        net_intensity,
        cost_intensity,
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_matches_published_epi() {
        // 55,000 sq ft office: 850,000 kWh electricity + 12,000 therms gas.
        let total_kwh = 850_000.0 + 12_000.0 * crate::workflows::audit::normalizer::THERM_TO_KWH;
        let figures = derive_intensity(total_kwh, 9_996_000.0, 55_000.0, None);
        assert_eq!(figures.gross_intensity, 235.2);
        assert_eq!(figures.cost_intensity, 181.75);
    }

    #[test]
    fn net_intensity_uses_area_after_exclusions() {
        let exclusions = ExclusionAreas {
            unconditioned_basement: 5_000.0,
            refuge_area: 0.0,
            stilt_parking: 0.0,
        };
        let total_kwh = 850_000.0 + 12_000.0 * crate::workflows::audit::normalizer::THERM_TO_KWH;
        let figures = derive_intensity(total_kwh, 0.0, 55_000.0, Some(&exclusions));
        // 50,000 sq ft net = 4645.15 m².
        assert_eq!(figures.net_intensity, 258.7);
        assert!(figures.net_intensity > figures.gross_intensity);
    }

    #[test]
    fn non_positive_gross_area_zeroes_gross_and_cost_intensity() {
        for area in [0.0, -100.0] {
            let figures = derive_intensity(1_000_000.0, 500_000.0, area, None);
            assert_eq!(figures.gross_intensity, 0.0);
            assert_eq!(figures.cost_intensity, 0.0);
        }
    }

    #[test]
    fn exclusions_swallowing_gross_area_clamp_net_intensity_to_zero() {
        // Known gap: exclusions are not validated against gross area.
        let exclusions = ExclusionAreas {
            unconditioned_basement: 60_000.0,
            refuge_area: 0.0,
            stilt_parking: 0.0,
        };
        let figures = derive_intensity(1_000_000.0, 0.0, 55_000.0, Some(&exclusions));
        assert_eq!(figures.net_intensity, 0.0);
        assert_ne!(figures.gross_intensity, 0.0);
    }

    #[test]
    fn rounding_is_one_decimal_gross_two_decimals_net_and_cost() {
        let figures = derive_intensity(100_000.0, 33_333.0, 10_000.0, None);
        let gross_area_sqm = 10_000.0 * SQFT_TO_SQM;
        assert_eq!(
            figures.gross_intensity,
            (100_000.0 / gross_area_sqm * 10.0).round() / 10.0
        );
        assert_eq!(figures.cost_intensity, 3.33);
    }
}

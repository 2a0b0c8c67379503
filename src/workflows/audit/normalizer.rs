use super::domain::{FuelType, UtilityEntry};

/// kWh per therm of natural gas.
pub(crate) const THERM_TO_KWH: f64 = 29.3071;

/// Collapse mixed-fuel utility entries into annual site kWh.
///
/// Electricity billed in kWh passes through; natural gas billed in therms
/// converts at a fixed factor. Anything else (oil, district steam, or a
/// mismatched unit label) is taken at face value. That fallback is a
/// deliberate approximation so partially captured billing data still yields
/// a metric, not a rejection.
pub fn normalized_energy_kwh(entries: &[UtilityEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| match (entry.fuel, entry.unit.as_str()) {
            (FuelType::Electricity, "kWh") => entry.annual_consumption,
            (FuelType::NaturalGas, "therms") => entry.annual_consumption * THERM_TO_KWH,
            _ => entry.annual_consumption,
        })
        .sum()
}

/// Total annual spend across all utility accounts.
pub fn total_annual_cost(entries: &[UtilityEntry]) -> f64 {
    entries.iter().map(|entry| entry.annual_cost).sum()
}

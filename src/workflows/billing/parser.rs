use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::BillingImportError;
use crate::workflows::audit::domain::{FuelType, UtilityEntry};

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<UtilityEntry>, BillingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for (index, record) in csv_reader.deserialize::<BillRow>().enumerate() {
        let row = record?;
        let fuel = parse_fuel(&row.fuel).ok_or_else(|| BillingImportError::UnknownFuel {
            // Row 1 is the header line.
            row: index + 2,
            label: row.fuel.clone(),
        })?;

        entries.push(UtilityEntry {
            fuel,
            unit: row.unit,
            annual_consumption: row.annual_consumption,
            annual_cost: row.annual_cost,
            peak_demand: row.peak_demand,
            rate_structure: row.rate_structure,
        });
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct BillRow {
    #[serde(rename = "Fuel Type")]
    fuel: String,
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Annual Consumption")]
    annual_consumption: f64,
    #[serde(rename = "Annual Cost")]
    annual_cost: f64,
    #[serde(rename = "Peak Demand", default)]
    peak_demand: Option<f64>,
    #[serde(
        rename = "Rate Structure",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    rate_structure: Option<String>,
}

fn parse_fuel(label: &str) -> Option<FuelType> {
    match label.trim().to_ascii_lowercase().as_str() {
        "electricity" => Some(FuelType::Electricity),
        "natural gas" => Some(FuelType::NaturalGas),
        "oil" => Some(FuelType::Oil),
        "district steam" => Some(FuelType::DistrictSteam),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

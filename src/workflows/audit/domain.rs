use serde::{Deserialize, Serialize};

/// Identifier wrapper for audit records, stable across updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditId(pub String);

/// Occupancy classifications recognized by the benchmark tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingClass {
    Office,
    Retail,
    Hospital,
    Hotel,
    School,
    Assembly,
    Industrial,
}

impl BuildingClass {
    pub const fn label(self) -> &'static str {
        match self {
            BuildingClass::Office => "Business (Daytime)",
            BuildingClass::Retail => "Shopping Complex",
            BuildingClass::Hospital => "Health Care",
            BuildingClass::Hotel => "Hospitality (Star Hotel)",
            BuildingClass::School => "Educational",
            BuildingClass::Assembly => "Assembly",
            BuildingClass::Industrial => "Industrial",
        }
    }

    /// Classes with significant service hot-water demand, where the solar
    /// water heating sub-check applies.
    pub const fn has_hot_water_mandate(self) -> bool {
        matches!(self, BuildingClass::Hotel | BuildingClass::Hospital)
    }
}

/// Depth of the engagement, ordered from billing analysis to investment-grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuditDepth {
    Preliminary,
    Walkthrough,
    Survey,
    Detailed,
}

impl AuditDepth {
    pub const fn label(self) -> &'static str {
        match self {
            AuditDepth::Preliminary => "Preliminary Energy-Use Analysis",
            AuditDepth::Walkthrough => "Level 1 - Walk-Through",
            AuditDepth::Survey => "Level 2 - Energy Survey & Analysis",
            AuditDepth::Detailed => "Level 3 - Detailed Analysis",
        }
    }
}

/// Editorial lifecycle of a record. Publishing is gated by the surrounding
/// application, not by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Draft,
    Review,
    Published,
}

impl AuditStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AuditStatus::Draft => "draft",
            AuditStatus::Review => "review",
            AuditStatus::Published => "published",
        }
    }
}

/// Fuel categories accepted on utility entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Electricity,
    NaturalGas,
    Oil,
    DistrictSteam,
}

impl FuelType {
    pub const fn label(self) -> &'static str {
        match self {
            FuelType::Electricity => "Electricity",
            FuelType::NaturalGas => "Natural Gas",
            FuelType::Oil => "Oil",
            FuelType::DistrictSteam => "District Steam",
        }
    }
}

/// One annual utility account as captured from billing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityEntry {
    pub fuel: FuelType,
    pub unit: String,
    pub annual_consumption: f64,
    pub annual_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_demand: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_structure: Option<String>,
}

/// Named sub-areas subtracted from gross floor area for net-area metrics.
/// Values are square feet; absent exclusions count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionAreas {
    pub unconditioned_basement: f64,
    pub refuge_area: f64,
    pub stilt_parking: f64,
}

impl ExclusionAreas {
    pub fn total(&self) -> f64 {
        self.unconditioned_basement + self.refuge_area + self.stilt_parking
    }
}

/// Climate zones parameterizing the compliance program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateZone {
    Composite,
    HotDry,
    WarmHumid,
    Temperate,
    Cold,
}

/// Target tier the building's compliance program is aiming for. Parameterizes
/// the technical sub-check thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplianceGoal {
    Compliant,
    Plus,
    Super,
}

impl ComplianceGoal {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceGoal::Compliant => "ECBC Compliant",
            ComplianceGoal::Plus => "ECBC+",
            ComplianceGoal::Super => "Super ECBC",
        }
    }
}

/// Rating the classifier assigns from intensity relative to benchmark.
/// Linearly ordered, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplianceTier {
    NotCompliant,
    Compliant,
    Plus,
    Super,
}

impl ComplianceTier {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceTier::NotCompliant => "Not Compliant",
            ComplianceTier::Compliant => "ECBC Compliant",
            ComplianceTier::Plus => "ECBC+",
            ComplianceTier::Super => "Super ECBC",
        }
    }
}

/// HVAC plant archetypes referenced by the efficiency band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HvacSystemType {
    Vrf,
    Chiller,
    Split,
    Package,
    Other,
}

/// IEC 60034-30 motor efficiency classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MotorClass {
    Ie2,
    Ie3,
    Ie4,
    Ie5,
}

impl MotorClass {
    pub const fn level(self) -> u8 {
        match self {
            MotorClass::Ie2 => 2,
            MotorClass::Ie3 => 3,
            MotorClass::Ie4 => 4,
            MotorClass::Ie5 => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MotorClass::Ie2 => "IE2",
            MotorClass::Ie3 => "IE3",
            MotorClass::Ie4 => "IE4",
            MotorClass::Ie5 => "IE5",
        }
    }
}

/// Mandatory walkthrough checklist captured during a level-1 visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryChecks {
    pub roof_reflectance: bool,
    pub lighting_auto_shutoff: bool,
    pub cooling_tower_control: bool,
    pub transformer_star_rated: bool,
    pub power_factor: bool,
}

impl MandatoryChecks {
    pub fn all_pass(&self) -> bool {
        self.roof_reflectance
            && self.lighting_auto_shutoff
            && self.cooling_tower_control
            && self.transformer_star_rated
            && self.power_factor
    }
}

/// Numeric envelope/system survey inputs driving the technical sub-checks.
/// Areas are m², capacity kWr, demand/capacity litres per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalParameters {
    pub window_area: f64,
    pub wall_area: f64,
    pub skylight_area: f64,
    pub roof_area: f64,
    pub hvac_system: HvacSystemType,
    pub hvac_capacity: f64,
    pub hvac_efficiency: f64,
    pub lighting_power_density: f64,
    pub motor_class: MotorClass,
    pub hot_water_demand: f64,
    pub solar_water_capacity: f64,
}

/// Compliance program context: which goal, in which zone, with which survey data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceProfile {
    pub climate_zone: ClimateZone,
    pub goal: ComplianceGoal,
    pub mandatory: MandatoryChecks,
    pub technical: TechnicalParameters,
}

/// A remediation step required to reach a target tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationAction {
    pub system: String,
    pub description: String,
    pub investment: f64,
    pub responsible_party: String,
    pub target_tier: ComplianceTier,
}

/// Cost profile of an energy efficiency measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureCategory {
    LowCost,
    Capital,
    OperationsMaintenance,
}

/// An energy efficiency measure recommended by the auditor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMeasure {
    pub title: String,
    pub description: String,
    pub cost: f64,
    pub annual_savings: f64,
    pub payback_years: f64,
    pub category: MeasureCategory,
}

/// Auditor-authored portion of a record. Everything here is user input; the
/// engine never edits it and nothing here carries a derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSubmission {
    pub id: AuditId,
    pub name: String,
    pub address: String,
    pub building_class: BuildingClass,
    pub depth: AuditDepth,
    pub status: AuditStatus,
    /// Square feet.
    pub gross_floor_area: f64,
    pub year_built: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<ExclusionAreas>,
    pub utilities: Vec<UtilityEntry>,
    /// Externally supplied reference EPI (kWh/m²/yr) for the building class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceProfile>,
    #[serde(default)]
    pub remediation: Vec<RemediationAction>,
    #[serde(default)]
    pub measures: Vec<EfficiencyMeasure>,
    #[serde(default)]
    pub notes: String,
}

/// Engine-derived output. Only the ingest service constructs these for a
/// committed record; a writer cannot hand-set an intensity or tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Energy performance index over gross area, kWh/m²/yr.
    pub gross_intensity: f64,
    /// EPI over net (gross minus exclusions) area, kWh/m²/yr.
    pub net_intensity: f64,
    /// Annual utility cost per gross square foot.
    pub cost_intensity: f64,
    pub rating: ComplianceTier,
}

/// A committed audit: the submission joined with the metrics derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub submission: AuditSubmission,
    pub metrics: DerivedMetrics,
}

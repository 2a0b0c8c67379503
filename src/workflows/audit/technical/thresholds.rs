use crate::workflows::audit::domain::{ComplianceGoal, HvacSystemType, MotorClass};

/// Envelope ratio ceilings, percent.
pub(crate) const WINDOW_WALL_LIMIT_PCT: f64 = 40.0;
pub(crate) const SKYLIGHT_ROOF_LIMIT_PCT: f64 = 5.0;

/// Thresholds that tighten with the compliance goal. Kept in one table so the
/// three-tier structure stays auditable and a fourth tier is a one-row change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GoalThresholds {
    /// Lighting power density ceiling, W/m².
    pub(crate) lpd_ceiling: f64,
    /// Minimum IE motor efficiency level.
    pub(crate) motor_level: u8,
    /// Required solar share of service hot-water demand.
    pub(crate) solar_fraction: f64,
}

const GOAL_THRESHOLDS: [(ComplianceGoal, GoalThresholds); 3] = [
    (
        ComplianceGoal::Compliant,
        GoalThresholds {
            lpd_ceiling: 9.5,
            motor_level: 3,
            solar_fraction: 0.4,
        },
    ),
    (
        ComplianceGoal::Plus,
        GoalThresholds {
            lpd_ceiling: 7.6,
            motor_level: 4,
            solar_fraction: 0.6,
        },
    ),
    (
        ComplianceGoal::Super,
        GoalThresholds {
            lpd_ceiling: 5.0,
            motor_level: 5,
            solar_fraction: 1.0,
        },
    ),
];

pub(crate) fn thresholds_for(goal: ComplianceGoal) -> GoalThresholds {
    GOAL_THRESHOLDS
        .iter()
        .find(|(candidate, _)| *candidate == goal)
        .map(|(_, thresholds)| *thresholds)
        .unwrap_or(GOAL_THRESHOLDS[0].1)
}

/// Capacity band on the HVAC efficiency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CapacityBand {
    AtLeast(f64),
    Below(f64),
}

impl CapacityBand {
    fn contains(self, capacity_kwr: f64) -> bool {
        match self {
            CapacityBand::AtLeast(bound) => capacity_kwr >= bound,
            CapacityBand::Below(bound) => capacity_kwr < bound,
        }
    }
}

/// One row of the HVAC efficiency table. Systems matching no row are not
/// checked; whether that leniency is intended is an open policy question,
/// so the table keeps the checked combinations explicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HvacBand {
    pub(crate) system: HvacSystemType,
    pub(crate) capacity: CapacityBand,
    pub(crate) minimum_efficiency: f64,
    pub(crate) metric: &'static str,
}

const HVAC_BANDS: [HvacBand; 2] = [
    HvacBand {
        system: HvacSystemType::Chiller,
        capacity: CapacityBand::AtLeast(530.0),
        minimum_efficiency: 5.8,
        metric: "COP",
    },
    HvacBand {
        system: HvacSystemType::Vrf,
        capacity: CapacityBand::Below(40.0),
        minimum_efficiency: 5.4,
        metric: "ISEER",
    },
];

pub(crate) fn hvac_band_for(system: HvacSystemType, capacity_kwr: f64) -> Option<HvacBand> {
    HVAC_BANDS
        .iter()
        .find(|band| band.system == system && band.capacity.contains(capacity_kwr))
        .copied()
}

pub(crate) fn motor_class_for_level(level: u8) -> Option<MotorClass> {
    [
        MotorClass::Ie2,
        MotorClass::Ie3,
        MotorClass::Ie4,
        MotorClass::Ie5,
    ]
    .into_iter()
    .find(|class| class.level() == level)
}

//! Goal-parameterized technical sub-checks for envelope, HVAC, lighting,
//! motors, and service water heating. Each sub-check is computed
//! independently; a missing or zero precondition reports `NotApplicable`
//! rather than pass/fail, so the review is safe on partially filled records.

mod thresholds;

use serde::{Deserialize, Serialize};

use super::domain::{
    AuditSubmission, BuildingClass, ComplianceProfile, MotorClass, TechnicalParameters,
};
use thresholds::{
    hvac_band_for, motor_class_for_level, thresholds_for, SKYLIGHT_ROOF_LIMIT_PCT,
    WINDOW_WALL_LIMIT_PCT,
};

/// Outcome of one technical sub-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl CheckStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CheckStatus::Compliant => "Compliant",
            CheckStatus::NonCompliant => "Non-Compliant",
            CheckStatus::NotApplicable => "N/A",
        }
    }

    pub const fn is_failure(self) -> bool {
        matches!(self, CheckStatus::NonCompliant)
    }
}

/// Area-ratio sub-check (window-to-wall, skylight-to-roof), percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioCheck {
    pub ratio_pct: f64,
    pub limit_pct: f64,
    pub status: CheckStatus,
}

/// HVAC efficiency sub-check. `metric` and `minimum_efficiency` are present
/// only when the system fell inside a defined capacity band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HvacCheck {
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_efficiency: Option<f64>,
}

/// Lighting power density against the goal ceiling, W/m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingCheck {
    pub density: f64,
    pub ceiling: f64,
    pub status: CheckStatus,
}

/// Declared motor class against the goal-required class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<MotorClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<MotorClass>,
    pub status: CheckStatus,
}

/// Solar share of service hot-water demand against the goal fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    pub status: CheckStatus,
}

/// Full per-check result consumed by form collaborators for live status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReview {
    pub window_to_wall: RatioCheck,
    pub skylight_to_roof: RatioCheck,
    pub hvac: HvacCheck,
    pub lighting: LightingCheck,
    pub motor: MotorCheck,
    pub solar_water: SolarCheck,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_complete: Option<bool>,
}

impl TechnicalReview {
    /// Review for a record with no compliance profile captured yet.
    fn not_applicable() -> Self {
        Self {
            window_to_wall: RatioCheck {
                ratio_pct: 0.0,
                limit_pct: WINDOW_WALL_LIMIT_PCT,
                status: CheckStatus::NotApplicable,
            },
            skylight_to_roof: RatioCheck {
                ratio_pct: 0.0,
                limit_pct: SKYLIGHT_ROOF_LIMIT_PCT,
                status: CheckStatus::NotApplicable,
            },
            hvac: HvacCheck {
                status: CheckStatus::NotApplicable,
                metric: None,
                minimum_efficiency: None,
            },
            lighting: LightingCheck {
                density: 0.0,
                ceiling: 0.0,
                status: CheckStatus::NotApplicable,
            },
            motor: MotorCheck {
                declared: None,
                required: None,
                status: CheckStatus::NotApplicable,
            },
            solar_water: SolarCheck {
                required_fraction: None,
                coverage: None,
                status: CheckStatus::NotApplicable,
            },
            mandatory_complete: None,
        }
    }

    pub fn failures(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.window_to_wall.status.is_failure() {
            failed.push("window-to-wall ratio");
        }
        if self.skylight_to_roof.status.is_failure() {
            failed.push("skylight-to-roof ratio");
        }
        if self.hvac.status.is_failure() {
            failed.push("hvac efficiency");
        }
        if self.lighting.status.is_failure() {
            failed.push("lighting power density");
        }
        if self.motor.status.is_failure() {
            failed.push("motor efficiency class");
        }
        if self.solar_water.status.is_failure() {
            failed.push("solar water heating");
        }
        failed
    }
}

/// Evaluate every sub-check for a submission. Records without a compliance
/// profile produce an all-N/A review.
pub fn review_submission(submission: &AuditSubmission) -> TechnicalReview {
    match &submission.compliance {
        Some(profile) => review(submission.building_class, profile),
        None => TechnicalReview::not_applicable(),
    }
}

pub fn review(building_class: BuildingClass, profile: &ComplianceProfile) -> TechnicalReview {
    let goal = thresholds_for(profile.goal);
    let technical = &profile.technical;

    TechnicalReview {
        window_to_wall: ratio_check(
            technical.window_area,
            technical.wall_area,
            WINDOW_WALL_LIMIT_PCT,
        ),
        skylight_to_roof: ratio_check(
            technical.skylight_area,
            technical.roof_area,
            SKYLIGHT_ROOF_LIMIT_PCT,
        ),
        hvac: hvac_check(technical),
        lighting: lighting_check(technical.lighting_power_density, goal.lpd_ceiling),
        motor: motor_check(technical.motor_class, goal.motor_level),
        solar_water: solar_check(building_class, technical, goal.solar_fraction),
        mandatory_complete: Some(profile.mandatory.all_pass()),
    }
}

fn ratio_check(numerator_area: f64, remainder_area: f64, limit_pct: f64) -> RatioCheck {
    let total = numerator_area + remainder_area;
    if total <= 0.0 {
        return RatioCheck {
            ratio_pct: 0.0,
            limit_pct,
            status: CheckStatus::NotApplicable,
        };
    }

    let ratio_pct = numerator_area / total * 100.0;
    let status = if ratio_pct > limit_pct {
        CheckStatus::NonCompliant
    } else {
        CheckStatus::Compliant
    };

    RatioCheck {
        ratio_pct,
        limit_pct,
        status,
    }
}

fn hvac_check(technical: &TechnicalParameters) -> HvacCheck {
    if technical.hvac_capacity <= 0.0 {
        return HvacCheck {
            status: CheckStatus::NotApplicable,
            metric: None,
            minimum_efficiency: None,
        };
    }

    match hvac_band_for(technical.hvac_system, technical.hvac_capacity) {
        Some(band) => {
            let status = if technical.hvac_efficiency < band.minimum_efficiency {
                CheckStatus::NonCompliant
            } else {
                CheckStatus::Compliant
            };
            HvacCheck {
                status,
                metric: Some(band.metric.to_string()),
                minimum_efficiency: Some(band.minimum_efficiency),
            }
        }
        // Combinations outside the defined bands are not checked.
        None => HvacCheck {
            status: CheckStatus::Compliant,
            metric: None,
            minimum_efficiency: None,
        },
    }
}

fn lighting_check(density: f64, ceiling: f64) -> LightingCheck {
    let status = if density <= 0.0 {
        CheckStatus::NotApplicable
    } else if density <= ceiling {
        CheckStatus::Compliant
    } else {
        CheckStatus::NonCompliant
    };

    LightingCheck {
        density,
        ceiling,
        status,
    }
}

fn motor_check(declared: MotorClass, required_level: u8) -> MotorCheck {
    let status = if declared.level() >= required_level {
        CheckStatus::Compliant
    } else {
        CheckStatus::NonCompliant
    };

    MotorCheck {
        declared: Some(declared),
        required: motor_class_for_level(required_level),
        status,
    }
}

fn solar_check(
    building_class: BuildingClass,
    technical: &TechnicalParameters,
    required_fraction: f64,
) -> SolarCheck {
    if !building_class.has_hot_water_mandate() || technical.hot_water_demand <= 0.0 {
        return SolarCheck {
            required_fraction: None,
            coverage: None,
            status: CheckStatus::NotApplicable,
        };
    }

    let coverage = technical.solar_water_capacity / technical.hot_water_demand;
    let status = if coverage >= required_fraction {
        CheckStatus::Compliant
    } else {
        CheckStatus::NonCompliant
    };

    SolarCheck {
        required_fraction: Some(required_fraction),
        coverage: Some(coverage),
        status,
    }
}

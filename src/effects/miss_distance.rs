use serde::Serialize;

use crate::engine::physics_constants::DeflectionModel;
use crate::errors::ImpactResult;
use crate::utils::units::meters_to_km;
use crate::utils::validation::require_non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Impact,
}

/// Display tier for a miss distance. Carries no physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Clear,
    Watch,
    Warning,
    Critical,
}

/// Projected miss distance (km) after `delta_v` m/s has acted for `elapsed`
/// seconds.
///
/// Linear in both arguments: valid for small deflections applied years ahead
/// of the encounter. Elapsed time is an input, never state, so the same
/// `(delta_v, elapsed)` always gives the same distance.
pub fn compute_miss_distance(
    delta_v: f64,
    elapsed: f64,
    model: &DeflectionModel,
) -> ImpactResult<f64> {
    require_non_negative("delta_v", delta_v)?;
    require_non_negative("elapsed", elapsed)?;

    let shift = meters_to_km(delta_v * elapsed * model.trajectory_shift_factor);
    Ok(model.initial_miss_offset_km + shift)
}

pub fn verdict(miss_distance_km: f64, model: &DeflectionModel) -> Verdict {
    if miss_distance_km >= model.safe_distance_km {
        Verdict::Safe
    } else {
        Verdict::Impact
    }
}

pub fn threat_level(miss_distance_km: f64, model: &DeflectionModel) -> ThreatLevel {
    if miss_distance_km >= model.safe_distance_km {
        ThreatLevel::Clear
    } else if miss_distance_km >= 0.0 {
        ThreatLevel::Watch
    } else if miss_distance_km >= model.warning_distance_km {
        ThreatLevel::Warning
    } else {
        ThreatLevel::Critical
    }
}

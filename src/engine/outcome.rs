use serde::Serialize;

use crate::effects::blast::BlastProfile;
use crate::effects::crater::CraterProfile;
use crate::effects::energy::{EnergyComparison, ImpactClass};
use crate::effects::miss_distance::{ThreatLevel, Verdict};
use crate::effects::tsunami::TsunamiProfile;

/// Everything one simulation run produces. `crater` is only set for land
/// targets and `tsunami` only for ocean targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactOutcome {
    pub target: &'static str,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    pub energy_megatons: f64,
    pub impact_class: ImpactClass,
    pub comparison: EnergyComparison,
    pub crater: Option<CraterProfile>,
    pub seismic_magnitude: f64,
    pub shaking_radius_km: f64,
    pub blast: BlastProfile,
    pub tsunami: Option<TsunamiProfile>,
    pub elapsed_years: f64,
    pub miss_distance_km: f64,
    pub predicted_miss_distance_km: f64,
    pub threat_level: ThreatLevel,
    pub verdict: Verdict,
}

impl ImpactOutcome {
    pub fn is_safe(&self) -> bool {
        self.verdict == Verdict::Safe
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

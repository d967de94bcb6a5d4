use serde::Serialize;

use crate::engine::physics_constants::{BlastModel, PowerLaw};
use crate::errors::ImpactResult;
use crate::utils::validation::require_positive;

/// Air-blast and thermal footprint. Radii in km, fireball duration in s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastProfile {
    pub overpressure_20psi_km: f64,
    pub overpressure_5psi_km: f64,
    pub overpressure_1psi_km: f64,
    pub blast_radius_km: f64,
    pub thermal_radius_km: f64,
    pub fireball_radius_km: f64,
    pub fireball_duration_s: f64,
    pub thermal_fluence: f64,
}

pub fn compute_blast_effects(energy_megatons: f64, model: &BlastModel) -> ImpactResult<BlastProfile> {
    let energy = require_positive("energy_megatons", energy_megatons)?;
    let scaled = |parameter: &'static str, law: &PowerLaw| {
        require_positive(parameter, law.evaluate(energy))
    };

    Ok(BlastProfile {
        overpressure_20psi_km: scaled("overpressure_20psi", &model.overpressure_20psi)?,
        overpressure_5psi_km: scaled("overpressure_5psi", &model.overpressure_5psi)?,
        overpressure_1psi_km: scaled("overpressure_1psi", &model.overpressure_1psi)?,
        blast_radius_km: scaled("blast_radius", &model.blast_radius)?,
        thermal_radius_km: scaled("thermal_radius", &model.thermal_radius)?,
        fireball_radius_km: scaled("fireball_radius", &model.fireball_radius)?,
        fireball_duration_s: scaled("fireball_duration", &model.fireball_duration)?,
        thermal_fluence: scaled("thermal_fluence", &model.thermal_fluence)?,
    })
}

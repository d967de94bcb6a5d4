use std::f64::consts::PI;

use serde::Serialize;

use crate::engine::physics_constants::EnergyModel;
use crate::errors::ImpactResult;
use crate::utils::validation::{require_impact_angle, require_non_negative, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactClass {
    Regional,
    Continental,
    Global,
}

impl ImpactClass {
    pub fn classify(energy_megatons: f64, model: &EnergyModel) -> Self {
        if energy_megatons < model.regional_limit_megatons {
            ImpactClass::Regional
        } else if energy_megatons < model.continental_limit_megatons {
            ImpactClass::Continental
        } else {
            ImpactClass::Global
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImpactClass::Regional => "Regional impact event",
            ImpactClass::Continental => "Continental-scale catastrophe",
            ImpactClass::Global => "Global extinction-level event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyComparison {
    pub hiroshima_equivalents: f64,
}

impl EnergyComparison {
    pub fn from_megatons(energy_megatons: f64, model: &EnergyModel) -> Self {
        EnergyComparison {
            hiroshima_equivalents: energy_megatons / model.hiroshima_yield_megatons,
        }
    }
}

/// Uniform sphere of the given diameter (m) and bulk density (kg/m³).
pub fn compute_mass(diameter: f64, density: f64) -> ImpactResult<f64> {
    require_positive("diameter", diameter)?;
    require_positive("density", density)?;

    let radius = diameter / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    require_positive("mass", volume * density)
}

/// Energy delivered normal to the surface (J).
///
/// The vertical velocity component counts in full; the horizontal component
/// counts with `model.horizontal_energy_weight`, so a grazing impact deposits
/// less than a head-on one at the same speed. `angle` is in degrees from
/// horizontal.
pub fn compute_kinetic_energy(
    mass: f64,
    velocity: f64,
    angle: f64,
    model: &EnergyModel,
) -> ImpactResult<f64> {
    require_non_negative("mass", mass)?;
    require_non_negative("velocity", velocity)?;
    require_impact_angle("angle", angle)?;

    let angle_rad = angle.to_radians();
    let vertical_velocity = velocity * angle_rad.sin();
    let horizontal_velocity = velocity * angle_rad.cos();

    let vertical_energy = 0.5 * mass * vertical_velocity.powi(2);
    let horizontal_energy =
        0.5 * mass * horizontal_velocity.powi(2) * model.horizontal_energy_weight;

    require_non_negative("kinetic_energy", vertical_energy + horizontal_energy)
}

pub fn energy_to_megatons(joules: f64, model: &EnergyModel) -> f64 {
    joules / model.joules_per_megaton
}

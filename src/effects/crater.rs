// Collins, Melosh & Marcus (2005), eq. 21:
// D_tc = k1 · g^-0.22 · (ρp/ρt)^(1/3) · L^0.78 · v^0.44 · sin(θ)^(1/3)

use std::f64::consts::PI;

use serde::Serialize;

use crate::engine::physics_constants::CraterModel;
use crate::errors::ImpactResult;
use crate::utils::units::meters_to_km;
use crate::utils::validation::{require_finite, require_impact_angle, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CraterProfile {
    pub transient_diameter_m: f64,
    pub diameter_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub ejecta_mass_kg: f64,
    pub destruction_radius_km: f64,
}

pub fn compute_transient_diameter(
    diameter: f64,
    velocity: f64,
    angle: f64,
    projectile_density: f64,
    target_density: f64,
    gravity: f64,
    model: &CraterModel,
) -> ImpactResult<f64> {
    require_positive("diameter", diameter)?;
    require_positive("velocity", velocity)?;
    require_impact_angle("angle", angle)?;
    require_positive("projectile_density", projectile_density)?;
    require_positive("target_density", target_density)?;
    require_positive("gravity", gravity)?;

    let scaling_factor = model.scaling_coefficient
        * gravity.powf(model.gravity_exponent)
        * (projectile_density / target_density).powf(model.density_exponent);

    let transient_diameter = scaling_factor
        * diameter.powf(model.size_exponent)
        * velocity.powf(model.velocity_exponent)
        * angle.to_radians().sin().powf(model.angle_exponent);
    require_positive("transient_diameter", transient_diameter)
}

pub fn compute_crater(
    diameter: f64,
    velocity: f64,
    angle: f64,
    projectile_density: f64,
    target_density: f64,
    gravity: f64,
    model: &CraterModel,
) -> ImpactResult<CraterProfile> {
    let transient_diameter = compute_transient_diameter(
        diameter,
        velocity,
        angle,
        projectile_density,
        target_density,
        gravity,
        model,
    )?;

    let final_diameter = transient_diameter * model.collapse_factor;
    let depth = final_diameter / model.diameter_to_depth;
    let volume = require_finite("crater_volume", PI * (final_diameter / 2.0).powi(2) * depth)?;
    let ejecta_mass = require_finite("ejecta_mass", volume * target_density)?;

    Ok(CraterProfile {
        transient_diameter_m: transient_diameter,
        diameter_m: require_positive("crater_diameter", final_diameter)?,
        depth_m: depth,
        volume_m3: volume,
        ejecta_mass_kg: ejecta_mass,
        destruction_radius_km: meters_to_km(final_diameter) * model.destruction_radius_factor,
    })
}

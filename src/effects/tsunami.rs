use serde::Serialize;

use crate::bodies::environment::{CoastalCity, TargetEnvironment};
use crate::engine::physics_constants::TsunamiModel;
use crate::errors::ImpactResult;
use crate::utils::units::{km_to_meters, m_per_s_to_km_per_h, meters_to_km};
use crate::utils::validation::require_positive;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityImpact {
    pub name: String,
    pub distance_km: f64,
    pub arrival_hours: f64,
    pub wave_height_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiProfile {
    pub amplitude_m: f64,
    pub velocity_km_h: f64,
    pub wavelength_km: f64,
    pub period_s: f64,
    pub cavity_depth_m: f64,
    pub energy_flux_w_per_m: f64,
    pub cities: Vec<CityImpact>,
}

/// Impact-generated wave for an ocean strike, `None` for any other target.
///
/// `diameter` is the projectile diameter in metres and `velocity` its impact
/// speed in m/s. Cities come out in catalog order, one entry each.
pub fn compute_tsunami(
    diameter: f64,
    velocity: f64,
    environment: &TargetEnvironment,
    gravity: f64,
    model: &TsunamiModel,
) -> ImpactResult<Option<TsunamiProfile>> {
    require_positive("diameter", diameter)?;
    require_positive("velocity", velocity)?;
    require_positive("gravity", gravity)?;

    let (water_depth, coastline) = match environment {
        TargetEnvironment::Ocean {
            water_depth,
            coastline,
            ..
        } => (require_positive("water_depth", *water_depth)?, coastline),
        TargetEnvironment::Land { .. } => return Ok(None),
    };

    let impact_radius = diameter / 2.0;
    let cavity_depth = (model.cavity_radius_ratio * impact_radius).min(water_depth);

    let amplitude_km = model.amplitude_coefficient
        * diameter.powf(model.diameter_exponent)
        * (velocity / 1000.0).powf(model.velocity_exponent)
        * (water_depth / model.reference_depth).powf(model.depth_exponent);
    let amplitude = require_positive("tsunami_amplitude", km_to_meters(amplitude_km))?;

    // Long-wave (shallow-water) phase speed.
    let wave_velocity = (gravity * water_depth).sqrt();
    let wavelength = model.wavelength_coefficient * water_depth.sqrt();
    let period = wavelength / wave_velocity;
    let energy_flux = require_positive(
        "tsunami_energy_flux",
        0.125 * model.seawater_density * gravity * amplitude.powi(2) * wave_velocity,
    )?;

    let cities = coastline
        .iter()
        .map(|city| propagate_to_city(city, amplitude, impact_radius, wave_velocity, model))
        .collect::<ImpactResult<Vec<_>>>()?;

    Ok(Some(TsunamiProfile {
        amplitude_m: amplitude,
        velocity_km_h: m_per_s_to_km_per_h(wave_velocity),
        wavelength_km: meters_to_km(wavelength),
        period_s: period,
        cavity_depth_m: cavity_depth,
        energy_flux_w_per_m: energy_flux,
        cities,
    }))
}

fn propagate_to_city(
    city: &CoastalCity,
    amplitude: f64,
    impact_radius: f64,
    wave_velocity: f64,
    model: &TsunamiModel,
) -> ImpactResult<CityImpact> {
    city.validate()?;

    let arrival_hours = city.distance_km / m_per_s_to_km_per_h(wave_velocity);
    // Cylindrical spreading from the impact rim, then frequency dispersion.
    let decay_factor = (impact_radius / km_to_meters(city.distance_km)).sqrt();
    let dispersive_loss = (-model.dispersion_per_km * city.distance_km).exp();
    let modelled_height = amplitude * decay_factor * dispersive_loss;

    Ok(CityImpact {
        name: city.name.clone(),
        distance_km: city.distance_km,
        arrival_hours,
        wave_height_m: modelled_height.max(city.baseline_height),
    })
}

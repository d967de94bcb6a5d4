use crate::engine::physics_constants::SeismicModel;
use crate::errors::ImpactResult;
use crate::utils::validation::{require_finite, require_positive};

/// Seismic energy (J) radiated by an impact of `kinetic_energy` joules.
pub fn compute_seismic_energy(kinetic_energy: f64, model: &SeismicModel) -> ImpactResult<f64> {
    require_positive("kinetic_energy", kinetic_energy)?;
    require_positive("seismic_efficiency", model.efficiency)?;
    Ok(kinetic_energy * model.efficiency)
}

/// Richter-equivalent magnitude from the energy-magnitude relation
/// `log10(E_s) = 1.5·M + 4.8` (E_s in joules).
pub fn compute_seismic_magnitude(kinetic_energy: f64, model: &SeismicModel) -> ImpactResult<f64> {
    let seismic_energy = compute_seismic_energy(kinetic_energy, model)?;
    require_finite(
        "seismic_magnitude",
        model.magnitude_slope * seismic_energy.log10() - model.magnitude_offset,
    )
}

/// Radius (km) within which shaking is felt: `10^(slope·M − offset)`.
pub fn compute_shaking_radius(magnitude: f64, model: &SeismicModel) -> ImpactResult<f64> {
    require_finite("seismic_magnitude", magnitude)?;
    let exponent = model.shaking_radius_slope * magnitude - model.shaking_radius_offset;
    require_positive("shaking_radius", 10f64.powf(exponent))
}

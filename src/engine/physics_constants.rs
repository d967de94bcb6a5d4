use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ImpactResult;
use crate::utils::validation::{require_finite, require_non_negative, require_positive};

/// `coefficient · x^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLaw {
    pub coefficient: f64,
    pub exponent: f64,
}

impl PowerLaw {
    pub const fn new(coefficient: f64, exponent: f64) -> Self {
        PowerLaw {
            coefficient,
            exponent,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }

    pub fn validate(&self, name: &'static str) -> ImpactResult<()> {
        require_positive(name, self.coefficient)?;
        require_finite(name, self.exponent)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyModel {
    pub horizontal_energy_weight: f64,
    pub joules_per_megaton: f64,
    pub hiroshima_yield_megatons: f64,
    pub regional_limit_megatons: f64,
    pub continental_limit_megatons: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        EnergyModel {
            horizontal_energy_weight: HORIZONTAL_ENERGY_WEIGHT,
            joules_per_megaton: JOULES_PER_MEGATON,
            hiroshima_yield_megatons: HIROSHIMA_YIELD_MEGATONS,
            regional_limit_megatons: REGIONAL_IMPACT_LIMIT_MEGATONS,
            continental_limit_megatons: CONTINENTAL_IMPACT_LIMIT_MEGATONS,
        }
    }
}

impl EnergyModel {
    pub fn validate(&self) -> ImpactResult<()> {
        require_non_negative("energy.horizontal_energy_weight", self.horizontal_energy_weight)?;
        require_positive("energy.joules_per_megaton", self.joules_per_megaton)?;
        require_positive("energy.hiroshima_yield_megatons", self.hiroshima_yield_megatons)?;
        require_positive("energy.regional_limit_megatons", self.regional_limit_megatons)?;
        require_positive("energy.continental_limit_megatons", self.continental_limit_megatons)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraterModel {
    pub scaling_coefficient: f64,
    pub gravity_exponent: f64,
    pub density_exponent: f64,
    pub size_exponent: f64,
    pub velocity_exponent: f64,
    pub angle_exponent: f64,
    pub collapse_factor: f64,
    pub diameter_to_depth: f64,
    pub destruction_radius_factor: f64,
}

impl Default for CraterModel {
    fn default() -> Self {
        CraterModel {
            scaling_coefficient: CRATER_SCALING_COEFFICIENT,
            gravity_exponent: CRATER_GRAVITY_EXPONENT,
            density_exponent: CRATER_DENSITY_EXPONENT,
            size_exponent: CRATER_SIZE_EXPONENT,
            velocity_exponent: CRATER_VELOCITY_EXPONENT,
            angle_exponent: CRATER_ANGLE_EXPONENT,
            collapse_factor: CRATER_COLLAPSE_FACTOR,
            diameter_to_depth: CRATER_DIAMETER_TO_DEPTH,
            destruction_radius_factor: DESTRUCTION_RADIUS_FACTOR,
        }
    }
}

impl CraterModel {
    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("crater.scaling_coefficient", self.scaling_coefficient)?;
        require_finite("crater.gravity_exponent", self.gravity_exponent)?;
        require_finite("crater.density_exponent", self.density_exponent)?;
        require_finite("crater.size_exponent", self.size_exponent)?;
        // Zero would break strict growth with impact speed.
        require_positive("crater.velocity_exponent", self.velocity_exponent)?;
        require_finite("crater.angle_exponent", self.angle_exponent)?;
        require_positive("crater.collapse_factor", self.collapse_factor)?;
        require_positive("crater.diameter_to_depth", self.diameter_to_depth)?;
        require_positive("crater.destruction_radius_factor", self.destruction_radius_factor)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeismicModel {
    pub efficiency: f64,
    pub magnitude_slope: f64,
    pub magnitude_offset: f64,
    pub shaking_radius_slope: f64,
    pub shaking_radius_offset: f64,
}

impl Default for SeismicModel {
    fn default() -> Self {
        SeismicModel {
            efficiency: SEISMIC_EFFICIENCY,
            magnitude_slope: SEISMIC_MAGNITUDE_SLOPE,
            magnitude_offset: SEISMIC_MAGNITUDE_OFFSET,
            shaking_radius_slope: SHAKING_RADIUS_SLOPE,
            shaking_radius_offset: SHAKING_RADIUS_OFFSET,
        }
    }
}

impl SeismicModel {
    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("seismic.efficiency", self.efficiency)?;
        require_positive("seismic.magnitude_slope", self.magnitude_slope)?;
        require_finite("seismic.magnitude_offset", self.magnitude_offset)?;
        require_positive("seismic.shaking_radius_slope", self.shaking_radius_slope)?;
        require_finite("seismic.shaking_radius_offset", self.shaking_radius_offset)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastModel {
    pub overpressure_20psi: PowerLaw,
    pub overpressure_5psi: PowerLaw,
    pub overpressure_1psi: PowerLaw,
    pub blast_radius: PowerLaw,
    pub thermal_radius: PowerLaw,
    pub fireball_radius: PowerLaw,
    pub fireball_duration: PowerLaw,
    pub thermal_fluence: PowerLaw,
}

impl Default for BlastModel {
    fn default() -> Self {
        BlastModel {
            overpressure_20psi: PowerLaw::new(OVERPRESSURE_20PSI_COEFFICIENT, OVERPRESSURE_EXPONENT),
            overpressure_5psi: PowerLaw::new(OVERPRESSURE_5PSI_COEFFICIENT, OVERPRESSURE_EXPONENT),
            overpressure_1psi: PowerLaw::new(OVERPRESSURE_1PSI_COEFFICIENT, OVERPRESSURE_EXPONENT),
            blast_radius: PowerLaw::new(BLAST_RADIUS_COEFFICIENT, BLAST_RADIUS_EXPONENT),
            thermal_radius: PowerLaw::new(THERMAL_RADIUS_COEFFICIENT, THERMAL_RADIUS_EXPONENT),
            fireball_radius: PowerLaw::new(FIREBALL_RADIUS_COEFFICIENT, FIREBALL_RADIUS_EXPONENT),
            fireball_duration: PowerLaw::new(
                FIREBALL_DURATION_COEFFICIENT,
                FIREBALL_DURATION_EXPONENT,
            ),
            thermal_fluence: PowerLaw::new(THERMAL_FLUENCE_COEFFICIENT, THERMAL_FLUENCE_EXPONENT),
        }
    }
}

impl BlastModel {
    pub fn validate(&self) -> ImpactResult<()> {
        self.overpressure_20psi.validate("blast.overpressure_20psi")?;
        self.overpressure_5psi.validate("blast.overpressure_5psi")?;
        self.overpressure_1psi.validate("blast.overpressure_1psi")?;
        self.blast_radius.validate("blast.blast_radius")?;
        self.thermal_radius.validate("blast.thermal_radius")?;
        self.fireball_radius.validate("blast.fireball_radius")?;
        self.fireball_duration.validate("blast.fireball_duration")?;
        self.thermal_fluence.validate("blast.thermal_fluence")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsunamiModel {
    pub amplitude_coefficient: f64, // km
    pub diameter_exponent: f64,
    pub velocity_exponent: f64,
    pub depth_exponent: f64,
    pub reference_depth: f64, // m
    pub wavelength_coefficient: f64,
    pub cavity_radius_ratio: f64,
    pub dispersion_per_km: f64,
    pub seawater_density: f64, // kg/m³
}

impl Default for TsunamiModel {
    fn default() -> Self {
        TsunamiModel {
            amplitude_coefficient: TSUNAMI_AMPLITUDE_COEFFICIENT,
            diameter_exponent: TSUNAMI_DIAMETER_EXPONENT,
            velocity_exponent: TSUNAMI_VELOCITY_EXPONENT,
            depth_exponent: TSUNAMI_DEPTH_EXPONENT,
            reference_depth: TSUNAMI_REFERENCE_DEPTH,
            wavelength_coefficient: TSUNAMI_WAVELENGTH_COEFFICIENT,
            cavity_radius_ratio: CAVITY_RADIUS_RATIO,
            dispersion_per_km: TSUNAMI_DISPERSION_PER_KM,
            seawater_density: SEAWATER_DENSITY,
        }
    }
}

impl TsunamiModel {
    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("tsunami.amplitude_coefficient", self.amplitude_coefficient)?;
        require_finite("tsunami.diameter_exponent", self.diameter_exponent)?;
        require_finite("tsunami.velocity_exponent", self.velocity_exponent)?;
        require_finite("tsunami.depth_exponent", self.depth_exponent)?;
        require_positive("tsunami.reference_depth", self.reference_depth)?;
        require_positive("tsunami.wavelength_coefficient", self.wavelength_coefficient)?;
        require_positive("tsunami.cavity_radius_ratio", self.cavity_radius_ratio)?;
        require_non_negative("tsunami.dispersion_per_km", self.dispersion_per_km)?;
        require_positive("tsunami.seawater_density", self.seawater_density)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeflectionModel {
    pub initial_miss_offset_km: f64,
    pub trajectory_shift_factor: f64,
    pub safe_distance_km: f64,
    pub warning_distance_km: f64,
}

impl Default for DeflectionModel {
    fn default() -> Self {
        DeflectionModel {
            initial_miss_offset_km: INITIAL_MISS_OFFSET_KM,
            trajectory_shift_factor: TRAJECTORY_SHIFT_FACTOR,
            safe_distance_km: SAFE_DISTANCE_KM,
            warning_distance_km: WARNING_DISTANCE_KM,
        }
    }
}

impl DeflectionModel {
    pub fn validate(&self) -> ImpactResult<()> {
        require_finite("deflection.initial_miss_offset_km", self.initial_miss_offset_km)?;
        require_non_negative("deflection.trajectory_shift_factor", self.trajectory_shift_factor)?;
        require_finite("deflection.safe_distance_km", self.safe_distance_km)?;
        require_finite("deflection.warning_distance_km", self.warning_distance_km)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    pub gravity: f64, // m/s²
    pub energy: EnergyModel,
    pub crater: CraterModel,
    pub seismic: SeismicModel,
    pub blast: BlastModel,
    pub tsunami: TsunamiModel,
    pub deflection: DeflectionModel,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        PhysicsConstants {
            gravity: GRAVITY,
            energy: EnergyModel::default(),
            crater: CraterModel::default(),
            seismic: SeismicModel::default(),
            blast: BlastModel::default(),
            tsunami: TsunamiModel::default(),
            deflection: DeflectionModel::default(),
        }
    }
}

impl PhysicsConstants {
    /// Rejects coefficients that would let a formula divide by zero or
    /// produce NaN/Infinity from valid inputs.
    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("gravity", self.gravity)?;
        self.energy.validate()?;
        self.crater.validate()?;
        self.seismic.validate()?;
        self.blast.validate()?;
        self.tsunami.validate()?;
        self.deflection.validate()?;
        Ok(())
    }
}

use crate::constants::{IMPACTOR_MASS, IMPACTOR_VELOCITY, MOMENTUM_ENHANCEMENT_BETA};
use crate::errors::ImpactResult;
use crate::utils::units::{cm_per_s_to_m_per_s, seconds_to_years, years_to_seconds};
use crate::utils::validation::{require_non_negative, require_positive};

/// Velocity change applied to the asteroid and how long before the encounter
/// it is applied. Stored in SI units; use [`DeflectionPlan::from_mission_units`]
/// for the cm/s and years a mission planner works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectionPlan {
    pub delta_v: f64,   // m/s
    pub lead_time: f64, // s
}

impl DeflectionPlan {
    pub fn new(delta_v: f64, lead_time: f64) -> Self {
        DeflectionPlan { delta_v, lead_time }
    }

    pub fn from_mission_units(delta_v_cm_per_s: f64, lead_time_years: f64) -> Self {
        DeflectionPlan::new(
            cm_per_s_to_m_per_s(delta_v_cm_per_s),
            years_to_seconds(lead_time_years),
        )
    }

    /// No deflection at all; the body stays on its original trajectory.
    pub fn none(lead_time: f64) -> Self {
        DeflectionPlan::new(0.0, lead_time)
    }

    pub fn lead_time_years(&self) -> f64 {
        seconds_to_years(self.lead_time)
    }

    pub fn validate(&self) -> ImpactResult<()> {
        require_non_negative("delta_v", self.delta_v)?;
        require_non_negative("lead_time", self.lead_time)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticImpactor {
    pub mass: f64,     // kg
    pub velocity: f64, // m/s, relative to the target
    pub beta: f64,     // momentum enhancement from ejecta recoil
}

impl KineticImpactor {
    pub fn new(mass: f64, velocity: f64, beta: f64) -> Self {
        KineticImpactor {
            mass,
            velocity,
            beta,
        }
    }

    pub fn dart() -> Self {
        KineticImpactor::new(IMPACTOR_MASS, IMPACTOR_VELOCITY, MOMENTUM_ENHANCEMENT_BETA)
    }

    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    /// Velocity change (m/s) imparted to a target of `target_mass` kg.
    pub fn delta_v(&self, target_mass: f64) -> ImpactResult<f64> {
        require_positive("impactor_mass", self.mass)?;
        require_positive("impactor_velocity", self.velocity)?;
        require_positive("beta", self.beta)?;
        require_positive("target_mass", target_mass)?;

        Ok(self.beta * self.momentum() / target_mass)
    }
}

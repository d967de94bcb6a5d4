use crate::bodies::deflection::{DeflectionPlan, KineticImpactor};
use crate::bodies::environment::TargetEnvironment;
use crate::bodies::impactor::ImpactorBody;
use crate::effects::blast::{compute_blast_effects, BlastProfile};
use crate::effects::crater::{compute_crater, CraterProfile};
use crate::effects::energy::{
    compute_kinetic_energy, compute_mass, energy_to_megatons, EnergyComparison, ImpactClass,
};
use crate::effects::miss_distance::{compute_miss_distance, threat_level, verdict, ThreatLevel, Verdict};
use crate::effects::seismic::{compute_seismic_magnitude, compute_shaking_radius};
use crate::effects::tsunami::{compute_tsunami, TsunamiProfile};
use crate::engine::outcome::ImpactOutcome;
use crate::engine::physics_constants::PhysicsConstants;
use crate::errors::ImpactResult;
use crate::utils::units::seconds_to_years;
use crate::utils::validation::require_non_negative;

/// Stateless impact calculator. The only state it holds is the immutable
/// coefficient set, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicsEngine {
    constants: PhysicsConstants,
}

impl PhysicsEngine {
    pub fn new(constants: PhysicsConstants) -> ImpactResult<Self> {
        constants.validate()?;
        Ok(PhysicsEngine { constants })
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    pub fn compute_mass(&self, diameter: f64, density: f64) -> ImpactResult<f64> {
        compute_mass(diameter, density)
    }

    pub fn compute_kinetic_energy(&self, mass: f64, velocity: f64, angle: f64) -> ImpactResult<f64> {
        compute_kinetic_energy(mass, velocity, angle, &self.constants.energy)
    }

    pub fn energy_to_megatons(&self, joules: f64) -> f64 {
        energy_to_megatons(joules, &self.constants.energy)
    }

    pub fn compute_crater(
        &self,
        body: &ImpactorBody,
        target_density: f64,
    ) -> ImpactResult<CraterProfile> {
        compute_crater(
            body.diameter,
            body.velocity,
            body.angle,
            body.density,
            target_density,
            self.constants.gravity,
            &self.constants.crater,
        )
    }

    pub fn compute_seismic_magnitude(&self, kinetic_energy: f64) -> ImpactResult<f64> {
        compute_seismic_magnitude(kinetic_energy, &self.constants.seismic)
    }

    pub fn compute_shaking_radius(&self, magnitude: f64) -> ImpactResult<f64> {
        compute_shaking_radius(magnitude, &self.constants.seismic)
    }

    pub fn compute_blast_effects(&self, energy_megatons: f64) -> ImpactResult<BlastProfile> {
        compute_blast_effects(energy_megatons, &self.constants.blast)
    }

    pub fn compute_tsunami(
        &self,
        body: &ImpactorBody,
        environment: &TargetEnvironment,
    ) -> ImpactResult<Option<TsunamiProfile>> {
        compute_tsunami(
            body.diameter,
            body.velocity,
            environment,
            self.constants.gravity,
            &self.constants.tsunami,
        )
    }

    pub fn compute_miss_distance(&self, delta_v: f64, elapsed: f64) -> ImpactResult<f64> {
        compute_miss_distance(delta_v, elapsed, &self.constants.deflection)
    }

    /// Miss distance once the full lead time has run out.
    pub fn predicted_miss_distance(&self, plan: &DeflectionPlan) -> ImpactResult<f64> {
        self.compute_miss_distance(plan.delta_v, plan.lead_time)
    }

    pub fn verdict(&self, miss_distance_km: f64) -> Verdict {
        verdict(miss_distance_km, &self.constants.deflection)
    }

    pub fn threat_level(&self, miss_distance_km: f64) -> ThreatLevel {
        threat_level(miss_distance_km, &self.constants.deflection)
    }

    pub fn kinetic_impactor_delta_v(
        &self,
        impactor: &KineticImpactor,
        target_mass: f64,
    ) -> ImpactResult<f64> {
        impactor.delta_v(target_mass)
    }

    /// Outcome at the encounter, i.e. with the whole lead time elapsed.
    pub fn simulate_impact(
        &self,
        body: &ImpactorBody,
        plan: &DeflectionPlan,
        environment: &TargetEnvironment,
    ) -> ImpactResult<ImpactOutcome> {
        self.simulate_impact_at(body, plan, environment, plan.lead_time)
    }

    /// Outcome as projected after `elapsed` seconds of the plan. Times past
    /// the lead time are treated as the lead time.
    pub fn simulate_impact_at(
        &self,
        body: &ImpactorBody,
        plan: &DeflectionPlan,
        environment: &TargetEnvironment,
        elapsed: f64,
    ) -> ImpactResult<ImpactOutcome> {
        body.validate()?;
        plan.validate()?;
        environment.validate()?;
        let elapsed = require_non_negative("elapsed", elapsed)?.min(plan.lead_time);

        let mass = body.mass()?;
        let kinetic_energy = self.compute_kinetic_energy(mass, body.velocity, body.angle)?;
        let energy_megatons = self.energy_to_megatons(kinetic_energy);

        let crater = match environment {
            TargetEnvironment::Land { target_density } => {
                Some(self.compute_crater(body, *target_density)?)
            }
            TargetEnvironment::Ocean { .. } => None,
        };
        let seismic_magnitude = self.compute_seismic_magnitude(kinetic_energy)?;
        let shaking_radius_km = self.compute_shaking_radius(seismic_magnitude)?;
        let blast = self.compute_blast_effects(energy_megatons)?;
        let tsunami = self.compute_tsunami(body, environment)?;

        let miss_distance_km = self.compute_miss_distance(plan.delta_v, elapsed)?;
        let predicted_miss_distance_km = self.predicted_miss_distance(plan)?;

        Ok(ImpactOutcome {
            target: environment.name(),
            mass_kg: mass,
            kinetic_energy_j: kinetic_energy,
            energy_megatons,
            impact_class: ImpactClass::classify(energy_megatons, &self.constants.energy),
            comparison: EnergyComparison::from_megatons(energy_megatons, &self.constants.energy),
            crater,
            seismic_magnitude,
            shaking_radius_km,
            blast,
            tsunami,
            elapsed_years: seconds_to_years(elapsed),
            miss_distance_km,
            predicted_miss_distance_km,
            threat_level: self.threat_level(miss_distance_km),
            verdict: self.verdict(miss_distance_km),
        })
    }
}

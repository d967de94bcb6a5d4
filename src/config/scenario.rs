use serde::Deserialize;
use tracing::{info, warn};

use crate::bodies::deflection::DeflectionPlan;
use crate::bodies::environment::TargetEnvironment;
use crate::bodies::impactor::ImpactorBody;
use crate::engine::outcome::ImpactOutcome;
use crate::engine::physics_engine::PhysicsEngine;
use crate::errors::{ConfigError, ImpactError, ImpactResult};
use crate::utils::units::years_to_seconds;
use crate::utils::validation::require_non_negative;

/// Deflection as written in a scenario file, in mission units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DeflectionSettings {
    #[serde(default)]
    pub delta_v_cm_per_s: f64,
    pub lead_time_years: f64,
    /// Evaluate partway through the mission; defaults to the full lead time.
    #[serde(default)]
    pub elapsed_years: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default = "ImpactorBody::bennu")]
    pub impactor: ImpactorBody,
    pub deflection: DeflectionSettings,
    pub target: TargetEnvironment,
}

impl Scenario {
    pub fn new(
        name: &str,
        impactor: ImpactorBody,
        deflection: DeflectionSettings,
        target: TargetEnvironment,
    ) -> Self {
        Scenario {
            name: name.to_string(),
            impactor,
            deflection,
            target,
        }
    }

    /// Undeflected Bennu striking the mid-Atlantic.
    pub fn bennu_ocean() -> Self {
        Scenario::new(
            "Bennu - Atlantic Ocean",
            ImpactorBody::bennu(),
            DeflectionSettings {
                delta_v_cm_per_s: 0.0,
                lead_time_years: 10.0,
                elapsed_years: None,
            },
            TargetEnvironment::ocean(),
        )
    }

    /// Undeflected Bennu striking the central United States.
    pub fn bennu_land() -> Self {
        Scenario::new(
            "Bennu - Central USA",
            ImpactorBody::bennu(),
            DeflectionSettings {
                delta_v_cm_per_s: 0.0,
                lead_time_years: 10.0,
                elapsed_years: None,
            },
            TargetEnvironment::land(),
        )
    }

    pub fn with_elapsed_years(mut self, elapsed_years: f64) -> Self {
        self.deflection.elapsed_years = Some(elapsed_years);
        self
    }

    pub fn plan(&self) -> DeflectionPlan {
        DeflectionPlan::from_mission_units(
            self.deflection.delta_v_cm_per_s,
            self.deflection.lead_time_years,
        )
    }

    /// Elapsed mission time in seconds.
    pub fn elapsed(&self) -> f64 {
        years_to_seconds(
            self.deflection
                .elapsed_years
                .unwrap_or(self.deflection.lead_time_years),
        )
    }

    pub fn validate(&self) -> ImpactResult<()> {
        self.impactor.validate()?;
        self.plan().validate()?;
        require_non_negative("elapsed", self.elapsed())?;
        self.target.validate()
    }

    pub fn run(&self, engine: &PhysicsEngine) -> ImpactResult<ImpactOutcome> {
        engine.simulate_impact_at(&self.impactor, &self.plan(), &self.target, self.elapsed())
    }
}

/// Results of running several scenarios through one engine. A rejected
/// scenario does not stop the others.
#[derive(Debug, Default)]
pub struct ScenarioBatch {
    pub completed: Vec<(String, ImpactOutcome)>,
    pub rejected: Vec<(String, ImpactError)>,
}

impl ScenarioBatch {
    pub fn run(engine: &PhysicsEngine, scenarios: &[Scenario]) -> Self {
        let mut batch = ScenarioBatch::default();

        for scenario in scenarios {
            match scenario.run(engine) {
                Ok(outcome) => {
                    info!(
                        scenario = %scenario.name,
                        verdict = ?outcome.verdict,
                        miss_km = outcome.miss_distance_km,
                        "simulation complete"
                    );
                    batch.completed.push((scenario.name.clone(), outcome));
                }
                Err(e) => {
                    warn!(scenario = %scenario.name, error = %e, "simulation rejected");
                    batch.rejected.push((scenario.name.clone(), e));
                }
            }
        }

        batch
    }

    pub fn outcomes(&self) -> Vec<&ImpactOutcome> {
        self.completed.iter().map(|(_, outcome)| outcome).collect()
    }

    pub fn total(&self) -> usize {
        self.completed.len() + self.rejected.len()
    }

    /// Fails when any scenario was rejected.
    pub fn ensure_complete(&self) -> Result<(), ConfigError> {
        if self.rejected.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = self.rejected.iter().map(|(name, _)| name.as_str()).collect();
        Err(ConfigError::RejectedScenarios {
            rejected: self.rejected.len(),
            total: self.total(),
            names: names.join(", "),
        })
    }
}

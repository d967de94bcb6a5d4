pub mod bodies;
pub mod config;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod report_system;
pub mod utils;

pub use constants::*;
pub use bodies::deflection::{DeflectionPlan, KineticImpactor};
pub use bodies::environment::{CoastalCity, TargetEnvironment};
pub use bodies::impactor::ImpactorBody;
pub use errors::{ConfigError, ImpactError, ImpactResult};

// Re-export commonly used items from effects
pub use effects::blast::BlastProfile;
pub use effects::crater::CraterProfile;
pub use effects::energy::{EnergyComparison, ImpactClass};
pub use effects::miss_distance::{ThreatLevel, Verdict};
pub use effects::tsunami::{CityImpact, TsunamiProfile};

// Re-export commonly used items from engine
pub use engine::outcome::ImpactOutcome;
pub use engine::physics_constants::PhysicsConstants;
pub use engine::physics_engine::PhysicsEngine;

// Re-export commonly used items from config and report_system
pub use config::scenario::{Scenario, ScenarioBatch};
pub use report_system::report::ImpactReport;

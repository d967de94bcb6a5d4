use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;
use tracing::{debug, info};

use crate::config::scenario::Scenario;
use crate::engine::physics_constants::PhysicsConstants;
use crate::errors::ConfigError;

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(from_reader(file)?)
}

fn checked_constants(constants: PhysicsConstants) -> Result<PhysicsConstants, ConfigError> {
    constants.validate().map_err(ConfigError::InvalidConstants)?;
    Ok(constants)
}

fn checked(scenario: Scenario) -> Result<Scenario, ConfigError> {
    scenario
        .validate()
        .map_err(|source| ConfigError::InvalidScenario {
            name: scenario.name.clone(),
            source,
        })?;
    Ok(scenario)
}

/// Scenario file, validated before it is returned.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ConfigError> {
    let path = path.as_ref();
    let scenario = checked(read_yaml(path)?)?;
    info!(
        path = %path.display(),
        name = %scenario.name,
        target = scenario.target.name(),
        "loaded scenario"
    );
    Ok(scenario)
}

pub fn parse_scenario(yaml: &str) -> Result<Scenario, ConfigError> {
    checked(serde_yaml::from_str(yaml)?)
}

/// Coefficient overrides; anything missing keeps its default.
pub fn load_constants(path: impl AsRef<Path>) -> Result<PhysicsConstants, ConfigError> {
    let path = path.as_ref();
    let constants = checked_constants(read_yaml(path)?)?;
    info!(path = %path.display(), "loaded physics constants");
    debug!(?constants);
    Ok(constants)
}

pub fn parse_constants(yaml: &str) -> Result<PhysicsConstants, ConfigError> {
    checked_constants(serde_yaml::from_str(yaml)?)
}

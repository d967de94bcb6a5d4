use serde::Deserialize;

use crate::constants::{LAND_TARGET_DENSITY, OCEAN_TARGET_DENSITY, OCEAN_WATER_DEPTH};
use crate::errors::ImpactResult;
use crate::utils::validation::{require_non_negative, require_positive};

// Atlantic impact site at 33°N 65°W: (name, distance km, baseline wave height m)
const ATLANTIC_COASTLINE: [(&str, f64, f64); 6] = [
    ("New York", 1150.0, 15.0),
    ("Boston", 1050.0, 16.0),
    ("Miami", 1400.0, 12.0),
    ("Lisbon", 3200.0, 8.0),
    ("London", 4100.0, 6.0),
    ("West Africa", 4500.0, 5.0),
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoastalCity {
    pub name: String,
    pub distance_km: f64,
    pub baseline_height: f64, // m, floor on the modelled wave height
}

impl CoastalCity {
    pub fn new(name: &str, distance_km: f64, baseline_height: f64) -> Self {
        CoastalCity {
            name: name.to_string(),
            distance_km,
            baseline_height,
        }
    }

    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("distance_km", self.distance_km)?;
        require_non_negative("baseline_height", self.baseline_height)?;
        Ok(())
    }
}

pub fn atlantic_coastline() -> Vec<CoastalCity> {
    ATLANTIC_COASTLINE
        .iter()
        .map(|(name, distance_km, baseline)| CoastalCity::new(name, *distance_km, *baseline))
        .collect()
}

fn default_ocean_density() -> f64 {
    OCEAN_TARGET_DENSITY
}

fn default_water_depth() -> f64 {
    OCEAN_WATER_DEPTH
}

fn default_land_density() -> f64 {
    LAND_TARGET_DENSITY
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TargetEnvironment {
    Ocean {
        #[serde(default = "default_ocean_density")]
        target_density: f64, // kg/m³
        #[serde(default = "default_water_depth")]
        water_depth: f64, // m
        #[serde(default = "atlantic_coastline")]
        coastline: Vec<CoastalCity>,
    },
    Land {
        #[serde(default = "default_land_density")]
        target_density: f64, // kg/m³
    },
}

impl TargetEnvironment {
    /// Deep Atlantic impact with the default coastline.
    pub fn ocean() -> Self {
        TargetEnvironment::Ocean {
            target_density: OCEAN_TARGET_DENSITY,
            water_depth: OCEAN_WATER_DEPTH,
            coastline: atlantic_coastline(),
        }
    }

    /// Continental impact into sedimentary rock.
    pub fn land() -> Self {
        TargetEnvironment::Land {
            target_density: LAND_TARGET_DENSITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetEnvironment::Ocean { .. } => "ocean",
            TargetEnvironment::Land { .. } => "land",
        }
    }

    pub fn is_ocean(&self) -> bool {
        matches!(self, TargetEnvironment::Ocean { .. })
    }

    pub fn target_density(&self) -> f64 {
        match self {
            TargetEnvironment::Ocean { target_density, .. }
            | TargetEnvironment::Land { target_density } => *target_density,
        }
    }

    pub fn water_depth(&self) -> Option<f64> {
        match self {
            TargetEnvironment::Ocean { water_depth, .. } => Some(*water_depth),
            TargetEnvironment::Land { .. } => None,
        }
    }

    pub fn coastline(&self) -> &[CoastalCity] {
        match self {
            TargetEnvironment::Ocean { coastline, .. } => coastline,
            TargetEnvironment::Land { .. } => &[],
        }
    }

    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("target_density", self.target_density())?;
        if let TargetEnvironment::Ocean {
            water_depth,
            coastline,
            ..
        } = self
        {
            require_positive("water_depth", *water_depth)?;
            for city in coastline {
                city.validate()?;
            }
        }
        Ok(())
    }
}

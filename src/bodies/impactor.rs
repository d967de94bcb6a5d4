use serde::{Deserialize, Serialize};

use crate::constants::{
    BENNU_DENSITY, BENNU_DIAMETER, BENNU_IMPACT_ANGLE, BENNU_IMPACT_VELOCITY,
};
use crate::effects::energy::compute_mass;
use crate::errors::ImpactResult;
use crate::utils::validation::{require_impact_angle, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactorBody {
    pub diameter: f64, // m
    pub density: f64,  // kg/m³
    pub velocity: f64, // m/s
    pub angle: f64,    // degrees from horizontal
}

impl ImpactorBody {
    pub fn new(diameter: f64, density: f64, velocity: f64, angle: f64) -> Self {
        ImpactorBody {
            diameter,
            density,
            velocity,
            angle,
        }
    }

    /// 101955 Bennu on its 2182 encounter geometry.
    pub fn bennu() -> Self {
        ImpactorBody::new(
            BENNU_DIAMETER,
            BENNU_DENSITY,
            BENNU_IMPACT_VELOCITY,
            BENNU_IMPACT_ANGLE,
        )
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn mass(&self) -> ImpactResult<f64> {
        compute_mass(self.diameter, self.density)
    }

    pub fn validate(&self) -> ImpactResult<()> {
        require_positive("diameter", self.diameter)?;
        require_positive("density", self.density)?;
        require_positive("velocity", self.velocity)?;
        require_impact_angle("angle", self.angle)?;
        Ok(())
    }
}

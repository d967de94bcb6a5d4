// Every guard also rejects NaN and infinities.

use crate::errors::{ImpactError, ImpactResult};

fn invalid(parameter: &'static str, value: f64, expected: &'static str) -> ImpactError {
    ImpactError::InvalidParameter {
        parameter,
        value,
        expected,
    }
}

pub fn require_positive(parameter: &'static str, value: f64) -> ImpactResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(parameter, value, "a finite value > 0"))
    }
}

pub fn require_non_negative(parameter: &'static str, value: f64) -> ImpactResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(parameter, value, "a finite value >= 0"))
    }
}

pub fn require_finite(parameter: &'static str, value: f64) -> ImpactResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(parameter, value, "a finite value"))
    }
}

/// Impact angle in degrees from horizontal, restricted to (0°, 90°].
pub fn require_impact_angle(parameter: &'static str, degrees: f64) -> ImpactResult<f64> {
    if degrees.is_finite() && degrees > 0.0 && degrees <= 90.0 {
        Ok(degrees)
    } else {
        Err(invalid(parameter, degrees, "an angle in (0, 90] degrees"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("mass", 1.0), Ok(1.0));
        assert!(require_positive("mass", 0.0).is_err());
        assert!(require_positive("mass", -1.0).is_err());
        assert!(require_positive("mass", f64::NAN).is_err());
        assert!(require_positive("mass", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("velocity", 0.0), Ok(0.0));
        assert!(require_non_negative("velocity", -0.1).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("offset", -500.0), Ok(-500.0));
        assert!(require_finite("offset", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_impact_angle_range() {
        assert_eq!(require_impact_angle("angle", 90.0), Ok(90.0));
        assert_eq!(require_impact_angle("angle", 0.5), Ok(0.5));
        assert!(require_impact_angle("angle", 0.0).is_err());
        assert!(require_impact_angle("angle", 90.1).is_err());
        assert!(require_impact_angle("angle", -45.0).is_err());
    }

    #[test]
    fn test_error_names_the_parameter() {
        let err = require_positive("diameter", -3.0).unwrap_err();
        assert_eq!(
            err,
            ImpactError::InvalidParameter {
                parameter: "diameter",
                value: -3.0,
                expected: "a finite value > 0",
            }
        );
        assert!(err.to_string().contains("diameter"));
    }
}

use crate::constants::{JOULES_PER_MEGATON, SECONDS_PER_YEAR};

pub fn cm_per_s_to_m_per_s(cm_per_s: f64) -> f64 {
    cm_per_s / 100.0
}

pub fn m_per_s_to_cm_per_s(m_per_s: f64) -> f64 {
    m_per_s * 100.0
}

pub fn years_to_seconds(years: f64) -> f64 {
    years * SECONDS_PER_YEAR
}

pub fn seconds_to_years(seconds: f64) -> f64 {
    seconds / SECONDS_PER_YEAR
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

pub fn m_per_s_to_km_per_h(m_per_s: f64) -> f64 {
    m_per_s * 3.6
}

pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_velocity_conversions() {
        assert_relative_eq!(cm_per_s_to_m_per_s(25.0), 0.25);
        assert_relative_eq!(m_per_s_to_cm_per_s(0.25), 25.0);
        assert_relative_eq!(m_per_s_to_km_per_h(198.0), 712.8, epsilon = 1e-9);
    }

    #[test]
    fn test_year_is_365_days() {
        assert_eq!(years_to_seconds(1.0), 31_536_000.0);
        assert_relative_eq!(seconds_to_years(years_to_seconds(10.0)), 10.0);
    }

    #[test]
    fn test_one_cm_per_s_for_a_year_drifts_315_km() {
        let drift_km = meters_to_km(cm_per_s_to_m_per_s(1.0) * years_to_seconds(1.0));
        assert_relative_eq!(drift_km, 315.36, epsilon = 1e-9);
        assert_relative_eq!(km_to_meters(drift_km), 315_360.0, epsilon = 1e-6);
    }

    #[test]
    fn test_joules_to_megatons() {
        assert_eq!(joules_to_megatons(4.184e15), 1.0);
        assert_eq!(joules_to_megatons(0.0), 0.0);
    }
}

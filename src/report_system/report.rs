use crate::effects::miss_distance::{ThreatLevel, Verdict};
use crate::engine::outcome::ImpactOutcome;

pub struct ImpactReport {
    pub log: Vec<String>,
    outcomes: Vec<(String, Verdict, ThreatLevel)>,
    max_energy_megatons: f64,
    max_seismic_magnitude: f64,
    min_miss_distance_km: f64,
}

impl ImpactReport {
    pub fn new() -> Self {
        ImpactReport {
            log: Vec::new(),
            outcomes: Vec::new(),
            max_energy_megatons: 0.0,
            max_seismic_magnitude: f64::MIN,
            min_miss_distance_km: f64::MAX,
        }
    }

    fn format_distance(meters: f64) -> String {
        if meters.abs() >= 1000.0 {
            format!("{:.2} km", meters / 1000.0)
        } else {
            format!("{:.2} m", meters)
        }
    }

    fn format_hours(hours: f64) -> String {
        let total_minutes = (hours * 60.0).round();
        if total_minutes >= 60.0 {
            format!(
                "{:.0}h {:.0}m",
                (total_minutes / 60.0).floor(),
                total_minutes % 60.0
            )
        } else {
            format!("{:.0}m", total_minutes)
        }
    }

    fn format_energy(megatons: f64) -> String {
        if megatons >= 1.0 {
            format!("{:.1} Mt TNT", megatons)
        } else {
            format!("{:.1} kt TNT", megatons * 1000.0)
        }
    }

    /// One-line headline in the style of a mission debrief.
    pub fn headline(outcome: &ImpactOutcome) -> String {
        match outcome.verdict {
            Verdict::Safe => format!(
                "Asteroid missed Earth by {:.0} km.",
                outcome.miss_distance_km
            ),
            Verdict::Impact => format!(
                "{} - {} equivalent.",
                outcome.impact_class.description(),
                Self::format_energy(outcome.energy_megatons)
            ),
        }
    }

    pub fn render(name: &str, outcome: &ImpactOutcome) -> String {
        let mut lines = vec![
            format!("Scenario: {} ({} target)", name, outcome.target),
            format!("Outcome: {}", Self::headline(outcome)),
            format!(
                "Miss Distance: {:.0} km (predicted {:.0} km after {:.1} years, {:?})",
                outcome.miss_distance_km,
                outcome.predicted_miss_distance_km,
                outcome.elapsed_years,
                outcome.threat_level
            ),
            format!(
                "Impact Energy: {:.3e} J ({}, {:.0} Hiroshima bombs)",
                outcome.kinetic_energy_j,
                Self::format_energy(outcome.energy_megatons),
                outcome.comparison.hiroshima_equivalents
            ),
            format!(
                "Seismic Magnitude: {:.1}, felt within {:.0} km",
                outcome.seismic_magnitude, outcome.shaking_radius_km
            ),
            format!(
                "Overpressure: 20 psi {:.1} km | 5 psi {:.1} km | 1 psi {:.1} km",
                outcome.blast.overpressure_20psi_km,
                outcome.blast.overpressure_5psi_km,
                outcome.blast.overpressure_1psi_km
            ),
            format!(
                "Thermal: radius {:.1} km, fireball {:.2} km lasting {:.2} s",
                outcome.blast.thermal_radius_km,
                outcome.blast.fireball_radius_km,
                outcome.blast.fireball_duration_s
            ),
        ];

        if let Some(crater) = &outcome.crater {
            lines.push(format!(
                "Crater: {} wide, {} deep, {:.2e} m³ excavated, destruction radius {:.0} km",
                Self::format_distance(crater.diameter_m),
                Self::format_distance(crater.depth_m),
                crater.volume_m3,
                crater.destruction_radius_km
            ));
        }

        if let Some(tsunami) = &outcome.tsunami {
            lines.push(format!(
                "Tsunami: {} initial wave at {:.0} km/h, period {:.1} s",
                Self::format_distance(tsunami.amplitude_m),
                tsunami.velocity_km_h,
                tsunami.period_s
            ));
            for city in &tsunami.cities {
                lines.push(format!(
                    "  {}: arrives in {}, wave {:.1} m",
                    city.name,
                    Self::format_hours(city.arrival_hours),
                    city.wave_height_m
                ));
            }
        }

        lines.join("\n")
    }

    pub fn collect_data(&mut self, name: &str, outcome: &ImpactOutcome) {
        self.max_energy_megatons = self.max_energy_megatons.max(outcome.energy_megatons);
        self.max_seismic_magnitude = self.max_seismic_magnitude.max(outcome.seismic_magnitude);
        self.min_miss_distance_km = self.min_miss_distance_km.min(outcome.miss_distance_km);

        self.log.push(Self::render(name, outcome));
        self.outcomes
            .push((name.to_string(), outcome.verdict, outcome.threat_level));
    }

    pub fn scenario_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn impacts(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, verdict, _)| *verdict == Verdict::Impact)
            .count()
    }

    pub fn display_data(&self) {
        println!("--- Impact Reports ---");
        for entry in &self.log {
            println!("{}\n", entry);
        }
        println!("--- End of Reports ---");

        if self.outcomes.is_empty() {
            return;
        }

        println!("\n--- Summary ---");
        println!("Scenarios: {}", self.scenario_count());
        println!("Impacts: {}", self.impacts());
        println!("Max Energy: {}", Self::format_energy(self.max_energy_megatons));
        println!("Max Seismic Magnitude: {:.1}", self.max_seismic_magnitude);
        println!("Closest Approach: {:.0} km", self.min_miss_distance_km);

        println!("\n--- Verdicts ---");
        for (name, verdict, threat) in &self.outcomes {
            println!("{}: {:?} ({:?})", name, verdict, threat);
        }
    }
}

impl Default for ImpactReport {
    fn default() -> Self {
        Self::new()
    }
}

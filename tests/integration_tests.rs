use std::path::PathBuf;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use impact_physics::config::loader::{load_constants, load_scenario, parse_constants};
use impact_physics::{
    ConfigError, DeflectionPlan, ImpactError, ImpactorBody, PhysicsConstants, PhysicsEngine,
    TargetEnvironment, ThreatLevel, Verdict,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scenario_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file)
}

fn undeflected() -> DeflectionPlan {
    DeflectionPlan::from_mission_units(0.0, 10.0)
}

#[test]
fn test_bennu_land_impact_scenario() {
    let engine = PhysicsEngine::default();
    let outcome = engine
        .simulate_impact(&ImpactorBody::bennu(), &undeflected(), &TargetEnvironment::land())
        .expect("Bennu land strike should simulate");

    assert_eq!(outcome.verdict, Verdict::Impact);
    assert_eq!(outcome.miss_distance_km, -500.0);
    assert!(outcome.tsunami.is_none());

    let crater = outcome.crater.expect("Land strike should produce a crater");
    assert_relative_eq!(crater.diameter_m, 4861.6, max_relative = 0.1);
    assert_relative_eq!(crater.depth_m, crater.diameter_m / 7.8, max_relative = 1e-12);
    assert_abs_diff_eq!(outcome.seismic_magnitude, 7.18, epsilon = 0.3);

    println!(
        "Bennu land: {:.0} Mt, crater {:.0} m, M{:.1}",
        outcome.energy_megatons, crater.diameter_m, outcome.seismic_magnitude
    );
}

#[test]
fn test_bennu_deflected_scenario_is_safe() {
    let engine = PhysicsEngine::default();
    let plan = DeflectionPlan::from_mission_units(25.0, 10.0);
    let outcome = engine
        .simulate_impact(&ImpactorBody::bennu(), &plan, &TargetEnvironment::land())
        .unwrap();

    assert!(outcome.miss_distance_km >= 2000.0);
    assert_eq!(outcome.verdict, Verdict::Safe);
    assert_eq!(outcome.threat_level, ThreatLevel::Clear);
}

#[test]
fn test_tsunami_presence_follows_target() {
    let engine = PhysicsEngine::default();
    let body = ImpactorBody::bennu();
    let ocean = TargetEnvironment::ocean();

    let land_outcome = engine
        .simulate_impact(&body, &undeflected(), &TargetEnvironment::land())
        .unwrap();
    assert!(land_outcome.tsunami.is_none());

    let ocean_outcome = engine.simulate_impact(&body, &undeflected(), &ocean).unwrap();
    let tsunami = ocean_outcome
        .tsunami
        .expect("Ocean strike should produce a tsunami");
    assert_eq!(tsunami.cities.len(), ocean.coastline().len());
}

#[test]
fn test_simulation_is_bit_identical_on_repeat() {
    let engine = PhysicsEngine::default();
    let body = ImpactorBody::new(340.0, 2600.0, 17_500.0, 62.0);
    let plan = DeflectionPlan::from_mission_units(3.5, 7.0);
    let ocean = TargetEnvironment::ocean();

    let first = engine.simulate_impact(&body, &plan, &ocean).unwrap();
    let second = engine.simulate_impact(&body, &plan, &ocean).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.kinetic_energy_j.to_bits(),
        second.kinetic_energy_j.to_bits()
    );
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_kinetic_energy_is_monotone_in_velocity_and_mass() {
    let engine = PhysicsEngine::default();
    let mut rng = StdRng::seed_from_u64(0x5eed_b3aa);

    for _ in 0..200 {
        let mass = rng.gen_range(1.0e6..1.0e13);
        let velocity = rng.gen_range(0.0..70_000.0);
        let angle = rng.gen_range(1.0..=90.0);
        let bump = rng.gen_range(1.0..2.0);

        let base = engine.compute_kinetic_energy(mass, velocity, angle).unwrap();
        let faster = engine
            .compute_kinetic_energy(mass, velocity * bump, angle)
            .unwrap();
        let heavier = engine
            .compute_kinetic_energy(mass * bump, velocity, angle)
            .unwrap();

        assert!(base >= 0.0);
        assert!(faster >= base);
        assert!(heavier >= base);
        assert_eq!(engine.compute_kinetic_energy(mass, 0.0, angle).unwrap(), 0.0);
    }
}

#[test]
fn test_head_on_impact_maximizes_energy() {
    let engine = PhysicsEngine::default();
    let mass = ImpactorBody::bennu().mass().unwrap();
    let head_on = engine.compute_kinetic_energy(mass, 12_400.0, 90.0).unwrap();

    for angle in [5.0, 15.0, 30.0, 45.0, 60.0, 75.0, 89.0] {
        let oblique = engine.compute_kinetic_energy(mass, 12_400.0, angle).unwrap();
        assert!(oblique < head_on, "angle {} should deliver less energy", angle);
    }
}

#[test]
fn test_megatons_match_manual_division() {
    let engine = PhysicsEngine::default();
    let mass = engine.compute_mass(492.0, 1190.0).unwrap();
    let joules = engine.compute_kinetic_energy(mass, 12_400.0, 45.0).unwrap();
    assert_eq!(engine.energy_to_megatons(joules), joules / 4.184e15);
}

#[test]
fn test_bennu_scale_mass() {
    let mass = PhysicsEngine::default().compute_mass(492.0, 1190.0).unwrap();
    assert_relative_eq!(mass, 7.33e10, max_relative = 0.02);
}

#[test]
fn test_crater_strictly_increasing_in_velocity() {
    let engine = PhysicsEngine::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut velocities: Vec<f64> = (0..50).map(|_| rng.gen_range(10.0..72_000.0)).collect();
    velocities.sort_by(|a, b| a.total_cmp(b));
    velocities.dedup();

    let diameters: Vec<f64> = velocities
        .iter()
        .map(|&velocity| {
            let body = ImpactorBody::new(492.0, 1190.0, velocity, 45.0);
            engine.compute_crater(&body, 2500.0).unwrap().diameter_m
        })
        .collect();

    for pair in diameters.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(diameters.iter().all(|&d| d > 0.0));
}

#[test]
fn test_deflection_is_linear_in_delta_v() {
    let engine = PhysicsEngine::default();
    let offset = engine.constants().deflection.initial_miss_offset_km;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let delta_v = rng.gen_range(0.0..0.5);
        let elapsed = rng.gen_range(0.0..3.2e8);
        let single = engine.compute_miss_distance(delta_v, elapsed).unwrap() - offset;
        let double = engine.compute_miss_distance(2.0 * delta_v, elapsed).unwrap() - offset;
        assert_relative_eq!(double, 2.0 * single, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn test_countdown_requery_gives_same_miss_distance() {
    let engine = PhysicsEngine::default();
    let body = ImpactorBody::bennu();
    let plan = DeflectionPlan::from_mission_units(25.0, 10.0);
    let land = TargetEnvironment::land();

    let mut previous = f64::MIN;
    for tenth_year in 0..=100 {
        let elapsed = plan.lead_time * tenth_year as f64 / 100.0;
        let first = engine.simulate_impact_at(&body, &plan, &land, elapsed).unwrap();
        let again = engine.simulate_impact_at(&body, &plan, &land, elapsed).unwrap();

        assert_eq!(first.miss_distance_km, again.miss_distance_km);
        assert!(first.miss_distance_km >= previous);
        previous = first.miss_distance_km;
    }

    let complete = engine.simulate_impact(&body, &plan, &land).unwrap();
    assert_eq!(previous, complete.miss_distance_km);
}

#[test]
fn test_invalid_parameters_fail_fast() {
    let engine = PhysicsEngine::default();

    assert!(matches!(
        engine.compute_kinetic_energy(-1.0, 100.0, 45.0),
        Err(ImpactError::InvalidParameter { parameter: "mass", .. })
    ));
    assert!(matches!(
        engine.compute_seismic_magnitude(0.0),
        Err(ImpactError::InvalidParameter { .. })
    ));
    assert!(engine.compute_blast_effects(0.0).is_err());
    assert!(engine
        .compute_crater(&ImpactorBody::new(492.0, 1190.0, 12_400.0, 95.0), 2500.0)
        .is_err());

    let negative_lead = DeflectionPlan::new(0.1, -1.0);
    assert!(engine
        .simulate_impact(&ImpactorBody::bennu(), &negative_lead, &TargetEnvironment::land())
        .is_err());
}

#[test]
fn test_outcome_json_shape() {
    let engine = PhysicsEngine::default();
    let outcome = engine
        .simulate_impact(&ImpactorBody::bennu(), &undeflected(), &TargetEnvironment::ocean())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();

    assert_eq!(json["verdict"], "impact");
    assert!(json["crater"].is_null());
    assert!(json["energyMegatons"].is_f64());
    assert!(json["seismicMagnitude"].is_f64());
    assert!(json["shakingRadiusKm"].is_f64());
    assert!(json["missDistanceKm"].is_f64());
    assert!(json["blast"]["overpressure20psiKm"].is_f64());
    assert!(json["blast"]["fireballDurationS"].is_f64());
    assert_eq!(json["tsunami"]["cities"].as_array().unwrap().len(), 6);
    assert_eq!(json["tsunami"]["cities"][0]["name"], "New York");
    assert!(json["tsunami"]["cities"][0]["arrivalHours"].is_f64());
    assert!(json["tsunami"]["cities"][0]["waveHeightM"].is_f64());
}

#[test]
fn test_scenario_files_load_and_run() {
    let engine = PhysicsEngine::default();

    let atlantic = load_scenario(scenario_path("bennu_atlantic.yaml")).unwrap();
    let atlantic_outcome = atlantic.run(&engine).unwrap();
    assert!(atlantic_outcome.tsunami.is_some());
    assert_eq!(atlantic_outcome.verdict, Verdict::Impact);

    let deflected = load_scenario(scenario_path("bennu_deflected.yaml")).unwrap();
    assert_eq!(deflected.impactor, ImpactorBody::bennu());
    assert!(deflected.run(&engine).unwrap().is_safe());

    let small = load_scenario(scenario_path("chelyabinsk_class.yaml")).unwrap();
    let small_outcome = small.run(&engine).unwrap();
    assert!(small_outcome.energy_megatons < atlantic_outcome.energy_megatons);
    assert!(small_outcome.crater.is_some());
}

#[test]
fn test_constants_file_overrides_engine() {
    let constants = load_constants(scenario_path("constants.yaml")).unwrap();
    assert_eq!(constants.seismic.efficiency, 1.0e-4);
    assert_eq!(constants.deflection.safe_distance_km, 2500.0);

    let default_engine = PhysicsEngine::default();
    let tuned_engine = PhysicsEngine::new(constants).expect("Tuned constants should be valid");
    let body = ImpactorBody::bennu();
    let land = TargetEnvironment::land();

    let default_outcome = default_engine
        .simulate_impact(&body, &undeflected(), &land)
        .unwrap();
    let tuned_outcome = tuned_engine
        .simulate_impact(&body, &undeflected(), &land)
        .unwrap();

    // Ten times less coupling is two thirds of a magnitude.
    assert_relative_eq!(
        default_outcome.seismic_magnitude - tuned_outcome.seismic_magnitude,
        2.0 / 3.0,
        epsilon = 1e-9
    );
    assert_eq!(default_outcome.crater, tuned_outcome.crater);
}

#[test]
fn test_linear_size_law_constants() {
    let constants = load_constants(scenario_path("literal_constants.yaml")).unwrap();
    let engine = PhysicsEngine::new(constants).expect("Literal constants should be valid");
    let outcome = engine
        .simulate_impact(&ImpactorBody::bennu(), &undeflected(), &TargetEnvironment::land())
        .unwrap();

    let crater = outcome.crater.expect("Land strike should produce a crater");
    assert_relative_eq!(crater.diameter_m, 15_209.0, max_relative = 1e-3);
    assert_eq!(crater.diameter_m, crater.transient_diameter_m);
    assert_relative_eq!(crater.destruction_radius_km, 152.09, max_relative = 1e-3);
    assert_abs_diff_eq!(outcome.seismic_magnitude, -0.32, epsilon = 0.01);
    assert!(outcome.shaking_radius_km.is_finite() && outcome.shaking_radius_km > 0.0);
}

#[test]
fn test_degenerate_constants_never_reach_the_formulas() {
    let yaml = "crater:\n  diameter_to_depth: 0\ntsunami:\n  reference_depth: 0\nenergy:\n  hiroshima_yield_megatons: 0\n";
    assert!(matches!(
        parse_constants(yaml),
        Err(ConfigError::InvalidConstants(_))
    ));

    let mut constants = PhysicsConstants::default();
    constants.energy.hiroshima_yield_megatons = 0.0;
    assert!(PhysicsEngine::new(constants).is_err());
}

#[test]
fn test_every_outcome_field_is_finite() {
    let engine = PhysicsEngine::default();
    let mut rng = StdRng::seed_from_u64(2029);

    for _ in 0..100 {
        let body = ImpactorBody::new(
            rng.gen_range(1.0..20_000.0),
            rng.gen_range(500.0..8_000.0),
            rng.gen_range(1_000.0..72_000.0),
            rng.gen_range(1.0..=90.0),
        );
        let plan = DeflectionPlan::from_mission_units(rng.gen_range(0.0..50.0), 10.0);
        for environment in [TargetEnvironment::land(), TargetEnvironment::ocean()] {
            let outcome = engine.simulate_impact(&body, &plan, &environment).unwrap();
            let json: serde_json::Value =
                serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
            assert!(json["energyMegatons"].as_f64().unwrap().is_finite());
            assert!(outcome.shaking_radius_km.is_finite());
            if let Some(crater) = outcome.crater {
                assert!(crater.destruction_radius_km.is_finite());
            }
        }
    }
}

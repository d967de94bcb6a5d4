// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const JOULES_PER_MEGATON: f64 = 4.184e15; // J per Mt TNT
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0; // s (365-day year)
pub const SEAWATER_DENSITY: f64 = 1025.0; // kg/m³

// Target Environment Defaults
pub const OCEAN_TARGET_DENSITY: f64 = 1000.0; // kg/m³
pub const OCEAN_WATER_DEPTH: f64 = 4000.0; // m, mean Atlantic abyssal plain
pub const LAND_TARGET_DENSITY: f64 = 2500.0; // kg/m³, sedimentary rock

// Reference Body (101955 Bennu)
pub const BENNU_DIAMETER: f64 = 492.0; // m
pub const BENNU_DENSITY: f64 = 1190.0; // kg/m³
pub const BENNU_IMPACT_VELOCITY: f64 = 12_400.0; // m/s
pub const BENNU_IMPACT_ANGLE: f64 = 45.0; // degrees from horizontal

// Energy Model
// Fraction of the tangential kinetic energy coupled into the target.
pub const HORIZONTAL_ENERGY_WEIGHT: f64 = 0.3;
pub const HIROSHIMA_YIELD_MEGATONS: f64 = 0.015; // 15 kt
pub const REGIONAL_IMPACT_LIMIT_MEGATONS: f64 = 100.0;
pub const CONTINENTAL_IMPACT_LIMIT_MEGATONS: f64 = 10_000.0;

// Crater Scaling (Collins, Melosh & Marcus 2005, eq. 21)
pub const CRATER_SCALING_COEFFICIENT: f64 = 1.161;
pub const CRATER_GRAVITY_EXPONENT: f64 = -0.22;
pub const CRATER_DENSITY_EXPONENT: f64 = 1.0 / 3.0;
pub const CRATER_SIZE_EXPONENT: f64 = 0.78;
pub const CRATER_VELOCITY_EXPONENT: f64 = 0.44;
pub const CRATER_ANGLE_EXPONENT: f64 = 1.0 / 3.0;
pub const CRATER_COLLAPSE_FACTOR: f64 = 1.25; // transient -> final rim diameter
pub const CRATER_DIAMETER_TO_DEPTH: f64 = 7.8; // simple craters
pub const DESTRUCTION_RADIUS_FACTOR: f64 = 10.0; // km of devastation per km of crater

// Seismic Model (Gutenberg-Richter energy relation, E in joules)
pub const SEISMIC_EFFICIENCY: f64 = 1.0e-3;
pub const SEISMIC_MAGNITUDE_SLOPE: f64 = 2.0 / 3.0;
pub const SEISMIC_MAGNITUDE_OFFSET: f64 = 3.2;
pub const SHAKING_RADIUS_SLOPE: f64 = 0.5; // log10(km) per magnitude
pub const SHAKING_RADIUS_OFFSET: f64 = 2.0;

// Blast and Thermal Scaling (Glasstone & Dolan nuclear-effects fits, E in Mt)
pub const OVERPRESSURE_20PSI_COEFFICIENT: f64 = 2.2; // km
pub const OVERPRESSURE_5PSI_COEFFICIENT: f64 = 4.6; // km
pub const OVERPRESSURE_1PSI_COEFFICIENT: f64 = 10.4; // km
pub const OVERPRESSURE_EXPONENT: f64 = 0.33; // cube-root scaling
pub const BLAST_RADIUS_COEFFICIENT: f64 = 140.0; // km
pub const BLAST_RADIUS_EXPONENT: f64 = 0.33;
pub const THERMAL_RADIUS_COEFFICIENT: f64 = 0.48; // km
pub const THERMAL_RADIUS_EXPONENT: f64 = 0.41;
pub const FIREBALL_RADIUS_COEFFICIENT: f64 = 0.093; // km
pub const FIREBALL_RADIUS_EXPONENT: f64 = 0.4;
pub const FIREBALL_DURATION_COEFFICIENT: f64 = 0.18; // s
pub const FIREBALL_DURATION_EXPONENT: f64 = 0.33;
pub const THERMAL_FLUENCE_COEFFICIENT: f64 = 5.0;
pub const THERMAL_FLUENCE_EXPONENT: f64 = 0.67;

// Tsunami Model (Ward & Asphaug style impact-wave scaling)
pub const TSUNAMI_AMPLITUDE_COEFFICIENT: f64 = 0.14; // km
pub const TSUNAMI_DIAMETER_EXPONENT: f64 = 0.5;
pub const TSUNAMI_VELOCITY_EXPONENT: f64 = 0.5;
pub const TSUNAMI_DEPTH_EXPONENT: f64 = 0.25;
pub const TSUNAMI_REFERENCE_DEPTH: f64 = 4000.0; // m
pub const TSUNAMI_WAVELENGTH_COEFFICIENT: f64 = 170.0; // m per sqrt(m)
pub const CAVITY_RADIUS_RATIO: f64 = 2.5;
pub const TSUNAMI_DISPERSION_PER_KM: f64 = 1.0e-4;

// Deflection Model
pub const INITIAL_MISS_OFFSET_KM: f64 = -500.0; // undeflected trajectory
// Fraction of the along-track drift (Δv·t) that shows up as B-plane offset.
pub const TRAJECTORY_SHIFT_FACTOR: f64 = 0.1;
pub const SAFE_DISTANCE_KM: f64 = 2000.0;
pub const WARNING_DISTANCE_KM: f64 = -1000.0;

// Kinetic Impactor (DART-class spacecraft)
pub const IMPACTOR_MASS: f64 = 610.0; // kg
pub const IMPACTOR_VELOCITY: f64 = 6600.0; // m/s
pub const MOMENTUM_ENHANCEMENT_BETA: f64 = 3.61;

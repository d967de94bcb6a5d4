pub mod outcome;
pub mod physics_constants;
pub mod physics_engine;

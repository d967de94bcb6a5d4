pub mod blast;
pub mod crater;
pub mod energy;
pub mod miss_distance;
pub mod seismic;
pub mod tsunami;

pub mod units;
pub mod validation;

pub mod deflection;
pub mod environment;
pub mod impactor;

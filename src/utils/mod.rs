pub mod computations;

pub use computations::*;

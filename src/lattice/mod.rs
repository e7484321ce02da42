mod hex;

pub use hex::{generate_atoms, Hex};

use crate::box_::Box_;

/// Equilibrium distance of the coefficientless Lennard-Jones potential
/// V(r) = 1/r^12 - 1/r^6, i.e. 2^(1/6).
pub const R0: f64 = 1.122_462_048_309_373;

pub trait Lattice {
    fn coords_within(&self, box_: &Box_) -> (Vec<f64>, Vec<f64>);
    fn cell_lengths(&self) -> [f64; 2];
}

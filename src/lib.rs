pub mod box_;
pub mod lattice;
pub mod noise;
pub mod utils;

pub use box_::{Box_, Outside};
pub use lattice::{generate_atoms, Hex, Lattice, R0};
pub use noise::add_noise;
pub use utils::{cartesian_to_cell_index, cartesian_to_unit_cell};

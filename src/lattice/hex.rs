use log::debug;

use super::{Lattice, R0};
use crate::box_::Box_;
use crate::noise::add_noise;

/// Two-dimensional hexagonal closest packing with interatomic distance r.
///
/// Generated from a rectangular centered unit cell of width r and height
/// r*sqrt(3), with basis points at (0, 0) and (r/2, r*sqrt(3)/2).
#[derive(Debug)]
pub struct Hex {
    r: f64,
}
impl Hex {
    pub fn new(r: f64) -> Self {
        let s = Self { r };
        s.assert_positive();
        s
    }
    /// Lattice from the target number density, two atoms per unit cell.
    pub fn from_density(rho: f64) -> Self {
        let s = Self {
            r: (2.0 / (rho * 3f64.sqrt())).sqrt(),
        };
        s.assert_positive();
        s
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    fn assert_positive(&self) {
        assert!(
            self.r > 0.0,
            "Interatomic distance should be positive, found {}",
            self.r
        );
    }
}
impl Default for Hex {
    fn default() -> Self {
        Self::new(R0)
    }
}
impl Lattice for Hex {
    fn cell_lengths(&self) -> [f64; 2] {
        [self.r, self.r * 3f64.sqrt()]
    }
    fn coords_within(&self, box_: &Box_) -> (Vec<f64>, Vec<f64>) {
        let [ucx, ucy] = self.cell_lengths();
        // index bounds covering the box, with margin
        let i0 = (box_.xll() / ucx).floor() as i64;
        let i1 = (box_.xur() / ucx).ceil() as i64;
        let j0 = (box_.yll() / ucy).floor() as i64;
        let j1 = (box_.yur() / ucy).ceil() as i64;

        // offset of the second basis point within the cell
        let dxc = 0.5 * self.r;
        let dyc = 0.5 * 3f64.sqrt() * self.r;

        let ncells = ((i1 - i0).max(0) * (j1 - j0).max(0)) as usize;
        let mut x: Vec<f64> = Vec::new();
        let mut y: Vec<f64> = Vec::new();
        x.reserve(2 * ncells);
        y.reserve(2 * ncells);

        for j in j0..j1 {
            let yj = ucy * j as f64;
            let yc = yj + dyc;
            for i in i0..i1 {
                let xi = ucx * i as f64;
                if box_.inside(xi, yj) {
                    x.push(xi);
                    y.push(yj);
                }
                let xc = xi + dxc;
                if box_.inside(xc, yc) {
                    x.push(xc);
                    y.push(yc);
                }
            }
        }
        debug!("kept {} atoms from {} scanned cells", x.len(), ncells);
        (x, y)
    }
}

/// Generate atom positions on a hexagonal closest packing.
///
/// Only positions inside the rectangle with lower left corner (xll, yll),
/// width wx and height wy are kept; the right and top edges are excluded.
/// Atoms come out in scan order: row-major over unit cells, primary basis
/// point before the offset one. When `noise` is given, every atom is
/// displaced by a random offset of at most that amplitude, see
/// [`add_noise`].
///
/// A rectangle containing no lattice point yields two empty vectors.
pub fn generate_atoms(
    xll: f64,
    yll: f64,
    wx: f64,
    wy: f64,
    r: f64,
    noise: Option<f64>,
) -> (Vec<f64>, Vec<f64>) {
    let box_ = Box_::with_size(xll, yll, wx, wy);
    let (mut x, mut y) = Hex::new(r).coords_within(&box_);
    if let Some(amplitude) = noise {
        add_noise(&mut x, &mut y, amplitude);
    }
    (x, y)
}

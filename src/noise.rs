use std::f64::consts::PI;

use rand_distr::{Distribution, Uniform};

/// Displace each atom by a random offset drawn in polar coordinates.
///
/// Per atom, the angle is uniform on [0, 2*pi) and the amplitude uniform
/// on [0, noise), so every displacement is strictly shorter than `noise`.
/// The radial profile is uniform in distance, not in area: amplitudes do
/// not cluster toward the rim the way a uniform disk sample would.
///
/// Mutates `x` and `y` in place. A non-positive `noise` leaves the
/// positions untouched.
pub fn add_noise(x: &mut [f64], y: &mut [f64], noise: f64) {
    if noise <= 0.0 {
        return;
    }
    let mut rng = rand::thread_rng();
    let theta = Uniform::new(0.0, 2.0 * PI);
    let amplitude = Uniform::new(0.0, noise);
    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let t = theta.sample(&mut rng);
        let d = amplitude.sample(&mut rng);
        *xi += t.cos() * d;
        *yi += t.sin() * d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_bounded_by_the_amplitude() {
        let n = 10_000;
        let mut x = vec![0.0; n];
        let mut y = vec![0.0; n];
        add_noise(&mut x, &mut y, 1.0);
        for (xi, yi) in x.iter().zip(y.iter()) {
            let d = (xi * xi + yi * yi).sqrt();
            assert!(d > 0.0);
            assert!(d < 1.0);
        }
    }

    #[test]
    fn zero_amplitude_leaves_positions_alone() {
        let mut x = vec![1.0, 2.0];
        let mut y = vec![3.0, 4.0];
        add_noise(&mut x, &mut y, 0.0);
        assert_eq!(x, vec![1.0, 2.0]);
        assert_eq!(y, vec![3.0, 4.0]);
    }

    #[test]
    fn empty_point_set_is_fine() {
        let mut x: Vec<f64> = Vec::new();
        let mut y: Vec<f64> = Vec::new();
        add_noise(&mut x, &mut y, 0.5);
        assert!(x.is_empty());
    }
}

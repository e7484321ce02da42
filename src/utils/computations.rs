/// Transform Cartesian coordinates into hexagonal unit cell coordinates.
///
/// The unit cell basis vectors are (1, 0) and (1/2, sqrt(3)/2); the
/// result expresses the point in that oblique basis.
pub fn cartesian_to_unit_cell(x: f64, y: f64) -> [f64; 2] {
    // inverse of the basis matrix [[1, 1/2], [0, sqrt(3)/2]]
    let sqrt3 = 3f64.sqrt();
    [x - y / sqrt3, 2.0 * y / sqrt3]
}

/// Indices of the unit cell containing the point (x, y).
pub fn cartesian_to_cell_index(x: f64, y: f64) -> (i64, i64) {
    let [u, v] = cartesian_to_unit_cell(x, y);
    (u.floor() as i64, v.floor() as i64)
}

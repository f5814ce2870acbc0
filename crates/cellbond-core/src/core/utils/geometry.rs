use crate::core::models::lattice::Lattice;
use nalgebra::{Point3, Vector3};

/// Folds fractional components above `tolerance` back by one cell length.
pub fn wrap_fractional(fractional: &Vector3<f64>, tolerance: f64) -> Vector3<f64> {
    fractional.map(|x| if x > tolerance { x - 1.0 } else { x })
}

/// Fractional-weighted sum of the reduced basis vectors (no lattice parameter applied).
pub fn project_to_cartesian(lattice: &Lattice, fractional: &Vector3<f64>) -> Point3<f64> {
    Point3::from(lattice.basis() * fractional)
}

/// Re-centers a reduced Cartesian position across the cell boundary and scales it to
/// physical units.
///
/// Axes are visited in order 0, 1, 2. For each axis the component is compared against
/// `tolerance` times the basis vector's own-axis extent; when it is larger the whole
/// reduced basis vector is subtracted from the position. The component is then scaled
/// by the lattice parameter before the next axis is visited, so a subtraction triggered
/// on a later axis also lands on components that are already scaled.
pub fn recenter_and_scale(lattice: &Lattice, position: &Point3<f64>, tolerance: f64) -> Point3<f64> {
    let mut p = *position;
    for axis in 0..3 {
        if p[axis] > tolerance * lattice.own_axis_extent(axis) {
            p -= *lattice.vector(axis);
        }
        p[axis] *= lattice.parameter();
    }
    p
}

/// Images of base sites 2 and 3 in the neighbouring cells that hold their bonding
/// partners of sites 0 and 1.
///
/// Site 2 moves by `b - a` in x and by `b` in y; site 3 moves by `b` in x and y, where
/// `a` and `b` are the first two basis vectors scaled by the lattice parameter. The z
/// component is never shifted.
pub fn periodic_references(
    lattice: &Lattice,
    site2: &Point3<f64>,
    site3: &Point3<f64>,
) -> [Point3<f64>; 2] {
    let scale = lattice.parameter();
    let a = lattice.vector(0);
    let b = lattice.vector(1);
    [
        site2 + Vector3::new(scale * (b.x - a.x), scale * b.y, 0.0),
        site3 + Vector3::new(scale * b.x, scale * b.y, 0.0),
    ]
}

/// Euclidean distance between two Cartesian positions.
pub fn distance(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    nalgebra::distance(p1, p2)
}

//! Dot placement.

use raylib::prelude::Vector3;

/// Generate `count` points on the z = 0 plane with x and y uniform in
/// `[-spread, spread)`.
pub fn generate_points(count: usize, spread: f32, rng: &mut fastrand::Rng) -> Vec<Vector3> {
    (0..count)
        .map(|_| Vector3 {
            x: (rng.f32() * 2.0 - 1.0) * spread,
            y: (rng.f32() * 2.0 - 1.0) * spread,
            z: 0.0,
        })
        .collect()
}

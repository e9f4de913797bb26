//! Small vector/scalar helpers shared by the force, collision and boundary passes

use crate::simulation::states::NVec2;

/// Euclidean distance between two points
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    (b - a).norm()
}

/// Floor `r` at `min_distance` so an inverse-square law never divides by zero
///
/// A NaN separation is mapped to the floor as well, keeping NaN out of the
/// force buffers.
pub fn guard_distance(r: f64, min_distance: f64) -> f64 {
    if r.is_nan() {
        return min_distance;
    }
    r.max(min_distance)
}

/// Inverse-square magnitude `strength / r²` with `r` floored at `min_distance`
///
/// `strength` is `G` for the unit-mass law and `G * m1 * m2` for the mass-product law.
pub fn inverse_square(strength: f64, r: f64, min_distance: f64) -> f64 {
    let r = guard_distance(r, min_distance);
    strength / (r * r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = NVec2::new(1.0, 2.0);
        let b = NVec2::new(4.0, 6.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn guard_floors_small_and_nan_separations() {
        assert_eq!(guard_distance(0.0, 1.0), 1.0);
        assert_eq!(guard_distance(0.25, 1.0), 1.0);
        assert_eq!(guard_distance(3.0, 1.0), 3.0);
        assert_eq!(guard_distance(f64::NAN, 1.0), 1.0);
    }

    #[test]
    fn inverse_square_at_zero_matches_floor() {
        assert_eq!(inverse_square(0.4, 0.0, 1.0), inverse_square(0.4, 1.0, 1.0));
        assert!((inverse_square(0.4, 100.0, 1.0) - 0.00004).abs() < 1e-15);
    }
}

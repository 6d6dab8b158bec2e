//! Decides how many interpolation steps a Cartesian displacement needs.

use nalgebra::Vector3;

/// Number of interpolation steps for a displacement: one step per millimeter
/// or degree of the dominant axis of motion, with a floor of 1 so that a zero
/// displacement still produces exactly one waypoint (the target itself).
///
/// Tying trajectory density to the physical motion magnitude bounds both the
/// waypoint count and the per-step deviation.
pub fn path_resolution(translation_mm: &Vector3<f64>, rotation_deg: &Vector3<f64>) -> usize {
    let dominant = translation_mm.norm().max(rotation_deg.norm());
    (dominant.floor() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_displacement_still_one_step() {
        assert_eq!(path_resolution(&Vector3::zeros(), &Vector3::zeros()), 1);
        assert_eq!(
            path_resolution(&Vector3::new(0.4, 0.0, 0.0), &Vector3::zeros()),
            1
        );
    }

    #[test]
    fn test_one_step_per_millimeter() {
        assert_eq!(
            path_resolution(&Vector3::new(10.0, 0.0, 0.0), &Vector3::zeros()),
            10
        );
        assert_eq!(
            path_resolution(&Vector3::new(3.0, 4.0, 0.0), &Vector3::zeros()),
            5
        );
    }

    #[test]
    fn test_rotation_can_dominate() {
        assert_eq!(
            path_resolution(&Vector3::new(2.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, 45.0)),
            45
        );
    }

    #[test]
    fn test_monotone_in_dominant_magnitude() {
        let mut previous = 0;
        for i in 0..200 {
            let magnitude = i as f64 * 0.75;
            let steps = path_resolution(&Vector3::new(magnitude, 0.0, 0.0), &Vector3::zeros());
            assert!(steps >= 1);
            assert!(steps >= previous, "steps decreased at magnitude {}", magnitude);
            previous = steps;
        }
    }
}

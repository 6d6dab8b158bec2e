//! Rotation composition on intrinsic X-Y-Z Euler angles, expressed in degrees.
//!
//! Euler angles are the exchange format of motion requests; composition is
//! carried out on unit quaternions so that chained operations do not
//! accumulate gimbal error. The rotation order is fixed: X, then Y, then Z,
//! each about the body's own (already rotated) axis.

use nalgebra::{UnitQuaternion, Vector3};

/// Builds the rotation from intrinsic X-Y-Z Euler angles in degrees.
pub fn quat_from_euler_deg(euler_deg: &Vector3<f64>) -> UnitQuaternion<f64> {
    let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), euler_deg.x.to_radians());
    let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), euler_deg.y.to_radians());
    let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), euler_deg.z.to_radians());
    qx * qy * qz
}

/// Extracts intrinsic X-Y-Z Euler angles in degrees from a rotation.
///
/// For the matrix R = Rx(a) Ry(b) Rz(c) the element r13 equals sin(b); the
/// remaining angles follow from the first row and last column. At the
/// b = ±90° singularity only the sum (respectively difference) of a and c is
/// defined; c is reported as zero there.
pub fn euler_deg_from_quat(rotation: &UnitQuaternion<f64>) -> Vector3<f64> {
    let m = rotation.to_rotation_matrix();
    let m = m.matrix();

    let sin_b = m[(0, 2)].clamp(-1.0, 1.0);
    let b = sin_b.asin();
    if sin_b.abs() < 1.0 - 1e-9 {
        let a = (-m[(1, 2)]).atan2(m[(2, 2)]);
        let c = (-m[(0, 1)]).atan2(m[(0, 0)]);
        Vector3::new(a.to_degrees(), b.to_degrees(), c.to_degrees())
    } else if sin_b > 0.0 {
        // b = 90°: r21 = sin(a + c), r22 = cos(a + c)
        let a = m[(1, 0)].atan2(m[(1, 1)]);
        Vector3::new(a.to_degrees(), b.to_degrees(), 0.0)
    } else {
        // b = -90°: r21 = sin(c - a), r22 = cos(c - a)
        let a = -m[(1, 0)].atan2(m[(1, 1)]);
        Vector3::new(a.to_degrees(), b.to_degrees(), 0.0)
    }
}

/// Returns the rotation equivalent to applying `a`, then `b` in the frame
/// already rotated by `a`. Non-commutative.
pub fn compose(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    a * b
}

/// Rotates a 3-vector.
pub fn apply(rotation: &UnitQuaternion<f64>, vector: &Vector3<f64>) -> Vector3<f64> {
    rotation.transform_vector(vector)
}

/// Brings a relative angle into `(-180, 180]`, modelling an angular difference
/// as the shortest signed rotation. Idempotent: a value already in range is
/// returned unchanged.
pub fn normalize_relative_degrees(mut angle: f64) -> f64 {
    while angle <= -180.0 {
        angle += 360.0;
    }
    while angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Per-axis [`normalize_relative_degrees`] over a relative Euler triple.
pub fn normalize_relative_euler(delta_deg: &Vector3<f64>) -> Vector3<f64> {
    delta_deg.map(normalize_relative_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_into_range() {
        assert_eq!(normalize_relative_degrees(370.0), 10.0);
        assert_eq!(normalize_relative_degrees(-200.0), 160.0);
        assert_eq!(normalize_relative_degrees(180.0), 180.0);
        assert_eq!(normalize_relative_degrees(-180.0), 180.0);
        assert_eq!(normalize_relative_degrees(720.0), 0.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for angle in [-725.0, -180.0, -179.9, 0.0, 10.0, 180.0, 359.0, 1234.5] {
            let once = normalize_relative_degrees(angle);
            assert!(once > -180.0 && once <= 180.0, "{} out of range", once);
            assert_eq!(normalize_relative_degrees(once), once);
        }
    }

    #[test]
    fn test_euler_roundtrip() {
        let cases = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(30.0, 0.0, 0.0),
            Vector3::new(10.0, 20.0, 30.0),
            Vector3::new(-45.0, 60.0, 170.0),
            Vector3::new(179.0, -80.0, -179.0),
        ];
        for euler in cases {
            let restored = euler_deg_from_quat(&quat_from_euler_deg(&euler));
            assert!(
                (restored - euler).norm() < 1e-9,
                "expected {:?}, got {:?}",
                euler,
                restored
            );
        }
    }

    #[test]
    fn test_euler_gimbal_lock() {
        let euler = Vector3::new(25.0, 90.0, 40.0);
        let q = quat_from_euler_deg(&euler);
        let restored = euler_deg_from_quat(&q);
        // The representation collapses to (a + c, 90, 0) but the rotation
        // itself must survive the roundtrip.
        let q2 = quat_from_euler_deg(&restored);
        assert!(q.angle_to(&q2).to_degrees() < 1e-6);
        assert!((restored.y - 90.0).abs() < 1e-9);
        assert!((restored.x - 65.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_rotates_vector() {
        // 90 degrees about Z maps X onto Y.
        let q = quat_from_euler_deg(&Vector3::new(0.0, 0.0, 90.0));
        let rotated = apply(&q, &Vector3::new(1.0, 0.0, 0.0));
        assert!((rotated - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_compose_order_matters() {
        let x90 = quat_from_euler_deg(&Vector3::new(90.0, 0.0, 0.0));
        let z90 = quat_from_euler_deg(&Vector3::new(0.0, 0.0, 90.0));
        let xz = compose(&x90, &z90);
        let zx = compose(&z90, &x90);
        assert!(xz.angle_to(&zx).to_degrees() > 1.0);

        // Applying a then b: b acts in the frame already rotated by a.
        let v = Vector3::new(1.0, 0.0, 0.0);
        let expected = apply(&x90, &apply(&z90, &v));
        assert!((apply(&xz, &v) - expected).norm() < 1e-9);
    }
}

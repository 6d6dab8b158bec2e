//! Helper functions

use crate::motion_traits::Joints;

/// Checks if all elements of a goal vector are finite.
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

/// Joint values in degrees, formatted for log output.
pub fn format_joints(joints: &Joints) -> String {
    let mut row_str = String::new();
    for joint_idx in 0..6 {
        row_str.push_str(&format!("{:5.2} ", joints[joint_idx]));
    }
    format!("[{}]", row_str.trim_end())
}

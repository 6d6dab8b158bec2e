//! Builds an absolute joint-angle target from a joint request.

use crate::goal::JointMove;
use crate::motion_error::MotionError;
use crate::motion_traits::Joints;

/// Resolves a joint request into an absolute 6-joint target in degrees.
///
/// An absolute request is used verbatim and consults no current state at
/// all. A relative request adds its per-joint delta to the observed joint
/// angles and fails with `NoTelemetry` when none have been observed yet.
/// Joint angles are deliberately not normalized here; joint limits and
/// wraparound are the planner's concern.
pub fn resolve_joint_target(
    request: &JointMove,
    current_deg: Option<&Joints>,
) -> Result<Joints, MotionError> {
    if request.target.len() != 6 {
        return Err(MotionError::InvalidDimension {
            expected: 6,
            found: request.target.len(),
        });
    }
    let mut target = [0.0; 6];
    target.copy_from_slice(&request.target);
    if request.relative {
        let current = current_deg.ok_or(MotionError::NoTelemetry)?;
        for (joint, angle) in target.iter_mut().zip(current) {
            *joint += angle;
        }
    }
    Ok(target)
}

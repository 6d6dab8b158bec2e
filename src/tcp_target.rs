//! Builds one or more absolute flange poses from a TCP request.
//!
//! The commanded point is the tool center point, offset from the flange by
//! the request's tool offset. The planner works on flange poses, so every
//! produced waypoint compensates the offset with the rotation interpolated at
//! that step: `flange = tcp − rotation · tool_offset`.
//!
//! Four cases, selected by the `(relative, linear)` pair of the request:
//! absolute point, absolute linear, relative point, relative linear. Relative
//! motion is expressed in the arm's current local frame, not the world frame.
//! All math here is in millimeters and degrees.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

use crate::goal::TcpMove;
use crate::motion_error::MotionError;
use crate::motion_traits::Pose;
use crate::resolution::path_resolution;
use crate::rotation;
use crate::waypoints::{Waypoint, WaypointFlags};

/// Resolves a TCP request against the current pose into a non-empty waypoint
/// sequence ending in the fully resolved target. Point moves produce exactly
/// one waypoint; linear moves produce one waypoint per millimeter or degree
/// of the dominant displacement, approaching the target monotonically.
pub fn resolve_tcp_waypoints(
    request: &TcpMove,
    current: &Pose,
) -> Result<Vec<Waypoint>, MotionError> {
    let (target_translation, target_euler) = split_target(&request.target)?;
    let tool_offset = tool_vector(&request.tool_offset)?;

    let waypoints = if request.relative {
        let current_rotation = current.rotation;
        let current_tcp = current.translation.vector + rotation::apply(&current_rotation, &tool_offset);
        if request.linear {
            // The relative motion itself is subdivided into equal fractional
            // sub-motions, each composed onto the current frame.
            let steps = path_resolution(&target_translation, &target_euler);
            let mut sequence = Vec::with_capacity(steps);
            for i in 0..steps {
                let fraction = (i + 1) as f64 / steps as f64;
                let tcp_position = current_tcp
                    + rotation::apply(&current_rotation, &(target_translation * fraction));
                let tcp_rotation = rotation::compose(
                    &current_rotation,
                    &rotation::quat_from_euler_deg(&(target_euler * fraction)),
                );
                sequence.push(flange_waypoint(
                    &tcp_position,
                    &tcp_rotation,
                    &tool_offset,
                    step_flags(i + 1, steps),
                ));
            }
            sequence
        } else {
            let tcp_position = current_tcp + rotation::apply(&current_rotation, &target_translation);
            let tcp_rotation = rotation::compose(
                &current_rotation,
                &rotation::quat_from_euler_deg(&target_euler),
            );
            vec![flange_waypoint(
                &tcp_position,
                &tcp_rotation,
                &tool_offset,
                WaypointFlags::TARGET,
            )]
        }
    } else {
        let target_rotation = rotation::quat_from_euler_deg(&target_euler);
        if request.linear {
            let current_position = current.translation.vector;
            let current_euler = rotation::euler_deg_from_quat(&current.rotation);
            let goal_euler = rotation::euler_deg_from_quat(&target_rotation);
            // Shortest signed rotation per axis, so the sweep never goes the
            // long way around.
            let relative_euler = rotation::normalize_relative_euler(&(goal_euler - current_euler));
            let translation_delta = target_translation - current_position;
            let steps = path_resolution(&translation_delta, &relative_euler);
            let mut sequence = Vec::with_capacity(steps);
            for i in 0..steps {
                // Remaining fraction is subtracted from the target, so the
                // last waypoint is exactly the target.
                let remaining = (steps - i - 1) as f64 / steps as f64;
                let sub_position = target_translation - translation_delta * remaining;
                let sub_rotation =
                    rotation::quat_from_euler_deg(&(goal_euler - relative_euler * remaining));
                sequence.push(flange_waypoint(
                    &sub_position,
                    &sub_rotation,
                    &tool_offset,
                    step_flags(i + 1, steps),
                ));
            }
            sequence
        } else {
            vec![flange_waypoint(
                &target_translation,
                &target_rotation,
                &tool_offset,
                WaypointFlags::TARGET,
            )]
        }
    };

    Ok(waypoints)
}

/// Flange pose for a commanded TCP position: the offset is subtracted after
/// rotating it by the orientation at this step, not the final one.
fn flange_waypoint(
    tcp_position: &Vector3<f64>,
    tcp_rotation: &UnitQuaternion<f64>,
    tool_offset: &Vector3<f64>,
    flags: WaypointFlags,
) -> Waypoint {
    let flange = tcp_position - rotation::apply(tcp_rotation, tool_offset);
    Waypoint::new(
        Isometry3::from_parts(Translation3::from(flange), *tcp_rotation),
        flags,
    )
}

fn step_flags(step: usize, steps: usize) -> WaypointFlags {
    if step == steps {
        WaypointFlags::TARGET
    } else {
        WaypointFlags::INTERPOLATED
    }
}

fn split_target(target: &[f64]) -> Result<(Vector3<f64>, Vector3<f64>), MotionError> {
    if target.len() != 6 {
        return Err(MotionError::InvalidDimension {
            expected: 6,
            found: target.len(),
        });
    }
    Ok((
        Vector3::new(target[0], target[1], target[2]),
        Vector3::new(target[3], target[4], target[5]),
    ))
}

fn tool_vector(tool_offset: &[f64]) -> Result<Vector3<f64>, MotionError> {
    if tool_offset.len() != 3 {
        return Err(MotionError::InvalidDimension {
            expected: 3,
            found: tool_offset.len(),
        });
    }
    Ok(Vector3::new(tool_offset[0], tool_offset[1], tool_offset[2]))
}

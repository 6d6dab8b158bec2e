//! Telemetry snapshots arriving from the arm.

use crate::motion_traits::Joints;

/// Names of the six joints, base to wrist, as used in the planner-unit joint
/// state.
pub const JOINT_NAMES: [&str; 6] = [
    "shoulder_1_joint",
    "shoulder_2_joint",
    "elbow_joint",
    "wrist_1_joint",
    "wrist_2_joint",
    "wrist_3_joint",
];

/// One telemetry tick from the arm. Arrival cadence is uncontrolled; the most
/// recent sample overwrites the previous one and is always read as a whole,
/// so position and velocity never tear.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    /// Arm controller timestamp, seconds.
    pub timestamp_s: f64,
    /// Joint angles, degrees.
    pub joint_angles: Joints,
    /// Joint velocities, degrees per second.
    pub joint_velocities: Joints,
    /// Joint torques, as reported by the arm.
    pub joint_torques: Joints,
}

/// The latest telemetry converted to the planner's angular unit, with a
/// monotonically increasing sequence id, for collaborators that republish
/// joint state.
#[derive(Debug, Clone)]
pub struct JointState {
    pub seq: u64,
    pub timestamp_s: f64,
    pub names: [&'static str; 6],
    /// Radians.
    pub positions: Joints,
    /// Radians per second.
    pub velocities: Joints,
    pub efforts: Joints,
}

impl TelemetrySample {
    /// Planner-unit joint state for this sample.
    pub fn to_joint_state(&self, seq: u64) -> JointState {
        JointState {
            seq,
            timestamp_s: self.timestamp_s,
            names: JOINT_NAMES,
            positions: self.joint_angles.map(f64::to_radians),
            velocities: self.joint_velocities.map(f64::to_radians),
            efforts: self.joint_torques,
        }
    }
}

//! Motion goal resolution and waypoint interpolation for 6 axis robotic arms.
//!
//! This crate converts high level motion requests (move joints, move the tool
//! center point) into concrete geometric targets an external trajectory planner
//! can consume, and tracks the execution lifecycle of each request so a caller
//! can observe progress and completion.
//!
//! A request is classified along two independent axes: joint space versus
//! Cartesian space, and absolute versus relative to the current pose. Cartesian
//! linear moves are subdivided into a distance proportional sequence of
//! intermediate poses (one interpolation step per millimeter or degree of the
//! dominant axis of motion), with the tool offset compensated at every step.
//! The computed plan is then checked against a conformity threshold before
//! execution, and a per-kind goal channel reports feedback on every telemetry
//! tick until the goal reaches a terminal state.
//!
//! # Features
//!
//! - Joint goals, absolute or relative to the current joint angles.
//! - TCP goals in all four (relative, linear) combinations, with per waypoint
//!   tool offset compensation so the flange target is always recoverable.
//! - Rotation composition on intrinsic X-Y-Z Euler angles (degrees), carried
//!   internally as unit quaternions to avoid gimbal error accumulation.
//! - Angular differences normalized into `(-180, 180]` so relative linear
//!   interpolation never sweeps the long way around.
//! - Plan acceptance against a fixed conformity threshold, with diagnostic
//!   shortfall reporting on rejection.
//! - Per kind goal lifecycle (one joint and one Cartesian goal may execute
//!   concurrently), preemption atomic with respect to telemetry ticks.
//!
//! Millimeters and degrees are used internally; conversion to the planner's
//! native units (meters, radians) happens exactly once, at the
//! [`motion_traits::TrajectoryPlanner`] seam.

pub mod motion_traits;

pub mod motion_error;

pub mod rotation;

pub mod resolution;

pub mod goal;

pub mod joint_target;

pub mod tcp_target;

pub mod waypoints;

pub mod acceptance;

pub mod telemetry;

pub mod lifecycle;

pub mod controller;

pub mod utils;

#[cfg(test)]
mod tests;

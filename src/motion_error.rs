//! Error handling for motion goal resolution.

use crate::goal::GoalKind;

/// Unified error for failures that are detected before any planning attempt.
/// These are surfaced synchronously to the caller; no goal handle is created
/// for a request that fails with any of them.
#[derive(Debug)]
pub enum MotionError {
    /// A goal vector did not have the expected number of elements.
    InvalidDimension { expected: usize, found: usize },
    /// A goal vector contained NaN or infinite values.
    NonFiniteValue(String),
    /// A goal of this kind was submitted before the first telemetry tick
    /// activated its channel.
    NotActivated(GoalKind),
    /// A relative joint goal was submitted while no joint state has been
    /// observed yet.
    NoTelemetry,
}

impl std::fmt::Display for MotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            MotionError::InvalidDimension { expected, found } =>
                write!(f, "Invalid dimension: expected {}, found {}", expected, found),
            MotionError::NonFiniteValue(ref what) =>
                write!(f, "Non-finite value in {}", what),
            MotionError::NotActivated(kind) =>
                write!(f, "{:?} goal channel not activated yet, no telemetry received", kind),
            MotionError::NoTelemetry =>
                write!(f, "No joint state observed yet"),
        }
    }
}

impl std::error::Error for MotionError {}

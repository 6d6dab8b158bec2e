//! Motion requests, the input side of goal resolution.
//!
//! A request is a tagged union over the two goal channels. It is validated
//! once, before any resolution or planning, and is immutable afterwards.

use crate::motion_error::MotionError;
use crate::utils;

/// The two independent goal channels. At most one goal of each kind is
/// outstanding at any time; the kinds execute concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    Joints,
    Tcp,
}

/// Request to move the six joints. Angles in degrees; if `relative`, the
/// target is a per-joint delta added to the current joint angles.
#[derive(Debug, Clone)]
pub struct JointMove {
    pub target: Vec<f64>,
    pub relative: bool,
}

/// Request to move the tool center point. `target` is 3 translation values in
/// millimeters followed by 3 intrinsic X-Y-Z Euler angles in degrees;
/// `tool_offset` is the translation from the flange to the TCP in the flange
/// frame. `linear` requests a straight interpolated path instead of leaving
/// the path to the planner.
#[derive(Debug, Clone)]
pub struct TcpMove {
    pub target: Vec<f64>,
    pub tool_offset: Vec<f64>,
    pub relative: bool,
    pub linear: bool,
}

/// A motion request, resolved via its discriminant rather than runtime type
/// inspection.
#[derive(Debug, Clone)]
pub enum MotionGoal {
    Joints(JointMove),
    Tcp(TcpMove),
}

impl MotionGoal {
    pub fn kind(&self) -> GoalKind {
        match self {
            MotionGoal::Joints(_) => GoalKind::Joints,
            MotionGoal::Tcp(_) => GoalKind::Tcp,
        }
    }

    /// Rejects malformed requests before any planning attempt: wrong vector
    /// lengths and non-finite values.
    pub fn validate(&self) -> Result<(), MotionError> {
        match self {
            MotionGoal::Joints(joint_move) => {
                expect_len(&joint_move.target, 6)?;
                expect_finite(&joint_move.target, "joint target")?;
            }
            MotionGoal::Tcp(tcp_move) => {
                expect_len(&tcp_move.target, 6)?;
                expect_len(&tcp_move.tool_offset, 3)?;
                expect_finite(&tcp_move.target, "TCP target")?;
                expect_finite(&tcp_move.tool_offset, "tool offset")?;
            }
        }
        Ok(())
    }
}

fn expect_len(values: &[f64], expected: usize) -> Result<(), MotionError> {
    if values.len() != expected {
        return Err(MotionError::InvalidDimension {
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

fn expect_finite(values: &[f64], what: &str) -> Result<(), MotionError> {
    if !utils::all_finite(values) {
        return Err(MotionError::NonFiniteValue(what.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_goals_pass() {
        let joints = MotionGoal::Joints(JointMove {
            target: vec![0.0; 6],
            relative: true,
        });
        assert!(joints.validate().is_ok());

        let tcp = MotionGoal::Tcp(TcpMove {
            target: vec![100.0, 0.0, 0.0, 0.0, 0.0, 45.0],
            tool_offset: vec![0.0, 0.0, 50.0],
            relative: false,
            linear: true,
        });
        assert!(tcp.validate().is_ok());
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let joints = MotionGoal::Joints(JointMove {
            target: vec![0.0; 5],
            relative: false,
        });
        match joints.validate() {
            Err(MotionError::InvalidDimension { expected: 6, found: 5 }) => {}
            other => panic!("unexpected: {:?}", other),
        }

        let tcp = MotionGoal::Tcp(TcpMove {
            target: vec![0.0; 6],
            tool_offset: vec![0.0, 0.0],
            relative: false,
            linear: false,
        });
        match tcp.validate() {
            Err(MotionError::InvalidDimension { expected: 3, found: 2 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let joints = MotionGoal::Joints(JointMove {
            target: vec![0.0, f64::NAN, 0.0, 0.0, 0.0, 0.0],
            relative: false,
        });
        assert!(matches!(
            joints.validate(),
            Err(MotionError::NonFiniteValue(_))
        ));
    }
}

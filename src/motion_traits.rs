extern crate nalgebra as na;

use na::Isometry3;

use crate::acceptance::PlanOutcome;
use crate::controller::MotionSettings;

/// Pose of the robot flange or TCP: Cartesian position plus rotation
/// quaternion.
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let pose = Pose::from_parts(translation, rotation);
/// ```
/// Resolution and interpolation keep translation in millimeters; poses cross
/// the [`TrajectoryPlanner`] boundary in the planner's native meters.
pub type Pose = Isometry3<f64>;

/// Angles of the 6 joints. Degrees on the resolution side of the boundary,
/// radians on the planner side.
pub type Joints = [f64; 6];

/// The external planning and execution collaborator. It answers pose queries,
/// turns resolved targets into trajectories, and runs them on the arm. All
/// values crossing this trait are in the planner's native units: meters for
/// translation, radians for angles.
///
/// The planner does not call back into this crate; completion is reported by
/// whoever drives the executor, via
/// [`MotionController::complete`](crate::controller::MotionController::complete).
pub trait TrajectoryPlanner {
    /// Opaque trajectory artifact produced by planning and consumed by
    /// [`execute`](Self::execute). Never inspected by this crate.
    type Trajectory;

    /// Current pose of the arm as known to the planner's kinematic model.
    fn current_pose(&self) -> Pose;

    /// Plan towards an absolute joint configuration.
    fn plan_joint_target(&self, target: &Joints) -> PlanOutcome<Self::Trajectory>;

    /// Plan towards a single pose target (point-to-point motion, the planner
    /// chooses the path).
    fn plan_pose_target(&self, target: &Pose) -> PlanOutcome<Self::Trajectory>;

    /// Plan a Cartesian path through the given waypoints, reporting in
    /// [`PlanOutcome::fraction`] how much of the path could be traced.
    fn plan_waypoints(&self, waypoints: &[Pose]) -> PlanOutcome<Self::Trajectory>;

    /// Hand a planned trajectory over for execution.
    fn execute(&self, trajectory: Self::Trajectory);

    /// Receive updated motion tuning parameters. The core does not interpret
    /// them; they only flow through to the planner.
    fn apply_settings(&self, settings: &MotionSettings);
}

//! Scripted planner collaborator for scenario tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::acceptance::PlanOutcome;
use crate::controller::MotionSettings;
use crate::motion_traits::{Joints, Pose, TrajectoryPlanner};

/// Planner that records what it was asked to plan and answers with a scripted
/// outcome. Units at this boundary are meters and radians, as for the real
/// collaborator.
pub struct MockPlanner {
    pub pose: Mutex<Pose>,
    /// Conformity reported for waypoint plans.
    pub fraction: Mutex<f64>,
    /// Failure reason for point plans; `None` means success.
    pub failure: Mutex<Option<String>>,
    pub last_joint_target: Mutex<Option<Joints>>,
    pub last_waypoints: Mutex<Vec<Pose>>,
    pub last_pose_target: Mutex<Option<Pose>>,
    pub last_settings: Mutex<Option<MotionSettings>>,
    pub executions: AtomicUsize,
}

impl MockPlanner {
    pub fn new(pose: Pose) -> Self {
        MockPlanner {
            pose: Mutex::new(pose),
            fraction: Mutex::new(1.0),
            failure: Mutex::new(None),
            last_joint_target: Mutex::new(None),
            last_waypoints: Mutex::new(Vec::new()),
            last_pose_target: Mutex::new(None),
            last_settings: Mutex::new(None),
            executions: AtomicUsize::new(0),
        }
    }

    fn point_outcome(&self) -> PlanOutcome<u32> {
        match self.failure.lock().unwrap().clone() {
            None => PlanOutcome::succeeded(42),
            Some(reason) => PlanOutcome::failed(reason),
        }
    }
}

impl TrajectoryPlanner for MockPlanner {
    type Trajectory = u32;

    fn current_pose(&self) -> Pose {
        *self.pose.lock().unwrap()
    }

    fn plan_joint_target(&self, target: &Joints) -> PlanOutcome<u32> {
        *self.last_joint_target.lock().unwrap() = Some(*target);
        self.point_outcome()
    }

    fn plan_pose_target(&self, target: &Pose) -> PlanOutcome<u32> {
        *self.last_pose_target.lock().unwrap() = Some(*target);
        self.point_outcome()
    }

    fn plan_waypoints(&self, waypoints: &[Pose]) -> PlanOutcome<u32> {
        *self.last_waypoints.lock().unwrap() = waypoints.to_vec();
        PlanOutcome::traced(*self.fraction.lock().unwrap(), 42)
    }

    fn execute(&self, _trajectory: u32) {
        self.executions.fetch_add(1, Ordering::Relaxed);
    }

    fn apply_settings(&self, settings: &MotionSettings) {
        *self.last_settings.lock().unwrap() = Some(settings.clone());
    }
}

//! Ties goal validation, resolution, plan acceptance and the execution
//! lifecycle together around a [`TrajectoryPlanner`] collaborator.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Isometry3;
use tracing::{debug, warn};

use crate::acceptance::{self, PlanOutcome};
use crate::goal::{GoalKind, MotionGoal};
use crate::joint_target::resolve_joint_target;
use crate::lifecycle::{Feedback, GoalId, GoalResult, GoalState, GoalTracker};
use crate::motion_error::MotionError;
use crate::motion_traits::{Joints, Pose, TrajectoryPlanner};
use crate::tcp_target::resolve_tcp_waypoints;
use crate::telemetry::{JointState, TelemetrySample};
use crate::utils;

const MM_PER_M: f64 = 1000.0;

/// Motion tuning parameters, reconfigurable at runtime. The core does not
/// interpret them; they flow through to the planner on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSettings {
    pub precise_positioning: bool,
    pub acceleration_duration_s: f64,
    pub speed_multiplier: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        MotionSettings {
            precise_positioning: false,
            acceleration_duration_s: 0.2,
            speed_multiplier: 1.0,
        }
    }
}

/// Front door of the crate: accepts motion requests, resolves them into
/// targets, runs them through plan acceptance and tracks their lifecycle.
///
/// Resolution is synchronous and pure; the only shared state is the latest
/// telemetry snapshot and the goal channels, each behind its own lock, so
/// submission and telemetry ticks may race freely.
pub struct MotionController<P: TrajectoryPlanner> {
    planner: P,
    tracker: GoalTracker,
    latest: Mutex<Option<TelemetrySample>>,
    seq: AtomicU64,
    settings: Mutex<MotionSettings>,
}

impl<P: TrajectoryPlanner> MotionController<P> {
    pub fn new(planner: P) -> Self {
        MotionController {
            planner,
            tracker: GoalTracker::new(),
            latest: Mutex::new(None),
            seq: AtomicU64::new(0),
            settings: Mutex::new(MotionSettings::default()),
        }
    }

    /// Telemetry tick from the arm. Overwrites the current snapshot as a
    /// whole, activates the goal channels on first arrival, and returns the
    /// feedback events for every executing goal.
    pub fn on_telemetry(&self, sample: TelemetrySample) -> Vec<Feedback> {
        self.seq.fetch_add(1, Ordering::Relaxed);
        *self.latest.lock().unwrap() = Some(sample.clone());
        self.tracker.on_tick(&sample)
    }

    /// Latest telemetry in planner units, with its sequence id, for
    /// collaborators that republish joint state.
    pub fn latest_joint_state(&self) -> Option<JointState> {
        let latest = self.latest.lock().unwrap();
        latest
            .as_ref()
            .map(|sample| sample.to_joint_state(self.seq.load(Ordering::Relaxed)))
    }

    /// Submits a motion request: validate, resolve into absolute targets,
    /// plan, evaluate, and either hand the trajectory to the executor or
    /// abort with a diagnostic. Malformed requests fail synchronously, before
    /// any goal handle exists. An accepted request preempts the outstanding
    /// goal of the same kind.
    pub fn submit(&self, goal: MotionGoal) -> Result<GoalId, MotionError> {
        goal.validate()?;
        match goal {
            MotionGoal::Joints(request) => {
                let current_deg = self.current_joints();
                let target_deg = resolve_joint_target(&request, current_deg.as_ref())?;
                let id = self.tracker.begin(GoalKind::Joints)?;
                debug!("{} target: {}", id, utils::format_joints(&target_deg));

                let target_rad = target_deg.map(f64::to_radians);
                let outcome = self.planner.plan_joint_target(&target_rad);
                self.dispatch(GoalKind::Joints, id, outcome, false)
            }
            MotionGoal::Tcp(request) => {
                let current_pose = pose_from_planner(&self.planner.current_pose());
                let waypoints = resolve_tcp_waypoints(&request, &current_pose)?;
                let id = self.tracker.begin(GoalKind::Tcp)?;
                debug!("{} resolved into {} waypoint(s)", id, waypoints.len());

                let poses: Vec<Pose> = waypoints
                    .iter()
                    .map(|waypoint| pose_to_planner(&waypoint.pose))
                    .collect();
                let outcome = if request.linear {
                    self.planner.plan_waypoints(&poses)
                } else {
                    self.planner.plan_pose_target(&poses[0])
                };
                self.dispatch(GoalKind::Tcp, id, outcome, request.linear)
            }
        }
    }

    /// Completion signal from the external executor.
    pub fn complete(&self, kind: GoalKind, success: bool, diagnostic: Option<String>) {
        let terminal = if success {
            GoalState::Succeeded
        } else {
            GoalState::Aborted
        };
        self.tracker.finish(kind, terminal, diagnostic);
    }

    /// External cancellation: the outstanding goal of this kind becomes
    /// `Preempted` immediately. Waypoints already handed to the planner are
    /// not retracted; the physical stop is the executor's concern.
    pub fn cancel(&self, kind: GoalKind) {
        self.tracker.finish(kind, GoalState::Preempted, None);
    }

    /// Drains terminal results, resetting the finished channels to idle.
    pub fn take_results(&self) -> Vec<GoalResult> {
        self.tracker.take_results()
    }

    /// State of the outstanding goal of a kind, if any.
    pub fn current_goal(&self, kind: GoalKind) -> Option<(GoalId, GoalState)> {
        self.tracker.current(kind)
    }

    /// Updates the motion tuning parameters and forwards them to the planner.
    pub fn reconfigure(&self, settings: MotionSettings) {
        self.planner.apply_settings(&settings);
        *self.settings.lock().unwrap() = settings;
    }

    pub fn settings(&self) -> MotionSettings {
        self.settings.lock().unwrap().clone()
    }

    /// The planner collaborator this controller was built around.
    pub fn planner(&self) -> &P {
        &self.planner
    }

    fn dispatch(
        &self,
        kind: GoalKind,
        id: GoalId,
        outcome: PlanOutcome<P::Trajectory>,
        traced_path: bool,
    ) -> Result<GoalId, MotionError> {
        match acceptance::evaluate_plan(&outcome, traced_path) {
            Ok(()) => match outcome.trajectory {
                Some(trajectory) => {
                    self.tracker.mark_executing(kind);
                    self.planner.execute(trajectory);
                    Ok(id)
                }
                None => {
                    let diagnostic = "planner accepted but returned no trajectory".to_string();
                    warn!("Could not start {}: {}", id, diagnostic);
                    self.tracker.finish(kind, GoalState::Aborted, Some(diagnostic));
                    Ok(id)
                }
            },
            Err(diagnostic) => {
                warn!("Could not plan {}: {}", id, diagnostic);
                self.tracker.finish(kind, GoalState::Aborted, Some(diagnostic));
                Ok(id)
            }
        }
    }

    fn current_joints(&self) -> Option<Joints> {
        self.latest
            .lock()
            .unwrap()
            .as_ref()
            .map(|sample| sample.joint_angles)
    }
}

/// Millimeters to the planner's meters. The sole place translation units are
/// converted on the way out.
pub(crate) fn pose_to_planner(pose: &Pose) -> Pose {
    Isometry3::from_parts((pose.translation.vector / MM_PER_M).into(), pose.rotation)
}

/// The planner's meters to internal millimeters, on the way in.
pub(crate) fn pose_from_planner(pose: &Pose) -> Pose {
    Isometry3::from_parts((pose.translation.vector * MM_PER_M).into(), pose.rotation)
}

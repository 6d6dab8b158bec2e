//! Per-request execution lifecycle, driven by goal submission on one side and
//! the external telemetry tick on the other.
//!
//! Each goal kind owns one channel. A channel activates once, on the first
//! telemetry tick, modelling "wait until telemetry is flowing before
//! accepting goals". From then on it carries at most one handle at a time:
//! a new request of the same kind preempts the outstanding one. Each channel
//! sits behind its own mutex, so a tick observes either the old handle fully
//! or the new handle fully, never a half-replaced state.

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::goal::GoalKind;
use crate::motion_error::MotionError;
use crate::telemetry::TelemetrySample;

/// Lifecycle of a single goal. Terminal states are surfaced through
/// [`GoalResult`]; consuming the result returns the channel to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalState {
    Idle,
    Started,
    Executing,
    Succeeded,
    Aborted,
    Preempted,
}

impl GoalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GoalState::Succeeded | GoalState::Aborted | GoalState::Preempted
        )
    }
}

/// Identifier of an in-flight request, unique across both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalId(pub u64);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal #{}", self.0)
    }
}

/// The one handle a channel carries while a request is in flight.
#[derive(Debug, Clone)]
pub struct GoalHandle {
    pub id: GoalId,
    pub kind: GoalKind,
    pub state: GoalState,
    pub last_feedback: Option<TelemetrySample>,
}

/// Progress event, re-emitted with the latest known arm state on every
/// telemetry tick while a goal is executing. The tick is the sole progress
/// mechanism; there is no independent timer.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub goal_id: GoalId,
    pub kind: GoalKind,
    pub sample: TelemetrySample,
}

/// Terminal outcome of a goal, queued until the caller drains it.
#[derive(Debug, Clone)]
pub struct GoalResult {
    pub goal_id: GoalId,
    pub kind: GoalKind,
    pub state: GoalState,
    pub diagnostic: Option<String>,
}

#[derive(Default)]
struct Channel {
    activated: bool,
    handle: Option<GoalHandle>,
}

/// Owns the two goal channels and the queue of terminal results.
#[derive(Default)]
pub struct GoalTracker {
    next_id: AtomicU64,
    joints: Mutex<Channel>,
    tcp: Mutex<Channel>,
    results: Mutex<Vec<GoalResult>>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn channel(&self, kind: GoalKind) -> &Mutex<Channel> {
        match kind {
            GoalKind::Joints => &self.joints,
            GoalKind::Tcp => &self.tcp,
        }
    }

    /// Telemetry tick: activates channels on first arrival and re-emits
    /// feedback for every executing goal.
    pub fn on_tick(&self, sample: &TelemetrySample) -> Vec<Feedback> {
        let mut feedback = Vec::new();
        for kind in [GoalKind::Joints, GoalKind::Tcp] {
            let mut channel = self.channel(kind).lock().unwrap();
            if !channel.activated {
                channel.activated = true;
                debug!("{:?} goal channel activated", kind);
            }
            if let Some(handle) = channel.handle.as_mut() {
                if handle.state == GoalState::Executing {
                    handle.last_feedback = Some(sample.clone());
                    feedback.push(Feedback {
                        goal_id: handle.id,
                        kind,
                        sample: sample.clone(),
                    });
                }
            }
        }
        feedback
    }

    /// Registers a new goal on its channel, preempting any outstanding one.
    /// The preempted handle is abandoned, not joined; its terminal record is
    /// queued for the caller.
    pub fn begin(&self, kind: GoalKind) -> Result<GoalId, MotionError> {
        let mut channel = self.channel(kind).lock().unwrap();
        if !channel.activated {
            return Err(MotionError::NotActivated(kind));
        }
        if let Some(previous) = channel.handle.take() {
            if !previous.state.is_terminal() {
                warn!("{} preempted by a new {:?} request", previous.id, kind);
                self.push_result(GoalResult {
                    goal_id: previous.id,
                    kind,
                    state: GoalState::Preempted,
                    diagnostic: None,
                });
            }
        }
        let id = GoalId(self.next_id.fetch_add(1, Ordering::Relaxed));
        channel.handle = Some(GoalHandle {
            id,
            kind,
            state: GoalState::Started,
            last_feedback: None,
        });
        debug!("{} started on {:?} channel", id, kind);
        Ok(id)
    }

    /// The goal was accepted by plan evaluation and handed to the executor.
    pub fn mark_executing(&self, kind: GoalKind) {
        let mut channel = self.channel(kind).lock().unwrap();
        if let Some(handle) = channel.handle.as_mut() {
            handle.state = GoalState::Executing;
        }
    }

    /// Moves the outstanding goal of this kind to a terminal state and queues
    /// its result. The channel returns to idle; the handle is destroyed.
    pub fn finish(&self, kind: GoalKind, terminal: GoalState, diagnostic: Option<String>) {
        debug_assert!(terminal.is_terminal());
        let mut channel = self.channel(kind).lock().unwrap();
        if let Some(handle) = channel.handle.take() {
            debug!("{} finished as {:?}", handle.id, terminal);
            self.push_result(GoalResult {
                goal_id: handle.id,
                kind,
                state: terminal,
                diagnostic,
            });
        }
    }

    /// State of the outstanding goal, if any.
    pub fn current(&self, kind: GoalKind) -> Option<(GoalId, GoalState)> {
        let channel = self.channel(kind).lock().unwrap();
        channel.handle.as_ref().map(|handle| (handle.id, handle.state))
    }

    pub fn is_activated(&self, kind: GoalKind) -> bool {
        self.channel(kind).lock().unwrap().activated
    }

    /// Drains queued terminal results, consuming them on behalf of the
    /// caller.
    pub fn take_results(&self) -> Vec<GoalResult> {
        std::mem::take(&mut *self.results.lock().unwrap())
    }

    fn push_result(&self, result: GoalResult) {
        self.results.lock().unwrap().push(result);
    }
}

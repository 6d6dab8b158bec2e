//! Decides whether a planner's reported outcome is acceptable.

/// Minimum fraction of a requested Cartesian path the planner must trace for
/// the plan to be accepted. Fixed policy constant; a lower fraction means the
/// motion is rejected rather than partially executed.
pub const MIN_PLAN_CONFORMITY: f64 = 0.95;

/// What the planner reports back for a single planning attempt. Owned
/// transiently; the trajectory is opaque and handed straight to the executor
/// on acceptance.
pub struct PlanOutcome<T> {
    /// Unconditional success, as reported for joint and single-pose goals.
    pub success: bool,
    /// Fraction of the requested path traced, in [0, 1]. Only meaningful for
    /// waypoint (linear) plans.
    pub fraction: f64,
    pub trajectory: Option<T>,
    /// Symbolic failure reason, when the planner gives one.
    pub reason: Option<String>,
}

impl<T> PlanOutcome<T> {
    pub fn succeeded(trajectory: T) -> Self {
        PlanOutcome {
            success: true,
            fraction: 1.0,
            trajectory: Some(trajectory),
            reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        PlanOutcome {
            success: false,
            fraction: 0.0,
            trajectory: None,
            reason: Some(reason.into()),
        }
    }

    pub fn traced(fraction: f64, trajectory: T) -> Self {
        PlanOutcome {
            success: true,
            fraction,
            trajectory: Some(trajectory),
            reason: None,
        }
    }
}

/// Accept or reject a plan. Multi-waypoint (traced path) outcomes are judged
/// by conformity against [`MIN_PLAN_CONFORMITY`], inclusive at the boundary;
/// everything else by the planner's unconditional success flag. On rejection
/// the returned diagnostic carries the shortfall or the planner's own reason.
/// Retry policy belongs to the caller.
pub fn evaluate_plan<T>(outcome: &PlanOutcome<T>, traced_path: bool) -> Result<(), String> {
    if traced_path {
        if outcome.fraction >= MIN_PLAN_CONFORMITY {
            Ok(())
        } else {
            Err(format!(
                "could not trace pose goal, deviation was {}",
                1.0 - outcome.fraction
            ))
        }
    } else if outcome.success {
        Ok(())
    } else {
        Err(outcome
            .reason
            .clone()
            .unwrap_or_else(|| "planner reported failure".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conformity_boundary_is_inclusive() {
        let at_threshold: PlanOutcome<()> = PlanOutcome::traced(0.95, ());
        assert!(evaluate_plan(&at_threshold, true).is_ok());

        let just_below: PlanOutcome<()> = PlanOutcome::traced(0.9499, ());
        let diagnostic = evaluate_plan(&just_below, true).unwrap_err();
        assert!(diagnostic.contains("deviation"), "{}", diagnostic);
    }

    #[test]
    fn test_point_goals_judged_by_success_flag() {
        let ok: PlanOutcome<()> = PlanOutcome::succeeded(());
        assert!(evaluate_plan(&ok, false).is_ok());

        // A poor fraction is irrelevant for point goals.
        let odd: PlanOutcome<()> = PlanOutcome {
            success: true,
            fraction: 0.1,
            trajectory: Some(()),
            reason: None,
        };
        assert!(evaluate_plan(&odd, false).is_ok());

        let failed: PlanOutcome<()> = PlanOutcome::failed("GOAL_IN_COLLISION");
        assert_eq!(
            evaluate_plan(&failed, false).unwrap_err(),
            "GOAL_IN_COLLISION"
        );
    }
}

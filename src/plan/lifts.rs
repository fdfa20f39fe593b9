//! Lift sub-type assignment.

use crate::plan::types::{Goal, Schedule};

/// Lift focus for a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftType {
    FullBody,
    UpperBody,
    LowerBody,
}

impl LiftType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            LiftType::FullBody => "Full Body",
            LiftType::UpperBody => "Upper Body",
            LiftType::LowerBody => "Lower Body",
        }
    }
}

impl std::fmt::Display for LiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sub-types for the week's lift sessions, in day order.
pub fn lift_plan(num_lifts: usize, goal: Goal) -> Vec<LiftType> {
    use LiftType::*;

    match (num_lifts, goal) {
        (3, Goal::Running) => vec![UpperBody, LowerBody, UpperBody],
        (4, Goal::Strength) => vec![UpperBody, LowerBody, UpperBody, LowerBody],
        _ => vec![FullBody; num_lifts],
    }
}

/// Description written for a lift day.
pub fn lift_description(lift: LiftType) -> String {
    format!("Lift: {}, 3-4 exercises, moderate weights", lift)
}

/// Rewrite every day whose description mentions "Lift" with a specific
/// lift sub-type.
///
/// Any lift wording already on the day (e.g. "Total Body Lift") is replaced.
pub fn assign_lift_details(mut schedule: Schedule, goal: Goal) -> Schedule {
    let lift_days = schedule.days_matching("Lift");
    let plan = lift_plan(lift_days.len(), goal);

    for (i, day) in lift_days.into_iter().enumerate() {
        schedule.set(day, lift_description(plan[i % plan.len()]));
    }

    tracing::debug!(lifts = plan.len(), %goal, "Assigned lift details");

    schedule
}

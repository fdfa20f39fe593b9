//! Plan generation pipeline.
//!
//! Validates the athlete's inputs, then runs the base template through goal
//! adjustment, rest-day scheduling and lift detailing.

use rand::Rng;
use serde::Serialize;

use crate::plan::catalog::{self, MINDSET_TIPS};
use crate::plan::goals::adjust_for_goal;
use crate::plan::lifts::assign_lift_details;
use crate::plan::scheduler::build_weekly_schedule;
use crate::plan::types::{ExperienceLevel, Goal, PlanError, Schedule};

/// Validated inputs for one weekly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanRequest {
    experience: ExperienceLevel,
    days_available: u8,
    goal: Goal,
}

impl PlanRequest {
    /// Create a request, rejecting a day count outside the experience level's
    /// selectable range.
    pub fn new(
        experience: ExperienceLevel,
        days_available: u8,
        goal: Goal,
    ) -> Result<Self, PlanError> {
        let range = experience.training_days();
        if !range.contains(&days_available) {
            return Err(PlanError::DaysOutOfRange {
                experience,
                days: days_available,
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(Self {
            experience,
            days_available,
            goal,
        })
    }

    /// Create a request with the fewest training days for the level.
    pub fn with_default_days(experience: ExperienceLevel, goal: Goal) -> Self {
        Self {
            experience,
            days_available: experience.default_training_days(),
            goal,
        }
    }

    pub fn experience(&self) -> ExperienceLevel {
        self.experience
    }

    pub fn days_available(&self) -> u8 {
        self.days_available
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

/// Build the weekly schedule for a request.
pub fn generate(request: &PlanRequest) -> Result<Schedule, PlanError> {
    tracing::debug!(
        experience = %request.experience,
        days = request.days_available,
        goal = %request.goal,
        "Generating weekly plan"
    );

    let base = catalog::base_template(request.experience);
    let adjusted = adjust_for_goal(&base, request.experience, request.goal);
    tracing::debug!(template = ?adjusted, "Adjusted template for goal");

    let schedule = build_weekly_schedule(&adjusted, request.days_available)?;
    Ok(assign_lift_details(schedule, request.goal))
}

/// Pick a mindset tip uniformly at random.
pub fn pick_tip<R: Rng>(rng: &mut R) -> &'static str {
    MINDSET_TIPS[rng.random_range(0..MINDSET_TIPS.len())]
}

//! Weekly plan construction.

pub mod catalog;
pub mod generator;
pub mod goals;
pub mod lifts;
pub mod scheduler;
pub mod types;

pub use generator::{generate, pick_tip, PlanRequest};
pub use goals::adjust_for_goal;
pub use lifts::{assign_lift_details, LiftType};
pub use scheduler::build_weekly_schedule;
pub use types::{
    Day, ExperienceLevel, Goal, PlanError, Schedule, ScheduledDay, WorkoutType, DAYS_PER_WEEK,
};

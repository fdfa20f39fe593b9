//! Static workout catalog.
//!
//! Descriptions for each workout type, the base weekly template for each
//! experience level, and the mindset tips appended to exported plans.

use crate::plan::types::{ExperienceLevel, WorkoutType};

/// Catalog key for recovery days.
pub const RECOVERY: &str = "Optional Recovery";

/// Text used for a rest day if the catalog has no recovery entry.
pub const RECOVERY_FALLBACK: &str = "Rest / Optional Recovery";

/// Workout type to display description.
pub const WORKOUT_DETAILS: &[(&str, &str)] = &[
    (
        "Easy Run",
        "Easy Run: 30-40 min easy jog, maintain conversational pace",
    ),
    (
        "Speed Work",
        "Speed Work: 20-30 min intervals, 1-2 min fast / 1-2 min easy recovery",
    ),
    (
        "Long Run",
        "Long Run: 60-90 min steady pace, build endurance",
    ),
    (
        "Lift",
        "Lift: Upper or Lower or Full-body split, 3-4 exercises, moderate weights",
    ),
    (
        "Total Body Lift",
        "Total Body Lift: 1 set each of push, pull, legs, core, light weights",
    ),
    (
        "Zone 2",
        "Zone 2 Cardio: 20-50 min easy steady state (walk, bike, jog)",
    ),
    (
        "Optional Zone 2",
        "Optional Zone 1/2 Cardio: 20-40 min easy walking or light movement",
    ),
    (
        RECOVERY,
        "Optional Recovery: mobility work, stretching, or light walk",
    ),
];

const BEGINNER_TEMPLATE: &[&str] = &["Easy Run", "Total Body Lift", "Zone 2", RECOVERY];
const INTERMEDIATE_TEMPLATE: &[&str] = &["Lift", "Run", "Lift", "Run", "Optional Zone 2"];
const ADVANCED_TEMPLATE: &[&str] = &["Lift", "Run", "Lift", "Run", "Lift", "Zone 2"];

/// Short motivational lines, one of which is attached to each plan.
pub const MINDSET_TIPS: &[&str] = &[
    "Consistency beats intensity.",
    "Focus on the next right step, not the next twelve.",
    "Build the habit, then build the volume.",
    "Progress is better than perfection.",
    "Small, steady gains stack into big results.",
];

/// Catalog description for a workout type, if it has one.
pub fn description(workout: &str) -> Option<&'static str> {
    WORKOUT_DETAILS
        .iter()
        .find(|(name, _)| *name == workout)
        .map(|(_, text)| *text)
}

/// Catalog description for a workout type, or the identifier itself.
pub fn describe(workout: &WorkoutType) -> String {
    description(workout.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| workout.to_string())
}

/// Description used for rest days.
pub fn recovery_description() -> &'static str {
    description(RECOVERY).unwrap_or(RECOVERY_FALLBACK)
}

/// Raw template identifiers for an experience level.
pub fn template_names(experience: ExperienceLevel) -> &'static [&'static str] {
    match experience {
        ExperienceLevel::Beginner => BEGINNER_TEMPLATE,
        ExperienceLevel::Intermediate => INTERMEDIATE_TEMPLATE,
        ExperienceLevel::Advanced => ADVANCED_TEMPLATE,
    }
}

/// Base weekly template for an experience level.
pub fn base_template(experience: ExperienceLevel) -> Vec<WorkoutType> {
    template_names(experience)
        .iter()
        .map(|name| WorkoutType::from(*name))
        .collect()
}

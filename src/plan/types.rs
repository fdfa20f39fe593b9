//! Plan types and enums.
//!
//! Experience levels, training goals, day names, workout identifiers and the
//! seven-day schedule produced by the planner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Number of days in a planned week.
pub const DAYS_PER_WEEK: usize = 7;

/// Training experience of the athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// High training volume
    Advanced,
}

impl ExperienceLevel {
    /// All experience levels in selection order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Lowercase identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Selectable training days per week for this level.
    pub fn training_days(&self) -> RangeInclusive<u8> {
        match self {
            ExperienceLevel::Beginner => 3..=4,
            ExperienceLevel::Intermediate => 4..=5,
            ExperienceLevel::Advanced => 5..=6,
        }
    }

    /// Fewest training days for this level, used when none is given.
    pub fn default_training_days(&self) -> u8 {
        *self.training_days().start()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(PlanError::UnknownExperience(s.to_string())),
        }
    }
}

/// Training goal for the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Balanced general fitness
    #[default]
    General,
    /// Mixed running and lifting
    Hybrid,
    /// Running focus
    Running,
    /// Lifting focus
    Strength,
}

impl Goal {
    /// All goals in selection order.
    pub const ALL: [Goal; 4] = [Goal::General, Goal::Hybrid, Goal::Running, Goal::Strength];

    /// Lowercase identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::General => "general",
            Goal::Hybrid => "hybrid",
            Goal::Running => "running",
            Goal::Strength => "strength",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Goal::General),
            "hybrid" => Ok(Goal::Hybrid),
            "running" => Ok(Goal::Running),
            "strength" => Ok(Goal::Strength),
            _ => Err(PlanError::UnknownGoal(s.to_string())),
        }
    }
}

/// Day of the planned week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Days in schedule order.
    pub const ALL: [Day; DAYS_PER_WEEK] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Display name of the day.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Workout placeholder in a template, e.g. "Easy Run" or "Lift".
///
/// Doubles as the catalog key for the workout's description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutType(String);

impl WorkoutType {
    /// Create a workout type from its identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier contains `needle` anywhere.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl From<&str> for WorkoutType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for WorkoutType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WorkoutType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One day of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDay {
    /// Day of the week
    pub day: Day,
    /// Workout description shown to the athlete
    pub workout: String,
}

/// A full week of workouts, one entry per day in Monday..Sunday order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: [ScheduledDay; DAYS_PER_WEEK],
}

impl Schedule {
    /// Build a schedule from one description per day, Monday first.
    pub fn from_descriptions(descriptions: [String; DAYS_PER_WEEK]) -> Self {
        let mut descriptions = descriptions.into_iter();
        let entries = Day::ALL.map(|day| ScheduledDay {
            day,
            workout: descriptions.next().unwrap_or_default(),
        });
        Self { entries }
    }

    /// Iterate `(day, description)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &str)> {
        self.entries.iter().map(|e| (e.day, e.workout.as_str()))
    }

    /// Description for a given day.
    pub fn get(&self, day: Day) -> &str {
        &self.entries[day as usize].workout
    }

    /// Replace the description for a given day.
    pub fn set(&mut self, day: Day, workout: impl Into<String>) {
        self.entries[day as usize].workout = workout.into();
    }

    /// Days whose description contains `needle`, in day order.
    pub fn days_matching(&self, needle: &str) -> Vec<Day> {
        self.entries
            .iter()
            .filter(|e| e.workout.contains(needle))
            .map(|e| e.day)
            .collect()
    }

    /// Number of days whose description is exactly `workout`.
    pub fn count_exact(&self, workout: &str) -> usize {
        self.entries.iter().filter(|e| e.workout == workout).count()
    }
}

/// Errors raised while building a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Experience string not recognized
    #[error("Unknown experience level: '{0}' (expected beginner, intermediate or advanced)")]
    UnknownExperience(String),

    /// Goal string not recognized
    #[error("Unknown goal: '{0}' (expected general, hybrid, running or strength)")]
    UnknownGoal(String),

    /// Training days outside the range allowed for the experience level
    #[error("{days} training days is not available for {experience} (choose {min}-{max})")]
    DaysOutOfRange {
        experience: ExperienceLevel,
        days: u8,
        min: u8,
        max: u8,
    },

    /// More training days than the week holds
    #[error("Cannot train {0} days in a 7-day week")]
    TooManyDays(u8),

    /// Template has nothing to schedule
    #[error("Workout template is empty")]
    EmptyTemplate,
}

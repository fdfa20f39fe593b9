//! Plain-text rendering of a weekly plan.

use crate::plan::types::Schedule;

/// Render one `Day: workout` line per day.
pub fn render_schedule(schedule: &Schedule) -> String {
    schedule
        .iter()
        .map(|(day, workout)| format!("{}: {}", day, workout))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the schedule followed by the mindset tip.
pub fn render_plan(schedule: &Schedule, tip: &str) -> String {
    format!("{}\n\nMindset Tip: {}", render_schedule(schedule), tip)
}

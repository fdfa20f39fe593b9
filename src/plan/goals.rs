//! Goal-specific template adjustments.
//!
//! Rewrites the base template for the selected goal before it is spread
//! over the week. Matching is by substring ("contains Run") or exact name
//! depending on the rule; catalog names such as "Easy Run" rely on this.

use crate::plan::types::{ExperienceLevel, Goal, WorkoutType};

/// Rewrite a template for the given experience level and goal.
///
/// The first three rules are exclusive and return immediately. Otherwise the
/// strength and advanced running/hybrid rewrites are applied in turn.
/// The returned template always has the same length as the input.
pub fn adjust_for_goal(
    template: &[WorkoutType],
    experience: ExperienceLevel,
    goal: Goal,
) -> Vec<WorkoutType> {
    let mut template = template.to_vec();

    match (goal, experience) {
        (Goal::Hybrid, ExperienceLevel::Advanced) => {
            reassign_runs(&mut template, |nth| match nth {
                0 => "Easy Run",
                1 => "Speed Work",
                _ => "Long Run",
            });
            return template;
        }
        (Goal::Running, ExperienceLevel::Intermediate) => {
            reassign_runs(&mut template, |nth| if nth < 2 { "Easy Run" } else { "Long Run" });
            return template;
        }
        (Goal::Running, ExperienceLevel::Beginner) => {
            return template
                .into_iter()
                .map(|w| {
                    if w == "Easy Run" {
                        WorkoutType::from("Easy Run (Longer)")
                    } else {
                        w
                    }
                })
                .collect();
        }
        _ => {}
    }

    if goal == Goal::Strength {
        for workout in template.iter_mut().filter(|w| w.contains("Run")) {
            *workout = WorkoutType::from("Lift");
        }
    }

    if matches!(goal, Goal::Running | Goal::Hybrid) && experience == ExperienceLevel::Advanced {
        for workout in template.iter_mut().filter(|w| **w == "Run") {
            *workout = WorkoutType::from("Easy Run");
        }
    }

    template
}

/// Replace each entry containing "Run" with the name chosen for its position
/// among the run entries.
fn reassign_runs(template: &mut [WorkoutType], name_for: impl Fn(usize) -> &'static str) {
    for (nth, workout) in template
        .iter_mut()
        .filter(|w| w.contains("Run"))
        .enumerate()
    {
        *workout = WorkoutType::from(name_for(nth));
    }
}

//! Rest-day distribution across the week.

use crate::plan::catalog;
use crate::plan::types::{PlanError, Schedule, WorkoutType, DAYS_PER_WEEK};

/// Spacing used when there are no rest days; never reached within a week.
const NO_REST_SPACING: f64 = DAYS_PER_WEEK as f64 + 1.0;

/// Spread `days_available` training days over the week.
///
/// Rest days are placed at even intervals starting half a spacing into the
/// week. Every other day takes the next template entry, wrapping around when
/// the template is shorter than the number of training days.
pub fn build_weekly_schedule(
    template: &[WorkoutType],
    days_available: u8,
) -> Result<Schedule, PlanError> {
    if template.is_empty() {
        return Err(PlanError::EmptyTemplate);
    }
    if days_available as usize > DAYS_PER_WEEK {
        return Err(PlanError::TooManyDays(days_available));
    }

    let mut rest_days = DAYS_PER_WEEK - days_available as usize;
    let spacing = if rest_days > 0 {
        DAYS_PER_WEEK as f64 / rest_days as f64
    } else {
        NO_REST_SPACING
    };
    let mut rest_counter = spacing / 2.0;
    let mut template_index = 0;

    let descriptions: [String; DAYS_PER_WEEK] = std::array::from_fn(|i| {
        if rest_days > 0 && i as f64 >= rest_counter {
            rest_days -= 1;
            rest_counter += spacing;
            catalog::recovery_description().to_string()
        } else {
            let workout = &template[template_index % template.len()];
            template_index += 1;
            catalog::describe(workout)
        }
    });

    tracing::debug!(
        days_available,
        template_len = template.len(),
        "Built weekly schedule"
    );

    Ok(Schedule::from_descriptions(descriptions))
}

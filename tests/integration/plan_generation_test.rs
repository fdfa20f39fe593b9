//! Integration tests for the full plan generation pipeline.

use vectorplan::plan::catalog::{self, base_template};
use vectorplan::plan::{
    adjust_for_goal, assign_lift_details, build_weekly_schedule, generate, Day, ExperienceLevel,
    Goal, PlanError, PlanRequest,
};

const RECOVERY: &str = "Optional Recovery: mobility work, stretching, or light walk";
const FULL_BODY: &str = "Lift: Full Body, 3-4 exercises, moderate weights";
const UPPER: &str = "Lift: Upper Body, 3-4 exercises, moderate weights";
const LOWER: &str = "Lift: Lower Body, 3-4 exercises, moderate weights";

fn plan(experience: ExperienceLevel, days: u8, goal: Goal) -> Vec<String> {
    let request = PlanRequest::new(experience, days, goal).unwrap();
    generate(&request)
        .unwrap()
        .iter()
        .map(|(_, w)| w.to_string())
        .collect()
}

#[test]
fn test_beginner_three_days_general() {
    let week = plan(ExperienceLevel::Beginner, 3, Goal::General);

    assert_eq!(
        week,
        vec![
            "Easy Run: 30-40 min easy jog, maintain conversational pace",
            RECOVERY,
            FULL_BODY,
            RECOVERY,
            "Zone 2 Cardio: 20-50 min easy steady state (walk, bike, jog)",
            RECOVERY,
            // Template recovery entry, not a scheduled rest day
            RECOVERY,
        ]
    );
}

#[test]
fn test_beginner_running_uses_longer_easy_run() {
    let week = plan(ExperienceLevel::Beginner, 4, Goal::Running);

    assert_eq!(week[0], "Easy Run (Longer)");
    assert_eq!(week[1], FULL_BODY);
    // Template recovery entry on Saturday plus three rest days
    assert_eq!(week.iter().filter(|w| *w == RECOVERY).count(), 4);
}

#[test]
fn test_intermediate_strength_four_days() {
    let week = plan(ExperienceLevel::Intermediate, 4, Goal::Strength);

    assert_eq!(
        week,
        vec![UPPER, LOWER, RECOVERY, UPPER, RECOVERY, LOWER, RECOVERY]
    );
}

#[test]
fn test_intermediate_strength_five_days() {
    let week = plan(ExperienceLevel::Intermediate, 5, Goal::Strength);

    assert_eq!(week[0], UPPER);
    assert_eq!(week[1], LOWER);
    assert_eq!(week[2], RECOVERY);
    assert_eq!(week[3], UPPER);
    assert_eq!(week[4], LOWER);
    assert_eq!(
        week[5],
        "Optional Zone 1/2 Cardio: 20-40 min easy walking or light movement"
    );
    assert_eq!(week[6], RECOVERY);
}

#[test]
fn test_advanced_hybrid_six_days() {
    let week = plan(ExperienceLevel::Advanced, 6, Goal::Hybrid);

    assert_eq!(
        week,
        vec![
            FULL_BODY,
            "Easy Run: 30-40 min easy jog, maintain conversational pace",
            FULL_BODY,
            "Speed Work: 20-30 min intervals, 1-2 min fast / 1-2 min easy recovery",
            RECOVERY,
            FULL_BODY,
            "Zone 2 Cardio: 20-50 min easy steady state (walk, bike, jog)",
        ]
    );
}

#[test]
fn test_advanced_running_three_lifts_split() {
    let week = plan(ExperienceLevel::Advanced, 6, Goal::Running);

    assert_eq!(week[0], UPPER);
    assert_eq!(week[2], LOWER);
    assert_eq!(week[5], UPPER);
}

#[test]
fn test_advanced_general_keeps_raw_run() {
    let week = plan(ExperienceLevel::Advanced, 5, Goal::General);

    assert_eq!(
        week,
        vec![FULL_BODY, "Run", RECOVERY, FULL_BODY, "Run", FULL_BODY, RECOVERY]
    );
}

#[test]
fn test_every_combination_has_seven_days() {
    for experience in ExperienceLevel::ALL {
        for days in experience.training_days() {
            for goal in Goal::ALL {
                let request = PlanRequest::new(experience, days, goal).unwrap();
                let schedule = generate(&request).unwrap();

                let order: Vec<Day> = schedule.iter().map(|(d, _)| d).collect();
                assert_eq!(order, Day::ALL.to_vec());
            }
        }
    }
}

#[test]
fn test_generate_details_lifts_exactly_once() {
    for experience in ExperienceLevel::ALL {
        for days in experience.training_days() {
            for goal in Goal::ALL {
                let request = PlanRequest::new(experience, days, goal).unwrap();

                let adjusted = adjust_for_goal(&base_template(experience), experience, goal);
                let scheduled = build_weekly_schedule(&adjusted, days).unwrap();
                let expected = assign_lift_details(scheduled, goal);

                assert_eq!(generate(&request).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_generic_lift_text_never_survives() {
    let generic = catalog::description("Lift").unwrap();
    for experience in ExperienceLevel::ALL {
        for goal in Goal::ALL {
            let request = PlanRequest::with_default_days(experience, goal);
            let schedule = generate(&request).unwrap();
            assert_eq!(schedule.count_exact(generic), 0);
        }
    }
}

#[test]
fn test_out_of_range_days_rejected() {
    assert!(matches!(
        PlanRequest::new(ExperienceLevel::Beginner, 5, Goal::General),
        Err(PlanError::DaysOutOfRange { min: 3, max: 4, .. })
    ));
    assert!(matches!(
        PlanRequest::new(ExperienceLevel::Advanced, 4, Goal::General),
        Err(PlanError::DaysOutOfRange { min: 5, max: 6, .. })
    ));
}

#[test]
fn test_request_from_strings() {
    let experience: ExperienceLevel = "Intermediate".parse().unwrap();
    let goal: Goal = "RUNNING".parse().unwrap();
    let request = PlanRequest::new(experience, 5, goal).unwrap();

    assert_eq!(request.experience(), ExperienceLevel::Intermediate);
    assert_eq!(request.goal(), Goal::Running);
    assert!("couch".parse::<Goal>().is_err());
}

//! Integration tests for exporting a generated plan.

use rand::rngs::StdRng;
use rand::SeedableRng;
use vectorplan::export::{export_csv_to_file, render_plan, DEFAULT_CSV_FILENAME};
use vectorplan::plan::catalog::MINDSET_TIPS;
use vectorplan::plan::{generate, pick_tip, ExperienceLevel, Goal, PlanRequest};

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .unwrap();

    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_exported_csv_round_trips_schedule() {
    let request = PlanRequest::new(ExperienceLevel::Intermediate, 4, Goal::Strength).unwrap();
    let schedule = generate(&request).unwrap();
    let tip = pick_tip(&mut StdRng::seed_from_u64(7));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CSV_FILENAME);
    export_csv_to_file(&schedule, tip, &path).unwrap();

    let mut rows = read_rows(&path);
    rows.retain(|row| row.iter().any(|field| !field.is_empty()));

    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0], vec!["Day", "Workout"]);
    for (row, (day, workout)) in rows[1..8].iter().zip(schedule.iter()) {
        assert_eq!(row, &vec![day.name().to_string(), workout.to_string()]);
    }
    assert_eq!(rows[8], vec!["Mindset Tip".to_string(), tip.to_string()]);
}

#[test]
fn test_export_has_blank_line_before_tip() {
    let request = PlanRequest::with_default_days(ExperienceLevel::Beginner, Goal::General);
    let schedule = generate(&request).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CSV_FILENAME);
    export_csv_to_file(&schedule, MINDSET_TIPS[0], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[8], "");
    assert!(lines[9].starts_with("Mindset Tip,"));
}

#[test]
fn test_display_and_export_tips_sampled_independently() {
    let mut rng = StdRng::seed_from_u64(1234);
    let picks: Vec<&str> = (0..50).map(|_| pick_tip(&mut rng)).collect();

    assert!(picks.iter().all(|tip| MINDSET_TIPS.contains(tip)));
    // Fifty draws from five tips are not all identical
    assert!(picks.iter().any(|tip| *tip != picks[0]));
}

#[test]
fn test_render_plan_lists_days() {
    let request = PlanRequest::new(ExperienceLevel::Advanced, 6, Goal::Hybrid).unwrap();
    let schedule = generate(&request).unwrap();
    let text = render_plan(&schedule, MINDSET_TIPS[2]);

    assert!(text.starts_with("Monday: Lift: Full Body"));
    assert!(text.contains("\nFriday: Optional Recovery"));
    assert!(text.ends_with("Mindset Tip: Build the habit, then build the volume."));
}

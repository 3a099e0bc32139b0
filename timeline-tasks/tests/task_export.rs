use std::fs;

use chrono::NaiveDate;
use serde_json::json;
use timeline_layout::{layout_timeline, LayoutConfig, LayoutRequest, TimelineError, ZoomLevel};
use timeline_tasks::{demo_tasks, parse_tasks_str, parse_tasks_value, valid_tasks};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn export_rows_are_read_and_filtered() {
    let export = fs::read_to_string(fixture_path("planner_export.json")).expect("fixture readable");

    let records = parse_tasks_str(&export).expect("export parses");
    let ids: Vec<i64> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, [1, 2, 3, 5]);

    let first = &records[0];
    assert_eq!(first.a_text, None);
    assert_eq!(first.r_text, None);
    assert_eq!(first.title.as_deref(), Some("Finish database lab"));
    assert_eq!(records[3].title, None);

    let tasks = valid_tasks(&records);
    let ids: Vec<i64> = tasks.iter().map(|task| task.id).collect();
    assert_eq!(ids, [1, 2, 5]);
    assert_eq!(tasks[2].start, date(2024, 5, 4));
}

#[test]
fn export_lays_out_with_blank_title_fallback() {
    let export = fs::read_to_string(fixture_path("planner_export.json")).expect("fixture readable");
    let tasks = valid_tasks(&parse_tasks_str(&export).expect("export parses"));

    let request = LayoutRequest::new(ZoomLevel::Day, 900.0, date(2024, 5, 3));
    let plan = layout_timeline(&tasks, &request, &LayoutConfig::default());

    let titles: Vec<&str> = plan.bars.iter().map(|bar| bar.title.as_str()).collect();
    assert_eq!(titles, ["Thesis, chapter 1", "Finish database lab", "Task 5"]);
    assert_eq!(plan.axis.map(|axis| axis.start), Some(date(2024, 4, 26)));
}

#[test]
fn bare_array_is_accepted() {
    let records = parse_tasks_value(&json!([
        { "id": 7, "title": "a", "start_date": "2024-01-01", "end_date": "2024-01-02" }
    ]))
    .expect("array parses");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].start_date.as_deref(), Some("2024-01-01"));
}

#[test]
fn wrong_shapes_are_reported() {
    assert!(matches!(parse_tasks_str("not json"), Err(TimelineError::Parse(_))));
    assert!(matches!(
        parse_tasks_value(&json!({ "rows": [] })),
        Err(TimelineError::MissingData)
    ));
    assert!(matches!(
        parse_tasks_value(&json!("tasks")),
        Err(TimelineError::Parse(_))
    ));
}

#[test]
fn demo_tasks_fill_the_timeline() {
    let today = date(2024, 9, 2);
    let tasks = demo_tasks(today);
    assert_eq!(tasks.len(), 5);
    assert!(tasks.iter().all(|task| task.end >= task.start && !task.notes.is_empty()));

    let request = LayoutRequest::new(ZoomLevel::Week, 1200.0, today);
    let plan = layout_timeline(&tasks, &request, &LayoutConfig::default());

    let ids: Vec<i64> = plan.bars.iter().map(|bar| bar.task_id).collect();
    assert_eq!(ids, [5, 3, 2, 1, 4]);
    assert!(plan.today_marker.is_some());
}

//! Unit tests for the task catalog

use modelbench_tasks::{build_tasks, load_tasks, write_tasks, TaskCategory};

#[test]
fn test_catalog_covers_all_categories() {
    let tasks = build_tasks();

    assert_eq!(tasks.len(), 8);
    assert_eq!(
        tasks
            .iter()
            .filter(|t| t.category == TaskCategory::MathReasoning)
            .count(),
        3
    );
    assert_eq!(
        tasks
            .iter()
            .filter(|t| t.category == TaskCategory::Summarization)
            .count(),
        2
    );
    assert_eq!(
        tasks
            .iter()
            .filter(|t| t.category == TaskCategory::SentimentClassification)
            .count(),
        3
    );
}

#[test]
fn test_catalog_task_ids_are_stable() {
    let tasks = build_tasks();
    let ids: Vec<&str> = tasks.iter().map(|t| t.task_id.as_str()).collect();

    assert_eq!(ids, vec!["r1", "r2", "r3", "s1", "s2", "c1", "c2", "c3"]);
}

#[test]
fn test_catalog_is_deterministic() {
    assert_eq!(build_tasks(), build_tasks());
}

#[test]
fn test_known_references() {
    let tasks = build_tasks();

    let r1 = tasks.iter().find(|t| t.task_id == "r1").unwrap();
    assert_eq!(r1.reference_answer, "8");

    let c2 = tasks.iter().find(|t| t.task_id == "c2").unwrap();
    assert_eq!(c2.reference_answer, "negative");
}

#[test]
fn test_tasks_roundtrip_through_artifact() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tasks.csv");

    let tasks = build_tasks();
    write_tasks(&path, &tasks).expect("Failed to write tasks");
    let loaded = load_tasks(&path).expect("Failed to load tasks");

    assert_eq!(loaded, tasks);
}

#[test]
fn test_load_tasks_fails_fast_when_missing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tasks.csv");

    let err = load_tasks(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("tasks.csv"));
    assert!(message.contains("modelbench tasks"));
}

#[test]
fn test_unknown_category_string_degrades() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("tasks.csv");

    std::fs::write(
        &path,
        "task_id,category,prompt,reference_answer\nq1,code_generation,Write a function,fn main() {}\n",
    )
    .expect("Failed to write test file");

    let loaded = load_tasks(&path).expect("Unknown category must not fail parsing");
    assert_eq!(loaded[0].category, TaskCategory::Unknown);
}

use chrono::{TimeZone, Utc};
use tasktrack_core::{Priority, Task, TaskDraft, TaskValidationError};

fn sample_task() -> Task {
    let due = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let created = Utc.with_ymd_and_hms(2023, 12, 31, 18, 0, 0).unwrap();
    let draft = TaskDraft::new("File taxes", Priority::High, due)
        .with_description("Before the deadline")
        .with_tags(["finance", "yearly"])
        .with_category("admin");
    Task::from_draft("1704067200000".to_string(), created, draft)
}

#[test]
fn draft_new_sets_defaults() {
    let due = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let draft = TaskDraft::new("Water plants", Priority::Low, due);

    assert!(!draft.completed);
    assert!(draft.tags.is_empty());
    assert!(draft.description.is_empty());
    assert_eq!(draft.category, "default");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = sample_task();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "1704067200000");
    assert_eq!(json["title"], "File taxes");
    assert_eq!(json["description"], "Before the deadline");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["completed"], false);
    assert_eq!(json["tags"], serde_json::json!(["finance", "yearly"]));
    assert_eq!(json["category"], "admin");
    assert_eq!(json["dueDate"], "2024-01-02T09:30:00.000Z");
    assert_eq!(json["createdAt"], "2023-12-31T18:00:00.000Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_defaults_missing_optional_fields() {
    let value = serde_json::json!({
        "id": "42",
        "title": "Legacy",
        "priority": "medium",
        "dueDate": "2024-02-10",
        "createdAt": "2024-02-01T08:00:00.000Z"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert!(task.tags.is_empty());
    assert!(task.description.is_empty());
    assert!(!task.completed);
    assert_eq!(
        task.due_date,
        Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap()
    );
}

#[test]
fn deserialize_rejects_unknown_priority_and_bad_dates() {
    let bad_priority = serde_json::json!({
        "id": "1",
        "title": "x",
        "priority": "urgent",
        "dueDate": "2024-02-10T00:00:00.000Z",
        "createdAt": "2024-02-10T00:00:00.000Z"
    });
    assert!(serde_json::from_value::<Task>(bad_priority).is_err());

    let bad_date = serde_json::json!({
        "id": "1",
        "title": "x",
        "priority": "low",
        "dueDate": "next tuesday",
        "createdAt": "2024-02-10T00:00:00.000Z"
    });
    let err = serde_json::from_value::<Task>(bad_date).unwrap_err();
    assert!(err.to_string().contains("invalid ISO 8601 timestamp"));
}

#[test]
fn due_day_is_utc_calendar_day() {
    let mut task = sample_task();
    task.due_date = chrono::DateTime::parse_from_rfc3339("2024-01-02T01:00:00+03:00")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(
        task.due_day(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
}

#[test]
fn validate_rejects_whitespace_title() {
    let mut task = sample_task();
    task.title = "   ".to_string();
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyTitle));
}

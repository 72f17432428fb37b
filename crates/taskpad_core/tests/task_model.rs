use chrono::NaiveDate;
use taskpad_core::{RecordError, Task};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fresh_task_starts_pending_and_dated_today() {
    let task = Task::new(7, "water the plants");

    assert_eq!(task.id(), 7);
    assert_eq!(task.description(), "water the plants");
    assert!(!task.is_completed());
    assert_eq!(task.created_on(), chrono::Local::now().date_naive());
}

#[test]
fn reconstruction_keeps_all_fields_verbatim() {
    let task = Task::from_parts(3, "pay rent", true, date(2024, 1, 2));

    assert_eq!(task.id(), 3);
    assert_eq!(task.description(), "pay rent");
    assert!(task.is_completed());
    assert_eq!(task.created_on(), date(2024, 1, 2));
}

#[test]
fn mark_completed_is_one_way() {
    let mut task = Task::new(1, "one way only");
    task.mark_completed();
    assert!(task.is_completed());

    // Completing again stays completed; no API goes back to pending.
    task.mark_completed();
    assert!(task.is_completed());
}

#[test]
fn to_record_produces_the_exact_line_layout() {
    let pending = Task::from_parts(1, "Buy milk", false, date(2024, 1, 1));
    let done = Task::from_parts(2, "Clean house", true, date(2024, 1, 2));

    assert_eq!(pending.to_record(), "1|Buy milk|false|2024-01-01");
    assert_eq!(done.to_record(), "2|Clean house|true|2024-01-02");
}

#[test]
fn from_record_parses_a_valid_line() {
    let task = Task::from_record("12|Walk the dog|true|2023-11-30").unwrap();

    assert_eq!(task.id(), 12);
    assert_eq!(task.description(), "Walk the dog");
    assert!(task.is_completed());
    assert_eq!(task.created_on(), date(2023, 11, 30));
}

#[test]
fn description_may_contain_the_delimiter() {
    let original = Task::from_parts(5, "either|or|both", false, date(2024, 6, 15));
    let decoded = Task::from_record(&original.to_record()).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.description(), "either|or|both");
}

#[test]
fn from_record_rejects_short_lines() {
    let err = Task::from_record("1|only two").unwrap_err();
    assert_eq!(err, RecordError::MissingFields { found: 2 });

    let err = Task::from_record("").unwrap_err();
    assert_eq!(err, RecordError::MissingFields { found: 1 });
}

#[test]
fn from_record_rejects_non_integer_id() {
    let err = Task::from_record("abc|desc|false|2024-01-01").unwrap_err();
    assert_eq!(err, RecordError::InvalidId("abc".to_string()));
}

#[test]
fn from_record_rejects_non_boolean_flag() {
    // The flag is strict: only the lowercase literals are valid.
    let err = Task::from_record("1|desc|TRUE|2024-01-01").unwrap_err();
    assert_eq!(err, RecordError::InvalidCompleted("TRUE".to_string()));

    let err = Task::from_record("1|desc|yes|2024-01-01").unwrap_err();
    assert_eq!(err, RecordError::InvalidCompleted("yes".to_string()));
}

#[test]
fn from_record_rejects_invalid_dates() {
    let err = Task::from_record("1|desc|false|2024-13-40").unwrap_err();
    assert_eq!(err, RecordError::InvalidDate("2024-13-40".to_string()));

    let err = Task::from_record("1|desc|false|yesterday").unwrap_err();
    assert_eq!(err, RecordError::InvalidDate("yesterday".to_string()));
}

#[test]
fn display_is_presentation_only() {
    let task = Task::from_parts(9, "tidy desk", false, date(2024, 3, 5));
    let rendered = task.to_string();

    assert!(rendered.contains("[ ] pending"));
    assert!(rendered.contains("05/03/2024"));
    assert!(rendered.contains("tidy desk"));

    let mut done = task.clone();
    done.mark_completed();
    assert!(done.to_string().contains("[x] completed"));
}

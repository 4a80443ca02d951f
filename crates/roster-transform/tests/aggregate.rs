//! Tests for per-course grouping.

use roster_model::{FieldValue, Row, SessionRecord};
use roster_transform::{aggregate, course_key};

fn row(fields: &[(&str, &str)]) -> Row {
    fields
        .iter()
        .map(|(field, value)| {
            (
                field.to_string(),
                FieldValue::Text(value.to_string()),
            )
        })
        .collect()
}

fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(value.to_string()))
}

#[test]
fn course_key_takes_first_digit_run() {
    assert_eq!(
        course_key(&FieldValue::Text("CS 213-1 Intro".to_string())),
        Some("CS213".to_string())
    );
    assert_eq!(
        course_key(&FieldValue::Text("Math101B".to_string())),
        Some("CS101".to_string())
    );
    assert_eq!(course_key(&FieldValue::Text("Data Structures".to_string())), None);
}

#[test]
fn course_key_accepts_numeric_cells() {
    assert_eq!(course_key(&FieldValue::Int(213)), Some("CS213".to_string()));
}

#[test]
fn spellings_with_same_number_share_one_entry() {
    let entries = aggregate(vec![
        row(&[("course", "CS213"), ("day", "M"), ("time", "1:00pm")]),
        row(&[("course", "COMP_SCI 213"), ("day", "W"), ("time", "2:00pm")]),
    ]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].course, "CS213");
    assert_eq!(entries[0].sessions.len(), 2);
}

#[test]
fn entries_keep_first_appearance_order() {
    let entries = aggregate(vec![
        row(&[("course", "CS 348")]),
        row(&[("course", "CS 111")]),
        row(&[("course", "CS 348 again")]),
    ]);
    let courses: Vec<&str> = entries.iter().map(|e| e.course.as_str()).collect();
    assert_eq!(courses, vec!["CS348", "CS111"]);
}

#[test]
fn rows_without_usable_course_are_dropped_silently() {
    let entries = aggregate(vec![
        row(&[("day", "M"), ("time", "9:00am")]),
        row(&[("course", ""), ("day", "M")]),
        row(&[("course", "Data Structures"), ("day", "M")]),
        row(&[("course", "CS 111"), ("day", "M"), ("time", "9:00am")]),
    ]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].course, "CS111");
}

#[test]
fn missing_day_still_creates_the_entry() {
    let entries = aggregate(vec![row(&[("course", "CS 111"), ("time", "9:00am")])]);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].sessions.is_empty());
}

#[test]
fn empty_day_label_is_a_regular_bucket() {
    let entries = aggregate(vec![row(&[("course", "CS 111"), ("day", ""), ("time", "9:00am")])]);
    assert_eq!(entries[0].sessions.get("").map(Vec::len), Some(1));
}

#[test]
fn sessions_carry_time_and_room_verbatim() {
    let entries = aggregate(vec![
        row(&[("course", "CS 111"), ("day", "M"), ("time", "9:00am"), ("room", "Tech L170 ")]),
        row(&[("course", "CS 111"), ("day", "M"), ("time", "10:00am")]),
    ]);
    let sessions = &entries[0].sessions["M"];
    assert_eq!(
        sessions[0],
        SessionRecord {
            time: text("9:00am"),
            room: text("Tech L170 "),
        }
    );
    // Absent room stays absent; append order is input order.
    assert_eq!(
        sessions[1],
        SessionRecord {
            time: text("10:00am"),
            room: None,
        }
    );
}

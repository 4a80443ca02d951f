//! Data model for the office-hours roster converter.

pub mod days;
pub mod schedule;
pub mod value;

pub use days::{DAY_ORDER, UNKNOWN_DAY_RANK, day_rank};
pub use schedule::{
    COURSE_PREFIX, CourseEntry, FIELD_AVAILABILITY, FIELD_COURSE, FIELD_DAY, FIELD_ROOM,
    FIELD_TIME, RawRow, Row, SessionRecord,
};
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_digit_only_to_int() {
        assert_eq!(FieldValue::coerce("0".to_string()), FieldValue::Int(0));
        assert_eq!(FieldValue::coerce("213".to_string()), FieldValue::Int(213));
    }

    #[test]
    fn coerce_keeps_non_digit_text() {
        assert_eq!(
            FieldValue::coerce(String::new()),
            FieldValue::Text(String::new())
        );
        assert_eq!(
            FieldValue::coerce("9:00am".to_string()),
            FieldValue::Text("9:00am".to_string())
        );
        assert_eq!(
            FieldValue::coerce("CS 213".to_string()),
            FieldValue::Text("CS 213".to_string())
        );
        // Signs and whitespace are not digit runs.
        assert_eq!(
            FieldValue::coerce("-5".to_string()),
            FieldValue::Text("-5".to_string())
        );
    }

    #[test]
    fn coerce_overflowing_run_stays_text() {
        let huge = "9".repeat(30);
        assert_eq!(
            FieldValue::coerce(huge.clone()),
            FieldValue::Text(huge)
        );
    }

    #[test]
    fn text_ordering_is_lexical() {
        let early = FieldValue::Text("10:00am".to_string());
        let late = FieldValue::Text("9:00am".to_string());
        assert!(early < late);
    }

    #[test]
    fn ints_sort_before_text() {
        assert!(FieldValue::Int(900) < FieldValue::Text("10:00am".to_string()));
    }

    #[test]
    fn day_rank_covers_week() {
        assert_eq!(day_rank("M"), 1);
        assert_eq!(day_rank("Th"), 4);
        assert_eq!(day_rank("Sun"), 7);
        assert_eq!(day_rank("Online"), UNKNOWN_DAY_RANK);
        assert_eq!(day_rank(""), UNKNOWN_DAY_RANK);
    }

    #[test]
    fn session_record_serializes_absent_as_null() {
        let record = SessionRecord {
            time: Some(FieldValue::Text("9:00am".to_string())),
            room: None,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"time":"9:00am","room":null}"#);
    }

    #[test]
    fn int_values_serialize_as_numbers() {
        let record = SessionRecord {
            time: Some(FieldValue::Int(900)),
            room: Some(FieldValue::Text("L170".to_string())),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"time":900,"room":"L170"}"#);
    }

    #[test]
    fn course_entry_serializes_in_field_order() {
        let entry = CourseEntry::new("CS111");
        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert_eq!(json, r#"{"course":"CS111","sessions":{}}"#);
    }
}

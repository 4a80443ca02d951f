//! Grouping of normalized rows into per-course session buckets.

use indexmap::IndexMap;
use tracing::debug;

use roster_model::{
    COURSE_PREFIX, CourseEntry, FIELD_COURSE, FIELD_DAY, FIELD_ROOM, FIELD_TIME, FieldValue, Row,
    SessionRecord,
};

/// Canonical course code for a course cell, e.g. `"CS 213-1"` -> `"CS213"`.
///
/// Takes the first maximal run of ASCII decimal digits anywhere in the
/// value's string form; `None` when there is no digit at all.
pub fn course_key(course: &FieldValue) -> Option<String> {
    let text = course.to_string();
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let tail = &text[start..];
    let len = tail
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(tail.len());
    Some(format!("{COURSE_PREFIX}{}", &tail[..len]))
}

/// Group rows by canonical course code, preserving first-appearance order.
///
/// Rows without a usable course cell are dropped without comment; that is
/// the intended handling for these exports, not an error path. A row whose
/// `day` field is absent still creates its course entry but contributes no
/// session; an empty-string day is a regular bucket label.
pub fn aggregate(rows: Vec<Row>) -> Vec<CourseEntry> {
    let mut combined: IndexMap<String, CourseEntry> = IndexMap::new();

    for row in rows {
        let Some(course) = row.get(FIELD_COURSE) else {
            debug!("row without course field skipped");
            continue;
        };
        if course.is_empty_text() {
            debug!("row with empty course field skipped");
            continue;
        }
        let Some(key) = course_key(course) else {
            debug!(course = %course, "course without digit run skipped");
            continue;
        };

        let entry = combined
            .entry(key.clone())
            .or_insert_with(|| CourseEntry::new(key));
        if let Some(day) = row.get(FIELD_DAY) {
            entry
                .sessions
                .entry(day.to_string())
                .or_default()
                .push(SessionRecord {
                    time: row.get(FIELD_TIME).cloned(),
                    room: row.get(FIELD_ROOM).cloned(),
                });
        }
    }

    combined.into_values().collect()
}

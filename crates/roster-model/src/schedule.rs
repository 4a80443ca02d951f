use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Field names the converter recognizes in source rosters.
pub const FIELD_COURSE: &str = "course";
pub const FIELD_DAY: &str = "day";
pub const FIELD_TIME: &str = "time";
pub const FIELD_ROOM: &str = "room";
pub const FIELD_AVAILABILITY: &str = "availability";

/// Prefix applied to every canonical course code.
pub const COURSE_PREFIX: &str = "CS";

/// One parsed source record, field order preserved. Absent fields are
/// missing keys, never empty strings.
pub type RawRow = IndexMap<String, String>;

/// One record after type coercion and cleanup.
pub type Row = IndexMap<String, FieldValue>;

/// A single office-hours slot. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub time: Option<FieldValue>,
    pub room: Option<FieldValue>,
}

/// All sessions for one canonical course code, bucketed by day label.
///
/// Bucket iteration order is part of the output contract: day buckets are
/// created in first-appearance order and reordered only by the orderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub course: String,
    pub sessions: IndexMap<String, Vec<SessionRecord>>,
}

impl CourseEntry {
    pub fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            sessions: IndexMap::new(),
        }
    }
}

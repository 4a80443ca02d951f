//! Row-level type coercion and content cleanup.

use roster_model::{FIELD_AVAILABILITY, FIELD_ROOM, FieldValue, RawRow, Row};

/// Institutional access note appended to some room values in source exports.
pub const ROOM_ACCESS_NOTE: &str = "- request swipe access - permissions@cs.northwestern.edu";

/// Cleanup switches for [`normalize_rows`]. Both default to on, matching the
/// exports this tool was written for.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Drop the `availability` field from every row.
    pub strip_availability: bool,
    /// Remove the swipe-access note from `room` values.
    pub clean_rooms: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_availability: true,
            clean_rooms: true,
        }
    }
}

/// Coerce and clean every row independently.
///
/// Digit-only cells become integers; everything else passes through
/// verbatim, and absent fields stay absent. Never fails.
pub fn normalize_rows(rows: Vec<RawRow>, options: NormalizeOptions) -> Vec<Row> {
    rows.into_iter()
        .map(|row| normalize_row(row, options))
        .collect()
}

fn normalize_row(raw: RawRow, options: NormalizeOptions) -> Row {
    let mut row: Row = raw
        .into_iter()
        .map(|(field, value)| (field, FieldValue::coerce(value)))
        .collect();
    if options.strip_availability {
        row.shift_remove(FIELD_AVAILABILITY);
    }
    if options.clean_rooms {
        if let Some(FieldValue::Text(room)) = row.get_mut(FIELD_ROOM) {
            // Every occurrence, not just the first.
            if !room.is_empty() && room.contains(ROOM_ACCESS_NOTE) {
                *room = room.replace(ROOM_ACCESS_NOTE, "");
            }
        }
    }
    row
}

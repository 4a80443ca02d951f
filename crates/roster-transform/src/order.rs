//! Deterministic ordering of aggregated session buckets.

use roster_model::{CourseEntry, day_rank};

/// Sort each entry's day buckets into weekday order and each bucket's
/// sessions ascending by time.
///
/// Day labels outside the weekday table all rank the same and therefore
/// sort last, keeping their relative insertion order (both sorts are
/// stable). Times compare as plain values, so `"10:00am"` lands before
/// `"9:00am"`; chronological parsing is deliberately out of scope. The
/// top-level entry order is left untouched. Idempotent.
pub fn order_entries(entries: &mut [CourseEntry]) {
    for entry in entries {
        entry
            .sessions
            .sort_by(|day_a, _, day_b, _| day_rank(day_a).cmp(&day_rank(day_b)));
        for sessions in entry.sessions.values_mut() {
            sessions.sort_by(|a, b| a.time.cmp(&b.time));
        }
    }
}

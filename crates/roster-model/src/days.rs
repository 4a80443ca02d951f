//! Weekday ordering for session buckets.

/// Recognized day labels in schedule order, with their sort rank.
pub const DAY_ORDER: [(&str, u8); 7] = [
    ("M", 1),
    ("Tu", 2),
    ("W", 3),
    ("Th", 4),
    ("F", 5),
    ("Sat", 6),
    ("Sun", 7),
];

/// Rank assigned to labels outside [`DAY_ORDER`]; sorts after every
/// recognized label.
pub const UNKNOWN_DAY_RANK: u8 = 99;

/// Sort rank for a day label.
pub fn day_rank(label: &str) -> u8 {
    DAY_ORDER
        .iter()
        .find(|(day, _)| *day == label)
        .map_or(UNKNOWN_DAY_RANK, |(_, rank)| *rank)
}

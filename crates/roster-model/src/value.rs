use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value after normalization.
///
/// Digit-only source text becomes `Int` so it serializes as a JSON number;
/// everything else stays `Text` verbatim. The derived ordering (integers
/// before text, text by character code) backs the session time sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    /// Coerce a raw cell into a typed value.
    ///
    /// A non-empty run of ASCII decimal digits parses to `Int`; the empty
    /// string and anything containing a non-digit stay `Text` unchanged.
    /// Digit runs too long for i64 also stay `Text`.
    pub fn coerce(raw: String) -> FieldValue {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<i64>() {
                return FieldValue::Int(n);
            }
        }
        FieldValue::Text(raw)
    }

    /// True for `Text("")`.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

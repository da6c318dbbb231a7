use super::text::repair_mojibake;
use super::value::{TagValue, DATETIME_DISPLAY_FORMAT};
use super::value_map::lookup_label;

/// Human-readable form of a tag value.
///
/// Enumeration codes get their label appended (`"6 (Rotate 90 CW)"`), text
/// goes through mojibake repair, lists render as pretty JSON.
pub fn display_value(tag: &str, value: &TagValue) -> String {
    match value {
        TagValue::Text(s) => repair_mojibake(s).into_owned(),
        TagValue::DateTime(dt) => dt.format(DATETIME_DISPLAY_FORMAT).to_string(),
        TagValue::List(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.raw_string())
        }
        TagValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
        TagValue::Integer(_) | TagValue::Float(_) | TagValue::Rational { .. } => {
            let labelled = value
                .as_code()
                .and_then(|code| lookup_label(tag, code).map(|label| (code, label)));
            match labelled {
                Some((code, label)) => format!("{code} ({label})"),
                None => value.raw_string(),
            }
        }
    }
}

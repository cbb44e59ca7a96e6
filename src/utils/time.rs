use chrono::{Local, NaiveDateTime};

/// Timestamp layout stored in the database (ISO 8601, no timezone).
/// Lexicographic order on these strings equals chronological order.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layout used by the Google Forms exports we bulk-import.
pub const LEGACY_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Current local time in the stored layout, used when `--at` is omitted.
pub fn now_iso() -> String {
    Local::now().format(ISO_FORMAT).to_string()
}

/// Coerce a legacy export timestamp into the ISO layout.
/// Anything that does not parse is returned verbatim: one bad row must not
/// abort a whole import.
pub fn coerce_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw.trim(), LEGACY_FORMAT) {
        Ok(dt) => dt.format(ISO_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Validate a user-supplied timestamp for live writes.
/// Accepts the stored ISO layout, with or without seconds.
pub fn is_iso_timestamp(s: &str) -> bool {
    NaiveDateTime::parse_from_str(s, ISO_FORMAT).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").is_ok()
}

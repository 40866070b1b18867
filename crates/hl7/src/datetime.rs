//! Plain HL7 date-time formatting

use chrono::NaiveDateTime;

/// 4-digit year through seconds, no separators, no timezone
const PLAIN_DATE_TIME: &str = "%Y%m%d%H%M%S";

/// Format a date-time as `YYYYMMDDHHMMSS`
///
/// A missing date-time formats as the empty string, so an unset source
/// field produces an empty sub-field on the wire.
pub fn plain_date_time(date_time: Option<NaiveDateTime>) -> String {
    match date_time {
        Some(dt) => dt.format(PLAIN_DATE_TIME).to_string(),
        None => String::new(),
    }
}

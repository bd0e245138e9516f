//! Time and timestamp utilities

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

/// Display format for a record's capture time, e.g. `14:05:09 18/10/2026`
pub const RECORD_TIME_FORMAT: &str = "%H:%M:%S %d/%m/%Y";

/// Capture time for a new record, in server local time
pub fn record_timestamp() -> String {
    format_capture_time(&Local::now())
}

/// Format any datetime with the record display format
pub fn format_capture_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(RECORD_TIME_FORMAT).to_string()
}

/// Current local time as ISO 8601 with millisecond precision
pub fn iso8601_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

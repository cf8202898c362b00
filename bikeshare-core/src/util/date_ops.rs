use chrono::{NaiveDateTime, ParseResult};

pub const APP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// alternative formats observed in exported trip data. tried in order after
/// [`APP_DATETIME_FORMAT`] fails.
const FALLBACK_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// parses a trip start time, accepting the space-separated format used by the
/// bikeshare exports as well as ISO-8601 `T`-separated variants.
pub fn parse_trip_datetime(datetime_str: &str) -> ParseResult<NaiveDateTime> {
    let trimmed = datetime_str.trim();
    let first_attempt = NaiveDateTime::parse_from_str(trimmed, APP_DATETIME_FORMAT);
    if first_attempt.is_ok() {
        return first_attempt;
    }
    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map_or(first_attempt, Ok)
}

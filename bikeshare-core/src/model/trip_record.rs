use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

use super::calendar::weekday_name;

/// one bikeshare trip. the month, weekday and hour fields are derived from
/// the start time on construction and cannot be modified independently.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TripRecord {
    start_time: NaiveDateTime,
    /// trip duration in seconds. may carry a fractional part in some exports.
    trip_duration: f64,
    start_station: String,
    end_station: String,
    user_type: Option<String>,
    gender: Option<String>,
    birth_year: Option<i32>,
    month: u32,
    #[serde(serialize_with = "serialize_weekday_name")]
    day_of_week: Weekday,
    hour: u32,
}

/// derives (month, weekday, hour) from a trip start time.
pub fn derive_time_fields(start_time: &NaiveDateTime) -> (u32, Weekday, u32) {
    (start_time.month(), start_time.weekday(), start_time.hour())
}

impl TripRecord {
    /// builds a trip record with no demographic attributes.
    ///
    /// # Returns
    ///
    /// the record, or a description of the invalid field when the duration is
    /// negative or not finite, or a station name is empty.
    pub fn try_new(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: &str,
        end_station: &str,
        user_type: Option<&str>,
    ) -> Result<Self, String> {
        if !trip_duration.is_finite() || trip_duration < 0.0 {
            return Err(format!(
                "trip duration must be a non-negative number of seconds, found {trip_duration}"
            ));
        }
        let start_station = start_station.trim();
        let end_station = end_station.trim();
        if start_station.is_empty() {
            return Err(String::from("start station is empty"));
        }
        if end_station.is_empty() {
            return Err(String::from("end station is empty"));
        }
        let (month, day_of_week, hour) = derive_time_fields(&start_time);
        Ok(Self {
            start_time,
            trip_duration,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: non_empty(user_type),
            gender: None,
            birth_year: None,
            month,
            day_of_week,
            hour,
        })
    }

    pub fn with_gender(mut self, gender: Option<&str>) -> Self {
        self.gender = non_empty(gender);
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn start_time(&self) -> &NaiveDateTime {
        &self.start_time
    }

    pub fn trip_duration(&self) -> f64 {
        self.trip_duration
    }

    pub fn start_station(&self) -> &str {
        &self.start_station
    }

    pub fn end_station(&self) -> &str {
        &self.end_station
    }

    pub fn user_type(&self) -> Option<&str> {
        self.user_type.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// month of year in [1, 12]
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// hour of day in [0, 23]
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn serialize_weekday_name<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(weekday_name(*weekday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::date_ops::parse_trip_datetime;

    fn start(s: &str) -> NaiveDateTime {
        parse_trip_datetime(s).expect("test invariant failed: bad datetime literal")
    }

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-03-05 was a Sunday
        let record =
            TripRecord::try_new(start("2017-03-05 23:59:01"), 321.0, "A", "B", Some("Customer"))
                .expect("should build");
        assert_eq!(record.month(), 3);
        assert_eq!(record.day_of_week(), Weekday::Sun);
        assert_eq!(record.hour(), 23);
        assert_eq!(derive_time_fields(record.start_time()), (3, Weekday::Sun, 23));
    }

    #[test]
    fn test_derived_month_is_in_range() {
        for m in 1..=12 {
            let dt = start(&format!("2017-{m:02}-15 08:00:00"));
            let (month, _, _) = derive_time_fields(&dt);
            assert!((1..=12).contains(&month));
            assert_eq!(month, derive_time_fields(&dt).0);
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = TripRecord::try_new(start("2017-01-01 00:00:00"), -1.0, "A", "B", None);
        assert!(result.is_err());
        let result = TripRecord::try_new(start("2017-01-01 00:00:00"), f64::NAN, "A", "B", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_station_rejected() {
        let result = TripRecord::try_new(start("2017-01-01 00:00:00"), 1.0, " ", "B", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_optional_values_are_absent() {
        let record = TripRecord::try_new(start("2017-01-01 00:00:00"), 1.0, "A", "B", Some(""))
            .expect("should build")
            .with_gender(Some("  "))
            .with_birth_year(None);
        assert_eq!(record.user_type(), None);
        assert_eq!(record.gender(), None);
        assert_eq!(record.birth_year(), None);
    }

    #[test]
    fn test_serializes_weekday_by_name() {
        let record = TripRecord::try_new(start("2017-01-02 10:00:00"), 1.0, "A", "B", None)
            .expect("should build");
        let json = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(json["day_of_week"], "Monday");
        assert_eq!(json["start_time"], "2017-01-02T10:00:00");
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Statistic;
use crate::TripRecord;

/// a whole number of seconds of travel time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TravelTime(pub u64);

impl TravelTime {
    /// truncates a (non-negative) number of seconds to whole seconds.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        TravelTime(seconds.max(0.0).trunc() as u64)
    }

    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// splits into (days, hours, minutes, seconds).
    pub fn components(&self) -> (u64, u64, u64, u64) {
        let days = self.0 / 86_400;
        let hours = (self.0 % 86_400) / 3_600;
        let minutes = (self.0 % 3_600) / 60;
        let seconds = self.0 % 60;
        (days, hours, minutes, seconds)
    }
}

/// renders as `H:MM:SS`, prefixed with a day count when at least one day long,
/// e.g. `0:02:00` or `3 days, 4:05:06`.
impl Display for TravelTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (days, hours, minutes, seconds) = self.components();
        match days {
            0 => write!(f, "{hours}:{minutes:02}:{seconds:02}"),
            1 => write!(f, "1 day, {hours}:{minutes:02}:{seconds:02}"),
            n => write!(f, "{n} days, {hours}:{minutes:02}:{seconds:02}"),
        }
    }
}

/// total and average trip duration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TripDurationReport {
    /// number of trips the mean is taken over
    pub trip_count: usize,
    pub total_travel_time: Statistic<TravelTime>,
    /// mean trip duration, truncated to whole seconds
    pub mean_travel_time: Statistic<TravelTime>,
}

impl TripDurationReport {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let trip_count = records.len();
        if trip_count == 0 {
            return Self {
                trip_count,
                total_travel_time: Statistic::NoData,
                mean_travel_time: Statistic::NoData,
            };
        }
        let total: f64 = records.iter().map(|r| r.trip_duration()).sum();
        let mean = total / trip_count as f64;
        Self {
            trip_count,
            total_travel_time: Statistic::Value(TravelTime::from_seconds_f64(total)),
            mean_travel_time: Statistic::Value(TravelTime::from_seconds_f64(mean)),
        }
    }
}

use crate::{util::date_ops::parse_trip_datetime, TripRecord};

/// builds a subscriber trip for test cases.
pub fn trip(start_time: &str, duration: f64, start_station: &str, end_station: &str) -> TripRecord {
    let start = parse_trip_datetime(start_time)
        .unwrap_or_else(|e| panic!("test invariant failed: bad start time '{start_time}': {e}"));
    TripRecord::try_new(start, duration, start_station, end_station, Some("Subscriber"))
        .unwrap_or_else(|e| panic!("test invariant failed: bad trip record: {e}"))
}

/// builds one trip per start time, all between the same two stations.
pub fn trips_at(start_times: &[&str]) -> Vec<TripRecord> {
    start_times
        .iter()
        .map(|s| trip(s, 60.0, "Station A", "Station B"))
        .collect()
}

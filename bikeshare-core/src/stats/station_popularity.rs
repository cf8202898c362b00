use serde::{Deserialize, Serialize};

use super::{mode_ops::mode, Statistic};
use crate::TripRecord;

/// a start and end station combination.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StationPair {
    pub start_station: String,
    pub end_station: String,
}

/// most popular stations and trip.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StationPopularityReport {
    pub most_common_start_station: Statistic<String>,
    pub most_common_end_station: Statistic<String>,
    pub most_common_trip: Statistic<StationPair>,
}

impl StationPopularityReport {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let start = mode(records.iter().map(|r| r.start_station()));
        let end = mode(records.iter().map(|r| r.end_station()));
        let trip = mode(records.iter().map(|r| (r.start_station(), r.end_station())));
        Self {
            most_common_start_station: Statistic::from_option(start.map(String::from)),
            most_common_end_station: Statistic::from_option(end.map(String::from)),
            most_common_trip: Statistic::from_option(trip.map(|(s, e)| StationPair {
                start_station: s.to_string(),
                end_station: e.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_ops::trip;

    #[test]
    fn test_most_common_stations_and_trip() {
        let records = vec![
            trip("2017-01-02 08:00:00", 60.0, "Canal St", "Lake St"),
            trip("2017-01-02 09:00:00", 60.0, "Canal St", "Clark St"),
            trip("2017-01-02 10:00:00", 60.0, "Lake St", "Clark St"),
            trip("2017-01-02 11:00:00", 60.0, "Lake St", "Clark St"),
            trip("2017-01-02 12:00:00", 60.0, "Canal St", "Wells St"),
        ];
        let report = StationPopularityReport::from_records(&records);
        assert_eq!(
            report.most_common_start_station,
            Statistic::Value(String::from("Canal St"))
        );
        assert_eq!(
            report.most_common_end_station,
            Statistic::Value(String::from("Clark St"))
        );
        assert_eq!(
            report.most_common_trip,
            Statistic::Value(StationPair {
                start_station: String::from("Lake St"),
                end_station: String::from("Clark St"),
            })
        );
    }

    #[test]
    fn test_trip_tie_breaks_by_start_then_end() {
        let records = vec![
            trip("2017-01-02 08:00:00", 60.0, "B", "A"),
            trip("2017-01-02 08:00:00", 60.0, "A", "C"),
            trip("2017-01-02 08:00:00", 60.0, "A", "B"),
        ];
        let report = StationPopularityReport::from_records(&records);
        let pair = report.most_common_trip.value().expect("should have value");
        assert_eq!((pair.start_station.as_str(), pair.end_station.as_str()), ("A", "B"));
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let report = StationPopularityReport::from_records(&[]);
        assert!(report.most_common_start_station.is_no_data());
        assert!(report.most_common_end_station.is_no_data());
        assert!(report.most_common_trip.is_no_data());
    }
}

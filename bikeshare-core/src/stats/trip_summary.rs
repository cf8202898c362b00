use serde::{Deserialize, Serialize};

use super::{
    StationPopularityReport, TimeOfTravelReport, TripDurationReport, UserDemographicsReport,
};
use crate::TripDataset;

/// all four reports for one (possibly filtered) trip collection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TripSummary {
    pub dataset: String,
    pub trip_count: usize,
    pub time_of_travel: TimeOfTravelReport,
    pub station_popularity: StationPopularityReport,
    pub trip_duration: TripDurationReport,
    pub user_demographics: UserDemographicsReport,
}

impl TripSummary {
    pub fn from_dataset(dataset: &TripDataset) -> Self {
        let records = dataset.records();
        Self {
            dataset: dataset.name().to_string(),
            trip_count: records.len(),
            time_of_travel: TimeOfTravelReport::from_records(records),
            station_popularity: StationPopularityReport::from_records(records),
            trip_duration: TripDurationReport::from_records(records),
            user_demographics: UserDemographicsReport::from_records(
                records,
                dataset.capabilities(),
            ),
        }
    }
}

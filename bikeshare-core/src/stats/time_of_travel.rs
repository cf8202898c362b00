use serde::{Deserialize, Serialize};

use super::{mode_ops::mode, Statistic};
use crate::{model::calendar::weekday_name, TripRecord};

/// most frequent times of travel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeOfTravelReport {
    /// month number in [1, 12]
    pub most_common_month: Statistic<u32>,
    /// full weekday name. ties are broken alphabetically.
    pub most_common_day_of_week: Statistic<String>,
    /// hour of day in [0, 23]
    pub most_common_start_hour: Statistic<u32>,
}

impl TimeOfTravelReport {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let month = mode(records.iter().map(|r| r.month()));
        let day_of_week = mode(records.iter().map(|r| weekday_name(r.day_of_week())));
        let start_hour = mode(records.iter().map(|r| r.hour()));
        Self {
            most_common_month: Statistic::from_option(month),
            most_common_day_of_week: Statistic::from_option(day_of_week.map(String::from)),
            most_common_start_hour: Statistic::from_option(start_hour),
        }
    }
}

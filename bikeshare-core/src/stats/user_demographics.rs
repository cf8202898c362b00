use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    mode_ops::{mode, value_counts},
    Statistic,
};
use crate::{DatasetCapabilities, TripRecord};

/// earliest, most recent and most common year of birth.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// statistics on bikeshare users. the gender and birth year fields are
/// [`Statistic::NotApplicable`] for datasets without those columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserDemographicsReport {
    /// trip count by user type, most frequent first
    pub user_types: Statistic<IndexMap<String, usize>>,
    /// trip count by gender, most frequent first
    pub genders: Statistic<IndexMap<String, usize>>,
    pub birth_years: Statistic<BirthYearStats>,
}

impl UserDemographicsReport {
    pub fn from_records(records: &[TripRecord], capabilities: &DatasetCapabilities) -> Self {
        let user_types = distribution(records.iter().filter_map(|r| r.user_type()));
        let genders = if capabilities.has_gender {
            distribution(records.iter().filter_map(|r| r.gender()))
        } else {
            Statistic::NotApplicable
        };
        let birth_years = if capabilities.has_birth_year {
            birth_year_stats(records)
        } else {
            Statistic::NotApplicable
        };
        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn distribution<'a>(values: impl Iterator<Item = &'a str>) -> Statistic<IndexMap<String, usize>> {
    let counts: IndexMap<String, usize> = value_counts(values)
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    if counts.is_empty() {
        Statistic::NoData
    } else {
        Statistic::Value(counts)
    }
}

fn birth_year_stats(records: &[TripRecord]) -> Statistic<BirthYearStats> {
    let years = records.iter().filter_map(|r| r.birth_year());
    let stats = match (years.clone().min(), years.clone().max(), mode(years)) {
        (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };
    Statistic::from_option(stats)
}

use std::{fmt::Display, str::FromStr};

use chrono::Weekday;

use crate::{
    model::calendar::{weekday_from_name, weekday_name},
    validate::validate,
    BikeshareError, TripRecord,
};

const DAY_INPUTS: [&str; 8] = [
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// day of week selection for a trip query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, record: &TripRecord) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(weekday) => record.day_of_week() == *weekday,
        }
    }
}

impl Display for DayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Only(weekday) => write!(f, "{}", weekday_name(*weekday)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate(s, &DAY_INPUTS)? {
            "all" => Ok(DayFilter::All),
            name => weekday_from_name(name).map(DayFilter::Only).ok_or_else(|| {
                BikeshareError::UnsupportedFilterValue(format!("unknown day of week '{name}'"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_filter() {
        assert_eq!(DayFilter::from_str("all").unwrap(), DayFilter::All);
        assert_eq!(
            DayFilter::from_str("Saturday").unwrap(),
            DayFilter::Only(Weekday::Sat)
        );
        assert!(DayFilter::from_str("sat").is_err());
    }

    #[test]
    fn test_display_uses_full_names() {
        assert_eq!(DayFilter::Only(Weekday::Wed).to_string(), "Wednesday");
        assert_eq!(DayFilter::All.to_string(), "all");
    }
}

use std::{fmt::Display, str::FromStr};

use chrono::Month;

use crate::{
    model::calendar::{is_filterable_month, month_from_name},
    validate::validate,
    BikeshareError, TripRecord,
};

const MONTH_INPUTS: [&str; 7] = [
    "all", "january", "february", "march", "april", "may", "june",
];

/// month selection for a trip query. only January through June are
/// supported, matching the coverage of the published datasets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// fails with [`BikeshareError::UnsupportedFilterValue`] when this filter
    /// names a month outside of the supported range.
    pub fn check_supported(&self) -> Result<(), BikeshareError> {
        match self {
            MonthFilter::Only(month) if !is_filterable_month(month) => {
                Err(BikeshareError::UnsupportedFilterValue(format!(
                    "month '{}' is outside of the January-June range covered by trip datasets",
                    month.name()
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => record.month() == month.number_from_month(),
        }
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Only(month) => write!(f, "{}", month.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate(s, &MONTH_INPUTS)? {
            "all" => Ok(MonthFilter::All),
            name => month_from_name(name).map(MonthFilter::Only).ok_or_else(|| {
                BikeshareError::UnsupportedFilterValue(format!("unknown month '{name}'"))
            }),
        }
    }
}

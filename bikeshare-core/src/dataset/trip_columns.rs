use csv::StringRecord;

use crate::BikeshareError;

pub const START_TIME_COLUMN: &str = "Start Time";
pub const TRIP_DURATION_COLUMN: &str = "Trip Duration";
pub const START_STATION_COLUMN: &str = "Start Station";
pub const END_STATION_COLUMN: &str = "End Station";
pub const USER_TYPE_COLUMN: &str = "User Type";
pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// positions of the trip columns within a csv header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripColumns {
    pub start_time: usize,
    pub trip_duration: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub user_type: usize,
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
}

impl TripColumns {
    /// locates the trip columns in a header row. fails if any required
    /// column is missing.
    pub fn from_headers(headers: &StringRecord, dataset: &str) -> Result<Self, BikeshareError> {
        let required = |column: &str| {
            find_column(headers, column).ok_or_else(|| BikeshareError::MissingColumn {
                dataset: dataset.to_string(),
                column: column.to_string(),
            })
        };
        Ok(Self {
            start_time: required(START_TIME_COLUMN)?,
            trip_duration: required(TRIP_DURATION_COLUMN)?,
            start_station: required(START_STATION_COLUMN)?,
            end_station: required(END_STATION_COLUMN)?,
            user_type: required(USER_TYPE_COLUMN)?,
            gender: find_column(headers, GENDER_COLUMN),
            birth_year: find_column(headers, BIRTH_YEAR_COLUMN),
        })
    }
}

fn find_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_columns_may_be_absent() {
        let headers = StringRecord::from(vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ]);
        let columns = TripColumns::from_headers(&headers, "washington").expect("should find");
        assert_eq!(columns.start_time, 1);
        assert_eq!(columns.user_type, 6);
        assert_eq!(columns.gender, None);
        assert_eq!(columns.birth_year, None);
    }

    #[test]
    fn test_missing_required_column_names_it() {
        let headers = StringRecord::from(vec!["Start Time", "Trip Duration", "Start Station"]);
        match TripColumns::from_headers(&headers, "broken") {
            Err(BikeshareError::MissingColumn { column, .. }) => {
                assert_eq!(column, END_STATION_COLUMN)
            }
            other => panic!("expected missing column error, found {other:?}"),
        }
    }
}

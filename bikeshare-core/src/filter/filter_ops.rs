use super::{DayFilter, MonthFilter};
use crate::{BikeshareError, TripRecord};

/// selects the trips matching both the month and the day of week filter,
/// preserving their relative order. the input is not modified.
///
/// an empty result is valid and is only reported as a warning.
pub fn filter_trips(
    records: &[TripRecord],
    month: &MonthFilter,
    day: &DayFilter,
) -> Result<Vec<TripRecord>, BikeshareError> {
    month.check_supported()?;
    let filtered: Vec<TripRecord> = records
        .iter()
        .filter(|r| month.matches(r) && day.matches(r))
        .cloned()
        .collect();
    if filtered.is_empty() {
        log::warn!(
            "no trips match month={month}, day={day} among {} records",
            records.len()
        );
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_ops::trips_at;
    use chrono::{Month, Weekday};

    fn sample() -> Vec<TripRecord> {
        trips_at(&[
            "2017-01-02 08:00:00", // Monday
            "2017-01-03 09:00:00", // Tuesday
            "2017-02-06 10:00:00", // Monday
            "2017-03-07 11:00:00", // Tuesday
            "2017-02-07 12:00:00", // Tuesday
        ])
    }

    #[test]
    fn test_all_filters_return_input() {
        let records = sample();
        let result = filter_trips(&records, &MonthFilter::All, &DayFilter::All).unwrap();
        assert_eq!(result, records);
    }

    #[test]
    fn test_day_filter_selects_matching_weekday_in_order() {
        let records = sample();
        let result =
            filter_trips(&records, &MonthFilter::All, &DayFilter::Only(Weekday::Tue)).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.day_of_week() == Weekday::Tue));
        let hours = result.iter().map(|r| r.hour()).collect::<Vec<_>>();
        assert_eq!(hours, vec![9, 11, 12]);
    }

    #[test]
    fn test_month_and_day_combine_with_and() {
        let records = sample();
        let month = MonthFilter::Only(Month::February);
        let day = DayFilter::Only(Weekday::Tue);
        let result = filter_trips(&records, &month, &day).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hour(), 12);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let month = MonthFilter::Only(Month::January);
        let day = DayFilter::All;
        let once = filter_trips(&records, &month, &day).unwrap();
        let twice = filter_trips(&once, &month, &day).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = sample();
        let month = MonthFilter::Only(Month::June);
        let result = filter_trips(&records, &month, &DayFilter::All).unwrap();
        assert!(result.is_empty());
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_unsupported_month_is_rejected() {
        let records = sample();
        let month = MonthFilter::Only(Month::December);
        let result = filter_trips(&records, &month, &DayFilter::All);
        assert!(matches!(
            result,
            Err(BikeshareError::UnsupportedFilterValue(_))
        ));
    }
}

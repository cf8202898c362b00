use serde::Serialize;

use super::DatasetCapabilities;
use crate::{
    filter::{filter_trips, DayFilter, MonthFilter},
    pagination::PageCursor,
    stats::TripSummary,
    BikeshareError, TripRecord,
};

/// an ordered, read-only collection of trip records along with the optional
/// column capabilities of the dataset it was loaded from.
#[derive(Serialize, Clone, Debug)]
pub struct TripDataset {
    name: String,
    records: Vec<TripRecord>,
    capabilities: DatasetCapabilities,
}

impl TripDataset {
    pub fn new(name: &str, records: Vec<TripRecord>, capabilities: DatasetCapabilities) -> Self {
        Self {
            name: name.to_string(),
            records,
            capabilities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn capabilities(&self) -> &DatasetCapabilities {
        &self.capabilities
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// derives a new collection holding the records that match both filters.
    /// this dataset is left unchanged and the result keeps its capabilities.
    pub fn filter(&self, month: &MonthFilter, day: &DayFilter) -> Result<Self, BikeshareError> {
        let records = filter_trips(&self.records, month, day)?;
        log::debug!(
            "{} filtered by month={month}, day={day}: {} of {} records",
            self.name,
            records.len(),
            self.records.len()
        );
        Ok(Self {
            name: self.name.clone(),
            records,
            capabilities: self.capabilities,
        })
    }

    /// computes all four statistics reports over this collection.
    pub fn summarize(&self) -> TripSummary {
        TripSummary::from_dataset(self)
    }

    /// starts a cursor over this collection with the default page size.
    pub fn pages(&self) -> PageCursor<'_> {
        PageCursor::new(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_ops::trips_at;
    use chrono::Weekday;

    fn dataset() -> TripDataset {
        let records = trips_at(&[
            "2017-04-03 08:00:00",
            "2017-04-04 08:00:00",
            "2017-04-10 08:00:00",
            "2017-05-01 08:00:00",
        ]);
        let capabilities = DatasetCapabilities {
            has_gender: true,
            has_birth_year: false,
        };
        TripDataset::new("Chicago", records, capabilities)
    }

    #[test]
    fn test_filter_leaves_source_untouched() {
        let source = dataset();
        let mondays = source
            .filter(&MonthFilter::All, &DayFilter::Only(Weekday::Mon))
            .expect("should filter");
        assert_eq!(mondays.len(), 3);
        assert_eq!(mondays.name(), "Chicago");
        assert_eq!(mondays.capabilities(), source.capabilities());
        assert_eq!(source.len(), 4);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let source = dataset();
        let all = source
            .filter(&MonthFilter::All, &DayFilter::All)
            .expect("should filter");
        assert_eq!(all.records(), source.records());
    }

    #[test]
    fn test_pages_walk_filtered_records() {
        let source = dataset();
        let mut pages = source.pages();
        let page = pages.next_page();
        assert_eq!(page.records.len(), 4);
        assert!(!page.has_more);
        assert!(pages.next_page().is_empty());
    }
}

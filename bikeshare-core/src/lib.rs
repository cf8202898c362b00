//! Trip record model, filters and descriptive statistics for exploring
//! bikeshare system trip data one city at a time.
//!
//! A [`TripDataset`] is loaded from a city csv file, narrowed with a
//! [`filter::MonthFilter`] and [`filter::DayFilter`], summarized into
//! [`stats::TripSummary`] reports and paged through with a
//! [`pagination::PageCursor`].
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod stats;
pub mod util;
pub mod validate;

pub use dataset::{
    read_trips, read_trips_from_path, CityDataConfig, DatasetCapabilities, TripDataset,
    TripSource,
};
pub use error::BikeshareError;
pub use model::{City, TripRecord};

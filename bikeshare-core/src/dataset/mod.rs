mod capabilities;
mod city_data_config;
mod trip_columns;
mod trip_dataset;
mod trip_reader;
mod trip_source;

pub use capabilities::DatasetCapabilities;
pub use city_data_config::CityDataConfig;
pub use trip_columns::TripColumns;
pub use trip_dataset::TripDataset;
pub use trip_reader::{read_trips, read_trips_from_path};
pub use trip_source::TripSource;


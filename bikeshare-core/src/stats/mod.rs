mod station_popularity;
mod statistic;
mod time_of_travel;
mod trip_duration;
mod trip_summary;
mod user_demographics;

pub mod mode_ops;

pub use station_popularity::{StationPair, StationPopularityReport};
pub use statistic::Statistic;
pub use time_of_travel::TimeOfTravelReport;
pub use trip_duration::{TravelTime, TripDurationReport};
pub use trip_summary::TripSummary;
pub use user_demographics::{BirthYearStats, UserDemographicsReport};

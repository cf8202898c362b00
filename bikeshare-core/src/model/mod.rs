mod city;
mod trip_record;

pub mod calendar;

pub use city::City;
pub use trip_record::{derive_time_fields, TripRecord};

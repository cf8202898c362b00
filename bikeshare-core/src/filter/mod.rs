mod day_filter;
mod filter_ops;
mod month_filter;

pub use day_filter::DayFilter;
pub use filter_ops::filter_trips;
pub use month_filter::MonthFilter;

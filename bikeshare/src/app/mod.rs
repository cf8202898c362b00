mod bikeshare_app;
mod operation;

pub mod app_config;
pub mod console;
pub mod explore;
pub mod presentation;

pub use bikeshare_app::{BikeshareApp, OutputFormat};
pub use operation::BikeshareOperation;

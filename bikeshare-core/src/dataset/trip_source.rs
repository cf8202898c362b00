use super::{CityDataConfig, TripDataset};
use crate::{BikeshareError, City};

/// provides the full trip dataset for a city.
pub trait TripSource {
    fn load(&self, city: &City) -> Result<TripDataset, BikeshareError>;
}

impl TripSource for CityDataConfig {
    fn load(&self, city: &City) -> Result<TripDataset, BikeshareError> {
        CityDataConfig::load(self, city)
    }
}

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{read_trips_from_path, TripDataset};
use crate::{BikeshareError, City};

/// maps each city to the csv file holding its trip data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityDataConfig {
    /// directory that city file names are resolved against.
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    /// file name (or path relative to `data_directory`) per city.
    #[serde(default = "default_city_files")]
    pub cities: IndexMap<City, String>,
}

fn default_data_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_city_files() -> IndexMap<City, String> {
    City::ALL
        .iter()
        .map(|c| (*c, c.default_filename().to_string()))
        .collect()
}

impl Default for CityDataConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            cities: default_city_files(),
        }
    }
}

impl CityDataConfig {
    /// resolves the dataset location for a city.
    pub fn dataset_path(&self, city: &City) -> Result<PathBuf, BikeshareError> {
        let filename = self.cities.get(city).ok_or_else(|| {
            BikeshareError::Config(format!(
                "no dataset configured for city '{}'",
                city.config_key()
            ))
        })?;
        Ok(self.data_directory.join(filename))
    }

    /// loads the full trip dataset for a city.
    pub fn load(&self, city: &City) -> Result<TripDataset, BikeshareError> {
        let path = self.dataset_path(city)?;
        read_trips_from_path(&path, &city.to_string())
    }
}

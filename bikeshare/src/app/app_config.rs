use std::path::Path;

use bikeshare_core::{pagination::DEFAULT_PAGE_SIZE, BikeshareError, CityDataConfig};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "BIKESHARE";

/// application configuration. every key is optional.
///
/// ```toml
/// page_size = 5
///
/// [datasets]
/// data_directory = "./data"
///
/// [datasets.cities]
/// chicago = "chicago.csv"
/// new_york = "new_york_city.csv"
/// washington = "washington.csv"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// locations of the city trip datasets
    #[serde(default)]
    pub datasets: CityDataConfig,
    /// number of raw records shown per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets: CityDataConfig::default(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// reads the configuration from an optional TOML file, with overrides from
    /// environment variables. the prefix and nested keys are both split on `__`,
    /// e.g. `BIKESHARE__PAGE_SIZE` or `BIKESHARE__DATASETS__DATA_DIRECTORY`.
    pub fn load(configuration_file: Option<&Path>) -> Result<Self, BikeshareError> {
        Self::load_with_environment(configuration_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_environment(
        configuration_file: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, BikeshareError> {
        let mut builder = Config::builder();
        if let Some(filepath) = configuration_file {
            builder = builder.add_source(File::from(filepath));
        }
        builder = builder.add_source(environment.separator("__").try_parsing(true));
        let source_name = configuration_file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<environment>"));
        let config = builder.build().map_err(|e| {
            BikeshareError::Config(format!("file '{source_name}' produced error: {e}"))
        })?;
        let app_config: AppConfig = config.try_deserialize().map_err(|e| {
            BikeshareError::Config(format!("error reading configuration from '{source_name}': {e}"))
        })?;
        if app_config.page_size == 0 {
            return Err(BikeshareError::Config(String::from(
                "page_size must be at least 1",
            )));
        }
        log::debug!("loaded configuration from {source_name}: {app_config:?}");
        Ok(app_config)
    }
}

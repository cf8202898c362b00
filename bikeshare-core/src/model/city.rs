use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{validate::validate, BikeshareError};

/// cities with a published trip dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

const CITY_INPUTS: [&str; 5] = ["chicago", "new york", "new york city", "new_york", "washington"];

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// file name of the dataset published for this city.
    pub fn default_filename(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// key used for this city in configuration files.
    pub fn config_key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new_york",
            City::Washington => "washington",
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate(s, &CITY_INPUTS)? {
            "chicago" => Ok(City::Chicago),
            "washington" => Ok(City::Washington),
            _ => Ok(City::NewYork),
        }
    }
}

use std::path::PathBuf;

use itertools::Itertools;

#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("dataset '{dataset}' is missing required column '{column}'")]
    MissingColumn { dataset: String, column: String },
    #[error("dataset '{dataset}' row {row} has invalid data: {message}")]
    DataFormat {
        dataset: String,
        row: usize,
        message: String,
    },
    #[error("failed to read csv data from '{dataset}': {message}")]
    Csv { dataset: String, message: String },
    #[error("unsupported filter value: {0}")]
    UnsupportedFilterValue(String),
    #[error("invalid input '{input}', expected one of: {expected}")]
    InvalidInput { input: String, expected: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failure reading from or writing to the console: {0}")]
    Console(std::io::Error),
}

/// builds an [`BikeshareError::InvalidInput`] listing the accepted values.
pub fn invalid_input_error(input: &str, allowed: &[&str]) -> BikeshareError {
    BikeshareError::InvalidInput {
        input: input.to_string(),
        expected: allowed.iter().join(", "),
    }
}

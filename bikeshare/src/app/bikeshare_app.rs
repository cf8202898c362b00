use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use super::BikeshareOperation;

/// Command line tool for exploring bikeshare trip data by city, month and day of week
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BikeshareApp {
    /// TOML file configuring dataset locations and the raw record page size.
    /// if not provided, datasets are read from the current working directory.
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub op: BikeshareOperation,
}

/// output format for one-shot reports.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::{
        filter::{DayFilter, MonthFilter},
        City,
    };
    use chrono::{Month, Weekday};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        BikeshareApp::command().debug_assert();
    }

    #[test]
    fn test_parse_report_arguments() {
        let app = BikeshareApp::try_parse_from([
            "bikeshare",
            "--config-file",
            "bikeshare.toml",
            "report",
            "--city",
            "new york",
            "--month",
            "march",
            "--day",
            "friday",
            "--format",
            "json",
        ])
        .expect("should parse");
        assert_eq!(app.config_file, Some(PathBuf::from("bikeshare.toml")));
        match app.op {
            BikeshareOperation::Report {
                city,
                month,
                day,
                format,
            } => {
                assert_eq!(city, City::NewYork);
                assert_eq!(month, MonthFilter::Only(Month::March));
                assert_eq!(day, DayFilter::Only(Weekday::Fri));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected report operation"),
        }
    }

    #[test]
    fn test_filters_default_to_all() {
        let app = BikeshareApp::try_parse_from(["bikeshare", "raw", "--city", "chicago"])
            .expect("should parse");
        match app.op {
            BikeshareOperation::Raw {
                month, day, pages, ..
            } => {
                assert_eq!(month, MonthFilter::All);
                assert_eq!(day, DayFilter::All);
                assert_eq!(pages, 1);
            }
            _ => panic!("expected raw operation"),
        }
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = BikeshareApp::try_parse_from([
            "bikeshare", "report", "--city", "chicago", "--month", "july",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_pages_is_rejected() {
        let result = BikeshareApp::try_parse_from([
            "bikeshare", "raw", "--city", "chicago", "--pages", "0",
        ]);
        assert!(result.is_err());
        let app = BikeshareApp::try_parse_from([
            "bikeshare", "raw", "--city", "chicago", "--pages", "3",
        ])
        .expect("should parse");
        assert!(matches!(app.op, BikeshareOperation::Raw { pages: 3, .. }));
    }
}

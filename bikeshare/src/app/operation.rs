use std::io::{self, Write};

use bikeshare_core::{
    filter::{DayFilter, MonthFilter},
    pagination::PageCursor,
    BikeshareError, City, TripDataset,
};
use clap::Subcommand;

use super::{
    app_config::AppConfig,
    console::Console,
    explore::ExploreSession,
    presentation::{render_records, render_summary, separator},
    OutputFormat,
};

#[derive(Debug, Clone, Subcommand)]
pub enum BikeshareOperation {
    /// interactively choose a city and filters, view statistics and page through raw trips
    Explore,
    /// print descriptive statistics for one city and filter selection
    Report {
        /// city to analyze: chicago, new york or washington
        #[arg(long)]
        city: City,
        /// month to filter by (january through june), or "all"
        #[arg(long, default_value_t = MonthFilter::All)]
        month: MonthFilter,
        /// day of week to filter by, or "all"
        #[arg(long, default_value_t = DayFilter::All)]
        day: DayFilter,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// print raw trip records one page at a time
    Raw {
        /// city to analyze: chicago, new york or washington
        #[arg(long)]
        city: City,
        /// month to filter by (january through june), or "all"
        #[arg(long, default_value_t = MonthFilter::All)]
        month: MonthFilter,
        /// day of week to filter by, or "all"
        #[arg(long, default_value_t = DayFilter::All)]
        day: DayFilter,
        /// number of pages to print, at least 1
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        pages: usize,
    },
}

impl BikeshareOperation {
    pub fn run(&self, config: &AppConfig) -> Result<(), BikeshareError> {
        match self {
            BikeshareOperation::Explore => {
                let stdin = io::stdin();
                let mut console = Console::new(stdin.lock(), io::stdout());
                ExploreSession::new(&config.datasets, config.page_size).run(&mut console)
            }
            BikeshareOperation::Report {
                city,
                month,
                day,
                format,
            } => {
                let filtered = load_filtered(config, city, month, day)?;
                let summary = filtered.summarize();
                let text = match format {
                    OutputFormat::Text => render_summary(&summary),
                    OutputFormat::Json => serde_json::to_string_pretty(&summary).map_err(|e| {
                        BikeshareError::Config(format!("failure serializing report: {e}"))
                    })?,
                };
                write_stdout(&text)
            }
            BikeshareOperation::Raw {
                city,
                month,
                day,
                pages,
            } => {
                let filtered = load_filtered(config, city, month, day)?;
                if filtered.is_empty() {
                    return write_stdout(&format!(
                        "No {city} trips match month={month}, day={day}."
                    ));
                }
                let cursor = PageCursor::with_page_size(filtered.records(), config.page_size)?;
                for (index, page) in cursor.take(*pages).enumerate() {
                    if index > 0 {
                        write_stdout(&separator())?;
                    }
                    write_stdout(&render_records(page, filtered.capabilities()))?;
                }
                Ok(())
            }
        }
    }
}

fn load_filtered(
    config: &AppConfig,
    city: &City,
    month: &MonthFilter,
    day: &DayFilter,
) -> Result<TripDataset, BikeshareError> {
    let dataset = config.datasets.load(city)?;
    dataset.filter(month, day)
}

fn write_stdout(text: &str) -> Result<(), BikeshareError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").map_err(BikeshareError::Console)
}

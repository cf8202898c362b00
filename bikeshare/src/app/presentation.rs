//! text rendering of trip reports and raw records for the console.
use std::{fmt::Display, time::Duration};

use bikeshare_core::{
    model::calendar::month_name,
    stats::{
        Statistic, StationPopularityReport, TimeOfTravelReport, TripDurationReport,
        TripSummary, UserDemographicsReport,
    },
    DatasetCapabilities, TripRecord,
};
use itertools::Itertools;

pub const SEPARATOR_WIDTH: usize = 40;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// renders a statistic, or None when it does not apply to the dataset.
fn statistic_text<T, F, S>(statistic: &Statistic<T>, op: F) -> Option<String>
where
    F: FnOnce(&T) -> S,
    S: Display,
{
    match statistic {
        Statistic::Value(v) => Some(op(v).to_string()),
        Statistic::NoData => Some(String::from("no data")),
        Statistic::NotApplicable => None,
    }
}

fn push_line<T, F, S>(out: &mut Vec<String>, label: &str, statistic: &Statistic<T>, op: F)
where
    F: FnOnce(&T) -> S,
    S: Display,
{
    if let Some(text) = statistic_text(statistic, op) {
        out.push(format!("{label}: {text}"));
    }
}

/// renders a distribution as one indented line per category.
fn push_counts<'a, C>(out: &mut Vec<String>, label: &str, statistic: &'a Statistic<C>)
where
    &'a C: IntoIterator<Item = (&'a String, &'a usize)>,
{
    match statistic {
        Statistic::Value(counts) => {
            out.push(format!("{label}:"));
            out.extend(counts.into_iter().map(|(k, n)| format!("  {k}: {n}")));
        }
        Statistic::NoData => out.push(format!("{label}: no data")),
        Statistic::NotApplicable => {}
    }
}

pub fn render_time_of_travel(report: &TimeOfTravelReport) -> String {
    let mut lines = vec![
        String::from("Calculating The Most Frequent Times of Travel..."),
        String::new(),
    ];
    push_line(&mut lines, "Most common month", &report.most_common_month, |m| {
        month_name(*m).map(String::from).unwrap_or_else(|| m.to_string())
    });
    push_line(
        &mut lines,
        "Most common day of week",
        &report.most_common_day_of_week,
        |d| d.clone(),
    );
    push_line(
        &mut lines,
        "Most common start hour",
        &report.most_common_start_hour,
        |h| *h,
    );
    lines.join("\n")
}

pub fn render_station_popularity(report: &StationPopularityReport) -> String {
    let mut lines = vec![
        String::from("Calculating The Most Popular Stations and Trip..."),
        String::new(),
    ];
    push_line(
        &mut lines,
        "Most commonly used start station",
        &report.most_common_start_station,
        |s| s.clone(),
    );
    push_line(
        &mut lines,
        "Most commonly used end station",
        &report.most_common_end_station,
        |s| s.clone(),
    );
    push_line(
        &mut lines,
        "Most frequent trip",
        &report.most_common_trip,
        |p| format!("{} -> {}", p.start_station, p.end_station),
    );
    lines.join("\n")
}

pub fn render_trip_duration(report: &TripDurationReport) -> String {
    let mut lines = vec![String::from("Calculating Trip Duration..."), String::new()];
    push_line(
        &mut lines,
        "Total travel time",
        &report.total_travel_time,
        |t| t.to_string(),
    );
    push_line(
        &mut lines,
        "Average travel time",
        &report.mean_travel_time,
        |t| t.to_string(),
    );
    lines.join("\n")
}

pub fn render_user_demographics(report: &UserDemographicsReport) -> String {
    let mut lines = vec![String::from("Calculating User Stats..."), String::new()];
    push_counts(&mut lines, "Count of user types", &report.user_types);
    push_counts(&mut lines, "Count of gender", &report.genders);
    push_line(
        &mut lines,
        "Earliest year of birth",
        &report.birth_years,
        |b| b.earliest,
    );
    push_line(
        &mut lines,
        "Most recent year of birth",
        &report.birth_years,
        |b| b.most_recent,
    );
    push_line(
        &mut lines,
        "Most common year of birth",
        &report.birth_years,
        |b| b.most_common,
    );
    lines.join("\n")
}

/// renders all four reports of a summary, separated by rules.
pub fn render_summary(summary: &TripSummary) -> String {
    let header = format!("{} trips in {}", summary.trip_count, summary.dataset);
    [
        header,
        render_time_of_travel(&summary.time_of_travel),
        render_station_popularity(&summary.station_popularity),
        render_trip_duration(&summary.trip_duration),
        render_user_demographics(&summary.user_demographics),
    ]
    .join(&format!("\n{}\n", separator()))
}

pub fn render_elapsed(elapsed: Duration) -> String {
    // microsecond precision keeps humantime output short
    let rounded = Duration::from_micros(elapsed.as_micros() as u64);
    format!("This took {}.", humantime::format_duration(rounded))
}

/// renders a page of raw trip records. demographic fields are included when
/// the dataset carries them.
pub fn render_records(records: &[TripRecord], capabilities: &DatasetCapabilities) -> String {
    records
        .iter()
        .map(|r| render_record(r, capabilities))
        .join("\n\n")
}

fn render_record(record: &TripRecord, capabilities: &DatasetCapabilities) -> String {
    let mut fields = vec![
        format!(
            "Start Time: {}",
            record.start_time().format(bikeshare_core::util::date_ops::APP_DATETIME_FORMAT)
        ),
        format!("Trip Duration: {}", record.trip_duration()),
        format!("Start Station: {}", record.start_station()),
        format!("End Station: {}", record.end_station()),
        format!("User Type: {}", record.user_type().unwrap_or("")),
    ];
    if capabilities.has_gender {
        fields.push(format!("Gender: {}", record.gender().unwrap_or("")));
    }
    if capabilities.has_birth_year {
        let year = record.birth_year().map(|y| y.to_string()).unwrap_or_default();
        fields.push(format!("Birth Year: {year}"));
    }
    fields.join("\n")
}

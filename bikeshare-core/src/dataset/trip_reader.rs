use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;

use super::{DatasetCapabilities, TripColumns, TripDataset};
use crate::{util::date_ops::parse_trip_datetime, BikeshareError, TripRecord};

/// reads a trip dataset from a csv file on disk. the dataset is labeled with
/// the file path in log messages and errors.
pub fn read_trips_from_path(path: &Path, name: &str) -> Result<TripDataset, BikeshareError> {
    log::info!("reading trip records for {name} from {}", path.display());
    let file = File::open(path).map_err(|source| BikeshareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips(file, name)
}

/// reads every row of a trip csv into a [`TripDataset`]. any row with an
/// unparseable start time or invalid required value fails the whole load.
///
/// # Arguments
///
/// * `reader` - csv source with a header row
/// * `name`   - label for the dataset, used in the result and in error messages
pub fn read_trips<R: Read>(reader: R, name: &str) -> Result<TripDataset, BikeshareError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| BikeshareError::Csv {
            dataset: name.to_string(),
            message: e.to_string(),
        })?
        .clone();
    let columns = TripColumns::from_headers(&headers, name)?;

    let mut records = vec![];
    for (idx, row) in csv_reader.records().enumerate() {
        let row_number = idx + 1;
        let row = row.map_err(|e| BikeshareError::Csv {
            dataset: name.to_string(),
            message: e.to_string(),
        })?;
        let record = parse_row(&row, &columns).map_err(|message| BikeshareError::DataFormat {
            dataset: name.to_string(),
            row: row_number,
            message,
        })?;
        records.push(record);
    }

    let capabilities = DatasetCapabilities {
        has_gender: columns.gender.is_some() && records.iter().any(|r| r.gender().is_some()),
        has_birth_year: columns.birth_year.is_some()
            && records.iter().any(|r| r.birth_year().is_some()),
    };
    log::info!("loaded {} trip records for {name}", records.len());
    log::debug!(
        "{name} optional columns: gender={}, birth year={}",
        capabilities.has_gender,
        capabilities.has_birth_year
    );
    Ok(TripDataset::new(name, records, capabilities))
}

fn parse_row(row: &StringRecord, columns: &TripColumns) -> Result<TripRecord, String> {
    let start_time_str = cell(row, columns.start_time);
    let start_time = parse_trip_datetime(start_time_str)
        .map_err(|e| format!("invalid start time '{start_time_str}': {e}"))?;
    let duration_str = cell(row, columns.trip_duration);
    let trip_duration = duration_str
        .parse::<f64>()
        .map_err(|e| format!("invalid trip duration '{duration_str}': {e}"))?;
    let gender = columns.gender.map(|col| cell(row, col));
    let birth_year = match columns.birth_year.map(|col| cell(row, col)) {
        None | Some("") => None,
        Some(s) => Some(parse_birth_year(s)?),
    };

    let record = TripRecord::try_new(
        start_time,
        trip_duration,
        cell(row, columns.start_station),
        cell(row, columns.end_station),
        Some(cell(row, columns.user_type)),
    )?
    .with_gender(gender)
    .with_birth_year(birth_year);
    Ok(record)
}

/// birth years are exported as floats ("1989.0") since the column contains blanks.
fn parse_birth_year(s: &str) -> Result<i32, String> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("invalid birth year '{s}': {e}"))?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(format!("birth year '{s}' is not a whole year"));
    }
    Ok(value as i32)
}

fn cell(row: &StringRecord, col: usize) -> &str {
    row.get(col).unwrap_or_default()
}

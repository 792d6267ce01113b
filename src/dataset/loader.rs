//! Line-oriented loader for the Algerian forest fires dataset file.
//!
//! The published UPDATE file is almost-clean CSV: it carries two region
//! banner lines, a repeated header in the middle, and blank separator
//! lines. Non-data lines are recognized by shape (no day number and, for
//! full-width lines, no month number either) and skipped; malformed data
//! rows are hard errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Number of columns in a data row.
const COLUMN_COUNT: usize = 14;

/// Errors raised while loading the dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A line that looks like data failed to parse.
    #[error("bad row at line {line}: {reason}")]
    BadRow { line: usize, reason: String },
    /// The file contained no data rows at all.
    #[error("dataset contains no data rows")]
    Empty,
}

/// Categorical outcome recorded for each dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireClass {
    /// A forest fire occurred that day.
    Fire,
    /// No forest fire occurred.
    NotFire,
}

impl FireClass {
    fn parse(raw: &str) -> Option<Self> {
        // The source file pads some class labels with trailing spaces.
        match raw.trim() {
            "fire" => Some(Self::Fire),
            "not fire" => Some(Self::NotFire),
            _ => None,
        }
    }
}

/// One observation row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FireRow {
    /// Day of month.
    pub day: u8,
    /// Month (June to September in the source data).
    pub month: u8,
    /// Observation year.
    pub year: u16,
    /// Noon temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub rh: f32,
    /// Wind speed in km/h.
    pub ws: f32,
    /// Total daily rain in mm.
    pub rain: f32,
    /// Fine Fuel Moisture Code.
    pub ffmc: f32,
    /// Duff Moisture Code.
    pub dmc: f32,
    /// Drought Code.
    pub dc: f32,
    /// Initial Spread Index.
    pub isi: f32,
    /// Buildup Index.
    pub bui: f32,
    /// Fire Weather Index.
    pub fwi: f32,
    /// Recorded outcome.
    pub class: FireClass,
}

/// Load every data row from the dataset file.
pub fn load_dataset(path: &Path) -> Result<Vec<FireRow>, DatasetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if !is_data_line(&fields) {
            continue;
        }
        rows.push(parse_row(&fields, idx + 1)?);
    }
    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }
    tracing::info!("Loaded {} dataset rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Whether a line is a data row rather than a banner or header.
///
/// Data rows start with a day number. A full-width line with a numeric
/// month also qualifies, so a row with a corrupted day field still fails
/// loudly in `parse_row` instead of passing as a header.
fn is_data_line(fields: &[&str]) -> bool {
    if fields[0].parse::<u8>().is_ok() {
        return true;
    }
    fields.len() == COLUMN_COUNT && fields[1].parse::<u8>().is_ok()
}

fn parse_row(fields: &[&str], line: usize) -> Result<FireRow, DatasetError> {
    if fields.len() != COLUMN_COUNT {
        return Err(DatasetError::BadRow {
            line,
            reason: format!("expected {COLUMN_COUNT} columns, found {}", fields.len()),
        });
    }
    let class = FireClass::parse(fields[13]).ok_or_else(|| DatasetError::BadRow {
        line,
        reason: format!("unknown class label '{}'", fields[13]),
    })?;
    Ok(FireRow {
        day: parse_field(fields[0], "day", line)?,
        month: parse_field(fields[1], "month", line)?,
        year: parse_field(fields[2], "year", line)?,
        temperature: parse_field(fields[3], "Temperature", line)?,
        rh: parse_field(fields[4], "RH", line)?,
        ws: parse_field(fields[5], "Ws", line)?,
        rain: parse_field(fields[6], "Rain", line)?,
        ffmc: parse_field(fields[7], "FFMC", line)?,
        dmc: parse_field(fields[8], "DMC", line)?,
        dc: parse_field(fields[9], "DC", line)?,
        isi: parse_field(fields[10], "ISI", line)?,
        bui: parse_field(fields[11], "BUI", line)?,
        fwi: parse_field(fields[12], "FWI", line)?,
        class,
    })
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    column: &str,
    line: usize,
) -> Result<T, DatasetError> {
    raw.parse().map_err(|_| DatasetError::BadRow {
        line,
        reason: format!("column {column} has unparseable value '{raw}'"),
    })
}

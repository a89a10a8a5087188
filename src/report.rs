//! Shaping of store rows into report responses.
//!
//! Everything here is pure: the handlers fetch rows from a
//! [`Session`](crate::store::Session) and hand them to these functions.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::dates::{parse_date, DateWindow};
use crate::store::{PrecipitationRow, Station, TemperatureRow, TemperatureStats};

/// Text served on `/`
pub const INDEX_TEXT: &str = "This is the homepage!<br>\
    Current routes include: <br>\
    /api/v1.0/precipitation <br>\
    /api/v1.0/stations <br>\
    /api/v1.0/tobs <br>\
    /api/v1.0/start (where start is a date in format YYYY-MM-DD) <br>\
    /api/v1.0/start/end (where start and end are dates in format YYYY-MM-DD)";

pub const START_FORMAT_ERROR: &str = "Provided date was not in the correct format. <br>\
    Enter date in the format YYYY-MM-DD.";

pub const RANGE_FORMAT_ERROR: &str =
    "One or both of the provided dates were not in the correct format. <br>\
    Enter dates in the format YYYY-MM-DD.";

/// Precipitation report: date string to every reading taken that day
pub type PrecipitationReport = BTreeMap<String, Vec<Option<f64>>>;

/// Entry of the station listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationEntry {
    pub id: i64,
    #[serde(rename = "Station Name")]
    pub name: String,
}

/// Entry of the temperature observation listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureEntry {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Observed Temperature")]
    pub observed_temperature: f64,
}

/// Result of checking the date segments of a summary request
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRequest {
    /// Both bounds are usable; `end` is `None` for open-ended summaries
    Valid {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    /// The request was rejected with the given explanation
    Rejected(String),
}

/// Group precipitation readings by date, keeping row order within a date
pub fn group_precipitation(rows: Vec<PrecipitationRow>) -> PrecipitationReport {
    let mut report = PrecipitationReport::new();
    for row in rows {
        report.entry(row.date.to_string()).or_default().push(row.prcp);
    }
    report
}

pub fn station_entries(stations: Vec<Station>) -> Vec<StationEntry> {
    stations
        .into_iter()
        .map(|s| StationEntry {
            id: s.id,
            name: s.station,
        })
        .collect()
}

pub fn temperature_entries(rows: Vec<TemperatureRow>) -> Vec<TemperatureEntry> {
    rows.into_iter()
        .map(|row| TemperatureEntry {
            date: row.date,
            observed_temperature: row.tobs,
        })
        .collect()
}

/// Check the single date of an open-ended summary request
pub fn check_start(raw: &str, window: &DateWindow) -> SummaryRequest {
    let Ok(start) = parse_date(raw) else {
        return SummaryRequest::Rejected(START_FORMAT_ERROR.to_string());
    };

    if !window.contains(start) {
        return SummaryRequest::Rejected(format!(
            "Date is outside the valide range. <br>\
             Date must be between {} and {}.",
            window.earliest, window.latest
        ));
    }

    SummaryRequest::Valid { start, end: None }
}

/// Check both dates of a bounded summary request.
///
/// Both dates must parse before either is range checked. The start date is
/// checked first and, when it fails, the end date is not looked at.
pub fn check_range(raw_start: &str, raw_end: &str, window: &DateWindow) -> SummaryRequest {
    let (Ok(start), Ok(end)) = (parse_date(raw_start), parse_date(raw_end)) else {
        return SummaryRequest::Rejected(RANGE_FORMAT_ERROR.to_string());
    };

    if !window.contains(start) {
        return SummaryRequest::Rejected(format!(
            "Start Date is outside the valide range. <br>\
             Date must be within {} and {}.",
            window.earliest, window.latest
        ));
    }

    if !window.contains(end) {
        return SummaryRequest::Rejected(format!(
            "End Date is outside the valide range. <br>\
             Date must be between {} and {}.",
            start, window.latest
        ));
    }

    SummaryRequest::Valid {
        start,
        end: Some(end),
    }
}

/// Render the temperature summary for `from..=to`
pub fn summary_text(from: NaiveDate, to: NaiveDate, stats: TemperatureStats) -> String {
    match (stats.min, stats.max, stats.avg) {
        (Some(min), Some(max), Some(avg)) => format!(
            "The following is a summary of observed temperature date from {} to {}. <br>\
             Minimum Observed temp: {} deg F <br>\
             Maximum Observed temp: {} deg F <br>\
             Average Observed temp: {:.2} deg F",
            from,
            to,
            format_reading(min),
            format_reading(max),
            avg
        ),
        _ => format!(
            "No observed temperatures were recorded from {} to {}.",
            from, to
        ),
    }
}

/// Readings keep their decimal point, so 54 renders as `54.0`
fn format_reading(value: f64) -> String {
    format!("{:?}", value)
}

//! Date handling for report requests.
//!
//! Path segments must be strict `YYYY-MM-DD` calendar dates, and report
//! windows are checked against the fixed span covered by the dataset.

use chrono::{Days, NaiveDate};

use crate::error::{Result, SurfsUpError};

/// First day with observations in the dataset
pub const EARLIEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2010, 1, 1) {
    Some(date) => date,
    None => panic!("invalid earliest date"),
};

/// Last day with observations in the dataset
pub const LATEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 8, 23) {
    Some(date) => date,
    None => panic!("invalid latest date"),
};

/// Length of the trailing window used by the precipitation and tobs reports
pub const TRAILING_WINDOW_DAYS: u64 = 365;

/// Inclusive range of dates that report requests may ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateWindow {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    /// Whether `date` falls inside the window, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest && date <= self.latest
    }

    /// First day of the trailing window that ends at the latest date
    pub fn trailing_start(&self, days: u64) -> NaiveDate {
        self.latest
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new(EARLIEST_DATE, LATEST_DATE)
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// Every numeric position must be an ASCII digit and the separators must be
/// `-`. A well-formed string naming a day that does not exist (`2017-13-01`,
/// `2017-02-30`) is rejected as well.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(SurfsUpError::InvalidDate {
            message: format!("'{}' is not in the format YYYY-MM-DD", input),
        });
    }

    // All positions were checked to be ASCII digits above
    let year: i32 = input[0..4].parse().map_err(|_| invalid(input))?;
    let month: u32 = input[5..7].parse().map_err(|_| invalid(input))?;
    let day: u32 = input[8..10].parse().map_err(|_| invalid(input))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| SurfsUpError::InvalidDate {
        message: format!("'{}' is not a calendar date", input),
    })
}

fn invalid(input: &str) -> SurfsUpError {
    SurfsUpError::InvalidDate {
        message: format!("'{}' is not in the format YYYY-MM-DD", input),
    }
}

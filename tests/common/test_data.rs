//! Test data generation utilities.
//!
//! This module builds a SQLite measurement database with a known layout so
//! the expected reports can be computed independently in the tests.

use chrono::{Days, NaiveDate};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// Station codes in insertion order
pub const STATIONS: [(&str, &str); 3] = [
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
];

/// Station recording every day of the generated period
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// A generated measurement row
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRow {
    pub station: &'static str,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// All measurement rows of the test dataset.
///
/// A handful of early readings pin the first dataset day to 2010-01-01; the
/// rest cover 2016-06-01 through 2017-08-23. WAIHEE reports daily, KANEOHE
/// every other day and WAIKIKI every third day, so days carry one to three
/// readings and some precipitation values are missing.
pub fn fixture_rows() -> Vec<FixtureRow> {
    let mut rows = vec![
        FixtureRow {
            station: "USC00519397",
            date: ymd(2010, 1, 1),
            prcp: Some(0.08),
            tobs: 65.0,
        },
        FixtureRow {
            station: "USC00519397",
            date: ymd(2010, 1, 2),
            prcp: Some(0.0),
            tobs: 63.0,
        },
        FixtureRow {
            station: "USC00513117",
            date: ymd(2012, 7, 4),
            prcp: None,
            tobs: 81.0,
        },
    ];

    let first = ymd(2016, 6, 1);
    let last = ymd(2017, 8, 23);
    let mut day = 0u64;
    loop {
        let date = first + Days::new(day);
        if date > last {
            break;
        }

        let tobs = 60.0 + (day % 25) as f64;
        let prcp = if day % 7 == 0 {
            None
        } else {
            Some((day % 5) as f64 * 0.1)
        };

        rows.push(FixtureRow {
            station: "USC00519281",
            date,
            prcp,
            tobs,
        });
        if day % 2 == 0 {
            rows.push(FixtureRow {
                station: "USC00513117",
                date,
                prcp: Some(0.02),
                tobs: tobs + 1.0,
            });
        }
        if day % 3 == 0 {
            rows.push(FixtureRow {
                station: "USC00519397",
                date,
                prcp: None,
                tobs: tobs - 2.0,
            });
        }

        day += 1;
    }

    rows
}

/// Write the test dataset to a new SQLite file at `path`
pub async fn create_test_database(path: &Path) -> Result<()> {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;

    sqlx::query(
        "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
         latitude FLOAT, longitude FLOAT, elevation FLOAT)",
    )
    .execute(&mut conn)
    .await?;
    sqlx::query(
        "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, \
         prcp FLOAT, tobs FLOAT)",
    )
    .execute(&mut conn)
    .await?;

    let mut tx = conn.begin().await?;
    for (code, name) in STATIONS {
        sqlx::query("INSERT INTO station (station, name) VALUES (?, ?)")
            .bind(code)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }
    for row in fixture_rows() {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(row.station)
            .bind(row.date.to_string())
            .bind(row.prcp)
            .bind(row.tobs)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    conn.close().await?;
    Ok(())
}

/// Expected (min, max, avg) of `tobs` over rows in `start..=end`
pub fn expected_stats(start: NaiveDate, end: Option<NaiveDate>) -> Option<(f64, f64, f64)> {
    let temps: Vec<f64> = fixture_rows()
        .into_iter()
        .filter(|row| row.date >= start && end.map_or(true, |end| row.date <= end))
        .map(|row| row.tobs)
        .collect();

    if temps.is_empty() {
        return None;
    }

    let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg = temps.iter().sum::<f64>() / temps.len() as f64;
    Some((min, max, avg))
}

//! Read-only access to the measurement store.
//!
//! The store is a SQLite file with a `measurement` and a `station` table. It is
//! never written to. Every request opens its own [`Session`], a single
//! read-only connection that is released when the session goes out of scope.

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, FromRow};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SurfsUpError};

/// A (date, precipitation) reading from the measurement table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRow {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// A row of the station table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    pub id: i64,
    /// Station code, e.g. `USC00519281`
    pub station: String,
}

/// A (date, observed temperature) reading from the measurement table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureRow {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// A station together with the number of measurements it recorded
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StationActivity {
    pub station: String,
    pub count: i64,
}

/// Min/max/avg of observed temperatures over a window.
///
/// All three are `None` when the window holds no observations.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Row counts and observed date range of the whole dataset
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StoreStats {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Handle on the SQLite file. Cheap to clone; holds no open connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Store {
    /// Create a handle on an existing database file
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SurfsUpError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .disable_statement_logging();

        Ok(Self {
            path: path.to_path_buf(),
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-only session for one request
    pub async fn session(&self) -> Result<Session> {
        let conn = self.options.connect().await?;
        debug!(database = %self.path.display(), "Opened store session");
        Ok(Session { conn })
    }

    /// Check that both tables are readable and collect dataset statistics
    pub async fn probe(&self) -> Result<StoreStats> {
        let mut session = self.session().await?;
        let stats = session.stats().await?;
        session.close().await?;
        Ok(stats)
    }
}

/// One read-only connection, scoped to a single request.
///
/// Dropping a session releases its connection; [`Session::close`] does the
/// same but waits for the connection to shut down and reports errors.
pub struct Session {
    conn: SqliteConnection,
}

impl Session {
    /// Precipitation readings dated on or after `since`, in ascending date order
    pub async fn precipitation_since(&mut self, since: NaiveDate) -> Result<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date ASC",
        )
        .bind(since)
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    /// All stations in store order
    pub async fn stations(&mut self) -> Result<Vec<Station>> {
        let rows = sqlx::query_as::<_, Station>("SELECT id, station FROM station")
            .fetch_all(&mut self.conn)
            .await?;
        Ok(rows)
    }

    /// Stations ordered by measurement count, most active first.
    ///
    /// Ties keep whatever order the store produces.
    pub async fn station_activity(&mut self) -> Result<Vec<StationActivity>> {
        let rows = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(station) AS count FROM measurement \
             GROUP BY station ORDER BY COUNT(station) DESC",
        )
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    /// The station with the most measurements
    pub async fn most_active_station(&mut self) -> Result<StationActivity> {
        self.station_activity()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SurfsUpError::DataNotFound {
                message: "No measurements recorded for any station".to_string(),
            })
    }

    /// Observed temperatures of one station dated on or after `since`
    pub async fn temperatures_since(
        &mut self,
        station: &str,
        since: NaiveDate,
    ) -> Result<Vec<TemperatureRow>> {
        let rows = sqlx::query_as::<_, TemperatureRow>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(since)
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    /// Temperature statistics over all stations for `start..=end`, or from
    /// `start` onwards when `end` is `None`
    pub async fn temperature_stats(
        &mut self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureStats> {
        let stats = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&mut self.conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                     FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&mut self.conn)
                .await?
            }
        };
        Ok(stats)
    }

    /// Row counts and the observed date range
    pub async fn stats(&mut self) -> Result<StoreStats> {
        let stats = sqlx::query_as::<_, StoreStats>(
            "SELECT (SELECT COUNT(*) FROM station) AS station_count, \
                    COUNT(*) AS measurement_count, \
                    MIN(date) AS first_date, \
                    MAX(date) AS last_date \
             FROM measurement",
        )
        .fetch_one(&mut self.conn)
        .await?;
        Ok(stats)
    }

    /// Release the connection
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

//! Configuration management for surfsup.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dates::{DateWindow, EARLIEST_DATE, LATEST_DATE, TRAILING_WINDOW_DAYS};
use crate::error::{Result, SurfsUpError};

/// Command-line arguments for surfsup
#[derive(Parser, Debug)]
#[command(name = "surfsup")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite measurement database to serve
    #[arg(env = "SURFSUP_DATABASE")]
    pub database: PathBuf,

    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "SURFSUP_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(short, long, env = "SURFSUP_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SURFSUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long, env = "SURFSUP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Fixed span of the dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// First date with observations
    #[serde(default = "default_earliest_date")]
    pub earliest_date: NaiveDate,

    /// Last date with observations; the trailing window ends here
    #[serde(default = "default_latest_date")]
    pub latest_date: NaiveDate,

    /// Length in days of the trailing window
    #[serde(default = "default_trailing_window_days")]
    pub trailing_window_days: u64,
}

impl DatasetConfig {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.earliest_date, self.latest_date)
    }

    /// First day of the trailing window
    pub fn trailing_start(&self) -> NaiveDate {
        self.window().trailing_start(self.trailing_window_days)
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment variables
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.database))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.dataset = other.dataset;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(SurfsUpError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(SurfsUpError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SurfsUpError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.dataset.earliest_date > self.dataset.latest_date {
            return Err(SurfsUpError::Config {
                message: format!(
                    "Dataset earliest date {} is after latest date {}",
                    self.dataset.earliest_date, self.dataset.latest_date
                ),
            });
        }

        if self.dataset.trailing_window_days == 0 {
            return Err(SurfsUpError::Config {
                message: "Trailing window must be at least one day".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            earliest_date: default_earliest_date(),
            latest_date: default_latest_date(),
            trailing_window_days: default_trailing_window_days(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_earliest_date() -> NaiveDate {
    EARLIEST_DATE
}

fn default_latest_date() -> NaiveDate {
    LATEST_DATE
}

fn default_trailing_window_days() -> u64 {
    TRAILING_WINDOW_DAYS
}

fn default_log_level() -> String {
    "info".to_string()
}

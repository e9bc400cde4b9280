//! Error types for u-tempering.
//!
//! Input and configuration problems are detected before any worker runs.
//! Once a [`PtState`](crate::pt::PtState) exists, the search itself cannot
//! fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate the city coordinates.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read point file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed coordinate {value:?}")]
    MalformedCoordinate { line: usize, value: String },

    #[error("at least 3 cities are required, found {found}")]
    TooFewCities { found: usize },
}

/// Invalid solver or run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least 2 replicas are required, got {0}")]
    TooFewReplicas(usize),

    #[error("period must be at least 1")]
    ZeroPeriod,

    #[error("temperatures must be finite and non-negative, got {0}")]
    InvalidTemperature(f64),

    #[error("max_temperature ({max}) is below min_temperature ({min})")]
    InvertedTemperatureRange { min: f64, max: f64 },

    #[error("cannot read run file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure to load the optional reference tour.
///
/// Callers report this as a warning; the optimization does not depend on it.
#[derive(Debug, Error)]
pub enum ReferenceTourError {
    #[error("cannot read reference tour {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: malformed city index {value:?}")]
    MalformedIndex { line: usize, value: String },

    #[error("line {line}: city {index} is outside 1..={cities}")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        cities: usize,
    },

    #[error("line {line}: city {index} appears twice")]
    Duplicate { line: usize, index: usize },

    #[error("reference tour visits {found} cities, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Main error type for u-tempering operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for u-tempering operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    InvalidWidth(usize),
    InvalidThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth(w) => write!(f, "bar width must be at least 1, got {w}"),
            ConfigError::InvalidThreshold(t) => {
                write!(f, "abbreviation threshold must be a finite value >= 0, got {t}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Why a start/end window could not be cut out of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    InvalidStartDate(String),
    InvalidEndDate(String),
    InvertedRange {
        start: String,
        end: String,
        start_index: usize,
        end_index: usize,
    },
    LengthMismatch {
        labels: usize,
        values: usize,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InvalidStartDate(s) => write!(f, "invalid start date `{s}`"),
            SelectError::InvalidEndDate(s) => write!(f, "invalid end date `{s}`"),
            SelectError::InvertedRange {
                start,
                end,
                start_index,
                end_index,
            } => write!(
                f,
                "the start date must come before the end date: `{start}` is entry #{start_index}, \
                 `{end}` is entry #{end_index} (data is assumed to be ordered chronologically)"
            ),
            SelectError::LengthMismatch { labels, values } => {
                write!(f, "{labels} labels but {values} values")
            }
        }
    }
}
impl Error for SelectError {}

/// Getting the raw mapping failed.
#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status { url: String, status: u16 },
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "request failed: {e}"),
            FetchError::Status { url, status } => write!(f, "{url} answered with HTTP {status}"),
            FetchError::Io(e) => write!(f, "read failed: {e}"),
            FetchError::Json(e) => write!(f, "expected a JSON object of label -> number: {e}"),
        }
    }
}
impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            FetchError::Io(e) => Some(e),
            FetchError::Json(e) => Some(e),
            FetchError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
impl From<io::Error> for FetchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// A decoded entry that is not a usable number.
#[derive(Debug, Clone, PartialEq)]
pub struct DataError {
    pub label: String,
    pub text: String,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry `{}`: `{}` is not a finite number", self.label, self.text)
    }
}
impl Error for DataError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Io(io::Error),
    Config(ConfigError),
    Select(SelectError),
    Fetch(FetchError),
    Data(DataError),
    EmptyData,
}

impl PlotError {
    /// Follow-up advice printed under the error, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PlotError::Select(
                SelectError::InvalidStartDate(_)
                | SelectError::InvalidEndDate(_)
                | SelectError::InvertedRange { .. },
            ) => Some(
                "Use `plotter view --url <URL>` to inspect your data and see the available dates",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(e) => write!(f, "{e}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::Select(e) => write!(f, "{e}"),
            PlotError::Fetch(e) => write!(f, "{e}"),
            PlotError::Data(e) => write!(f, "{e}"),
            PlotError::EmptyData => write!(f, "data set is empty"),
        }
    }
}
impl Error for PlotError {}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<SelectError> for PlotError {
    fn from(e: SelectError) -> Self {
        Self::Select(e)
    }
}
impl From<FetchError> for PlotError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}
impl From<DataError> for PlotError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}
impl From<serde_json::Error> for PlotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Fetch(FetchError::Json(e))
    }
}

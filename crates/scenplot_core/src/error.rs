use std::fmt;
use std::path::PathBuf;

/// Errors raised while reading and reshaping the delimited input files.
///
/// Every variant carries the offending path, and where it applies the
/// 1-based line number, so a failed run names the exact cell that broke.
#[derive(Debug)]
pub enum ReadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    /// The file ended before the fixed rows the format requires.
    TooFewLines { path: PathBuf, found: usize },
    /// A data field did not parse as a floating-point number.
    BadNumber {
        path: PathBuf,
        line: usize,
        field: usize,
        value: String,
    },
    /// A data row carried the wrong number of region values.
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A row's time field named a year outside the declared time axis.
    UnknownYear {
        path: PathBuf,
        line: usize,
        year: i32,
    },
    /// Two rows resolved to the same (scenario, year) cell.
    DuplicateCell {
        path: PathBuf,
        line: usize,
        scenario: String,
        year: i32,
    },
    /// A scenario had more order-placed rows than the time axis has slots.
    ScenarioOverflow {
        path: PathBuf,
        scenario: String,
        capacity: usize,
    },
    /// Region headers disagree between files that must share column order.
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            ReadError::Csv { path, source } => {
                write!(f, "malformed delimited text in {}: {source}", path.display())
            }
            ReadError::TooFewLines { path, found } => {
                write!(
                    f,
                    "{} has {found} line(s), fewer than the format requires",
                    path.display()
                )
            }
            ReadError::BadNumber {
                path,
                line,
                field,
                value,
            } => {
                write!(
                    f,
                    "{}:{line}: field {field} is not numeric: {value:?}",
                    path.display()
                )
            }
            ReadError::FieldCount {
                path,
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{}:{line}: expected {expected} region value(s), found {found}",
                    path.display()
                )
            }
            ReadError::UnknownYear { path, line, year } => {
                write!(
                    f,
                    "{}:{line}: year {year} is not on the declared time axis",
                    path.display()
                )
            }
            ReadError::DuplicateCell {
                path,
                line,
                scenario,
                year,
            } => {
                write!(
                    f,
                    "{}:{line}: duplicate row for scenario {scenario:?}, year {year}",
                    path.display()
                )
            }
            ReadError::ScenarioOverflow {
                path,
                scenario,
                capacity,
            } => {
                write!(
                    f,
                    "{}: scenario {scenario:?} has more rows than the {capacity} time step(s) declared",
                    path.display()
                )
            }
            ReadError::HeaderMismatch { expected, found } => {
                write!(
                    f,
                    "region headers disagree between input files: {expected:?} vs {found:?}"
                )
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io { source, .. } => Some(source),
            ReadError::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadError>;

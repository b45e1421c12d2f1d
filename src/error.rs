use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort turning a timing file into chart artifacts.
///
/// None of these are recovered from: a failure for one input file leaves no
/// partial output behind for it.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is empty, not even a header line.
    #[error("input is empty, expected a header line followed by data rows")]
    MissingHeader,

    /// A header but zero data rows: there is nothing to plot.
    #[error("no data rows after the header")]
    NoDataRows,

    #[error("line {line}: expected {expected} whitespace-separated integers, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {value:?} is not a decimal integer")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to render chart to {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

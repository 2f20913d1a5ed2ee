use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a capture file.
///
/// Line numbers are 1-based and count the preamble, so they match what an
/// editor shows for the file.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("cannot open capture file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected at least {expected} fields separated by \", \", found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: '{value}' is not a number")]
    NotNumeric {
        line: usize,
        column: usize,
        value: String,
    },
}

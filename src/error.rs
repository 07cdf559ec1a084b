use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Result type returned by every fallible operation of the crate.
pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
/// Errors raised while configuring, reading or writing a CSV file.
pub enum CsvError {
    /// A dialect setting or the detected line break is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying handle refused the rendered row.
    #[error("Cannot write to file {target}: {message}")]
    Write { target: String, message: String },

    /// A field key matched neither a position nor a column name.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Cannot open file {}: {source}", .path.display())]
    NotFoundOrPermission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file has been closed; no further reads or writes are possible.
    #[error("File is closed")]
    Closed,
}

/// Stable, machine readable tag for a [`CsvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Write,
    OutOfRange,
    NotFoundOrPermission,
    Io,
    Parse,
    Closed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalidParam",
            ErrorKind::Write => "writeError",
            ErrorKind::OutOfRange => "outOfRange",
            ErrorKind::NotFoundOrPermission => "fileNotFound",
            ErrorKind::Io => "ioError",
            ErrorKind::Parse => "parseError",
            ErrorKind::Closed => "closed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CsvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CsvError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CsvError::Write { .. } => ErrorKind::Write,
            CsvError::OutOfRange(_) => ErrorKind::OutOfRange,
            CsvError::NotFoundOrPermission { .. } => ErrorKind::NotFoundOrPermission,
            CsvError::Io(_) => ErrorKind::Io,
            CsvError::Parse(_) => ErrorKind::Parse,
            CsvError::Closed => ErrorKind::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_stable() {
        let error = CsvError::InvalidArgument("Delimiter cannot be empty.".to_string());
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.kind().as_str(), "invalidParam");

        let error = CsvError::Write {
            target: "out.csv".to_string(),
            message: "0 bytes written".to_string(),
        };
        assert_eq!(error.kind().to_string(), "writeError");
        assert_eq!(
            error.to_string(),
            "Cannot write to file out.csv: 0 bytes written"
        );

        assert_eq!(CsvError::Closed.kind().as_str(), "closed");
    }

    #[test]
    fn open_failure_keeps_path_and_source() {
        let error = CsvError::NotFoundOrPermission {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.kind(), ErrorKind::NotFoundOrPermission);
        assert_eq!(error.to_string(), "Cannot open file missing.csv: no such file");
        assert!(std::error::Error::source(&error).is_some());
    }
}

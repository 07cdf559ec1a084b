use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CsvError, CsvResult};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_ENCLOSURE: &str = "\"";

/// Line terminator of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreak {
    /// Windows-style (`\r\n`)
    Crlf,
    /// Unix-style (`\n`)
    Lf,
    /// Mac classic (`\r`). Detected, but never accepted for reading.
    Cr,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Crlf => "\r\n",
            LineBreak::Lf => "\n",
            LineBreak::Cr => "\r",
        }
    }

    /// Escaped form, e.g. `\r\n`, suitable for messages and logs.
    pub fn as_text(&self) -> &'static str {
        match self {
            LineBreak::Crlf => "\\r\\n",
            LineBreak::Lf => "\\n",
            LineBreak::Cr => "\\r",
        }
    }

    /// Detects the terminator from the raw bytes of a single line.
    ///
    /// The line is expected to have been read up to and including the first
    /// `\n`. A carriage return that is not followed by `\n` means the whole
    /// file uses old Mac line endings.
    pub fn detect(raw_line: &[u8]) -> Option<LineBreak> {
        if raw_line.ends_with(b"\r\n") {
            Some(LineBreak::Crlf)
        } else if raw_line.ends_with(b"\n") {
            Some(LineBreak::Lf)
        } else if raw_line.contains(&b'\r') {
            Some(LineBreak::Cr)
        } else {
            None
        }
    }

    /// Whether records may be read from a file using this terminator.
    pub fn is_accepted(&self) -> bool {
        matches!(self, LineBreak::Crlf | LineBreak::Lf)
    }

    pub(crate) fn terminator(&self) -> csv::Terminator {
        match self {
            LineBreak::Crlf => csv::Terminator::CRLF,
            LineBreak::Lf => csv::Terminator::Any(b'\n'),
            LineBreak::Cr => csv::Terminator::Any(b'\r'),
        }
    }
}

impl fmt::Display for LineBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Checks a detected line break before any record is read.
///
/// Only `\r\n` and `\n` pass; a `\r`-only or undetected terminator fails
/// so that no misparsed row is ever produced.
pub fn validate_line_break(line_break: Option<LineBreak>) -> CsvResult<LineBreak> {
    match line_break {
        Some(line_break) if line_break.is_accepted() => Ok(line_break),
        _ => Err(CsvError::InvalidArgument(
            "Invalid line break. Please use unix \\n or win \\r\\n line breaks.".to_string(),
        )),
    }
}

/// CSV dialect: how fields are separated, quoted and terminated.
///
/// Lengths are counted in bytes, so every character must be ASCII. An empty
/// `enclosure` switches quoting off entirely; an empty `escaped_by` disables
/// the secondary escape character.
///
/// `line_break` is the terminator used for writing when none can be
/// detected from the underlying file (write-only sinks, new files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub delimiter: String,
    pub enclosure: String,
    pub escaped_by: String,
    pub line_break: LineBreak,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            enclosure: DEFAULT_ENCLOSURE.to_string(),
            escaped_by: String::new(),
            line_break: LineBreak::Lf,
        }
    }
}

impl Dialect {
    pub fn new(delimiter: &str, enclosure: &str, escaped_by: &str) -> CsvResult<Self> {
        let dialect = Self {
            delimiter: delimiter.to_string(),
            enclosure: enclosure.to_string(),
            escaped_by: escaped_by.to_string(),
            ..Self::default()
        };
        dialect.validate()?;
        Ok(dialect)
    }

    pub fn validate(&self) -> CsvResult<()> {
        if self.delimiter.len() > 1 {
            return Err(CsvError::InvalidArgument(format!(
                "Delimiter must be a single character. \"{}\" received",
                self.delimiter
            )));
        }
        if self.delimiter.is_empty() {
            return Err(CsvError::InvalidArgument(
                "Delimiter cannot be empty.".to_string(),
            ));
        }
        if self.enclosure.len() > 1 {
            return Err(CsvError::InvalidArgument(format!(
                "Enclosure must be a single character. \"{}\" received",
                self.enclosure
            )));
        }
        if self.escaped_by.len() > 1 {
            return Err(CsvError::InvalidArgument(format!(
                "Escape character must be a single character. \"{}\" received",
                self.escaped_by
            )));
        }
        Ok(())
    }

    // The accessors below assume a validated dialect.

    pub(crate) fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    pub(crate) fn enclosure_byte(&self) -> Option<u8> {
        self.enclosure.as_bytes().first().copied()
    }

    pub(crate) fn escape_byte(&self) -> Option<u8> {
        self.escaped_by.as_bytes().first().copied()
    }
}

use std::io::{self, BufRead};

use csv::{ReaderBuilder, StringRecord, Terminator};

use crate::{
    core::dialect::{Dialect, LineBreak},
    error::CsvResult,
};

/// Reads raw bytes up to and including the next `\n`. `None` at end of stream.
pub(crate) fn read_raw_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut raw = Vec::new();
    let read = reader.read_until(b'\n', &mut raw)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(raw))
    }
}

/// Returns the content of a raw line without its terminator.
///
/// With `\r`-only files the whole file comes back as one raw line, so only
/// the part before the first carriage return is kept.
pub(crate) fn line_content(raw: &[u8], line_break: Option<LineBreak>) -> &[u8] {
    if let Some(LineBreak::Cr) = line_break {
        return match raw.iter().position(|&b| b == b'\r') {
            Some(end) => &raw[..end],
            None => raw,
        };
    }

    if let Some(stripped) = raw.strip_suffix(b"\r\n") {
        stripped
    } else if let Some(stripped) = raw.strip_suffix(b"\n") {
        stripped
    } else {
        raw
    }
}

/// Splits a single line into fields according to the dialect.
///
/// An empty enclosure turns quoting off so that no character is treated as
/// a quote; an empty escape character likewise matches nothing. A blank line
/// yields one empty field. The line has already been stripped of its
/// terminator, so a stray `\r` is field content.
pub(crate) fn split_fields(line: &[u8], dialect: &Dialect) -> CsvResult<Vec<String>> {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter_byte())
        .terminator(Terminator::Any(b'\n'))
        .double_quote(true)
        .escape(dialect.escape_byte());

    match dialect.enclosure_byte() {
        Some(enclosure) => {
            builder.quote(enclosure).quoting(true);
        }
        None => {
            builder.quoting(false);
        }
    }

    let mut rdr = builder.from_reader(line);
    let mut record = StringRecord::new();
    if rdr.read_record(&mut record)? {
        Ok(record.iter().map(String::from).collect())
    } else {
        Ok(vec![String::new()])
    }
}

use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, Read, Seek, SeekFrom, Write},
    path::Path,
    sync::Arc,
};

use log::{debug, trace, warn};

use crate::{
    core::{
        dialect::{Dialect, LineBreak, validate_line_break},
        item::{ItemReader, ItemReaderResult, ItemWriter, ItemWriterResult},
    },
    error::{CsvError, CsvResult},
    item::csv::{
        csv_row::{CsvRow, Header, render_fields},
        line::{line_content, read_raw_line, split_fields},
    },
};

/// Anything that can be rendered as one line of a CSV file.
///
/// Raw field lists are rendered with the file's dialect, while a [`CsvRow`]
/// keeps the dialect snapshot it was built with.
pub trait ToCsvLine {
    fn to_csv_line(&self, dialect: &Dialect, line_break: LineBreak) -> CsvResult<String>;
}

impl ToCsvLine for CsvRow {
    fn to_csv_line(&self, _dialect: &Dialect, _line_break: LineBreak) -> CsvResult<String> {
        self.render()
    }
}

impl<S: AsRef<str>> ToCsvLine for [S] {
    fn to_csv_line(&self, dialect: &Dialect, line_break: LineBreak) -> CsvResult<String> {
        render_fields(self.iter().map(|field| field.as_ref()), dialect, line_break)
    }
}

impl<S: AsRef<str>> ToCsvLine for Vec<S> {
    fn to_csv_line(&self, dialect: &Dialect, line_break: LineBreak) -> CsvResult<String> {
        self.as_slice().to_csv_line(dialect, line_break)
    }
}

impl<S: AsRef<str>, const N: usize> ToCsvLine for [S; N] {
    fn to_csv_line(&self, dialect: &Dialect, line_break: LineBreak) -> CsvResult<String> {
        self.as_slice().to_csv_line(dialect, line_break)
    }
}

/// Iteration state of a [`CsvFile`].
#[derive(Debug)]
enum Cursor {
    /// Nothing has been read since the file was opened.
    Unread,
    Row(CsvRow),
    Exhausted,
}

/// A CSV file read and written with a fixed dialect.
///
/// The first line of a file-backed source is captured as the header when the
/// file is opened and its terminator is remembered as the file's line break.
/// Records are then produced with a forward, restartable cursor:
///
/// - [`rewind`](CsvFile::rewind) goes back to the first data row,
/// - [`next`](CsvFile::next) advances,
/// - [`current`](CsvFile::current), [`valid`](CsvFile::valid) and
///   [`key`](CsvFile::key) inspect the cursor.
///
/// Only `\n` and `\r\n` terminated files can be read. A `\r`-only file is
/// recognized when opened, but every read attempt fails with
/// [`CsvError::InvalidArgument`].
///
/// Writes always append to the end of the handle and leave the read cursor
/// there; call [`rewind`](CsvFile::rewind) to read again.
///
/// The handle is owned by the file and released exactly once, either by
/// [`close`](CsvFile::close) or when the value is dropped. Any operation after
/// `close` fails with [`CsvError::Closed`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use dialect_csv::item::csv::csv_file::CsvFileBuilder;
///
/// let data = Cursor::new(b"id,name\n1,Alice\n2,Bob\n".to_vec());
/// let mut file = CsvFileBuilder::new().from_stream(data).unwrap();
///
/// assert_eq!(&file.header()[..], ["id", "name"]);
///
/// file.rewind().unwrap();
/// let row = file.current().unwrap();
/// assert_eq!(&row["name"], "Alice");
/// assert_eq!(&row[0], "1");
///
/// file.next().unwrap();
/// assert_eq!(file.key(), 1);
/// assert_eq!(&file.current().unwrap()["name"], "Bob");
///
/// file.next().unwrap();
/// assert!(!file.valid());
/// ```
pub struct CsvFile<H: Read + Write + Seek = File> {
    handle: Option<BufReader<H>>,
    target: String,
    dialect: Dialect,
    header: Header,
    has_header_row: bool,
    line_break: Option<LineBreak>,
    row_counter: usize,
    cursor: Cursor,
}

impl<H: Read + Write + Seek> CsvFile<H> {
    fn new(handle: H, target: String, dialect: Dialect) -> Self {
        Self {
            handle: Some(BufReader::new(handle)),
            target,
            header: Arc::from(Vec::new()),
            has_header_row: false,
            line_break: Some(dialect.line_break),
            dialect,
            row_counter: 0,
            cursor: Cursor::Unread,
        }
    }

    /// Reads the first line as the header, then restores the handle position.
    fn capture_header(&mut self) -> CsvResult<()> {
        let handle = self.handle.as_mut().ok_or(CsvError::Closed)?;
        let position = handle.stream_position()?;
        handle.seek(SeekFrom::Start(0))?;

        let raw = read_raw_line(handle)?;
        handle.seek(SeekFrom::Start(position))?;

        self.has_header_row = true;
        match raw {
            Some(raw) => {
                self.line_break = LineBreak::detect(&raw);
                let line = line_content(&raw, self.line_break);
                self.header = Arc::from(split_fields(line, &self.dialect)?);
            }
            None => {
                self.line_break = None;
                self.header = Arc::from(Vec::new());
            }
        }

        if self.line_break == Some(LineBreak::Cr) {
            warn!(
                "{} uses \\r line breaks; records cannot be read from it",
                self.target
            );
        }
        debug!(
            "Captured header of {}: {:?} (line break: {})",
            self.target,
            self.header,
            self.line_break_as_text()
        );

        Ok(())
    }

    pub fn delimiter(&self) -> &str {
        &self.dialect.delimiter
    }

    pub fn enclosure(&self) -> &str {
        &self.dialect.enclosure
    }

    pub fn escaped_by(&self) -> &str {
        &self.dialect.escaped_by
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Identifier of the underlying resource, used in error messages.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn columns_count(&self) -> usize {
        self.header.len()
    }

    /// Line break detected from the header line, or the dialect's line break
    /// for sources without one. `None` if nothing could be detected.
    pub fn line_break(&self) -> Option<LineBreak> {
        self.line_break
    }

    pub fn line_break_as_text(&self) -> &'static str {
        self.line_break.map(|lb| lb.as_text()).unwrap_or("")
    }

    /// Fails unless the file's line break is `\n` or `\r\n`.
    pub fn validate_line_break(&self) -> CsvResult<LineBreak> {
        validate_line_break(self.line_break)
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    fn handle_mut(&mut self) -> CsvResult<&mut BufReader<H>> {
        self.handle.as_mut().ok_or(CsvError::Closed)
    }

    fn read_row(&mut self) -> CsvResult<Option<CsvRow>> {
        let handle = self.handle.as_mut().ok_or(CsvError::Closed)?;
        let line_break = validate_line_break(self.line_break)?;

        let Some(raw) = read_raw_line(handle)? else {
            trace!("End of {} reached", self.target);
            return Ok(None);
        };

        let values = split_fields(line_content(&raw, Some(line_break)), &self.dialect)?;
        if !self.header.is_empty() && values.len() != self.header.len() {
            warn!(
                "Row {} of {} has {} fields but the header has {}",
                self.row_counter,
                self.target,
                values.len(),
                self.header.len()
            );
        }
        trace!("Read row {} of {}: {:?}", self.row_counter, self.target, values);

        let dialect = Dialect {
            line_break,
            ..self.dialect.clone()
        };
        Ok(Some(CsvRow::from_parts(
            values,
            Some(Arc::clone(&self.header)),
            dialect,
        )))
    }

    fn cache(&mut self, row: Option<CsvRow>) {
        self.cursor = match row {
            Some(row) => Cursor::Row(row),
            None => Cursor::Exhausted,
        };
    }

    fn skip_header_row(&mut self) -> CsvResult<()> {
        if self.has_header_row {
            let handle = self.handle_mut()?;
            read_raw_line(handle)?;
        }
        Ok(())
    }

    /// Moves back to the first data row and caches it as the current record.
    pub fn rewind(&mut self) -> CsvResult<()> {
        self.handle_mut()?;
        self.validate_line_break()?;
        self.handle_mut()?.seek(SeekFrom::Start(0))?;
        self.skip_header_row()?;
        debug!("Rewound {}", self.target);

        self.row_counter = 0;
        let row = self.read_row()?;
        self.cache(row);
        Ok(())
    }

    /// Reads the next line and caches it as the current record.
    ///
    /// Once the file is exhausted this does nothing. Before the first
    /// [`rewind`](CsvFile::rewind) it reads from the handle's current
    /// position, skipping the header if positioned at the very start.
    pub fn next(&mut self) -> CsvResult<()> {
        self.handle_mut()?;
        let advance = match self.cursor {
            Cursor::Exhausted => return Ok(()),
            Cursor::Unread => {
                self.validate_line_break()?;
                if self.handle_mut()?.stream_position()? == 0 {
                    self.skip_header_row()?;
                }
                false
            }
            Cursor::Row(_) => true,
        };

        let row = self.read_row()?;
        self.cache(row);
        if advance {
            self.row_counter += 1;
        }
        Ok(())
    }

    /// The cached record, if the cursor is on one.
    pub fn current(&self) -> Option<&CsvRow> {
        match &self.cursor {
            Cursor::Row(row) => Some(row),
            Cursor::Unread | Cursor::Exhausted => None,
        }
    }

    /// Whether the cursor is on a record.
    pub fn valid(&self) -> bool {
        matches!(self.cursor, Cursor::Row(_))
    }

    /// Position of the current record, counted from 0 after the header.
    pub fn key(&self) -> usize {
        self.row_counter
    }

    /// Iterates over every record from the first data row.
    pub fn records(&mut self) -> Records<'_, H> {
        Records {
            file: self,
            started: false,
            done: false,
        }
    }

    /// Renders a row the way [`write_row`](CsvFile::write_row) would write it.
    pub fn row_to_string<R: ToCsvLine + ?Sized>(&self, row: &R) -> CsvResult<String> {
        let line_break = self.line_break.unwrap_or(self.dialect.line_break);
        row.to_csv_line(&self.dialect, line_break)
    }

    /// Appends a row to the end of the file.
    ///
    /// A write that fails, or that reports zero bytes written for a non empty
    /// line, is surfaced as [`CsvError::Write`].
    pub fn write_row<R: ToCsvLine + ?Sized>(&mut self, row: &R) -> CsvResult<()> {
        let line = self.row_to_string(row)?;
        let target = self.target.clone();
        let write_error = |message: String| CsvError::Write {
            target: target.clone(),
            message,
        };

        let handle = self.handle_mut()?;
        handle
            .seek(SeekFrom::End(0))
            .map_err(|error| write_error(error.to_string()))?;

        let inner = handle.get_mut();
        let mut remaining = line.as_bytes();
        while !remaining.is_empty() {
            match inner.write(remaining) {
                Ok(0) => {
                    return Err(write_error(format!(
                        "0 of {} bytes written",
                        remaining.len()
                    )));
                }
                Ok(written) => remaining = &remaining[written..],
                Err(error) => return Err(write_error(error.to_string())),
            }
        }
        inner
            .flush()
            .map_err(|error| write_error(error.to_string()))?;

        trace!("Wrote {} bytes to {}", line.len(), self.target);
        Ok(())
    }

    /// Flushes and releases the handle. Closing twice is a no-op.
    pub fn close(&mut self) -> CsvResult<()> {
        if let Some(mut handle) = self.handle.take() {
            self.cursor = Cursor::Exhausted;
            debug!("Closing {}", self.target);
            handle.get_mut().flush()?;
        }
        Ok(())
    }

    /// Closes the file and hands back the underlying handle.
    pub fn into_inner(mut self) -> CsvResult<H> {
        let handle = self.handle.take().ok_or(CsvError::Closed)?;
        Ok(handle.into_inner())
    }
}

impl<H: Read + Write + Seek> Drop for CsvFile<H> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            warn!("Error while closing {}: {}", self.target, error);
        }
    }
}

/// Iterator over the records of a [`CsvFile`], created by [`CsvFile::records`].
///
/// Starts by rewinding the file. Stops after the last record or after the
/// first error.
pub struct Records<'a, H: Read + Write + Seek> {
    file: &'a mut CsvFile<H>,
    started: bool,
    done: bool,
}

impl<H: Read + Write + Seek> Iterator for Records<'_, H> {
    type Item = CsvResult<CsvRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let moved = if self.started {
            self.file.next()
        } else {
            self.started = true;
            self.file.rewind()
        };

        if let Err(error) = moved {
            self.done = true;
            return Some(Err(error));
        }

        match self.file.current() {
            Some(row) => Some(Ok(row.clone())),
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<H: Read + Write + Seek> ItemReader<CsvRow> for CsvFile<H> {
    fn read(&mut self) -> ItemReaderResult<CsvRow> {
        match self.cursor {
            Cursor::Unread => self.rewind()?,
            Cursor::Row(_) | Cursor::Exhausted => self.next()?,
        }
        Ok(self.current().cloned())
    }
}

impl<H: Read + Write + Seek> ItemWriter<CsvRow> for CsvFile<H> {
    fn write(&mut self, item: &CsvRow) -> ItemWriterResult {
        self.write_row(item)
    }

    fn flush(&mut self) -> ItemWriterResult {
        self.handle_mut()?.get_mut().flush()?;
        Ok(())
    }

    fn close(&mut self) -> ItemWriterResult {
        CsvFile::close(self)
    }
}

impl<H: Read + Write + Seek, S: AsRef<str>> ItemWriter<Vec<S>> for CsvFile<H> {
    fn write(&mut self, item: &Vec<S>) -> ItemWriterResult {
        self.write_row(item)
    }

    fn flush(&mut self) -> ItemWriterResult {
        ItemWriter::<CsvRow>::flush(self)
    }

    fn close(&mut self) -> ItemWriterResult {
        CsvFile::close(self)
    }
}

/// A builder for configuring and opening a [`CsvFile`].
///
/// # Default Configuration
///
/// - Delimiter: comma (`,`)
/// - Enclosure: double quote (`"`)
/// - Escape character: none
/// - Line break for sources without one: `\n`
///
/// The dialect is validated by every terminal method before the handle is
/// opened, so an invalid setting never leaves a half-built file behind.
///
/// # Examples
///
/// ```no_run
/// use dialect_csv::item::csv::csv_file::CsvFileBuilder;
///
/// let mut file = CsvFileBuilder::new()
///     .delimiter(";")
///     .enclosure("'")
///     .from_path("data.csv")
///     .unwrap();
///
/// for row in file.records() {
///     println!("{}", row.unwrap());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvFileBuilder {
    dialect: Dialect,
    read_only: bool,
}

impl CsvFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter. Must be exactly one character.
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.dialect.delimiter = delimiter.to_string();
        self
    }

    /// Sets the enclosure. At most one character; empty disables quoting.
    pub fn enclosure(mut self, enclosure: &str) -> Self {
        self.dialect.enclosure = enclosure.to_string();
        self
    }

    pub fn escaped_by(mut self, escaped_by: &str) -> Self {
        self.dialect.escaped_by = escaped_by.to_string();
        self
    }

    /// Line break used for writing when the source has none to detect.
    pub fn line_break(mut self, line_break: LineBreak) -> Self {
        self.dialect.line_break = line_break;
        self
    }

    /// Replaces every dialect setting at once.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Opens the file without write access. Writes then fail with [`CsvError::Write`].
    pub fn read_only(mut self, yes: bool) -> Self {
        self.read_only = yes;
        self
    }

    /// Opens an existing file for reading and appending.
    ///
    /// For a regular file (or a symlink to one) the header is read from the
    /// first line. Other targets that can be opened get an empty header.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> CsvResult<CsvFile<File>> {
        self.dialect.validate()?;
        let path = path.as_ref();
        let not_found = |source| CsvError::NotFoundOrPermission {
            path: path.to_path_buf(),
            source,
        };

        let file = OpenOptions::new()
            .read(true)
            .append(!self.read_only)
            .open(path)
            .map_err(not_found)?;
        let is_file = fs::metadata(path).map_err(not_found)?.is_file();
        debug!("Opened {} (regular file: {})", path.display(), is_file);

        let mut csv_file = CsvFile::new(file, path.display().to_string(), self.dialect);
        if is_file {
            csv_file.capture_header()?;
        }
        Ok(csv_file)
    }

    /// Creates (or truncates) a file for writing. The header is empty.
    pub fn create<P: AsRef<Path>>(self, path: P) -> CsvResult<CsvFile<File>> {
        self.dialect.validate()?;
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| CsvError::NotFoundOrPermission {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Created {}", path.display());

        Ok(CsvFile::new(
            file,
            path.display().to_string(),
            self.dialect,
        ))
    }

    /// Treats a seekable stream like a file: the header is read from its
    /// start and the stream position is restored afterwards.
    pub fn from_stream<H: Read + Write + Seek>(self, stream: H) -> CsvResult<CsvFile<H>> {
        self.dialect.validate()?;
        let mut csv_file = CsvFile::new(stream, "<stream>".to_string(), self.dialect);
        csv_file.capture_header()?;
        Ok(csv_file)
    }

    /// Wraps a handle that is only written to. The header is empty.
    pub fn from_sink<H: Read + Write + Seek>(self, sink: H) -> CsvResult<CsvFile<H>> {
        self.dialect.validate()?;
        Ok(CsvFile::new(sink, "<sink>".to_string(), self.dialect))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor as IoCursor;

    use super::*;
    use crate::error::ErrorKind;

    fn stream(data: &str) -> CsvFile<IoCursor<Vec<u8>>> {
        CsvFileBuilder::new()
            .from_stream(IoCursor::new(data.as_bytes().to_vec()))
            .unwrap()
    }

    #[test]
    fn header_and_line_break_are_captured() {
        let file = stream("id,name\r\n1,Alice\r\n");
        assert_eq!(&file.header()[..], ["id", "name"]);
        assert_eq!(file.columns_count(), 2);
        assert_eq!(file.line_break(), Some(LineBreak::Crlf));
        assert_eq!(file.line_break_as_text(), "\\r\\n");
    }

    #[test]
    fn header_capture_restores_stream_position() {
        let mut data = IoCursor::new(b"id,name\n1,Alice\n2,Bob\n".to_vec());
        data.set_position(8);

        let mut file = CsvFileBuilder::new().from_stream(data).unwrap();
        assert_eq!(&file.header()[..], ["id", "name"]);

        file.next().unwrap();
        assert_eq!(&file.current().unwrap()["name"], "Alice");
    }

    #[test]
    fn next_before_rewind_skips_the_header() {
        let mut file = stream("id,name\n1,Alice\n");
        file.next().unwrap();
        assert_eq!(file.key(), 0);
        assert_eq!(&file.current().unwrap()["id"], "1");
    }

    #[test]
    fn iterate_all_rows() {
        let mut file = stream("id,name\n1,Alice\n2,Bob\n3,Carol\n");

        let mut names = Vec::new();
        file.rewind().unwrap();
        while file.valid() {
            let row = file.current().unwrap();
            assert_eq!(row.get("id").unwrap(), (file.key() + 1).to_string());
            names.push(row.get("name").unwrap().to_string());
            file.next().unwrap();
        }

        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(file.key(), 3);
        assert!(file.current().is_none());

        file.next().unwrap();
        assert!(!file.valid());
        assert_eq!(file.key(), 3);
    }

    #[test]
    fn carriage_return_inside_a_field_stays_in_the_row() {
        let mut file = stream("id,name,age\n1,Al\rice,30\n");
        file.rewind().unwrap();
        assert_eq!(file.current().unwrap().values(), ["1", "Al\rice", "30"]);

        file.next().unwrap();
        assert!(!file.valid());
    }

    #[test]
    fn rewind_twice_is_idempotent() {
        let mut file = stream("id,name\n1,Alice\n2,Bob\n");
        file.rewind().unwrap();
        file.next().unwrap();

        file.rewind().unwrap();
        let first = file.current().cloned();
        file.rewind().unwrap();

        assert_eq!(file.key(), 0);
        assert_eq!(file.current().cloned(), first);
        assert_eq!(first.unwrap().get("name").unwrap(), "Alice");
    }

    #[test]
    fn rows_share_the_file_header() {
        let mut file = stream("id,name\n1,Alice\n");
        file.rewind().unwrap();
        let row = file.current().unwrap();
        assert!(Arc::ptr_eq(row.header().unwrap(), file.header()));
        assert_eq!(row.line_break(), LineBreak::Lf);
    }

    #[test]
    fn cr_only_file_fails_every_read() {
        let mut file = stream("id,name\r1,Alice\r");
        assert_eq!(file.line_break(), Some(LineBreak::Cr));
        assert_eq!(&file.header()[..], ["id", "name"]);

        assert_eq!(file.rewind().unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(file.next().unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(!file.valid());
    }

    #[test]
    fn single_line_without_terminator_cannot_be_read() {
        let mut file = stream("id,name");
        assert_eq!(file.line_break(), None);
        assert_eq!(file.line_break_as_text(), "");
        assert_eq!(file.rewind().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn records_iterator_starts_from_the_top() {
        let mut file = stream("id,name\n1,Alice\n2,Bob\n");
        file.rewind().unwrap();
        file.next().unwrap();

        let rows: Vec<CsvRow> = file.records().collect::<CsvResult<_>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0]["name"], "Alice");
        assert_eq!(&rows[1]["name"], "Bob");
    }

    #[test]
    fn item_reader_yields_every_row_then_none() {
        let mut file = stream("id\n1\n2\n");
        let mut ids = Vec::new();
        while let Some(row) = file.read().unwrap() {
            ids.push(row.get(0).unwrap().to_string());
        }
        assert_eq!(ids, vec!["1", "2"]);
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn write_raw_fields_and_rows() {
        let mut file = CsvFileBuilder::new()
            .line_break(LineBreak::Crlf)
            .from_sink(IoCursor::new(Vec::new()))
            .unwrap();
        assert!(file.header().is_empty());

        file.write_row(&["a", "b,c", "d\"e"]).unwrap();

        let row = CsvRow::new(
            vec!["x".to_string(), "y".to_string()],
            None,
            Dialect::new(";", "", "").unwrap(),
        )
        .unwrap();
        file.write_row(&row).unwrap();

        let bytes = file.into_inner().unwrap().into_inner();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "\"a\",\"b,c\",\"d\"\"e\"\r\nx;y\n"
        );
    }

    #[test]
    fn single_empty_field_without_enclosure_reads_back_empty() {
        let mut file = CsvFileBuilder::new()
            .enclosure("")
            .from_stream(IoCursor::new(b"a\n".to_vec()))
            .unwrap();
        file.write_row(&[""]).unwrap();

        file.rewind().unwrap();
        assert_eq!(file.current().unwrap().values(), [""]);

        let bytes = file.into_inner().unwrap().into_inner();
        assert_eq!(bytes, b"a\n\n");
    }

    #[test]
    fn written_rows_use_the_detected_line_break() {
        let mut file = stream("id,name\r\n");
        assert_eq!(
            file.row_to_string(&vec!["2", "Bob"]).unwrap(),
            "\"2\",\"Bob\"\r\n"
        );
        file.write_row(&vec!["2", "Bob"]).unwrap();

        file.rewind().unwrap();
        assert_eq!(&file.current().unwrap()["name"], "Bob");
    }

    #[test]
    fn operations_after_close_fail() {
        let mut file = stream("id\n1\n");
        file.close().unwrap();
        file.close().unwrap();

        assert!(file.is_closed());
        assert_eq!(file.rewind().unwrap_err().kind(), ErrorKind::Closed);
        assert_eq!(file.next().unwrap_err().kind(), ErrorKind::Closed);
        assert_eq!(file.write_row(&["1"]).unwrap_err().kind(), ErrorKind::Closed);
        assert!(file.current().is_none());
    }

    #[test]
    fn invalid_dialect_fails_before_opening() {
        let error = CsvFileBuilder::new()
            .delimiter("")
            .from_sink(IoCursor::new(Vec::new()))
            .err()
            .unwrap();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }
}

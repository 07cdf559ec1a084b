use std::{
    cell::OnceCell,
    fmt,
    ops::{Index, IndexMut},
    sync::Arc,
};

use csv::{QuoteStyle, WriterBuilder};

use crate::{
    core::dialect::{Dialect, LineBreak},
    error::{CsvError, CsvResult},
};

/// Column names captured once from the first line of a file and shared by
/// every row read from it.
pub type Header = Arc<[String]>;

/// Key used to address a field: either its position or its column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for FieldKey<'_> {
    fn from(index: usize) -> Self {
        FieldKey::Index(index)
    }
}

impl<'a> From<&'a str> for FieldKey<'a> {
    fn from(name: &'a str) -> Self {
        FieldKey::Name(name)
    }
}

impl<'a> From<&'a String> for FieldKey<'a> {
    fn from(name: &'a String) -> Self {
        FieldKey::Name(name.as_str())
    }
}

impl fmt::Display for FieldKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Index(index) => write!(f, "{}", index),
            FieldKey::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// A single CSV record.
///
/// Values are kept in one ordered sequence; the header only maps names to
/// positions in that sequence, so writing through a name and through the
/// equivalent index touches the same slot.
///
/// A row also carries a snapshot of the dialect it was read with, which is
/// what [`CsvRow::render`] uses. A row read under one dialect can therefore be
/// written verbatim to a file using another.
///
/// # Examples
///
/// ```
/// use dialect_csv::{core::dialect::Dialect, item::csv::csv_row::CsvRow};
///
/// let row = CsvRow::new(
///     vec!["a".to_string(), "b,c".to_string(), "d\"e".to_string()],
///     None,
///     Dialect::default(),
/// )
/// .unwrap();
///
/// assert_eq!(row.render().unwrap(), "\"a\",\"b,c\",\"d\"\"e\"\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvRow {
    values: Vec<String>,
    header: Option<Header>,
    dialect: Dialect,
    count: OnceCell<usize>,
}

impl CsvRow {
    /// Creates a standalone row. Without a header only positional access resolves.
    ///
    /// Fails with [`CsvError::InvalidArgument`] if the dialect is invalid.
    pub fn new(values: Vec<String>, header: Option<Header>, dialect: Dialect) -> CsvResult<Self> {
        dialect.validate()?;
        Ok(Self::from_parts(values, header, dialect))
    }

    /// Builds a row from an already validated dialect.
    pub(crate) fn from_parts(values: Vec<String>, header: Option<Header>, dialect: Dialect) -> Self {
        Self {
            values,
            header,
            dialect,
            count: OnceCell::new(),
        }
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

    pub fn line_break(&self) -> LineBreak {
        self.dialect.line_break
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Number of fields. The field count never changes once a row is built.
    pub fn count(&self) -> usize {
        *self.count.get_or_init(|| self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether `key` addresses a position of the values or of the header.
    pub fn contains_key<'a>(&self, key: impl Into<FieldKey<'a>>) -> bool {
        match key.into() {
            FieldKey::Index(index) => {
                index < self.values.len() || self.header.as_ref().is_some_and(|h| index < h.len())
            }
            FieldKey::Name(name) => self.position_of(name).is_some(),
        }
    }

    pub fn get<'a>(&self, key: impl Into<FieldKey<'a>>) -> CsvResult<&str> {
        let key = key.into();
        let position = self.resolve(key)?;
        Ok(self.values[position].as_str())
    }

    pub fn get_mut<'a>(&mut self, key: impl Into<FieldKey<'a>>) -> CsvResult<&mut String> {
        let key = key.into();
        let position = self.resolve(key)?;
        Ok(&mut self.values[position])
    }

    /// Rewrites a field in place and returns the previous value.
    pub fn set<'a>(
        &mut self,
        key: impl Into<FieldKey<'a>>,
        value: impl Into<String>,
    ) -> CsvResult<String> {
        let slot = self.get_mut(key)?;
        Ok(std::mem::replace(slot, value.into()))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.header
            .as_ref()
            .and_then(|header| header.iter().position(|column| column == name))
    }

    fn resolve(&self, key: FieldKey<'_>) -> CsvResult<usize> {
        let position = match key {
            FieldKey::Index(index) => Some(index),
            FieldKey::Name(name) => self.position_of(name),
        };

        match position {
            Some(position) if position < self.values.len() => Ok(position),
            _ => Err(CsvError::OutOfRange(format!(
                "No such column or index {} in a row of {} fields",
                key,
                self.values.len()
            ))),
        }
    }

    /// Renders the row as one line of text using the row's own dialect.
    pub fn render(&self) -> CsvResult<String> {
        render_fields(&self.values, &self.dialect, self.dialect.line_break)
    }
}

/// Renders raw fields as one line: every field wrapped in the enclosure with
/// embedded enclosures doubled, joined by the delimiter and terminated by
/// `line_break`. An empty enclosure writes fields verbatim, so a single empty
/// field is rendered as a bare line break.
pub(crate) fn render_fields<I, T>(
    fields: I,
    dialect: &Dialect,
    line_break: LineBreak,
) -> CsvResult<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let fields: Vec<T> = fields.into_iter().collect();
    let unquoted_blank = dialect.enclosure_byte().is_none()
        && fields.len() == 1
        && fields[0].as_ref().is_empty();
    if fields.is_empty() || unquoted_blank {
        return Ok(line_break.as_str().to_string());
    }

    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter_byte())
        .terminator(line_break.terminator());

    match dialect.enclosure_byte() {
        Some(enclosure) => {
            builder
                .quote(enclosure)
                .quote_style(QuoteStyle::Always)
                .double_quote(true);
        }
        None => {
            builder.quote_style(QuoteStyle::Never);
        }
    }

    let mut wtr = builder.from_writer(Vec::new());
    wtr.write_record(fields)?;
    let bytes = wtr
        .into_inner()
        .map_err(|error| CsvError::Io(error.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|error| CsvError::InvalidArgument(format!("Row is not valid UTF-8: {}", error)))
}

impl fmt::Display for CsvRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&line)
    }
}

impl PartialEq for CsvRow {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.header == other.header && self.dialect == other.dialect
    }
}

impl Eq for CsvRow {}

impl Index<usize> for CsvRow {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl Index<&str> for CsvRow {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl IndexMut<usize> for CsvRow {
    fn index_mut(&mut self, index: usize) -> &mut str {
        match self.get_mut(index) {
            Ok(value) => value.as_mut_str(),
            Err(error) => panic!("{}", error),
        }
    }
}

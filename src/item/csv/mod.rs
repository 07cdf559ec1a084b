/// CSV support for reading and writing records with a configurable dialect.
///
/// # Module Architecture
///
/// 1. **CsvRow**: one record. Its values are addressable by position or by
///    column name and it renders itself back to a quoted line.
///
/// 2. **CsvFile**: owns the handle, the validated dialect and the header, and
///    produces `CsvRow`s through a forward, restartable cursor. It also
///    appends raw field lists or rows.
///
/// # Examples
///
/// ## Reading
///
/// ```
/// use std::io::Cursor;
/// use dialect_csv::item::csv::csv_file::CsvFileBuilder;
///
/// let data = "city;country;pop\r\nBoston;'United States';4628910\r\nConcord;'United States';42695\r\n";
///
/// let mut file = CsvFileBuilder::new()
///     .delimiter(";")
///     .enclosure("'")
///     .from_stream(Cursor::new(data.as_bytes().to_vec()))
///     .unwrap();
///
/// let cities: Vec<String> = file
///     .records()
///     .map(|row| row.unwrap()["city"].to_string())
///     .collect();
///
/// assert_eq!(cities, vec!["Boston", "Concord"]);
/// ```
///
/// ## Writing
///
/// ```
/// use std::io::Cursor;
/// use dialect_csv::item::csv::csv_file::CsvFileBuilder;
///
/// let mut file = CsvFileBuilder::new()
///     .from_sink(Cursor::new(Vec::new()))
///     .unwrap();
///
/// file.write_row(&["id", "name"]).unwrap();
/// file.write_row(&["1", "O\"Brien"]).unwrap();
///
/// let output = String::from_utf8(file.into_inner().unwrap().into_inner()).unwrap();
/// assert_eq!(output, "\"id\",\"name\"\n\"1\",\"O\"\"Brien\"\n");
/// ```

/// A module providing the CSV file and its cursor.
pub mod csv_file;

/// A module providing the CSV record.
pub mod csv_row;

mod line;

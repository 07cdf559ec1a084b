/*!
 # Dialect CSV

 Read and write delimited text files as sequences of named, addressable
 records, whatever their dialect.

 ## Core Concepts

- **Dialect:** delimiter, enclosure, escape character and line break of a file.
  Validated once, before any handle is touched.
- **CsvFile:** owns the file handle and the header (the first line of the
  file). Produces records through a forward, restartable cursor and appends
  new rows.
- **CsvRow:** one record. Fields are reachable by position or by column name
  and the row renders itself back into a quoted line.
- **ItemReader / ItemWriter:** the traits a `CsvFile` implements so it can be
  plugged into pipeline code.

 ## Getting Started

```rust
# use std::io::Cursor;
# use dialect_csv::{error::CsvError, item::csv::csv_file::CsvFileBuilder};
fn main() -> Result<(), CsvError> {
    let csv = "id,name\n1,Alice\n2,\"Bob \"\"the builder\"\"\"\n";

    let mut file = CsvFileBuilder::new()
        .delimiter(",")
        .enclosure("\"")
        .from_stream(Cursor::new(csv.as_bytes().to_vec()))?;

    file.rewind()?;
    while file.valid() {
        if let Some(row) = file.current() {
            println!("{} => {}", row.get("id")?, row.get(1)?);
        }
        file.next()?;
    }

    file.write_row(&["3", "Carol"])?;
    file.close()
}
```

 ## Line breaks

 The line break is detected from the header line. Files terminated by `\n` or
 `\r\n` can be read; a `\r`-only file is detected but every read fails with
 [`CsvError::InvalidArgument`].

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: dialect settings and the reader / writer traits
pub mod core;

/// Error types for CSV operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// CSV file and record
pub mod item;

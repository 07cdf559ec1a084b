use std::env::temp_dir;

use dialect_csv::{
    core::dialect::LineBreak,
    error::CsvError,
    item::csv::csv_file::CsvFileBuilder,
};
use log::info;

fn main() -> Result<(), CsvError> {
    env_logger::init();

    let path = temp_dir().join("dialect_roundtrip.csv");

    let mut writer = CsvFileBuilder::new()
        .delimiter(";")
        .enclosure("'")
        .line_break(LineBreak::Crlf)
        .create(&path)?;
    writer.write_row(&["year", "make", "model", "description"])?;
    writer.write_row(&["1948", "Porsche", "356", "Luxury sports car"])?;
    writer.write_row(&["1967", "Ford", "Mustang fastback 1967", "American car"])?;
    writer.write_row(&["2021", "Mazda", "CX-30", "SUV; 'compact'"])?;
    writer.close()?;

    let mut reader = CsvFileBuilder::new()
        .delimiter(";")
        .enclosure("'")
        .from_path(&path)?;
    info!(
        "Header: {:?}, line break: {}",
        reader.header(),
        reader.line_break_as_text()
    );

    reader.rewind()?;
    while reader.valid() {
        if let Some(row) = reader.current() {
            info!(
                "Record {}: {} {} ({})",
                reader.key(),
                row.get("make")?,
                row.get("model")?,
                row.get(3)?
            );
        }
        reader.next()?;
    }

    Ok(())
}

use crate::error::CsvError;

/// Represents the result of reading an item: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, CsvError>;

/// Represents the result of writing an item.
pub type ItemWriterResult = Result<(), CsvError>;

/// A source of items consumed one at a time by pipeline code.
///
/// `read` returns `Result<Option<R>>` rather than `Option<Result<R>>` so that
/// `?` propagates errors and end of input is plain `Ok(None)`.
pub trait ItemReader<R> {
    fn read(&mut self) -> ItemReaderResult<R>;
}

/// A destination of items.
pub trait ItemWriter<W> {
    fn write(&mut self, item: &W) -> ItemWriterResult;

    fn flush(&mut self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&mut self) -> ItemWriterResult {
        Ok(())
    }
}

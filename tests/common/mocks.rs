//! Mock version of std::fs::File;
use mockall::mock;

use std::io::{self, Read, Seek, SeekFrom, Write};

mock! {
    pub File {}
    impl Read for File {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    }
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
    impl Seek for File {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;
    }
}

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

pub mod mocks;

pub use mocks::MockFile;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `content` to a fresh file inside `dir` and returns its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write CSV file");
    path
}

/// This module provides a dialect-aware CSV file and its records.
pub mod csv;

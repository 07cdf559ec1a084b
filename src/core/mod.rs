/// Dialect settings and line-break handling.
pub mod dialect;

/// Reader and writer traits shared by every item source and destination.
pub mod item;

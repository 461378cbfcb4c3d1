//! Score output formatting

pub mod console;

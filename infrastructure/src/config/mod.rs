//! Configuration file support

pub mod file_config;
pub mod loader;

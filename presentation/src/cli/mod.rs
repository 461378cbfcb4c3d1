//! CLI definition

pub mod commands;

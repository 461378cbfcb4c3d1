//! Port definitions implemented by the infrastructure layer

pub mod catalog_source;

//! Port traits for external collaborators.

pub mod config_port;
pub mod field_schema_port;

//! Core domain types and conversion logic.

pub mod boolean;
pub mod comparison;
pub mod convert;
pub mod datetime;
pub mod error;
pub(crate) mod grammar;
pub mod month_year;
pub mod reference_code;
pub mod target_type;
pub mod tenor;
pub mod value;

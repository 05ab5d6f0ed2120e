//! fixconv — typed value conversion for FIX trading-rule fields.
//!
//! Hexagonal architecture: conversion logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;

pub use domain::boolean::parse_boolean;
pub use domain::convert::{convert, convert_by_name, convert_like, convert_text};
pub use domain::error::ConversionError;
pub use domain::target_type::TargetType;
pub use domain::value::TypedValue;

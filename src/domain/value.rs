//! Converted field values.
//!
//! A [`TypedValue`] is what rule conditions compare. Values of the same
//! variant are ordered by their native ordering; values of different
//! variants are never equal and have no ordering.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use crate::domain::datetime::FixDateTime;
use crate::domain::month_year::MonthYear;
use crate::domain::reference_code::{CountryCode, CurrencyCode, LanguageCode};
use crate::domain::target_type::TargetType;
use crate::domain::tenor::Tenor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    /// Untyped text: the passthrough result for an absent or `String` target.
    Text(String),
    Decimal(Decimal),
    Boolean(bool),
    Int(i32),
    UInt(u32),
    Char(char),
    DateTime(FixDateTime),
    Country(CountryCode),
    Currency(CurrencyCode),
    Language(LanguageCode),
    MonthYear(MonthYear),
    Tenor(Tenor),
    /// Opaque control state token, never coerced.
    EnumState(String),
}

impl TypedValue {
    pub fn target_type(&self) -> TargetType {
        TargetType::of(self)
    }
}

impl PartialOrd for TypedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use TypedValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.partial_cmp(b),
            (Decimal(a), Decimal(b)) => a.partial_cmp(b),
            (Boolean(a), Boolean(b)) => a.partial_cmp(b),
            (Int(a), Int(b)) => a.partial_cmp(b),
            (UInt(a), UInt(b)) => a.partial_cmp(b),
            (Char(a), Char(b)) => a.partial_cmp(b),
            (DateTime(a), DateTime(b)) => a.partial_cmp(b),
            (Country(a), Country(b)) => a.partial_cmp(b),
            (Currency(a), Currency(b)) => a.partial_cmp(b),
            (Language(a), Language(b)) => a.partial_cmp(b),
            (MonthYear(a), MonthYear(b)) => a.partial_cmp(b),
            (Tenor(a), Tenor(b)) => a.partial_cmp(b),
            (EnumState(a), EnumState(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Renders the value as protocol text. Booleans use the `Y`/`N` literals.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(s) | TypedValue::EnumState(s) => f.write_str(s),
            TypedValue::Decimal(d) => write!(f, "{d}"),
            TypedValue::Boolean(true) => f.write_str("Y"),
            TypedValue::Boolean(false) => f.write_str("N"),
            TypedValue::Int(n) => write!(f, "{n}"),
            TypedValue::UInt(n) => write!(f, "{n}"),
            TypedValue::Char(c) => write!(f, "{c}"),
            TypedValue::DateTime(dt) => write!(f, "{dt}"),
            TypedValue::Country(code) => write!(f, "{code}"),
            TypedValue::Currency(code) => write!(f, "{code}"),
            TypedValue::Language(code) => write!(f, "{code}"),
            TypedValue::MonthYear(my) => write!(f, "{my}"),
            TypedValue::Tenor(tenor) => write!(f, "{tenor}"),
        }
    }
}

impl From<Decimal> for TypedValue {
    fn from(d: Decimal) -> Self {
        TypedValue::Decimal(d)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Boolean(b)
    }
}

impl From<i32> for TypedValue {
    fn from(n: i32) -> Self {
        TypedValue::Int(n)
    }
}

impl From<u32> for TypedValue {
    fn from(n: u32) -> Self {
        TypedValue::UInt(n)
    }
}

impl From<char> for TypedValue {
    fn from(c: char) -> Self {
        TypedValue::Char(c)
    }
}

//! Relational operators over converted values.
//!
//! These are the FIXatdl `Edit_t` operators. `EX`/`NX` test whether a value
//! is present; the rest compare two values of the same type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::ComparisonError;
use crate::domain::value::TypedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Exists,
    NotExists,
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Operator {
    pub fn code(self) -> &'static str {
        match self {
            Operator::Exists => "EX",
            Operator::NotExists => "NX",
            Operator::Equal => "EQ",
            Operator::NotEqual => "NE",
            Operator::LessThan => "LT",
            Operator::LessOrEqual => "LE",
            Operator::GreaterThan => "GT",
            Operator::GreaterOrEqual => "GE",
        }
    }
}

impl FromStr for Operator {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EX" => Ok(Operator::Exists),
            "NX" => Ok(Operator::NotExists),
            "EQ" => Ok(Operator::Equal),
            "NE" => Ok(Operator::NotEqual),
            "LT" => Ok(Operator::LessThan),
            "LE" => Ok(Operator::LessOrEqual),
            "GT" => Ok(Operator::GreaterThan),
            "GE" => Ok(Operator::GreaterOrEqual),
            _ => Err(ComparisonError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn evaluate(
    op: Operator,
    left: Option<&TypedValue>,
    right: Option<&TypedValue>,
) -> Result<bool, ComparisonError> {
    match op {
        Operator::Exists => Ok(left.is_some()),
        Operator::NotExists => Ok(left.is_none()),
        Operator::Equal => ordering(op, left, right).map(Ordering::is_eq),
        Operator::NotEqual => ordering(op, left, right).map(Ordering::is_ne),
        Operator::LessThan => ordering(op, left, right).map(Ordering::is_lt),
        Operator::LessOrEqual => ordering(op, left, right).map(Ordering::is_le),
        Operator::GreaterThan => ordering(op, left, right).map(Ordering::is_gt),
        Operator::GreaterOrEqual => ordering(op, left, right).map(Ordering::is_ge),
    }
}

fn ordering(
    op: Operator,
    left: Option<&TypedValue>,
    right: Option<&TypedValue>,
) -> Result<Ordering, ComparisonError> {
    let (Some(left), Some(right)) = (left, right) else {
        return Err(ComparisonError::MissingOperand {
            operator: op.code().to_string(),
        });
    };
    left.partial_cmp(right)
        .ok_or_else(|| ComparisonError::Incomparable {
            left: left.target_type().to_string(),
            right: right.target_type().to_string(),
        })
}

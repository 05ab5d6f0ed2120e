//! Typed value conversion.
//!
//! The single place where FIX field text becomes a [`TypedValue`]. Conversion
//! is pure: the result depends only on the target type and the text.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::boolean::parse_boolean;
use crate::domain::datetime::FixDateTime;
use crate::domain::error::ConversionError;
use crate::domain::month_year::MonthYear;
use crate::domain::reference_code::{CountryCode, CurrencyCode, LanguageCode};
use crate::domain::target_type::TargetType;
use crate::domain::tenor::Tenor;
use crate::domain::value::TypedValue;

/// Convert `value` to `target`.
///
/// With no target the text passes through as [`TypedValue::Text`]. A null
/// value yields `Ok(None)` for the passthrough types and a
/// [`ConversionError::NullValue`] for everything else.
pub fn convert(
    target: Option<TargetType>,
    value: Option<&str>,
) -> Result<Option<TypedValue>, ConversionError> {
    let Some(target) = target else {
        return Ok(value.map(|text| TypedValue::Text(text.to_string())));
    };

    match value {
        Some(text) => convert_text(target, text).map(Some),
        None if target.is_passthrough() => Ok(None),
        None => Err(ConversionError::null_value(target)),
    }
}

/// Convert non-null text to `target`.
pub fn convert_text(target: TargetType, text: &str) -> Result<TypedValue, ConversionError> {
    match target {
        TargetType::Decimal => parse_decimal(text).map(TypedValue::Decimal),
        TargetType::Boolean => parse_boolean(Some(text)).map(TypedValue::Boolean),
        TargetType::Int => text
            .trim()
            .parse::<i32>()
            .map(TypedValue::Int)
            .map_err(|e| ConversionError::format(text, target, e.to_string())),
        TargetType::UInt => text
            .trim()
            .parse::<u32>()
            .map(TypedValue::UInt)
            .map_err(|e| ConversionError::format(text, target, e.to_string())),
        TargetType::Char => single_char(text).map(TypedValue::Char),
        TargetType::DateTime => FixDateTime::parse(text)
            .map(TypedValue::DateTime)
            .map_err(|e| ConversionError::grammar(text, target, &e)),
        TargetType::String => Ok(TypedValue::Text(text.to_string())),
        TargetType::Country => CountryCode::parse(text)
            .map(TypedValue::Country)
            .ok_or_else(|| ConversionError::invalid_cast(text, target)),
        TargetType::Currency => CurrencyCode::parse(text)
            .map(TypedValue::Currency)
            .ok_or_else(|| ConversionError::invalid_cast(text, target)),
        TargetType::Language => LanguageCode::parse(text)
            .map(TypedValue::Language)
            .ok_or_else(|| ConversionError::invalid_cast(text, target)),
        TargetType::MonthYear => MonthYear::parse(text)
            .map(TypedValue::MonthYear)
            .map_err(|e| ConversionError::grammar(text, target, &e)),
        TargetType::Tenor => Tenor::parse(text)
            .map(TypedValue::Tenor)
            .map_err(|e| ConversionError::grammar(text, target, &e)),
        TargetType::EnumState => Ok(TypedValue::EnumState(text.to_string())),
    }
}

/// Convert using the type a sample value belongs to.
pub fn convert_like(
    sample: Option<&TypedValue>,
    value: Option<&str>,
) -> Result<Option<TypedValue>, ConversionError> {
    convert(sample.map(TypedValue::target_type), value)
}

/// Convert using a type name, for callers that have not resolved the target
/// type yet. Unknown names fail with [`ConversionError::UnsupportedType`].
pub fn convert_by_name(
    type_name: Option<&str>,
    value: Option<&str>,
) -> Result<Option<TypedValue>, ConversionError> {
    let target = type_name
        .map(|name| TargetType::from_name(name, value))
        .transpose()?;
    convert(target, value)
}

/// Plain base-10 decimal: optional sign, digits, optional fraction. No
/// exponent, no digit separators. Input that does not fit exactly is an
/// error, never rounded.
fn parse_decimal(text: &str) -> Result<Decimal, ConversionError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let well_formed = !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !well_formed {
        return Err(ConversionError::format(
            text,
            TargetType::Decimal,
            "not a decimal number",
        ));
    }
    Decimal::from_str_exact(trimmed)
        .map_err(|e| ConversionError::format(text, TargetType::Decimal, e.to_string()))
}

fn single_char(text: &str) -> Result<char, ConversionError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(ConversionError::format(text, TargetType::Char, "empty value")),
        (Some(_), Some(_)) => Err(ConversionError::format(
            text,
            TargetType::Char,
            "expected exactly one character",
        )),
    }
}

//! Boolean literal normalization.
//!
//! FIX encodes booleans as `Y`/`N`; `true`/`false` are accepted as well so a
//! caller never needs to know which literal style a value uses.

use crate::domain::error::ConversionError;
use crate::domain::target_type::TargetType;

pub fn parse_boolean(value: Option<&str>) -> Result<bool, ConversionError> {
    let text = value.ok_or_else(|| ConversionError::null_value(TargetType::Boolean))?;

    if text.eq_ignore_ascii_case("Y") {
        return Ok(true);
    }
    if text.eq_ignore_ascii_case("N") {
        return Ok(false);
    }

    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConversionError::format(
            text,
            TargetType::Boolean,
            "expected Y, N, true or false",
        ))
    }
}

//! Target type descriptors.
//!
//! A [`TargetType`] is resolved once, when the field schema is read, and then
//! drives every conversion of that field's text.

use std::fmt;

use crate::domain::error::ConversionError;
use crate::domain::value::TypedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetType {
    Decimal,
    Boolean,
    Int,
    UInt,
    Char,
    DateTime,
    String,
    Country,
    Currency,
    Language,
    MonthYear,
    Tenor,
    EnumState,
}

/// Accepted spellings, lower-cased. Canonical names first, then the FIXatdl
/// parameter type names that map onto each representation.
const ALIASES: &[(&str, TargetType)] = &[
    ("decimal", TargetType::Decimal),
    ("boolean", TargetType::Boolean),
    ("bool", TargetType::Boolean),
    ("int32", TargetType::Int),
    ("int", TargetType::Int),
    ("uint32", TargetType::UInt),
    ("uint", TargetType::UInt),
    ("char", TargetType::Char),
    ("datetime", TargetType::DateTime),
    ("string", TargetType::String),
    ("countrycode", TargetType::Country),
    ("country", TargetType::Country),
    ("currencycode", TargetType::Currency),
    ("currency", TargetType::Currency),
    ("languagecode", TargetType::Language),
    ("language", TargetType::Language),
    ("monthyear", TargetType::MonthYear),
    ("tenor", TargetType::Tenor),
    ("enumstate", TargetType::EnumState),
    ("amt_t", TargetType::Decimal),
    ("float_t", TargetType::Decimal),
    ("percentage_t", TargetType::Decimal),
    ("price_t", TargetType::Decimal),
    ("priceoffset_t", TargetType::Decimal),
    ("qty_t", TargetType::Decimal),
    ("boolean_t", TargetType::Boolean),
    ("int_t", TargetType::Int),
    ("length_t", TargetType::UInt),
    ("numingroup_t", TargetType::UInt),
    ("seqnum_t", TargetType::UInt),
    ("tagnum_t", TargetType::UInt),
    ("char_t", TargetType::Char),
    ("string_t", TargetType::String),
    ("multiplecharvalue_t", TargetType::String),
    ("multiplestringvalue_t", TargetType::String),
    ("data_t", TargetType::String),
    ("exchange_t", TargetType::String),
    ("utctimestamp_t", TargetType::DateTime),
    ("utcdateonly_t", TargetType::DateTime),
    ("localmktdate_t", TargetType::DateTime),
    ("tztimestamp_t", TargetType::DateTime),
    ("country_t", TargetType::Country),
    ("currency_t", TargetType::Currency),
    ("language_t", TargetType::Language),
    ("monthyear_t", TargetType::MonthYear),
    ("tenor_t", TargetType::Tenor),
];

impl TargetType {
    pub const ALL: [TargetType; 13] = [
        TargetType::Decimal,
        TargetType::Boolean,
        TargetType::Int,
        TargetType::UInt,
        TargetType::Char,
        TargetType::DateTime,
        TargetType::String,
        TargetType::Country,
        TargetType::Currency,
        TargetType::Language,
        TargetType::MonthYear,
        TargetType::Tenor,
        TargetType::EnumState,
    ];

    /// Canonical type name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TargetType::Decimal => "Decimal",
            TargetType::Boolean => "Boolean",
            TargetType::Int => "Int32",
            TargetType::UInt => "UInt32",
            TargetType::Char => "Char",
            TargetType::DateTime => "DateTime",
            TargetType::String => "String",
            TargetType::Country => "CountryCode",
            TargetType::Currency => "CurrencyCode",
            TargetType::Language => "LanguageCode",
            TargetType::MonthYear => "MonthYear",
            TargetType::Tenor => "Tenor",
            TargetType::EnumState => "EnumState",
        }
    }

    /// Resolve a type name (case-insensitive, canonical or FIXatdl alias).
    ///
    /// `value` is only carried into the error so the diagnostic can name the
    /// text that was about to be converted.
    pub fn from_name(name: &str, value: Option<&str>) -> Result<Self, ConversionError> {
        let key = name.trim().to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, target)| *target)
            .ok_or_else(|| ConversionError::unsupported_type(value, name))
    }

    /// Accepted spellings of this type, lower-cased.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, target)| *target == self)
            .map(|(alias, _)| *alias)
    }

    /// The type a sample value belongs to.
    pub fn of(sample: &TypedValue) -> Self {
        match sample {
            TypedValue::Text(_) => TargetType::String,
            TypedValue::Decimal(_) => TargetType::Decimal,
            TypedValue::Boolean(_) => TargetType::Boolean,
            TypedValue::Int(_) => TargetType::Int,
            TypedValue::UInt(_) => TargetType::UInt,
            TypedValue::Char(_) => TargetType::Char,
            TypedValue::DateTime(_) => TargetType::DateTime,
            TypedValue::Country(_) => TargetType::Country,
            TypedValue::Currency(_) => TargetType::Currency,
            TypedValue::Language(_) => TargetType::Language,
            TypedValue::MonthYear(_) => TargetType::MonthYear,
            TypedValue::Tenor(_) => TargetType::Tenor,
            TypedValue::EnumState(_) => TargetType::EnumState,
        }
    }

    /// Whether the text passes through unchanged, null included.
    pub fn is_passthrough(self) -> bool {
        matches!(self, TargetType::String | TargetType::EnumState)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for target in TargetType::ALL {
            assert_eq!(TargetType::from_name(target.name(), None), Ok(target));
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            TargetType::from_name("DECIMAL", None),
            Ok(TargetType::Decimal)
        );
        assert_eq!(
            TargetType::from_name(" monthYear ", None),
            Ok(TargetType::MonthYear)
        );
    }

    #[test]
    fn fixatdl_aliases() {
        assert_eq!(
            TargetType::from_name("Price_t", None),
            Ok(TargetType::Decimal)
        );
        assert_eq!(TargetType::from_name("Qty_t", None), Ok(TargetType::Decimal));
        assert_eq!(TargetType::from_name("SeqNum_t", None), Ok(TargetType::UInt));
        assert_eq!(
            TargetType::from_name("UTCTimestamp_t", None),
            Ok(TargetType::DateTime)
        );
        assert_eq!(
            TargetType::from_name("Currency_t", None),
            Ok(TargetType::Currency)
        );
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = TargetType::from_name("UnsupportedCustomType", Some("x")).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedType {
                value: "x".into(),
                type_name: "UnsupportedCustomType".into(),
            }
        );
    }

    #[test]
    fn aliases_are_unique() {
        for (i, (a, _)) in ALIASES.iter().enumerate() {
            assert!(
                ALIASES[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate alias {a}"
            );
        }
    }

    #[test]
    fn every_type_has_an_alias_for_its_name() {
        for target in TargetType::ALL {
            let name = target.name().to_ascii_lowercase();
            assert!(target.aliases().any(|a| a == name), "{target}");
        }
        assert!(TargetType::Decimal.aliases().any(|a| a == "price_t"));
    }

    #[test]
    fn of_sample_value() {
        assert_eq!(TargetType::of(&TypedValue::Int(7)), TargetType::Int);
        assert_eq!(
            TargetType::of(&TypedValue::EnumState("on".into())),
            TargetType::EnumState
        );
        assert_eq!(
            TargetType::of(&TypedValue::Text(String::new())),
            TargetType::String
        );
    }

    #[test]
    fn passthrough_types() {
        assert!(TargetType::String.is_passthrough());
        assert!(TargetType::EnumState.is_passthrough());
        assert!(!TargetType::Char.is_passthrough());
    }
}

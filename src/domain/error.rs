//! Domain error types.
//!
//! [`ConversionError`] is the only failure channel of the converter. Its
//! constructors are the error-construction path: each one emits a diagnostic
//! event under [`ERROR_CONTEXT`] before handing the error back to the caller.

use crate::domain::target_type::TargetType;

/// Context identifier attached to conversion diagnostics.
pub const ERROR_CONTEXT: &str = "fixconv::domain::convert";

/// A grammar error with position information, raised by the delegated
/// date-time, month-year and tenor parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Failure to coerce protocol text into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Text is not a valid literal of the requested type.
    #[error("cannot convert value '{value}' to type '{target}': {reason}")]
    Format {
        value: String,
        target: TargetType,
        reason: String,
        /// Offset into `value` where a grammar parser stopped.
        position: Option<usize>,
    },

    /// The type is recognised but the value is not a member of its domain.
    #[error("value '{value}' is not a recognised {target}")]
    InvalidCast { value: String, target: TargetType },

    /// The type name does not identify any supported type.
    #[error("cannot convert value '{value}' to unsupported type '{type_name}'")]
    UnsupportedType { value: String, type_name: String },

    /// A null value reached a type that forbids null input.
    #[error("illegal use of null value for type '{target}'")]
    NullValue { target: TargetType },
}

impl ConversionError {
    pub fn format(value: &str, target: TargetType, reason: impl Into<String>) -> Self {
        Self::Format {
            value: value.to_string(),
            target,
            reason: reason.into(),
            position: None,
        }
        .traced()
    }

    /// A [`ParseError`] from one of the FIX grammars, keeping its position.
    pub fn grammar(value: &str, target: TargetType, err: &ParseError) -> Self {
        Self::Format {
            value: value.to_string(),
            target,
            reason: err.to_string(),
            position: Some(err.position),
        }
        .traced()
    }

    pub fn invalid_cast(value: &str, target: TargetType) -> Self {
        Self::InvalidCast {
            value: value.to_string(),
            target,
        }
        .traced()
    }

    pub fn unsupported_type(value: Option<&str>, type_name: &str) -> Self {
        Self::UnsupportedType {
            value: value.unwrap_or_default().to_string(),
            type_name: type_name.to_string(),
        }
        .traced()
    }

    pub fn null_value(target: TargetType) -> Self {
        Self::NullValue { target }.traced()
    }

    /// The offending source text, if there was one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Format { value, .. }
            | Self::InvalidCast { value, .. }
            | Self::UnsupportedType { value, .. } => Some(value),
            Self::NullValue { .. } => None,
        }
    }

    /// Name of the type the conversion was aimed at.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Format { target, .. }
            | Self::InvalidCast { target, .. }
            | Self::NullValue { target } => target.name(),
            Self::UnsupportedType { type_name, .. } => type_name,
        }
    }

    /// The message, followed by the source text with a caret under the
    /// failing position when a grammar parser reported one.
    pub fn display_with_context(&self) -> String {
        match self {
            Self::Format {
                value,
                position: Some(position),
                ..
            } => {
                let offset = value
                    .get(..*position)
                    .map_or(*position, |head| head.chars().count());
                let caret = " ".repeat(offset) + "^";
                format!("{self}\n{value}\n{caret}")
            }
            _ => self.to_string(),
        }
    }

    fn traced(self) -> Self {
        tracing::debug!(target: ERROR_CONTEXT, error = %self, "value conversion failed");
        self
    }
}

/// Failure to evaluate a relational operator over converted values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("operator {operator} requires two values")]
    MissingOperand { operator: String },

    #[error("cannot compare {left} with {right}")]
    Incomparable { left: String, right: String },
}

/// Top-level error type for fixconv.
#[derive(Debug, thiserror::Error)]
pub enum FixconvError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error("csv error: {reason}")]
    Csv { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for FixconvError {
    fn from(err: csv::Error) -> Self {
        FixconvError::Csv {
            reason: err.to_string(),
        }
    }
}

impl FixconvError {
    /// Process exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            FixconvError::Io(_) | FixconvError::Csv { .. } => 1,
            FixconvError::ConfigParse { .. }
            | FixconvError::ConfigMissing { .. }
            | FixconvError::ConfigInvalid { .. } => 2,
            FixconvError::Conversion(_) => 3,
            FixconvError::Comparison(_) => 4,
            FixconvError::UnknownField { .. } => 5,
        }
    }
}

impl From<&FixconvError> for std::process::ExitCode {
    fn from(err: &FixconvError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}

use thiserror::Error;

/// Raised when a captured value cannot be coerced into its declared type.
///
/// The pattern fragment of each type only admits coercible text, so outside of
/// numeric overflow this indicates a broken route definition rather than a bad
/// request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{raw}' to {tag} for variable '{key}': {reason}")]
pub struct ConversionError {
    pub key: String,
    pub tag: &'static str,
    pub raw: String,
    pub reason: String,
}

pub type ConversionResult<T> = Result<T, ConversionError>;

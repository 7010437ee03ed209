use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised when normalizing a calculation input at the boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must not be negative (found: {value})")]
    Negative { field: String, value: Decimal },

    #[error("{field} exceeds the maximum amount of {max} (found: {value})")]
    AmountTooLarge {
        field: String,
        value: Decimal,
        max: Decimal,
    },

    #[error("{field} has more than 2 decimal places (found: {value})")]
    SubCentPrecision { field: String, value: Decimal },

    #[error("{field} exceeds the maximum of {max} units (found: {count})")]
    TooManyUnits { field: String, count: u32, max: u32 },

    #[error("{section} has more than {max} lines (found: {count})")]
    TooManyLines {
        section: &'static str,
        count: usize,
        max: usize,
    },

    #[error("Failed to parse calculation input: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Parse(err.to_string())
    }
}

//! Fixed-point error types

use thiserror::Error;

use crate::format::Format;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixedPointError {
    #[error(
        "Invalid format: integer_bits must be positive and fractional_bits non-negative \
         (got integer_bits={integer_bits}, fractional_bits={fractional_bits})"
    )]
    InvalidFormat {
        integer_bits: i32,
        fractional_bits: i32,
    },

    #[error("Incompatible operands: expected {expected}, got {got}")]
    IncompatibleOperands { expected: Format, got: Format },

    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Unsupported bit width for binary formatting: {width} (max {max})")]
    UnsupportedWidth { width: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, FixedPointError>;

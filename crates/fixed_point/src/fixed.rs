//! Fixed-point value type

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use tracing::debug;

use crate::error::{FixedPointError, Result};
use crate::format::{Encoding, Format};

/// A real value bound to a fixed-point format.
///
/// Keeps the caller's original value next to its quantized form. The
/// quantized value is re-derived whenever the original value or the
/// encoding changes; the bit layout is fixed for the lifetime of the value.
///
/// Arithmetic works on the quantized operands with ordinary `f64` math and
/// quantizes the result again under the shared format, so overflow saturates
/// and results floor onto the grid.
///
/// No internal synchronization: share across threads only behind an
/// external lock if it will be mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint {
    original_value: f64,
    quantized_value: f64,
    format: Format,
}

impl FixedPoint {
    /// Create a value, validating the format first
    pub fn new(
        value: f64,
        integer_bits: i32,
        fractional_bits: i32,
        encoding: Encoding,
    ) -> Result<Self> {
        let format = Format::new(integer_bits, fractional_bits, encoding)?;
        Ok(Self::with_format(value, format))
    }

    /// Create a value under an already validated format
    pub fn with_format(value: f64, format: Format) -> Self {
        Self {
            original_value: value,
            quantized_value: format.quantize(value),
            format,
        }
    }

    /// Replace the original value and return the new quantized value
    pub fn quantize(&mut self, value: f64) -> f64 {
        self.original_value = value;
        self.requantize()
    }

    /// Re-derive the quantized value from the current original value
    pub fn requantize(&mut self) -> f64 {
        self.quantized_value = self.format.quantize(self.original_value);
        self.quantized_value
    }

    /// Switch encoding, keeping the original value and bit layout
    pub fn set_encoding(&mut self, encoding: Encoding) {
        debug!(from = %self.format.encoding(), to = %encoding, "encoding changed");
        self.format = self.format.with_encoding(encoding);
        self.requantize();
    }

    pub fn original_value(&self) -> f64 {
        self.original_value
    }

    pub fn quantized_value(&self) -> f64 {
        self.quantized_value
    }

    pub fn integer_bits(&self) -> i32 {
        self.format.integer_bits()
    }

    pub fn fractional_bits(&self) -> i32 {
        self.format.fractional_bits()
    }

    pub fn encoding(&self) -> Encoding {
        self.format.encoding()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// True when both values share integer bits, fractional bits and encoding
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.format == other.format
    }

    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if !self.is_compatible(other) {
            return Err(FixedPointError::IncompatibleOperands {
                expected: self.format,
                got: other.format,
            });
        }
        Ok(())
    }

    /// Add two values (must share a format)
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        Ok(Self::with_format(
            self.quantized_value + other.quantized_value,
            self.format,
        ))
    }

    /// Subtract two values (must share a format)
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        Ok(Self::with_format(
            self.quantized_value - other.quantized_value,
            self.format,
        ))
    }

    /// Multiply two values (must share a format)
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        Ok(Self::with_format(
            self.quantized_value * other.quantized_value,
            self.format,
        ))
    }

    /// Divide by `other`; fails when its quantized value is exactly zero
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.ensure_compatible(other)?;
        if other.quantized_value == 0.0 {
            return Err(FixedPointError::DivideByZero);
        }
        Ok(Self::with_format(
            self.quantized_value / other.quantized_value,
            self.format,
        ))
    }

    /// Negate the quantized value. Saturates: for two's complement,
    /// negating `min_value` yields `max_value`.
    pub fn negate(&self) -> Self {
        Self::with_format(-self.quantized_value, self.format)
    }
}

impl Add for &FixedPoint {
    type Output = Result<FixedPoint>;

    fn add(self, rhs: Self) -> Self::Output {
        FixedPoint::add(self, rhs)
    }
}

impl Sub for &FixedPoint {
    type Output = Result<FixedPoint>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for &FixedPoint {
    type Output = Result<FixedPoint>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div for &FixedPoint {
    type Output = Result<FixedPoint>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for &FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantized_value)
    }
}

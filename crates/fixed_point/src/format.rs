//! Fixed-point format descriptor

use std::fmt;

use tracing::trace;

use crate::error::{FixedPointError, Result};

/// Signed encoding of a fixed-point bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Asymmetric range: one more negative step than positive
    #[default]
    TwosComplement,
    /// Separate sign bit, symmetric range, a single (unsigned) zero
    SignMagnitude,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::TwosComplement => f.write_str("two's complement"),
            Encoding::SignMagnitude => f.write_str("sign magnitude"),
        }
    }
}

/// Exact power of two as f64.
#[inline]
pub(crate) fn pow2(exp: i32) -> f64 {
    2f64.powi(exp)
}

/// A validated fixed-point format: `integer_bits` (sign bit excluded),
/// `fractional_bits` and an [`Encoding`].
///
/// Two values are compatible for arithmetic iff their formats are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    integer_bits: i32,
    fractional_bits: i32,
    encoding: Encoding,
}

impl Format {
    /// Create a format, rejecting `integer_bits <= 0` and `fractional_bits < 0`
    pub fn new(integer_bits: i32, fractional_bits: i32, encoding: Encoding) -> Result<Self> {
        if integer_bits <= 0 || fractional_bits < 0 {
            return Err(FixedPointError::InvalidFormat {
                integer_bits,
                fractional_bits,
            });
        }
        Ok(Self {
            integer_bits,
            fractional_bits,
            encoding,
        })
    }

    pub fn integer_bits(&self) -> i32 {
        self.integer_bits
    }

    pub fn fractional_bits(&self) -> i32 {
        self.fractional_bits
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Same bit layout under a different encoding
    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }

    /// Quantization step, `2^-fractional_bits`
    pub fn step(&self) -> f64 {
        pow2(-self.fractional_bits)
    }

    /// `2^integer_bits`
    pub fn full_scale(&self) -> f64 {
        pow2(self.integer_bits)
    }

    /// Largest representable value, `full_scale - step` for both encodings.
    ///
    /// Capped at `f64::MAX` once `full_scale` overflows to infinity.
    pub fn max_value(&self) -> f64 {
        (self.full_scale() - self.step()).min(f64::MAX)
    }

    /// Smallest representable value: `-full_scale` for two's complement,
    /// `-max_value` for sign-magnitude
    pub fn min_value(&self) -> f64 {
        match self.encoding {
            Encoding::TwosComplement => (-self.full_scale()).max(f64::MIN),
            Encoding::SignMagnitude => -self.max_value(),
        }
    }

    /// Total bit width including the sign bit
    pub fn width(&self) -> i64 {
        i64::from(self.integer_bits) + i64::from(self.fractional_bits) + 1
    }

    /// Quantize `value` onto this format's grid.
    ///
    /// The result is a multiple of [`step`](Self::step) inside
    /// `[min_value, max_value]`. Infinities and NaN saturate to `min_value`
    /// when their sign bit is set and to `max_value` otherwise.
    pub fn quantize(&self, value: f64) -> f64 {
        let min = self.min_value();
        let max = self.max_value();

        if !value.is_finite() {
            trace!(value, format = %self, "non-finite input saturated");
            return if value.is_sign_negative() { min } else { max };
        }
        if value < min || value > max {
            trace!(value, min, max, format = %self, "input saturated");
        }

        match self.encoding {
            Encoding::TwosComplement => {
                let saturated = value.clamp(min, max);
                self.floor_to_step(saturated).clamp(min, max)
            }
            Encoding::SignMagnitude => {
                let magnitude = value.abs().min(max);
                let quantized = self.floor_to_step(magnitude).copysign(value);
                let clamped = quantized.clamp(min, max);
                // -0.0 == 0.0; sign-magnitude zero carries no sign
                if clamped == 0.0 {
                    0.0
                } else {
                    clamped
                }
            }
        }
    }

    fn floor_to_step(&self, value: f64) -> f64 {
        let shift = pow2(self.fractional_bits);
        let scaled = value * shift;
        // Past 2^1023 the shift is infinite and every finite f64 is on the grid
        if !scaled.is_finite() {
            return value;
        }
        scaled.floor() / shift
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q{}.{} ({})",
            self.integer_bits, self.fractional_bits, self.encoding
        )
    }
}

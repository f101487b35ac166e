//! Bit-pattern rendering

use crate::error::{FixedPointError, Result};
use crate::fixed::FixedPoint;
use crate::format::{pow2, Encoding};

/// Widest bit pattern [`FixedPoint::to_binary`] renders.
///
/// Patterns are assembled in a `u64` accumulator, so this is a limit of the
/// renderer rather than of the format.
///
/// Quantized values are `f64`, which carries a 53-bit significand. Past
/// roughly 54 bits of width, `max_value` and neighbouring grid points round
/// onto the same double. For example, Q60.2 `max_value` is exactly 2^60, so
/// `+inf` and `-inf` render to the same two's-complement pattern. Patterns
/// are exact only while every grid point in range is representable.
pub const MAX_BINARY_WIDTH: u32 = 63;

impl FixedPoint {
    /// The quantized value scaled by `2^fractional_bits`, rounded half away
    /// from zero to an integer code
    pub fn scaled_integer(&self) -> i64 {
        (self.quantized_value() * pow2(self.fractional_bits())).round() as i64
    }

    /// Render the bit pattern, most significant bit first.
    ///
    /// The string is exactly `integer_bits + fractional_bits + 1` characters.
    /// Two's complement truncates the scaled integer to that width;
    /// sign-magnitude puts the sign in the top bit and the magnitude below.
    pub fn to_binary(&self) -> Result<String> {
        let width = self.format().width();
        if width > i64::from(MAX_BINARY_WIDTH) {
            return Err(FixedPointError::UnsupportedWidth {
                width,
                max: i64::from(MAX_BINARY_WIDTH),
            });
        }
        let width = width as u32;
        let value_mask = (1u64 << width) - 1;

        let encoded = match self.encoding() {
            Encoding::TwosComplement => (self.scaled_integer() as u64) & value_mask,
            Encoding::SignMagnitude => {
                let sign_bit = 1u64 << (width - 1);
                let magnitude = (self.quantized_value().abs() * pow2(self.fractional_bits()))
                    .round() as u64
                    & (sign_bit - 1);
                if self.quantized_value().is_sign_negative() {
                    sign_bit | magnitude
                } else {
                    magnitude
                }
            }
        };

        Ok(format!("{:0width$b}", encoded, width = width as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: f64, encoding: Encoding) -> String {
        FixedPoint::new(value, 3, 2, encoding)
            .unwrap()
            .to_binary()
            .unwrap()
    }

    #[test]
    fn test_twos_complement_patterns() {
        let enc = Encoding::TwosComplement;
        assert_eq!(bits(1.5, enc), "000110");
        assert_eq!(bits(0.0, enc), "000000");
        assert_eq!(bits(0.25, enc), "000001");
        assert_eq!(bits(7.75, enc), "011111");
        assert_eq!(bits(-0.25, enc), "111111");
        assert_eq!(bits(-1.5, enc), "111010");
        assert_eq!(bits(-8.0, enc), "100000");
        assert_eq!(bits(-9.0, enc), "100000");
        assert_eq!(bits(9.0, enc), "011111");
    }

    #[test]
    fn test_sign_magnitude_patterns() {
        let enc = Encoding::SignMagnitude;
        assert_eq!(bits(1.5, enc), "000110");
        assert_eq!(bits(-1.5, enc), "100110");
        assert_eq!(bits(-0.5, enc), "100010");
        assert_eq!(bits(7.75, enc), "011111");
        assert_eq!(bits(-7.75, enc), "111111");
        assert_eq!(bits(-9.0, enc), "111111");
    }

    #[test]
    fn test_sign_magnitude_zero_never_sets_sign_bit() {
        for value in [-0.0, -0.05, -0.1, -0.24, 0.0, 0.24] {
            assert_eq!(bits(value, Encoding::SignMagnitude), "000000", "input {}", value);
        }
    }

    #[test]
    fn test_scaled_integer() {
        let value = FixedPoint::new(-1.5, 3, 2, Encoding::TwosComplement).unwrap();
        assert_eq!(value.scaled_integer(), -6);
        let value = FixedPoint::new(7.9, 3, 2, Encoding::SignMagnitude).unwrap();
        assert_eq!(value.scaled_integer(), 31);
    }

    #[test]
    fn test_width_matches_format() {
        let value = FixedPoint::new(1.0, 1, 0, Encoding::TwosComplement).unwrap();
        assert_eq!(value.to_binary().unwrap(), "01");

        // One negative step is all ones in two's complement
        let value = FixedPoint::new(-(2f64.powi(-32)), 30, 32, Encoding::TwosComplement).unwrap();
        let rendered = value.to_binary().unwrap();
        assert_eq!(rendered.len(), 63);
        assert!(rendered.chars().all(|c| c == '1'));
    }

    #[test]
    fn test_wide_formats_lose_precision() {
        let top = FixedPoint::new(f64::INFINITY, 60, 2, Encoding::TwosComplement).unwrap();
        let bottom = FixedPoint::new(f64::NEG_INFINITY, 60, 2, Encoding::TwosComplement).unwrap();
        // 2^60 - 0.25 rounds to 2^60 in f64
        assert_eq!(top.quantized_value(), 2f64.powi(60));
        assert_eq!(bottom.quantized_value(), -(2f64.powi(60)));

        let expected = format!("1{}", "0".repeat(62));
        assert_eq!(top.to_binary().unwrap(), expected);
        assert_eq!(bottom.to_binary().unwrap(), expected);
    }

    #[test]
    fn test_unsupported_width() {
        let value = FixedPoint::new(1.0, 31, 32, Encoding::TwosComplement).unwrap();
        assert_eq!(
            value.to_binary(),
            Err(FixedPointError::UnsupportedWidth { width: 64, max: 63 })
        );
        let value = FixedPoint::new(1.0, i32::MAX, 0, Encoding::SignMagnitude).unwrap();
        assert!(matches!(
            value.to_binary(),
            Err(FixedPointError::UnsupportedWidth { .. })
        ));
    }
}

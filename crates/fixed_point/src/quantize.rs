//! Stateless quantizer entry point

use crate::error::Result;
use crate::format::{Encoding, Format};

/// Quantize `value` to a fixed-point grid without building a [`Format`] first.
///
/// Fails with [`InvalidFormat`](crate::FixedPointError::InvalidFormat) when
/// `integer_bits <= 0` or `fractional_bits < 0`. Non-finite inputs saturate
/// and never fail.
///
/// ```
/// use mathutils_fixed_point::{quantize, Encoding};
///
/// assert_eq!(quantize(1.37, 3, 2, Encoding::TwosComplement).unwrap(), 1.25);
/// assert_eq!(quantize(f64::NEG_INFINITY, 3, 2, Encoding::TwosComplement).unwrap(), -8.0);
/// assert_eq!(quantize(-9.0, 3, 2, Encoding::SignMagnitude).unwrap(), -7.75);
/// ```
pub fn quantize(
    value: f64,
    integer_bits: i32,
    fractional_bits: i32,
    encoding: Encoding,
) -> Result<f64> {
    let format = Format::new(integer_bits, fractional_bits, encoding)?;
    Ok(format.quantize(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedPointError;

    const ENCODINGS: [Encoding; 2] = [Encoding::TwosComplement, Encoding::SignMagnitude];

    #[test]
    fn test_invalid_bits_rejected_before_computation() {
        for encoding in ENCODINGS {
            assert!(matches!(
                quantize(1.0, 0, 2, encoding),
                Err(FixedPointError::InvalidFormat { .. })
            ));
            assert!(matches!(
                quantize(1.0, 3, -1, encoding),
                Err(FixedPointError::InvalidFormat { .. })
            ));
            // Non-finite input does not bypass validation
            assert!(quantize(f64::NAN, 0, 0, encoding).is_err());
        }
    }

    #[test]
    fn test_result_on_grid_and_in_range() {
        let samples = [
            -1000.0, -9.0, -8.75, -8.0, -7.99, -3.3, -0.24, -0.0, 0.0, 0.1, 0.24, 1.37, 3.14159,
            7.74, 7.99, 8.0, 1e9,
        ];
        for (integer_bits, fractional_bits) in [(1, 0), (3, 2), (4, 5), (8, 8), (12, 20)] {
            let scale = 2f64.powi(fractional_bits);
            for encoding in ENCODINGS {
                let format = Format::new(integer_bits, fractional_bits, encoding).unwrap();
                for &x in &samples {
                    let q = quantize(x, integer_bits, fractional_bits, encoding).unwrap();
                    assert_eq!((q * scale).fract(), 0.0, "{} not on grid for {}", q, format);
                    assert!(q >= format.min_value() && q <= format.max_value());
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let samples = [-9.0, -5.3, -0.6, -0.05, 0.0, 0.3, 2.71, 6.5, 7.99, 12.0];
        for encoding in ENCODINGS {
            for &x in &samples {
                let once = quantize(x, 3, 2, encoding).unwrap();
                let twice = quantize(once, 3, 2, encoding).unwrap();
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_saturation() {
        assert_eq!(quantize(9.0, 3, 2, Encoding::TwosComplement).unwrap(), 7.75);
        assert_eq!(quantize(-9.0, 3, 2, Encoding::TwosComplement).unwrap(), -8.0);
        assert_eq!(quantize(f64::INFINITY, 3, 2, Encoding::TwosComplement).unwrap(), 7.75);
        assert_eq!(quantize(f64::NEG_INFINITY, 3, 2, Encoding::TwosComplement).unwrap(), -8.0);
    }

    #[test]
    fn test_zero_fractional_bits() {
        assert_eq!(quantize(2.9, 2, 0, Encoding::TwosComplement).unwrap(), 2.0);
        assert_eq!(quantize(-0.5, 2, 0, Encoding::TwosComplement).unwrap(), -1.0);
        assert_eq!(quantize(-0.5, 2, 0, Encoding::SignMagnitude).unwrap(), 0.0);
        assert_eq!(quantize(5.0, 2, 0, Encoding::SignMagnitude).unwrap(), 3.0);
    }
}

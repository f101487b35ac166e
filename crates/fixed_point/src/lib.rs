//! Math-utils Fixed-Point Quantization
//!
//! Maps real values onto a signed fixed-point grid of `integer_bits` integer
//! bits and `fractional_bits` fractional bits (plus a sign bit), using either
//! two's-complement or sign-magnitude encoding.
//!
//! Quantization floors toward negative infinity (on the magnitude for
//! sign-magnitude) and saturates at the format bounds. Non-finite inputs
//! saturate as well and never fail.

mod binary;
mod error;
mod fixed;
mod format;
mod quantize;

pub use binary::MAX_BINARY_WIDTH;
pub use error::{FixedPointError, Result};
pub use fixed::FixedPoint;
pub use format::{Encoding, Format};
pub use quantize::quantize;

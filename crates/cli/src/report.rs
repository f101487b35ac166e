//! Demo report sections
//!
//! Each section writes plain text to any `io::Write` so the output can be
//! captured; logging goes through `tracing` and never into the report.

use std::io::Write;

use anyhow::Context;
use mathutils_fixed_point::{Encoding, FixedPoint};
use mathutils_integer::{fibonacci, is_prime};

use crate::config::DemoConfig;

pub const PRIME_INPUTS: [i32; 7] = [1, 2, 3, 4, 5, 97, 100];

pub const FIBONACCI_INPUTS: [u32; 8] = [0, 1, 2, 3, 4, 5, 10, 20];

pub const QUANTIZE_INPUTS: [f64; 31] = [
    -9.0, -8.75, -8.0, -7.99, -6.5, -5.25, -3.5, -2.0, -1.25, -0.75, -0.51, -0.24, -0.1, 0.0,
    0.24, 0.25, 0.5, 0.75, 1.0, 1.37, 2.5, 3.25, 4.5, 5.75, 6.25, 7.0, 7.5, 7.74, 7.99, 8.0, 9.0,
];

/// Operands of the arithmetic section
pub const ARITHMETIC_OPERANDS: (f64, f64) = (1.5, 2.25);

/// Write the full demo report
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> anyhow::Result<()> {
    writeln!(out, "== math-utils demo ==")?;
    write_primes(out, &PRIME_INPUTS)?;
    write_fibonacci(out, &FIBONACCI_INPUTS)?;
    write_quantize_comparison(out, &QUANTIZE_INPUTS, config)?;
    write_arithmetic(out, ARITHMETIC_OPERANDS, config)?;
    Ok(())
}

pub fn write_primes<W: Write>(out: &mut W, inputs: &[i32]) -> anyhow::Result<()> {
    writeln!(out, "\n-- prime --")?;
    for &value in inputs {
        let prefix = if is_prime(value) { "" } else { "not " };
        writeln!(out, "{} is {}prime", value, prefix)?;
    }
    Ok(())
}

pub fn write_fibonacci<W: Write>(out: &mut W, inputs: &[u32]) -> anyhow::Result<()> {
    writeln!(out, "\n-- fibonacci --")?;
    for &index in inputs {
        writeln!(out, "fib({}) = {}", index, fibonacci(index))?;
    }
    Ok(())
}

/// Side-by-side quantization of each sample under both encodings
pub fn write_quantize_comparison<W: Write>(
    out: &mut W,
    samples: &[f64],
    config: &DemoConfig,
) -> anyhow::Result<()> {
    let twos_format = config.format(Encoding::TwosComplement)?;
    let sign_format = twos_format.with_encoding(Encoding::SignMagnitude);
    tracing::debug!(format = %twos_format, samples = samples.len(), "quantize comparison");

    writeln!(out, "\n-- fixed-point quantize comparison --")?;
    writeln!(
        out,
        "{:>8} | {:>15} | {:>15}",
        "value", "two's complement", "sign magnitude"
    )?;
    writeln!(
        out,
        "{:>8} | {:>7} {:>7} | {:>7} {:>7}",
        "", "quant", "bits", "quant", "bits"
    )?;

    for &sample in samples {
        let twos = FixedPoint::with_format(sample, twos_format);
        let sign = FixedPoint::with_format(sample, sign_format);
        writeln!(
            out,
            "{:>8.2} | {:>7.2} {:>7} | {:>7.2} {:>7}",
            sample,
            twos.quantized_value(),
            twos.to_binary()?,
            sign.quantized_value(),
            sign.to_binary()?
        )?;
    }
    Ok(())
}

/// One worked example of every arithmetic operation
pub fn write_arithmetic<W: Write>(
    out: &mut W,
    (a, b): (f64, f64),
    config: &DemoConfig,
) -> anyhow::Result<()> {
    let format = config.format(Encoding::TwosComplement)?;
    let a = FixedPoint::with_format(a, format);
    let b = FixedPoint::with_format(b, format);

    let rows = [
        ("a", a),
        ("b", b),
        ("a + b", a.add(&b).context("a + b")?),
        ("a - b", a.subtract(&b).context("a - b")?),
        ("a * b", a.multiply(&b).context("a * b")?),
        ("a / b", a.divide(&b).context("a / b")?),
        ("-a", a.negate()),
    ];

    writeln!(out, "\n-- fixed-point arithmetic demo --")?;
    for (label, value) in rows {
        writeln!(
            out,
            "{}: original={} quantized={} bits={}",
            label,
            value.original_value(),
            value.quantized_value(),
            value.to_binary()?
        )?;
    }
    Ok(())
}

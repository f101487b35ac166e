//! Demo configuration

use mathutils_fixed_point::{Encoding, Format, Result};

/// Default integer bits for the quantization demo
pub const DEFAULT_INTEGER_BITS: i32 = 3;

/// Default fractional bits for the quantization demo
pub const DEFAULT_FRACTIONAL_BITS: i32 = 2;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mathutils=info";

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Integer bits of the demo format (sign bit excluded)
    pub integer_bits: i32,

    /// Fractional bits of the demo format
    pub fractional_bits: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            integer_bits: DEFAULT_INTEGER_BITS,
            fractional_bits: DEFAULT_FRACTIONAL_BITS,
        }
    }
}

impl DemoConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bits) = parse_var(&lookup, "MATHUTILS_INTEGER_BITS") {
            config.integer_bits = bits;
        }

        if let Some(bits) = parse_var(&lookup, "MATHUTILS_FRACTIONAL_BITS") {
            config.fractional_bits = bits;
        }

        config
    }

    /// Validated demo format under `encoding`
    pub fn format(&self, encoding: Encoding) -> Result<Format> {
        Format::new(self.integer_bits, self.fractional_bits, encoding)
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Option<i32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
